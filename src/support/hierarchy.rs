//! The owned simulation state hierarchy.
//!
//! Verdure organizes state in a four-level containment tree: a [`Grid`] owns
//! polygons, a [`Polygon`] owns sites, a [`Site`] owns patches, and a
//! [`Patch`] owns cohorts. Each level exclusively owns the next; nothing is
//! shared or aliased across siblings, and every element is addressed by its
//! integer index within its parent. Indices are stable for the duration of a
//! traversal.
//!
//! The leaf of the tree is the [`Cohort`]: the aggregate state of all plants
//! of one functional type within a patch, including the pair of
//! [`Resolvability`] flags that gate its participation in each step's
//! energy/water/CO2 budget solves.

mod cohort;
mod grid;
mod patch;
mod path;
mod polygon;
mod site;

pub use cohort::{Cohort, PftId, Resolvability, Tissue};
pub use grid::Grid;
pub use patch::Patch;
pub use path::CohortPath;
pub use polygon::Polygon;
pub use site::Site;
