//! Canopy resolvability classification.
//!
//! Solving the energy/water/CO2 balance for a cohort with near-zero heat
//! capacity produces ill-conditioned arithmetic, and a cohort buried under
//! snow or standing water has no canopy to solve at all. This model computes
//! the per-tissue [`Resolvability`] flags that every downstream consumer
//! (radiative transfer, photosynthesis, energy-balance integration) must
//! consult before touching a cohort's leaf or wood state. The computational
//! core is in the internal [`core`] module.
//!
//! [`Resolvability`]: crate::support::hierarchy::Resolvability

mod core;

pub use self::core::{
    ClassifyConfig, ClassifyError, HydraulicsScheme, SpeciesTable, classify_all, classify_all_par,
    classify_cohort,
};
