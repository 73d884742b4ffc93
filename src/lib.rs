//! # Verdure Models
//!
//! Vegetation canopy models and simulation state containers for Verdure,
//! a multi-scale vegetation-dynamics simulator.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific model implementations. The canopy
//!   resolvability classifier lives here.
//! - [`support`]: Supporting utilities used by models, including the
//!   simulation state hierarchy and numeric constraint types.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain
//!    (e.g., `vegetation`), it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains, it moves to
//!    [`support`]

pub mod models;
pub mod support;
