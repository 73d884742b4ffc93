//! Public Verdure models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `vegetation`)
//! based on an opinionated taxonomy. This organization may evolve as more
//! models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The module
//! itself is a thin surface that re-exports the core API consumed by the
//! rest of the simulation engine.

pub mod vegetation;
