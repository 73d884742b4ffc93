//! Vegetation dynamics models.
//!
//! This module contains models operating on the cohort-based vegetation
//! state, starting with canopy resolvability classification.

pub mod canopy;
