//! Hierarchy traversal driving per-cohort classification.
//!
//! The walker owns no domain logic: it visits every cohort in the
//! grid → polygon → site → patch → cohort containment order and delegates to
//! the classifier exactly once per cohort. An empty container at any level
//! contributes no work and is not an error.

use rayon::prelude::*;

use crate::support::hierarchy::{CohortPath, Grid, Site};

use super::{ClassifyConfig, ClassifyError, classify::classify};

/// Classifies every cohort in the grid.
///
/// Must run whenever cohort physical state has changed materially, at
/// minimum once per simulation step before any budget solve, so downstream
/// physics never reads a flag computed from a prior step's state.
///
/// # Errors
///
/// Returns the first [`ClassifyError`] encountered, with the offending
/// cohort's full hierarchical path, and aborts the traversal. Cohorts
/// already visited keep their freshly written flags.
pub fn classify_all(grid: &mut Grid, config: &ClassifyConfig) -> Result<(), ClassifyError> {
    for (polygon_index, polygon) in grid.polygons_mut().iter_mut().enumerate() {
        for (site_index, site) in polygon.sites_mut().iter_mut().enumerate() {
            classify_site(site, config).map_err(|err| err.locate(polygon_index, site_index))?;
        }
    }
    Ok(())
}

/// Classifies every cohort in the grid, partitioned across rayon workers.
///
/// Cohort classifications are independent: each reads only its own cohort,
/// its patch's surface water depth, and the shared read-only configuration,
/// and each cohort's flags are written by exactly one worker. The produced
/// flags are identical to [`classify_all`].
///
/// # Errors
///
/// Returns a [`ClassifyError`] with the offending cohort's full hierarchical
/// path. Unlike [`classify_all`], sites already in flight when the error
/// surfaces may still have been classified.
pub fn classify_all_par(grid: &mut Grid, config: &ClassifyConfig) -> Result<(), ClassifyError> {
    grid.polygons_mut()
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(polygon_index, polygon)| {
            polygon
                .sites_mut()
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(site_index, site)| {
                    classify_site(site, config)
                        .map_err(|err| err.locate(polygon_index, site_index))
                })
        })
}

/// Classifies a single cohort addressed relative to its site.
///
/// For call sites that already hold one cohort, e.g. after an event changes
/// one cohort's biomass mid-step.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingCohort`] if the patch or cohort index is
/// out of range, or any classification error for the addressed cohort. The
/// reported path is site-relative.
pub fn classify_cohort(
    site: &mut Site,
    patch_index: usize,
    cohort_index: usize,
    config: &ClassifyConfig,
) -> Result<(), ClassifyError> {
    let path = CohortPath::within_site(patch_index, cohort_index);
    let Some(patch) = site.patch_mut(patch_index) else {
        return Err(ClassifyError::MissingCohort { path });
    };
    classify(patch, cohort_index, config, path)
}

fn classify_site(site: &mut Site, config: &ClassifyConfig) -> Result<(), ClassifyError> {
    for (patch_index, patch) in site.patches_mut().iter_mut().enumerate() {
        for cohort_index in 0..patch.cohort_count() {
            classify(
                patch,
                cohort_index,
                config,
                CohortPath::within_site(patch_index, cohort_index),
            )?;
        }
    }
    Ok(())
}
