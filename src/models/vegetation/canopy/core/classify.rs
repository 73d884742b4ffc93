//! Per-cohort resolvability classification.

use uom::si::f64::{HeatCapacity, Length};

use crate::support::{
    constraint::{Constraint, NonNegative},
    hierarchy::{Cohort, CohortPath, Patch, Resolvability, Tissue},
};

use super::{ClassifyConfig, ClassifyError};

/// Classifies one cohort and overwrites its stored resolvability flags.
///
/// Reads only the addressed cohort, the patch's surface water depth, and the
/// shared configuration; no other cohort is touched. Each call is a full
/// recomputation from current state, not an incremental update.
///
/// # Errors
///
/// Returns a [`ClassifyError`] on a missing cohort, an unconfigured species
/// id, or an invalid heat capacity. The cohort's stored flags are left
/// unchanged in that case.
pub(super) fn classify(
    patch: &mut Patch,
    cohort_index: usize,
    config: &ClassifyConfig,
    path: CohortPath,
) -> Result<(), ClassifyError> {
    let surface_water_depth = patch.surface_water_depth();
    let Some(cohort) = patch.cohort_mut(cohort_index) else {
        return Err(ClassifyError::MissingCohort { path });
    };

    let flags = resolvability(cohort, surface_water_depth, config, path)?;
    cohort.set_resolvability(flags);
    Ok(())
}

/// Computes the per-tissue flags for one cohort's current state.
fn resolvability(
    cohort: &Cohort,
    surface_water_depth: Length,
    config: &ClassifyConfig,
    path: CohortPath,
) -> Result<Resolvability, ClassifyError> {
    check_heat_capacity(Tissue::Leaf, cohort.leaf_heat_capacity, path)?;
    check_heat_capacity(Tissue::Wood, cohort.wood_heat_capacity, path)?;

    let threshold = config
        .species()
        .min_heat_capacity(cohort.pft)
        .ok_or(ClassifyError::UnknownPft {
            pft: cohort.pft,
            path,
        })?;

    // A canopy top exactly level with the combined snow and standing-water
    // surface counts as buried.
    let exposed = cohort.height > surface_water_depth;

    // Strict comparison at the threshold too: exact equality is insufficient.
    // With woody thermodynamics disabled globally, upstream writes zero wood
    // heat capacity, so wood_sufficient stays false without any explicit
    // branch here.
    let leaf_sufficient = cohort.leaf_heat_capacity > threshold;
    let wood_sufficient = cohort.wood_heat_capacity > threshold;

    // Under an active hydraulics scheme, the stem must be solved whenever the
    // leaf is, independent of the wood's own sufficiency.
    let wood_required_by_hydraulics =
        config.hydraulics().couples_wood_to_leaf() && leaf_sufficient;

    Ok(Resolvability {
        leaf: exposed && leaf_sufficient,
        wood: exposed && (wood_sufficient || wood_required_by_hydraulics),
    })
}

fn check_heat_capacity(
    tissue: Tissue,
    value: HeatCapacity,
    path: CohortPath,
) -> Result<(), ClassifyError> {
    NonNegative::check(&value).map_err(|source| ClassifyError::InvalidHeatCapacity {
        tissue,
        value,
        path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::heat_capacity::joule_per_kelvin;

    use crate::models::vegetation::canopy::core::{
        HydraulicsScheme,
        test_support::{cohort, one_species_config, patch_with},
    };
    use crate::support::constraint::ConstraintError;

    /// Classifies a single cohort against a one-species table with a 0.5 J/K
    /// threshold and returns its flags.
    fn flags(
        height_m: f64,
        depth_m: f64,
        leaf_j_per_k: f64,
        wood_j_per_k: f64,
        hydraulics: HydraulicsScheme,
    ) -> Resolvability {
        let config = one_species_config(0.5, hydraulics);
        let mut patch = patch_with(depth_m, vec![cohort(height_m, leaf_j_per_k, wood_j_per_k)]);

        classify(&mut patch, 0, &config, CohortPath::within_site(0, 0)).unwrap();
        patch.cohort(0).unwrap().resolvability()
    }

    #[test]
    fn sparse_wood_is_skipped_without_hydraulics() {
        let flags = flags(10.0, 2.0, 0.8, 0.1, HydraulicsScheme::Disabled);
        assert_eq!(flags, Resolvability { leaf: true, wood: false });
    }

    #[test]
    fn buried_cohort_is_never_resolvable() {
        let flags = flags(1.0, 2.0, 0.8, 0.9, HydraulicsScheme::Disabled);
        assert_eq!(flags, Resolvability::none());
    }

    #[test]
    fn active_hydraulics_couples_wood_to_leaf() {
        let flags = flags(10.0, 2.0, 0.8, 0.1, HydraulicsScheme::Dynamic);
        assert_eq!(flags, Resolvability { leaf: true, wood: true });
    }

    #[test]
    fn canopy_level_with_surface_is_buried() {
        let flags = flags(5.0, 5.0, 0.8, 0.9, HydraulicsScheme::Disabled);
        assert_eq!(flags, Resolvability::none());
    }

    #[test]
    fn insufficient_leaf_blocks_hydraulic_coupling() {
        let flags = flags(10.0, 2.0, 0.3, 0.1, HydraulicsScheme::Dynamic);
        assert_eq!(flags, Resolvability::none());
    }

    #[test]
    fn heat_capacity_at_threshold_is_insufficient() {
        let flags = flags(10.0, 0.0, 0.5, 0.5, HydraulicsScheme::Disabled);
        assert_eq!(flags, Resolvability::none());
    }

    #[test]
    fn leaf_flag_ignores_wood_heat_capacity() {
        for hydraulics in [HydraulicsScheme::Disabled, HydraulicsScheme::Dynamic] {
            let sparse_wood = flags(10.0, 2.0, 0.8, 0.0, hydraulics);
            let dense_wood = flags(10.0, 2.0, 0.8, 5.0, hydraulics);
            assert_eq!(sparse_wood.leaf, dense_wood.leaf);
        }
    }

    #[test]
    fn wood_flag_ignores_leaf_heat_capacity_when_hydraulics_disabled() {
        let sparse_leaf = flags(10.0, 2.0, 0.0, 0.9, HydraulicsScheme::Disabled);
        let dense_leaf = flags(10.0, 2.0, 5.0, 0.9, HydraulicsScheme::Disabled);
        assert_eq!(sparse_leaf.wood, dense_leaf.wood);
    }

    #[test]
    fn enabling_hydraulics_never_clears_the_wood_flag() {
        let states = [
            (10.0, 2.0, 0.8, 0.1),
            (10.0, 2.0, 0.8, 0.9),
            (10.0, 2.0, 0.3, 0.9),
            (1.0, 2.0, 0.8, 0.9),
            (5.0, 5.0, 0.8, 0.1),
            (10.0, 0.0, 0.5, 0.5),
        ];

        for (height, depth, leaf, wood) in states {
            let disabled = flags(height, depth, leaf, wood, HydraulicsScheme::Disabled);
            let dynamic = flags(height, depth, leaf, wood, HydraulicsScheme::Dynamic);
            assert!(
                dynamic.wood || !disabled.wood,
                "hydraulics cleared the wood flag for state {:?}",
                (height, depth, leaf, wood),
            );
        }
    }

    #[test]
    fn reclassification_is_idempotent() {
        let config = one_species_config(0.5, HydraulicsScheme::Dynamic);
        let mut patch = patch_with(2.0, vec![cohort(10.0, 0.8, 0.1)]);
        let path = CohortPath::within_site(0, 0);

        classify(&mut patch, 0, &config, path).unwrap();
        let first = patch.cohort(0).unwrap().resolvability();

        classify(&mut patch, 0, &config, path).unwrap();
        assert_eq!(patch.cohort(0).unwrap().resolvability(), first);
    }

    #[test]
    fn rejects_negative_heat_capacity() {
        let config = one_species_config(0.5, HydraulicsScheme::Disabled);
        let mut patch = patch_with(2.0, vec![cohort(10.0, -0.8, 0.9)]);
        let path = CohortPath::within_site(0, 0);

        match classify(&mut patch, 0, &config, path) {
            Err(ClassifyError::InvalidHeatCapacity {
                tissue: Tissue::Leaf,
                path: reported,
                source: ConstraintError::Negative,
                ..
            }) => assert_eq!(reported, path),
            other => panic!("expected InvalidHeatCapacity, got: {other:?}"),
        }

        // The stored flags are untouched by a failed classification.
        assert_eq!(patch.cohort(0).unwrap().resolvability(), Resolvability::none());
    }

    #[test]
    fn rejects_nan_heat_capacity() {
        let config = one_species_config(0.5, HydraulicsScheme::Disabled);
        let mut cohort = cohort(10.0, 0.8, 0.9);
        cohort.wood_heat_capacity = HeatCapacity::new::<joule_per_kelvin>(f64::NAN);
        let mut patch = patch_with(2.0, vec![cohort]);

        match classify(&mut patch, 0, &config, CohortPath::within_site(0, 0)) {
            Err(ClassifyError::InvalidHeatCapacity {
                tissue: Tissue::Wood,
                source: ConstraintError::NotANumber,
                ..
            }) => {}
            other => panic!("expected InvalidHeatCapacity, got: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_pft() {
        let config = one_species_config(0.5, HydraulicsScheme::Disabled);
        let mut unknown = cohort(10.0, 0.8, 0.9);
        unknown.pft = crate::support::hierarchy::PftId::new(2);
        let mut patch = patch_with(2.0, vec![unknown]);

        match classify(&mut patch, 0, &config, CohortPath::within_site(0, 0)) {
            Err(ClassifyError::UnknownPft { pft, .. }) => assert_eq!(pft.get(), 2),
            other => panic!("expected UnknownPft, got: {other:?}"),
        }
    }

    #[test]
    fn missing_cohort_is_reported() {
        let config = one_species_config(0.5, HydraulicsScheme::Disabled);
        let mut patch = patch_with(2.0, vec![]);
        let path = CohortPath::within_site(0, 0);

        match classify(&mut patch, 0, &config, path) {
            Err(ClassifyError::MissingCohort { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected MissingCohort, got: {other:?}"),
        }
    }
}
