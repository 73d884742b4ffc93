use uom::si::{
    f64::{HeatCapacity, Length},
    heat_capacity::joule_per_kelvin,
    length::meter,
};

use crate::support::hierarchy::{Cohort, Grid, Patch, PftId, Polygon, Site};

use super::{ClassifyConfig, HydraulicsScheme, SpeciesTable};

/// Configuration with a single species (PFT 1) and the given threshold.
pub(super) fn one_species_config(
    threshold_j_per_k: f64,
    hydraulics: HydraulicsScheme,
) -> ClassifyConfig {
    let species = SpeciesTable::new(vec![HeatCapacity::new::<joule_per_kelvin>(
        threshold_j_per_k,
    )])
    .unwrap();
    ClassifyConfig::new(species, hydraulics)
}

/// A PFT-1 cohort from plain SI magnitudes.
pub(super) fn cohort(height_m: f64, leaf_j_per_k: f64, wood_j_per_k: f64) -> Cohort {
    Cohort::new(
        PftId::new(1),
        Length::new::<meter>(height_m),
        HeatCapacity::new::<joule_per_kelvin>(leaf_j_per_k),
        HeatCapacity::new::<joule_per_kelvin>(wood_j_per_k),
    )
}

/// A patch with the given surface water depth and cohorts.
pub(super) fn patch_with(depth_m: f64, cohorts: Vec<Cohort>) -> Patch {
    let mut patch = Patch::new(Length::new::<meter>(depth_m)).unwrap();
    for cohort in cohorts {
        patch.push_cohort(cohort);
    }
    patch
}

/// A site with the given patches.
pub(super) fn site_with(patches: Vec<Patch>) -> Site {
    let mut site = Site::new();
    for patch in patches {
        site.push_patch(patch);
    }
    site
}

/// A single-polygon grid wrapping the given sites.
pub(super) fn grid_with(sites: Vec<Site>) -> Grid {
    let mut polygon = Polygon::new();
    for site in sites {
        polygon.push_site(site);
    }
    let mut grid = Grid::new();
    grid.push_polygon(polygon);
    grid
}
