use uom::si::f64::HeatCapacity;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    hierarchy::PftId,
};

/// Read-only configuration for canopy resolvability classification.
///
/// Constructed once at simulation start and passed by shared reference into
/// every classification entry point. It is never mutated during a traversal,
/// so it may be shared freely across parallel workers.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    species: SpeciesTable,
    hydraulics: HydraulicsScheme,
}

impl ClassifyConfig {
    /// Bundles the species table and hydraulics scheme for classification.
    #[must_use]
    pub fn new(species: SpeciesTable, hydraulics: HydraulicsScheme) -> Self {
        Self {
            species,
            hydraulics,
        }
    }

    /// Returns the per-species parameter table.
    #[must_use]
    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    /// Returns the configured plant water-transport scheme.
    #[must_use]
    pub fn hydraulics(&self) -> HydraulicsScheme {
        self.hydraulics
    }
}

/// Per-species minimum viable heat capacities, indexed by [`PftId`].
///
/// A tissue whose heat capacity does not strictly exceed its species'
/// threshold is too sparse to solve. The table is populated once at
/// configuration load and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SpeciesTable {
    min_heat_capacity: Vec<HeatCapacity>,
}

impl SpeciesTable {
    /// Constructs a table from thresholds ordered by PFT id (id 1 first).
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is negative or not a number.
    pub fn new(min_heat_capacity: Vec<HeatCapacity>) -> ConstraintResult<Self> {
        for &threshold in &min_heat_capacity {
            Constrained::<HeatCapacity, NonNegative>::new(threshold)?;
        }
        Ok(Self { min_heat_capacity })
    }

    /// Returns the minimum viable heat capacity for the given species.
    ///
    /// Returns `None` if the id is outside the configured range, including
    /// the never-assigned id 0.
    #[must_use]
    pub fn min_heat_capacity(&self, pft: PftId) -> Option<HeatCapacity> {
        self.min_heat_capacity.get(pft.get().checked_sub(1)?).copied()
    }

    /// Returns the number of configured species.
    #[must_use]
    pub fn species_count(&self) -> usize {
        self.min_heat_capacity.len()
    }
}

/// Plant water-transport scheme selection.
///
/// The simulator supports several dynamic-hydraulics formulations; for
/// classification they all behave identically, so only the disabled/active
/// distinction is represented here. Under any active scheme, hydraulic
/// continuity between leaf and stem requires the wood to be solved jointly
/// whenever the leaf is solved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HydraulicsScheme {
    /// No dynamic plant water transport is modeled.
    #[default]
    Disabled,

    /// A dynamic plant water-transport formulation is active.
    Dynamic,
}

impl HydraulicsScheme {
    /// True when the scheme forces a joint leaf-wood solution.
    #[must_use]
    pub const fn couples_wood_to_leaf(self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::heat_capacity::joule_per_kelvin;

    fn table(thresholds: &[f64]) -> ConstraintResult<SpeciesTable> {
        SpeciesTable::new(
            thresholds
                .iter()
                .map(|&t| HeatCapacity::new::<joule_per_kelvin>(t))
                .collect(),
        )
    }

    #[test]
    fn lookup_is_one_based() {
        let species = table(&[0.5, 0.7]).unwrap();

        assert_eq!(
            species.min_heat_capacity(PftId::new(1)),
            Some(HeatCapacity::new::<joule_per_kelvin>(0.5))
        );
        assert_eq!(
            species.min_heat_capacity(PftId::new(2)),
            Some(HeatCapacity::new::<joule_per_kelvin>(0.7))
        );
        assert_eq!(species.min_heat_capacity(PftId::new(0)), None);
        assert_eq!(species.min_heat_capacity(PftId::new(3)), None);
        assert_eq!(species.species_count(), 2);
    }

    #[test]
    fn rejects_invalid_thresholds() {
        assert!(table(&[0.5, -0.1]).is_err());
        assert!(table(&[f64::NAN]).is_err());
        assert!(table(&[]).is_ok());
    }

    #[test]
    fn hydraulics_defaults_to_disabled() {
        assert_eq!(HydraulicsScheme::default(), HydraulicsScheme::Disabled);
        assert!(!HydraulicsScheme::Disabled.couples_wood_to_leaf());
        assert!(HydraulicsScheme::Dynamic.couples_wood_to_leaf());
    }
}
