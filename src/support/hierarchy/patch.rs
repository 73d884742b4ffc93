use uom::si::f64::Length;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

use super::Cohort;

/// A patch of ground within a site, owning the cohorts growing on it.
///
/// The patch carries the environmental state the canopy classifier reads:
/// the combined snow and standing-water depth at the surface, maintained by
/// the snow/hydrology module. The depth is guaranteed non-negative.
#[derive(Debug, Clone)]
pub struct Patch {
    surface_water_depth: Length,
    cohorts: Vec<Cohort>,
}

impl Patch {
    /// Constructs an empty patch with a validated surface water depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the depth is negative or not a number.
    pub fn new(surface_water_depth: Length) -> ConstraintResult<Self> {
        let depth = Constrained::<Length, NonNegative>::new(surface_water_depth)?;
        Ok(Self::from_constrained(depth))
    }

    /// Constructs an empty patch from a pre-validated depth.
    #[must_use]
    pub fn from_constrained(surface_water_depth: Constrained<Length, NonNegative>) -> Self {
        Self {
            surface_water_depth: surface_water_depth.into_inner(),
            cohorts: Vec::new(),
        }
    }

    /// Returns the combined snow and standing-water depth at the surface.
    #[must_use]
    pub fn surface_water_depth(&self) -> Length {
        self.surface_water_depth
    }

    /// Updates the surface water depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the depth is negative or not a number; the stored
    /// depth is left unchanged in that case.
    pub fn set_surface_water_depth(&mut self, depth: Length) -> ConstraintResult<()> {
        self.surface_water_depth = Constrained::<Length, NonNegative>::new(depth)?.into_inner();
        Ok(())
    }

    /// Appends a cohort to this patch.
    pub fn push_cohort(&mut self, cohort: Cohort) {
        self.cohorts.push(cohort);
    }

    /// Returns the cohorts on this patch.
    #[must_use]
    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    /// Returns the cohorts on this patch for mutation.
    #[must_use]
    pub fn cohorts_mut(&mut self) -> &mut [Cohort] {
        &mut self.cohorts
    }

    /// Returns the cohort at the given index, if present.
    #[must_use]
    pub fn cohort(&self, index: usize) -> Option<&Cohort> {
        self.cohorts.get(index)
    }

    /// Returns the cohort at the given index for mutation, if present.
    #[must_use]
    pub fn cohort_mut(&mut self, index: usize) -> Option<&mut Cohort> {
        self.cohorts.get_mut(index)
    }

    /// Returns the number of cohorts on this patch.
    #[must_use]
    pub fn cohort_count(&self) -> usize {
        self.cohorts.len()
    }
}
