use std::fmt;

use uom::si::f64::{HeatCapacity, Length};

/// Identifier for a plant functional type (PFT).
///
/// PFT ids are 1-based, matching the convention of ecological parameter
/// sets. An id outside the configured species table is reported as an error
/// during classification rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PftId(usize);

impl PftId {
    /// Constructs a PFT id from its 1-based raw value.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the 1-based raw id.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two cohort tissues whose thermodynamics are solved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tissue {
    Leaf,
    Wood,
}

impl fmt::Display for Tissue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => write!(f, "leaf"),
            Self::Wood => write!(f, "wood"),
        }
    }
}

/// Per-tissue resolvability flags for one cohort.
///
/// A tissue is resolvable when it is numerically safe to include in the
/// current step's energy/water/CO2 budget solve. Downstream physics must
/// exclude an unresolvable tissue from that step's solve entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolvability {
    /// Leaf energy balance may be solved this step.
    pub leaf: bool,

    /// Woody-tissue energy balance may be solved this step.
    pub wood: bool,
}

impl Resolvability {
    /// Neither tissue is resolvable.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            leaf: false,
            wood: false,
        }
    }

    /// Returns the flag for the given tissue.
    #[must_use]
    pub const fn is_resolvable(self, tissue: Tissue) -> bool {
        match tissue {
            Tissue::Leaf => self.leaf,
            Tissue::Wood => self.wood,
        }
    }
}

/// Aggregate state of all plants of one functional type within a patch.
///
/// The physical scalars are maintained by the biomass, allometry, and
/// phenology modules and are read here. The resolvability flags are written
/// only by the canopy classifier; they cache a pure function of the current
/// physical state and must be recomputed whenever that state changes
/// materially, at minimum once per simulation step before any budget solve.
#[derive(Debug, Clone)]
pub struct Cohort {
    /// Canopy-top height above the ground surface.
    pub height: Length,

    /// Thermal inertia of the leaf tissue. Doubles as the numerical-stability
    /// gate: a near-zero value makes the leaf energy balance ill-conditioned.
    pub leaf_heat_capacity: HeatCapacity,

    /// Thermal inertia of the woody tissue.
    ///
    /// When woody-tissue thermodynamics is disabled globally, the upstream
    /// heat-capacity assignment writes zero here for every cohort, which the
    /// classifier's strict sufficiency test can never pass. The classifier
    /// itself carries no explicit "wood thermodynamics enabled" branch.
    pub wood_heat_capacity: HeatCapacity,

    /// Functional type of the plants aggregated in this cohort.
    pub pft: PftId,

    resolvability: Resolvability,
}

impl Cohort {
    /// Constructs a cohort with both resolvability flags cleared.
    #[must_use]
    pub fn new(
        pft: PftId,
        height: Length,
        leaf_heat_capacity: HeatCapacity,
        wood_heat_capacity: HeatCapacity,
    ) -> Self {
        Self {
            height,
            leaf_heat_capacity,
            wood_heat_capacity,
            pft,
            resolvability: Resolvability::none(),
        }
    }

    /// Returns the flags written by the most recent classification.
    ///
    /// Flags are a cache, not independent truth: a flag computed before the
    /// last material state change is stale and must not gate a budget solve.
    #[must_use]
    pub fn resolvability(&self) -> Resolvability {
        self.resolvability
    }

    pub(crate) fn set_resolvability(&mut self, resolvability: Resolvability) {
        self.resolvability = resolvability;
    }
}
