use thiserror::Error;
use uom::si::f64::HeatCapacity;

use crate::support::{
    constraint::ConstraintError,
    hierarchy::{CohortPath, PftId, Tissue},
};

/// Errors raised when cohort state is unfit for classification.
///
/// Classification itself is a total boolean function; every variant here
/// signals upstream corruption this layer cannot safely reason about. All
/// are fatal for the simulation step, since silently coercing any of them
/// would corrupt downstream energy closure invisibly. Each variant names the
/// offending cohort's hierarchical path.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The addressed patch or cohort does not exist.
    #[error("no cohort at {path}")]
    MissingCohort {
        /// Address that failed to resolve.
        path: CohortPath,
    },

    /// A cohort references a species outside the configured table.
    #[error("unknown plant functional type {pft} at {path}")]
    UnknownPft {
        /// The unconfigured species id.
        pft: PftId,

        /// Address of the offending cohort.
        path: CohortPath,
    },

    /// A tissue heat capacity is negative or not a number.
    #[error("{tissue} heat capacity {value:?} at {path} is invalid")]
    InvalidHeatCapacity {
        /// Tissue whose heat capacity failed validation.
        tissue: Tissue,

        /// The offending value.
        value: HeatCapacity,

        /// Address of the offending cohort.
        path: CohortPath,

        /// Which numeric invariant was violated.
        #[source]
        source: ConstraintError,
    },
}

impl ClassifyError {
    /// Fills the polygon and site indices into the carried path.
    ///
    /// Site-relative entry points report paths without the outer indices;
    /// the full-grid walker uses this to restore them.
    #[must_use]
    pub(super) fn locate(self, polygon: usize, site: usize) -> Self {
        match self {
            Self::MissingCohort { path } => Self::MissingCohort {
                path: path.locate(polygon, site),
            },
            Self::UnknownPft { pft, path } => Self::UnknownPft {
                pft,
                path: path.locate(polygon, site),
            },
            Self::InvalidHeatCapacity {
                tissue,
                value,
                path,
                source,
            } => Self::InvalidHeatCapacity {
                tissue,
                value,
                path: path.locate(polygon, site),
                source,
            },
        }
    }

    /// Returns the hierarchical path carried by this error.
    #[must_use]
    pub fn path(&self) -> CohortPath {
        match self {
            Self::MissingCohort { path }
            | Self::UnknownPft { path, .. }
            | Self::InvalidHeatCapacity { path, .. } => *path,
        }
    }
}
