//! The single value reported for one itinerary request.

use serde::{Deserialize, Serialize};

use crate::{DeliveryError, ErrorKind, Step};

/// Either a complete itinerary or exactly one error.
///
/// Serialises as an object tagged by `status`:
///
/// ```json
/// {"status":"success","steps":[{"address":1,"action":"pickup"}]}
/// {"status":"error","error_code":"DropoffNotInPath","error_message":"Dropoff address 3 not in path"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Every parcel can be served; steps are in travel order.
    Success {
        /// Stops for the driver, in path order.
        steps: Vec<Step>,
    },
    /// At least one parcel cannot be served.
    #[serde(rename = "error")]
    Failure {
        /// Classification of the failure.
        #[serde(rename = "error_code")]
        error_kind: ErrorKind,
        /// Human-readable description.
        #[serde(rename = "error_message")]
        message: String,
    },
}

impl DeliveryOutcome {
    /// Whether the outcome carries an itinerary.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The itinerary, when successful.
    #[must_use]
    pub fn steps(&self) -> Option<&[Step]> {
        match self {
            Self::Success { steps } => Some(steps),
            Self::Failure { .. } => None,
        }
    }

    /// The failure classification, when unsuccessful.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_kind, .. } => Some(*error_kind),
        }
    }
}

impl From<DeliveryError> for DeliveryOutcome {
    fn from(err: DeliveryError) -> Self {
        Self::Failure {
            error_kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<Result<Vec<Step>, DeliveryError>> for DeliveryOutcome {
    fn from(result: Result<Vec<Step>, DeliveryError>) -> Self {
        result.map_or_else(Self::from, |steps| Self::Success { steps })
    }
}
