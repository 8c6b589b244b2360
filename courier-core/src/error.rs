//! Reasons a set of parcels cannot be served by a truck path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Address;

/// Closed classification of delivery failures.
///
/// Serialises to the variant name, e.g. `"DropoffNotInPath"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The pickup address is not on the path.
    PickupNotInPath,
    /// The dropoff address is not on the path.
    DropoffNotInPath,
    /// The path reaches the dropoff before the pickup.
    DropoffBeforePickup,
    /// The itinerary could not be lined up with the path.
    Unknown,
}

/// Errors returned by [`crate::check_parcel`] and
/// [`crate::try_generate_steps`].
///
/// The `Display` output is the message reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The pickup address is not on the path.
    #[error("Delivery address {pickup} not in path")]
    PickupNotInPath {
        /// Pickup address that was looked up.
        pickup: Address,
    },
    /// The dropoff address is not on the path.
    #[error("Dropoff address {dropoff} not in path")]
    DropoffNotInPath {
        /// Dropoff address that was looked up.
        dropoff: Address,
    },
    /// The dropoff address precedes the pickup address on the path.
    #[error("Dropoff address {dropoff} before pickup address {pickup}")]
    DropoffBeforePickup {
        /// Pickup address of the parcel.
        pickup: Address,
        /// Dropoff address of the parcel.
        dropoff: Address,
    },
    /// The path ends before every step has been placed.
    #[error("Truck path has no address at position {position}")]
    PathTooShort {
        /// Zero-based position that was requested.
        position: usize,
    },
    /// A path address has no step to place at its position.
    #[error("No step for path address {address} at position {position}")]
    UnmatchedPathAddress {
        /// Address visited at `position`.
        address: Address,
        /// Zero-based position on the path.
        position: usize,
    },
}

impl DeliveryError {
    /// Classify the error.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{DeliveryError, ErrorKind};
    ///
    /// let err = DeliveryError::DropoffNotInPath { dropoff: 3 };
    /// assert_eq!(err.kind(), ErrorKind::DropoffNotInPath);
    /// assert_eq!(err.to_string(), "Dropoff address 3 not in path");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PickupNotInPath { .. } => ErrorKind::PickupNotInPath,
            Self::DropoffNotInPath { .. } => ErrorKind::DropoffNotInPath,
            Self::DropoffBeforePickup { .. } => ErrorKind::DropoffBeforePickup,
            Self::PathTooShort { .. } | Self::UnmatchedPathAddress { .. } => ErrorKind::Unknown,
        }
    }
}
