//! Stops in a driver's itinerary.

use serde::{Deserialize, Serialize};

use crate::Address;

/// What the driver does at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Collect a parcel.
    Pickup,
    /// Hand a parcel over.
    Dropoff,
    /// Drive through without a parcel event.
    None,
}

impl Action {
    /// Return the action as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use courier_core::Action;
    ///
    /// assert_eq!(Action::Pickup.as_str(), "pickup");
    /// assert_eq!(Action::None.to_string(), "none");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stop and the action taken there.
///
/// # Examples
/// ```
/// use courier_core::{Action, Step};
///
/// let step = Step::pass_through(4);
/// assert_eq!(step.address, 4);
/// assert_eq!(step.action, Action::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Where the stop happens.
    pub address: Address,
    /// What happens there.
    pub action: Action,
}

impl Step {
    /// Construct a step.
    #[must_use]
    pub const fn new(address: Address, action: Action) -> Self {
        Self { address, action }
    }

    /// A parcel collection at `address`.
    #[must_use]
    pub const fn pickup(address: Address) -> Self {
        Self::new(address, Action::Pickup)
    }

    /// A parcel hand-over at `address`.
    #[must_use]
    pub const fn dropoff(address: Address) -> Self {
        Self::new(address, Action::Dropoff)
    }

    /// A stop at `address` with nothing to collect or deliver.
    #[must_use]
    pub const fn pass_through(address: Address) -> Self {
        Self::new(address, Action::None)
    }
}
