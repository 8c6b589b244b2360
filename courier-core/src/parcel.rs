//! Parcels awaiting collection and delivery.

use serde::{Deserialize, Serialize};

/// A stop on the truck's route.
///
/// Consecutive integers are treated as physically adjacent stops.
pub type Address = i64;

/// A parcel collected at one address and delivered to another.
///
/// # Examples
/// ```
/// use courier_core::Parcel;
///
/// let parcel = Parcel::new(1, 4);
/// assert_eq!(parcel.pickup_address, 1);
/// assert_eq!(parcel.dropoff_address, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Address, Address)", into = "(Address, Address)")]
pub struct Parcel {
    /// Address where the truck collects the parcel.
    pub pickup_address: Address,
    /// Address where the truck hands the parcel over.
    pub dropoff_address: Address,
}

impl Parcel {
    /// Construct a parcel from its pickup and dropoff addresses.
    #[must_use]
    pub const fn new(pickup_address: Address, dropoff_address: Address) -> Self {
        Self {
            pickup_address,
            dropoff_address,
        }
    }
}

impl From<(Address, Address)> for Parcel {
    fn from((pickup_address, dropoff_address): (Address, Address)) -> Self {
        Self::new(pickup_address, dropoff_address)
    }
}

impl From<Parcel> for (Address, Address) {
    fn from(parcel: Parcel) -> Self {
        (parcel.pickup_address, parcel.dropoff_address)
    }
}
