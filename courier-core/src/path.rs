//! The fixed sequence of addresses a truck drives through.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Addresses visited by the truck, in travel order.
///
/// The path may be empty. Lookups return the first occurrence of an address,
/// so repeated addresses beyond the first are never matched.
///
/// # Examples
/// ```
/// use courier_core::TruckPath;
///
/// let path = TruckPath::from(vec![5, 4, 3]);
/// assert_eq!(path.position(4), Some(1));
/// assert_eq!(path.position(9), None);
/// assert_eq!(path.get(2), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruckPath(Vec<Address>);

impl TruckPath {
    /// Construct a path from addresses in travel order.
    #[must_use]
    pub const fn new(addresses: Vec<Address>) -> Self {
        Self(addresses)
    }

    /// Index of the first stop at `address`.
    #[must_use]
    pub fn position(&self, address: Address) -> Option<usize> {
        self.0.iter().position(|&stop| stop == address)
    }

    /// Address visited at `index`, if the path is that long.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Address> {
        self.0.get(index).copied()
    }

    /// Number of stops on the path.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the stops in travel order.
    pub fn iter(&self) -> impl Iterator<Item = Address> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Address>> for TruckPath {
    fn from(addresses: Vec<Address>) -> Self {
        Self::new(addresses)
    }
}

impl FromIterator<Address> for TruckPath {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
