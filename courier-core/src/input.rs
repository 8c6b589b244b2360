//! Decoding raw JSON arguments into parcels and truck paths.
//!
//! Both decoders are strict: numbers must be integers, each delivery must be
//! a two-element `[pickup, dropoff]` array, and at least one delivery must be
//! present. The truck path may be empty.

use thiserror::Error;

use crate::{Address, Parcel, TruckPath};

/// Errors returned by [`parse_deliveries`] and [`parse_truck_path`].
#[derive(Debug, Error)]
pub enum InputError {
    /// The deliveries argument is not a JSON array of address pairs.
    #[error("Invalid deliveries: {0}")]
    Deliveries(#[source] serde_json::Error),
    /// The deliveries argument decoded to an empty array.
    #[error("Invalid deliveries: at least one delivery is required")]
    NoDeliveries,
    /// The truck path argument is not a JSON array of addresses.
    #[error("Invalid truckPath: {0}")]
    TruckPath(#[source] serde_json::Error),
}

/// Decode a JSON array of `[pickup, dropoff]` pairs.
///
/// # Errors
///
/// Returns [`InputError::Deliveries`] for malformed input and
/// [`InputError::NoDeliveries`] for an empty array.
///
/// # Examples
/// ```
/// use courier_core::{Parcel, input::parse_deliveries};
///
/// let parcels = parse_deliveries("[[1, 3], [2, 5]]")?;
/// assert_eq!(parcels, vec![Parcel::new(1, 3), Parcel::new(2, 5)]);
/// # Ok::<(), courier_core::input::InputError>(())
/// ```
pub fn parse_deliveries(raw: &str) -> Result<Vec<Parcel>, InputError> {
    let parcels: Vec<Parcel> = serde_json::from_str(raw).map_err(InputError::Deliveries)?;
    if parcels.is_empty() {
        return Err(InputError::NoDeliveries);
    }
    log::debug!("decoded {} deliveries", parcels.len());
    Ok(parcels)
}

/// Decode a JSON array of addresses.
///
/// # Errors
///
/// Returns [`InputError::TruckPath`] for malformed input.
///
/// # Examples
/// ```
/// use courier_core::input::parse_truck_path;
///
/// let path = parse_truck_path("[]")?;
/// assert!(path.is_empty());
/// # Ok::<(), courier_core::input::InputError>(())
/// ```
pub fn parse_truck_path(raw: &str) -> Result<TruckPath, InputError> {
    let addresses: Vec<Address> = serde_json::from_str(raw).map_err(InputError::TruckPath)?;
    log::debug!("decoded truck path of {} stops", addresses.len());
    Ok(TruckPath::from(addresses))
}
