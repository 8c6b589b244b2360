//! Per-parcel feasibility against a truck path.

use crate::{DeliveryError, Parcel, Step, TruckPath};

/// Decide whether `path` can serve `parcel`.
///
/// The pickup address must appear on the path, the dropoff address must
/// appear on the path, and the first dropoff visit must not precede the first
/// pickup visit. Pickup and dropoff at the same stop are allowed.
///
/// # Errors
///
/// Returns the first failing condition in the order listed above.
///
/// # Examples
/// ```
/// use courier_core::{Parcel, Step, TruckPath, check_parcel};
///
/// let path = TruckPath::from(vec![1, 2, 3]);
/// let steps = check_parcel(&Parcel::new(1, 3), &path)?;
/// assert_eq!(steps, [Step::pickup(1), Step::dropoff(3)]);
/// # Ok::<(), courier_core::DeliveryError>(())
/// ```
pub fn check_parcel(parcel: &Parcel, path: &TruckPath) -> Result<[Step; 2], DeliveryError> {
    let pickup = parcel.pickup_address;
    let dropoff = parcel.dropoff_address;

    let pickup_index = path
        .position(pickup)
        .ok_or(DeliveryError::PickupNotInPath { pickup })?;
    let dropoff_index = path
        .position(dropoff)
        .ok_or(DeliveryError::DropoffNotInPath { dropoff })?;
    if dropoff_index < pickup_index {
        return Err(DeliveryError::DropoffBeforePickup { pickup, dropoff });
    }

    log::trace!("parcel {pickup}->{dropoff} fits path positions {pickup_index}..={dropoff_index}");
    Ok([Step::pickup(pickup), Step::dropoff(dropoff)])
}
