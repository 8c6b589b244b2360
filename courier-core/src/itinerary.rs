//! Builds the driver's itinerary from every parcel on a truck path.
//!
//! Each parcel is checked on its own, the resulting pickup and dropoff steps
//! are merged in address order, single missing addresses are filled with
//! pass-through stops, and the merged steps are lined up with the path's
//! travel order.

use crate::{DeliveryError, DeliveryOutcome, Parcel, Step, TruckPath, check_parcel};

/// Build the itinerary for `parcels` and wrap it as a [`DeliveryOutcome`].
///
/// # Examples
/// ```
/// use courier_core::{Parcel, Step, TruckPath, generate_steps};
///
/// let parcels = [Parcel::new(1, 3), Parcel::new(2, 5)];
/// let path = TruckPath::from(vec![1, 2, 3, 4, 5]);
/// let outcome = generate_steps(&parcels, &path);
/// assert_eq!(
///     outcome.steps(),
///     Some(
///         &[
///             Step::pickup(1),
///             Step::pickup(2),
///             Step::dropoff(3),
///             Step::pass_through(4),
///             Step::dropoff(5),
///         ][..]
///     )
/// );
/// ```
#[must_use]
pub fn generate_steps(parcels: &[Parcel], path: &TruckPath) -> DeliveryOutcome {
    DeliveryOutcome::from(try_generate_steps(parcels, path))
}

/// Build the itinerary for `parcels`, keeping the typed error.
///
/// Every parcel is checked before any failure is reported, and only the
/// failure of the earliest parcel in `parcels` is returned.
///
/// Each merged step is matched to one path position, so a stop shared by two
/// steps must appear on the path once per step. Repeated stops resolve to the
/// first step at that address.
///
/// # Errors
///
/// Returns the first parcel's [`DeliveryError`] when a parcel cannot be
/// served. Returns [`DeliveryError::PathTooShort`] or
/// [`DeliveryError::UnmatchedPathAddress`] when the merged steps cannot be
/// placed at the path's leading positions.
pub fn try_generate_steps(
    parcels: &[Parcel],
    path: &TruckPath,
) -> Result<Vec<Step>, DeliveryError> {
    let checks: Vec<Result<[Step; 2], DeliveryError>> = parcels
        .iter()
        .map(|parcel| check_parcel(parcel, path))
        .collect();
    let rejected = checks.iter().filter(|check| check.is_err()).count();
    if rejected > 0 {
        log::debug!("{rejected} of {} parcels cannot be served", parcels.len());
    }
    let pairs = checks.into_iter().collect::<Result<Vec<_>, _>>()?;

    let mut merged: Vec<Step> = pairs.into_iter().flatten().collect();
    // `sort_by_key` is stable: steps sharing an address keep parcel order.
    merged.sort_by_key(|step| step.address);
    let filled = fill_single_gaps(&merged);
    log::debug!(
        "merged {} steps into {} stops for a path of {}",
        merged.len(),
        filled.len(),
        path.len()
    );

    align_with_path(&filled, path)
        .inspect_err(|err| log::warn!("itinerary does not line up with truck path: {err}"))
}

/// Insert a pass-through stop wherever exactly one address is missing
/// between neighbouring steps.
///
/// Wider gaps are left as they are.
fn fill_single_gaps(sorted: &[Step]) -> Vec<Step> {
    let mut filled = Vec::with_capacity(sorted.len());
    for (index, step) in sorted.iter().enumerate() {
        filled.push(*step);
        if let Some(next) = sorted.get(index + 1)
            && next.address.checked_sub(step.address) == Some(2)
            && let Some(between) = step.address.checked_add(1)
        {
            filled.push(Step::pass_through(between));
        }
    }
    filled
}

/// Emit, for each of the first `filled.len()` path positions, the first step
/// at that position's address.
fn align_with_path(filled: &[Step], path: &TruckPath) -> Result<Vec<Step>, DeliveryError> {
    (0..filled.len())
        .map(|position| {
            let address = path
                .get(position)
                .ok_or(DeliveryError::PathTooShort { position })?;
            filled
                .iter()
                .find(|step| step.address == address)
                .copied()
                .ok_or(DeliveryError::UnmatchedPathAddress { address, position })
        })
        .collect()
}
