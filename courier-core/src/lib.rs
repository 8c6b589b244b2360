//! Core domain types and itinerary generation for the Courier engine.
//!
//! A truck drives a fixed [`TruckPath`]. Given the [`Parcel`]s it must carry,
//! [`check_parcel`] decides whether the path can serve one parcel, and
//! [`generate_steps`] turns the whole load into an ordered list of [`Step`]s
//! for the driver, or a single [`DeliveryError`] describing the first parcel
//! that cannot be served.
//!
//! # Examples
//! ```
//! use courier_core::{ErrorKind, Parcel, TruckPath, generate_steps};
//!
//! let parcels = [Parcel::new(1, 3), Parcel::new(2, 5)];
//! let outcome = generate_steps(&parcels, &TruckPath::from(vec![1, 2, 4]));
//! assert_eq!(outcome.error_kind(), Some(ErrorKind::DropoffNotInPath));
//! ```

#![forbid(unsafe_code)]

mod check;
mod error;
pub mod input;
mod itinerary;
mod outcome;
mod parcel;
mod path;
mod step;

pub use check::check_parcel;
pub use error::{DeliveryError, ErrorKind};
pub use itinerary::{generate_steps, try_generate_steps};
pub use outcome::DeliveryOutcome;
pub use parcel::{Address, Parcel};
pub use path::TruckPath;
pub use step::{Action, Step};
