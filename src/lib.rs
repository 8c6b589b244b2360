//! Facade crate for the Courier delivery engine.
//!
//! This crate re-exports the core domain types, the per-parcel feasibility
//! check, and itinerary generation.
//!
//! # Examples
//! ```
//! use courier_engine::{Parcel, TruckPath, generate_steps};
//!
//! let outcome = generate_steps(&[Parcel::new(1, 2)], &TruckPath::from(vec![1, 2]));
//! assert!(outcome.is_success());
//! ```

#![forbid(unsafe_code)]

pub use courier_core::{
    Action, Address, DeliveryError, DeliveryOutcome, ErrorKind, Parcel, Step, TruckPath,
    check_parcel, generate_steps, input, try_generate_steps,
};
