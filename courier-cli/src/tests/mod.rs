//! Shared test harness modules for the Courier CLI.

use super::*;

mod helpers;
mod unit;
