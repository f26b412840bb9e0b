//! Display formatting for currency, distance, fuel, and duration.

mod format;

pub use format::{format_currency, format_distance, format_duration, format_fuel};
