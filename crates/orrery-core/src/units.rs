//! Wall-clock time constants
//!
//! All constants are in seconds. Simulation rates are quoted in simulated
//! years per wall-clock second; [`TO_MYR_PER_MONTH`] puts them on the
//! figure's axis of simulated megayears per month of compute.

/// Seconds per minute
pub const MINUTE: f64 = 60.0;

/// Seconds per hour
pub const HOUR: f64 = 60.0 * MINUTE;

/// Seconds per day
pub const DAY: f64 = 24.0 * HOUR;

/// Seconds per month (30-day convention)
pub const MONTH: f64 = 30.0 * DAY;

/// Converts simulated years per wall-clock second into simulated megayears
/// per wall-clock month of compute
pub const TO_MYR_PER_MONTH: f64 = MONTH / 1e6;
