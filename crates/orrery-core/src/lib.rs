//! Orrery Core - Figure data model
//!
//! This crate defines the data behind the N-body efficiency figure:
//! - Wall-clock unit constants and the efficiency normalization
//! - The landmark simulation record tables (classic and revised)
//! - The cumulative planet-discovery curve
//! - The CPU clock-frequency file parser
//!
//! Key types:
//! - SimulationRecord / FigureVariant
//! - DiscoveryCurve
//! - ClockSample
//! - Error types

pub mod curve;
pub mod error;
pub mod frequency;
pub mod record;
pub mod units;

pub use curve::*;
pub use error::*;
pub use frequency::*;
pub use record::*;
pub use units::*;
