//! Orrery Figure - archive client and chart renderer
//!
//! The application half of the figure: fetches discovery years from the
//! exoplanet archive over TAP, assembles the inputs defined in
//! `orrery-core`, and draws the chart.

pub mod archive;
pub mod error;
pub mod render;

pub use archive::*;
pub use error::*;
pub use render::*;
