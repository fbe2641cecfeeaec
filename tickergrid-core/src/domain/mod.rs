//! Domain types — bars, derived rows, seasonal aggregates.

pub mod bar;
pub mod seasonal;

pub use bar::{Bar, DerivedRow};
pub use seasonal::SeasonalDay;
