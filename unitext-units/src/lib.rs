//! unitext Units - Unit Catalog and Alias Index
//!
//! Static definitions of the supported unit systems and a case-insensitive
//! index resolving every alias, name and symbol to its unit.
//!
//! Systems:
//! - Volume (mL, L, cup, pt, gal, etc.)
//! - Length (m, km, in, ft, mi, etc.)
//! - Weight (g, kg, lb, oz, etc.)
//! - Temperature (°C, °F, K)
//! - Area (m², ha, ac, ft², etc.)
//! - Speed (m/s, km/h, mph, kt, ft/s)
//! - Time (s, min, hr, d, yr)

mod unit;
mod system;
mod index;
mod suggest;

pub use unit::{Unit, Conversion};
pub use system::{UnitSystem, catalog};
pub use index::UnitIndex;
pub use suggest::{levenshtein, MAX_SUGGESTION_DISTANCE, MIN_SUGGESTION_LEN};
