//! patchwork-test - Regression test framework for patchwork
//!
//! This crate provides the small harness the regression tests share:
//!
//! - [`RegParams`]: numbered checks that record failures instead of
//!   panicking, with a final [`RegParams::cleanup`] verdict
//! - [`Fixture`]: RGBA buffers drawn as ASCII art
//!
//! # Usage
//!
//! ```ignore
//! use patchwork_test::{Fixture, RegParams};
//!
//! let mut rp = RegParams::new("patches");
//! let fx = Fixture::from_rows(&["#.", ".#"]).unwrap();
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter for library logs, e.g. `patchwork_region=debug`

mod error;
mod fixture;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{Fixture, glyph_color};
pub use params::RegParams;
