//! # Glyphplot
//!
//! Character-grid density plots for terminal output.
//!
//! Glyphplot renders a two-dimensional scatter/line dataset as a fixed-size
//! grid of text characters. Samples are binned into width × height cells,
//! each cell's point count is normalized against the densest cell, and the
//! resulting percentage selects a glyph from a small palette. The output is
//! a sequence of plain text lines with scientific-notation axis labels,
//! ready to print to any terminal — no graphics, no color, no dependencies
//! on a drawing backend.
//!
//! ## Quick Start
//!
//! ```
//! use glyphplot::CharPlot;
//!
//! let y: Vec<f64> = (0..360).map(|i| (f64::from(i) / 30.0).sin()).collect();
//!
//! let plot = CharPlot::new()
//!     .y(&y)
//!     .dimensions(72, 12)
//!     .title("A sine wave")
//!     .build()?;
//!
//! for line in plot.render() {
//!     println!("{line}");
//! }
//! # Ok::<(), glyphplot::Error>(())
//! ```
//!
//! The renderer is a pure function of its inputs: edges, counts, and glyphs
//! are recomputed on every call, nothing is cached between renders, and a
//! built plot is safe to render concurrently from independent threads.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in grid/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

/// Bin edge computation and sample-to-bin assignment.
pub mod bins;

/// Density count grid.
pub mod grid;

/// Glyph palettes mapping density percentages to characters.
pub mod palette;

/// The character plot builder and renderer.
pub mod plot;

/// Error types for glyphplot operations.
pub mod error;

pub use error::{Error, Result};
pub use palette::Palette;
pub use plot::CharPlot;

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use glyphplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bins::BinEdges;
    pub use crate::error::{Error, Result};
    pub use crate::grid::DensityGrid;
    pub use crate::palette::Palette;
    pub use crate::plot::CharPlot;
}
