//! The character plot builder and renderer.
//!
//! [`CharPlot`] collects data and layout options through a builder, validates
//! them in [`build`](CharPlot::build), and renders a header line, one line
//! per y-bin from the top down, and a footer carrying the x extent.

use std::iter;

use crate::bins::{extent, BinEdges};
use crate::error::{Error, Result};
use crate::grid::DensityGrid;
use crate::palette::Palette;

/// Padding character for the header rule and footer axis.
const DEFAULT_FILLER: char = '―';

/// Width the numeric labels are right-justified to.
const LABEL_WIDTH: usize = 9;

/// Width of the row label gutter (label plus one space).
const LABEL_GUTTER: usize = LABEL_WIDTH + 1;

/// Builder for character-grid density plots.
///
/// Samples are binned into a `width` × `height` grid of cells; each cell's
/// point count, as a percentage of the densest cell, selects a glyph from the
/// palette. The rendered output is `height + 2` lines, every one exactly
/// `width + 10` characters wide.
///
/// # Example
///
/// ```
/// use glyphplot::CharPlot;
///
/// let y: Vec<f64> = (0..240).map(|i| (f64::from(i) / 24.0).sin()).collect();
/// let plot = CharPlot::new()
///     .y(&y)
///     .dimensions(60, 10)
///     .title("sine")
///     .build()
///     .unwrap();
///
/// let lines = plot.render();
/// assert_eq!(lines.len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct CharPlot {
    y_data: Vec<f64>,
    x_data: Option<Vec<f64>>,
    width: u32,
    height: u32,
    title: Option<String>,
    low_x_label: Option<String>,
    high_x_label: Option<String>,
    palette: Palette,
    filler: char,
}

impl Default for CharPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl CharPlot {
    /// Create a new plot builder with a 120 × 15 grid and the default
    /// symbol palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            y_data: Vec::new(),
            x_data: None,
            width: 120,
            height: 15,
            title: None,
            low_x_label: None,
            high_x_label: None,
            palette: Palette::default(),
            filler: DEFAULT_FILLER,
        }
    }

    /// Set the y-axis data.
    #[must_use]
    pub fn y(mut self, data: &[f64]) -> Self {
        self.y_data = data.to_vec();
        self
    }

    /// Set the x-axis data paired with y by index.
    ///
    /// When not supplied, x defaults to the 0-based index of each y value.
    #[must_use]
    pub fn x(mut self, data: &[f64]) -> Self {
        self.x_data = Some(data.to_vec());
        self
    }

    /// Set the grid dimensions in characters.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the title centered in the header line.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Override the low-x footer label (defaults to the x minimum in
    /// scientific notation).
    #[must_use]
    pub fn low_x_label(mut self, label: &str) -> Self {
        self.low_x_label = Some(label.to_string());
        self
    }

    /// Override the high-x footer label (defaults to the x maximum in
    /// scientific notation).
    #[must_use]
    pub fn high_x_label(mut self, label: &str) -> Self {
        self.high_x_label = Some(label.to_string());
        self
    }

    /// Set the density palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the header/footer padding character.
    #[must_use]
    pub fn filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    /// Number of samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.y_data.len()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if y data is empty, x and y lengths differ, or
    /// either grid dimension is zero. All validation happens here, before
    /// any binning; [`render`](Self::render) cannot fail afterwards.
    pub fn build(self) -> Result<Self> {
        if self.y_data.is_empty() {
            return Err(Error::EmptyData);
        }

        if let Some(x_data) = &self.x_data {
            if x_data.len() != self.y_data.len() {
                return Err(Error::DataLengthMismatch {
                    x_len: x_data.len(),
                    y_len: self.y_data.len(),
                });
            }
        }

        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }

        Ok(self)
    }

    /// Render the plot as one string per output line.
    ///
    /// The result has `height + 2` lines: the header, data rows from the
    /// highest y-bin down to the lowest, and the footer. Every line is
    /// `width + 10` characters.
    ///
    /// Edges, counts, and glyphs are recomputed from the data on every call;
    /// no state persists between renders.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let width = self.width as usize;
        let height = self.height as usize;

        let indices: Vec<f64>;
        let xs: &[f64] = match &self.x_data {
            Some(xs) => xs,
            None => {
                indices = (0..self.y_data.len()).map(|i| i as f64).collect();
                &indices
            }
        };

        // build() rejected empty data, so both extents exist.
        let x_extent = extent(xs).unwrap_or_default();
        let y_extent = extent(&self.y_data).unwrap_or_default();

        let x_edges = BinEdges::from_extent(x_extent, width);
        let y_edges = BinEdges::from_extent(y_extent, height);

        let grid = DensityGrid::bin(xs, &self.y_data, &x_edges, &y_edges);
        let max_count = grid.max_count().max(1);

        let mut lines = Vec::with_capacity(height + 2);
        lines.push(self.header_line(width));
        for row in (0..height).rev() {
            lines.push(self.data_row(&grid, &y_edges, row, max_count));
        }
        lines.push(self.footer_line(width, x_extent));

        lines
    }

    /// Render and join the lines with newlines.
    #[must_use]
    pub fn render_string(&self) -> String {
        self.render().join("\n")
    }

    /// Write the rendered plot to stdout.
    pub fn print(&self) {
        println!("{}", self.render_string());
    }

    /// Header: the title centered in `width + 10` filler characters.
    fn header_line(&self, width: usize) -> String {
        let total = width + LABEL_GUTTER;
        let title = self.title.as_deref().unwrap_or("");
        let pad = total.saturating_sub(title.chars().count());
        let left = pad / 2;

        let mut line = String::with_capacity(total * 3);
        line.extend(iter::repeat(self.filler).take(left));
        line.push_str(title);
        line.extend(iter::repeat(self.filler).take(pad - left));
        line
    }

    /// One data row: the bin midpoint label, a space, and one glyph per
    /// x-bin in ascending order.
    fn data_row(&self, grid: &DensityGrid, y_edges: &BinEdges, row: usize, max_count: usize) -> String {
        let label = sci_label(y_edges.midpoint(row));

        let mut line = String::with_capacity(grid.width() * 3 + LABEL_GUTTER);
        line.push_str(&format!("{label:>LABEL_WIDTH$}"));
        line.push(' ');
        for col in 0..grid.width() {
            let percent = grid.count(col, row) as f64 * 100.0 / max_count as f64;
            line.push(self.palette.glyph_for(percent));
        }
        line
    }

    /// Footer: nine fillers, the low-x label right-justified to nine
    /// characters, filler padding, then the high-x label.
    fn footer_line(&self, width: usize, (xmin, xmax): (f64, f64)) -> String {
        let low = self.low_x_label.clone().unwrap_or_else(|| sci_label(xmin));
        let low = format!("{low:>LABEL_WIDTH$}");
        let high = self.high_x_label.clone().unwrap_or_else(|| sci_label(xmax));
        let pad = (width + 1).saturating_sub(low.chars().count() + high.chars().count());

        let mut line = String::with_capacity((width + LABEL_GUTTER) * 3);
        line.extend(iter::repeat(self.filler).take(LABEL_WIDTH));
        line.push_str(&low);
        line.extend(iter::repeat(self.filler).take(pad));
        line.push_str(&high);
        line
    }
}

/// Scientific notation with two decimal digits and a signed two-digit
/// exponent, e.g. `-1.23E+04`.
fn sci_label(value: f64) -> String {
    if value == 0.0 {
        return String::from("0.00E+00");
    }
    if !value.is_finite() {
        return format!("{value:.2}");
    }

    let exponent = value.abs().log10().floor() as i32;
    let mantissa = value / 10f64.powi(exponent);
    // Rounding to two decimals can carry the mantissa to 10.00.
    let (mantissa, exponent) = if format!("{:.2}", mantissa.abs()) == "10.00" {
        (mantissa / 10.0, exponent + 1)
    } else {
        (mantissa, exponent)
    };

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa:.2}E{sign}{:02}", exponent.abs())
}
