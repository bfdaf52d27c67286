//! Glyph palettes mapping density percentages to characters.
//!
//! A palette is an ordered table of (threshold, glyph) pairs. A cell whose
//! density percentage does not exceed the first threshold renders as that
//! entry's glyph; the final entry at threshold 100 renders full density.

use crate::error::{Error, Result};

/// An ordered density-to-glyph lookup table.
///
/// Thresholds are percentages, strictly increasing, starting at 0 and ending
/// at 100 so the whole density range is covered. Lookup picks the first entry
/// whose threshold is at least the queried percentage: an empty cell (0%)
/// maps to the first glyph and a full cell (100%) always reaches the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(u8, char)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::symbols()
    }
}

impl Palette {
    /// Create a palette from an explicit threshold table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, thresholds are not strictly
    /// increasing, the first threshold is not 0, or the last is not 100.
    pub fn new(entries: Vec<(u8, char)>) -> Result<Self> {
        let Some(&(first, _)) = entries.first() else {
            return Err(Error::InvalidPalette("palette requires at least one entry".to_string()));
        };
        if first != 0 {
            return Err(Error::InvalidPalette("first threshold must be 0".to_string()));
        }
        if entries.windows(2).any(|pair| pair[1].0 <= pair[0].0) {
            return Err(Error::InvalidPalette(
                "thresholds must be strictly increasing".to_string(),
            ));
        }
        if entries.last().is_some_and(|&(last, _)| last != 100) {
            return Err(Error::InvalidPalette("last threshold must be 100".to_string()));
        }
        Ok(Self { entries })
    }

    /// The default Unicode symbol table: eleven density steps from space
    /// through `⓿`.
    #[must_use]
    pub fn symbols() -> Self {
        Self {
            entries: vec![
                (0, ' '),
                (10, '·'),
                (20, '-'),
                (30, '▫'),
                (40, '•'),
                (50, '▪'),
                (60, '*'),
                (70, 'o'),
                (80, 'O'),
                (90, '□'),
                (100, '⓿'),
            ],
        }
    }

    /// A pure-ASCII grayscale ramp for terminals without Unicode support.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            entries: vec![
                (0, ' '),
                (12, '.'),
                (23, ':'),
                (34, '-'),
                (45, '='),
                (56, '+'),
                (67, '*'),
                (78, '#'),
                (89, '%'),
                (100, '@'),
            ],
        }
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Glyph for a cell at the given density percentage.
    ///
    /// Returns the glyph of the first entry whose threshold is at least
    /// `percent`; percentages above 100 saturate to the last entry.
    #[must_use]
    pub fn glyph_for(&self, percent: f64) -> char {
        self.entries
            .iter()
            .find(|&&(threshold, _)| percent <= f64::from(threshold))
            .or_else(|| self.entries.last())
            .map_or(' ', |&(_, glyph)| glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_symbols() {
        assert_eq!(Palette::default(), Palette::symbols());
    }

    #[test]
    fn test_symbols_boundaries() {
        let palette = Palette::symbols();
        assert_eq!(palette.glyph_for(0.0), ' ');
        assert_eq!(palette.glyph_for(5.0), '·');
        assert_eq!(palette.glyph_for(10.0), '·');
        assert_eq!(palette.glyph_for(10.5), '-');
        assert_eq!(palette.glyph_for(100.0), '⓿');
    }

    #[test]
    fn test_lookup_saturates_above_hundred() {
        assert_eq!(Palette::symbols().glyph_for(150.0), '⓿');
        assert_eq!(Palette::ascii().glyph_for(150.0), '@');
    }

    #[test]
    fn test_ascii_full_density() {
        assert_eq!(Palette::ascii().glyph_for(100.0), '@');
        assert_eq!(Palette::ascii().glyph_for(0.0), ' ');
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(vec![(0, '.'), (100, '#')]).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.glyph_for(0.0), '.');
        assert_eq!(palette.glyph_for(1.0), '#');
        assert_eq!(palette.glyph_for(100.0), '#');
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(Palette::new(vec![]).is_err());
    }

    #[test]
    fn test_first_threshold_must_be_zero() {
        assert!(Palette::new(vec![(5, '.'), (100, '#')]).is_err());
    }

    #[test]
    fn test_last_threshold_must_be_hundred() {
        assert!(Palette::new(vec![(0, '.'), (90, '#')]).is_err());
    }

    #[test]
    fn test_non_increasing_thresholds_rejected() {
        assert!(Palette::new(vec![(0, '.'), (50, 'o'), (50, 'O'), (100, '#')]).is_err());
        assert!(Palette::new(vec![(0, '.'), (60, 'o'), (40, 'O'), (100, '#')]).is_err());
    }

    #[test]
    fn test_single_entry_rejected() {
        // One entry cannot start at 0 and end at 100 at once.
        assert!(Palette::new(vec![(0, '#')]).is_err());
        assert!(Palette::new(vec![(100, '#')]).is_err());
    }

    #[test]
    fn test_palette_debug_clone() {
        let palette = Palette::symbols();
        let palette2 = palette.clone();
        let _ = format!("{palette2:?}");
    }
}
