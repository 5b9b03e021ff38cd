//! Immutable palette configuration.

use crate::model::{Color, InvalidColor};
use thiserror::Error;

/// Errors raised while assembling a [`PaletteSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteConfigError {
    /// No palettes were registered.
    #[error("At least one palette is required")]
    NoPalettes,

    /// A palette was registered without colors.
    #[error("Palette '{0}' has no colors")]
    EmptyPalette(String),

    /// The same palette name was registered twice.
    #[error("Palette '{0}' is registered more than once")]
    DuplicateName(String),

    /// A palette name was empty.
    #[error("Palette names cannot be empty")]
    EmptyName,

    /// A color value in palette `palette` was invalid.
    #[error("Invalid color in palette '{palette}': {source}")]
    InvalidColor {
        /// Palette containing the bad value.
        palette: String,
        /// Underlying validation failure.
        #[source]
        source: InvalidColor,
    },
}

/// An ordered, validated set of named palettes.
///
/// Registration order is the order in which unkeyed dispenses cycle through
/// palettes. Every palette is guaranteed non-empty, names are unique, and the
/// set holds at least one palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSet {
    palettes: Vec<(String, Vec<Color>)>,
}

impl PaletteSet {
    /// Build a palette set from `(name, colors)` pairs in registration order.
    ///
    /// # Errors
    ///
    /// Fails if the set is empty, a name is empty or repeated, or a palette
    /// has no colors.
    pub fn new<N, I>(palettes: I) -> Result<Self, PaletteConfigError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Color>)>,
    {
        let mut validated: Vec<(String, Vec<Color>)> = Vec::new();

        for (name, colors) in palettes {
            let name = name.into();
            if name.is_empty() {
                return Err(PaletteConfigError::EmptyName);
            }
            if validated.iter().any(|(existing, _)| *existing == name) {
                return Err(PaletteConfigError::DuplicateName(name));
            }
            if colors.is_empty() {
                return Err(PaletteConfigError::EmptyPalette(name));
            }
            validated.push((name, colors));
        }

        if validated.is_empty() {
            return Err(PaletteConfigError::NoPalettes);
        }

        Ok(Self {
            palettes: validated,
        })
    }

    /// Build a palette set from raw color strings, validating each value.
    pub fn from_raw<N, C, I>(palettes: I) -> Result<Self, PaletteConfigError>
    where
        N: Into<String>,
        C: Into<String>,
        I: IntoIterator<Item = (N, Vec<C>)>,
    {
        let mut converted = Vec::new();
        for (name, raw_colors) in palettes {
            let name = name.into();
            let colors = raw_colors
                .into_iter()
                .map(Color::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| PaletteConfigError::InvalidColor {
                    palette: name.clone(),
                    source,
                })?;
            converted.push((name, colors));
        }
        Self::new(converted)
    }

    /// Number of registered palettes (always >= 1).
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Palette names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(name, colors)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Color])> {
        self.palettes
            .iter()
            .map(|(name, colors)| (name.as_str(), colors.as_slice()))
    }
}

impl Default for PaletteSet {
    /// The stock reader palettes: greenish, blueish, redish.
    fn default() -> Self {
        fn colors(raw: [&'static str; 3]) -> Vec<Color> {
            raw.into_iter()
                .map(Color::from_literal)
                .collect()
        }

        Self {
            palettes: vec![
                (
                    "greenish".to_string(),
                    colors(["#687E00", "#4E451A", "#4C7F1F"]),
                ),
                (
                    "blueish".to_string(),
                    colors(["#135574", "#242443", "#22102F"]),
                ),
                (
                    "redish".to_string(),
                    colors(["#7A1B15", "#5E0A45", "#632A08"]),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(raw: &str) -> Color {
        Color::new(raw).unwrap()
    }

    #[test]
    fn default_has_three_palettes_in_order() {
        let set = PaletteSet::default();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["greenish", "blueish", "redish"]
        );
    }

    #[test]
    fn rejects_empty_set() {
        let result = PaletteSet::new(Vec::<(String, Vec<Color>)>::new());
        assert_eq!(result, Err(PaletteConfigError::NoPalettes));
    }

    #[test]
    fn rejects_palette_without_colors() {
        let result = PaletteSet::new(vec![("a", vec![c("#111")]), ("b", vec![])]);
        assert_eq!(result, Err(PaletteConfigError::EmptyPalette("b".into())));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = PaletteSet::new(vec![("a", vec![c("#111")]), ("a", vec![c("#222")])]);
        assert_eq!(result, Err(PaletteConfigError::DuplicateName("a".into())));
    }

    #[test]
    fn rejects_empty_name() {
        let result = PaletteSet::new(vec![("", vec![c("#111")])]);
        assert_eq!(result, Err(PaletteConfigError::EmptyName));
    }

    #[test]
    fn from_raw_reports_palette_of_bad_color() {
        let result = PaletteSet::from_raw(vec![("warm", vec!["#f00", ""])]);
        assert!(matches!(
            result,
            Err(PaletteConfigError::InvalidColor { ref palette, .. }) if palette == "warm"
        ));
    }

    #[test]
    fn preserves_registration_order() {
        let set = PaletteSet::from_raw(vec![
            ("zeta", vec!["#1"]),
            ("alpha", vec!["#2"]),
            ("mid", vec!["#3"]),
        ])
        .unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }
}
