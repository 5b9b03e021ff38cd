//! Round-robin color dispenser over named palettes.
//!
//! Two dispensing modes:
//! - keyed: `next_color(Some(name))` walks one palette, wrapping at its end
//! - unkeyed: `next_color(None)` takes one color from each palette in turn,
//!   in registration order
//!
//! Each palette keeps its own cursor, shared by both modes. The cross-palette
//! cursor only moves on unkeyed dispenses.

use super::set::PaletteSet;
use crate::model::Color;
use thiserror::Error;
use tracing::debug;

/// Requested palette name is not registered with the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown palette: '{name}'")]
pub struct UnknownPaletteError {
    /// The name that was requested.
    pub name: String,
}

/// One palette plus its dispense cursor. Invariant: `cursor < colors.len()`.
#[derive(Debug, Clone)]
struct Palette {
    name: String,
    colors: Vec<Color>,
    cursor: usize,
}

impl Palette {
    fn dispense(&mut self) -> Color {
        let color = self.colors[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.colors.len();
        color
    }
}

/// Stateful round-robin color allocator.
///
/// Constructed once per document session from an immutable [`PaletteSet`].
/// Independent instances never share state.
///
/// # Examples
///
/// ```
/// use docmap::palette::{ColorAllocator, PaletteSet};
///
/// let mut colors = ColorAllocator::new(&PaletteSet::default());
/// assert_eq!(colors.next_color(None).unwrap().as_str(), "#687E00"); // greenish[0]
/// assert_eq!(colors.next_color(None).unwrap().as_str(), "#135574"); // blueish[0]
/// assert_eq!(colors.next_color(Some("greenish")).unwrap().as_str(), "#4E451A");
/// assert!(colors.next_color(Some("purpleish")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    palettes: Vec<Palette>,
    /// Index into `palettes` for the next unkeyed dispense.
    palette_cursor: usize,
}

impl ColorAllocator {
    /// Create an allocator with every cursor at 0.
    pub fn new(config: &PaletteSet) -> Self {
        let palettes: Vec<Palette> = config
            .iter()
            .map(|(name, colors)| Palette {
                name: name.to_string(),
                colors: colors.to_vec(),
                cursor: 0,
            })
            .collect();

        debug!(
            palettes = palettes.len(),
            names = ?config.names().collect::<Vec<_>>(),
            "Color allocator created"
        );

        Self {
            palettes,
            palette_cursor: 0,
        }
    }

    /// Dispense the next color.
    ///
    /// With `Some(name)`, takes the next color of that palette. With `None`,
    /// takes the next color of the palette under the cross-palette cursor and
    /// then moves that cursor on to the following palette.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPaletteError`] if `name` is not registered. No cursor
    /// moves in that case.
    pub fn next_color(&mut self, palette: Option<&str>) -> Result<Color, UnknownPaletteError> {
        match palette {
            Some(name) => {
                let palette = self
                    .palettes
                    .iter_mut()
                    .find(|p| p.name == name)
                    .ok_or_else(|| UnknownPaletteError {
                        name: name.to_string(),
                    })?;
                Ok(palette.dispense())
            }
            None => {
                let color = self.palettes[self.palette_cursor].dispense();
                self.palette_cursor = (self.palette_cursor + 1) % self.palettes.len();
                Ok(color)
            }
        }
    }

    /// Rewind every palette cursor and the cross-palette cursor to 0.
    pub fn reset(&mut self) {
        for palette in &mut self.palettes {
            palette.cursor = 0;
        }
        self.palette_cursor = 0;
        debug!("Color allocator reset");
    }

    /// Palette names in cycling order.
    pub fn palette_names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;
