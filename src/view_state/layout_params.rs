//! Outline layout parameters.

/// Default gap between adjacent outline nodes, in outline pixels.
pub const DEFAULT_GAP: f64 = 1.0;

/// Default floor for the visible-area indicator height, in outline pixels.
pub const DEFAULT_MIN_INDICATOR_HEIGHT: f64 = 20.0;

/// Fixed parameters that shape every outline render.
///
/// The gap only shrinks each rendered node box; it never changes the step
/// between node tops, so nodes stay contiguous with the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Separation subtracted from each node's scaled height.
    pub gap: f64,
    /// Minimum height of the visible-area indicator.
    pub min_indicator_height: f64,
}

impl OutlineParams {
    /// Create new outline params.
    pub fn new(gap: f64, min_indicator_height: f64) -> Self {
        Self {
            gap,
            min_indicator_height,
        }
    }
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self::new(DEFAULT_GAP, DEFAULT_MIN_INDICATOR_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_one_pixel_gap_and_twenty_pixel_floor() {
        let params = OutlineParams::default();
        assert_eq!(params.gap, 1.0);
        assert_eq!(params.min_indicator_height, 20.0);
    }

    #[test]
    fn test_inequality_different_gap() {
        assert_ne!(OutlineParams::new(1.0, 20.0), OutlineParams::new(2.0, 20.0));
    }
}
