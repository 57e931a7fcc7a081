//! Diagram, slice and text attributes.

use crate::errors::{NumericError, check_non_negative};
use crate::log::warn;
use crate::types::{Color, Stroke};

/// Explode factor installed by `set_explode(true)`.
pub const DEFAULT_EXPLODE_FACTOR: f64 = 0.1;

/// Granularity used when the configured value is out of range.
pub const DEFAULT_GRANULARITY: f64 = 1.0;

const GRANULARITY_MIN: f64 = 0.05;
const GRANULARITY_MAX: f64 = 36.0;

/// Per-slice geometry attributes.
///
/// `explode_factor` is the fractional outward displacement of a slice away
/// from the diagram center, as a fraction of the plotting radius. Gap
/// factors insert spacing between adjacent slices (tangential) or between
/// adjacent rings (radial).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SliceAttributes {
    explode_factor: f64,
    tangential_gap_factor: f64,
    radial_gap_factor: f64,
}

impl SliceAttributes {
    pub fn new() -> SliceAttributes {
        SliceAttributes::default()
    }

    /// Whether this slice is exploded at all.
    pub fn explode(&self) -> bool {
        self.explode_factor != 0.0
    }

    /// Enable or disable explosion. Enabling installs the default factor;
    /// disabling forces the factor back to zero.
    pub fn set_explode(&mut self, enabled: bool) {
        self.explode_factor = if enabled { DEFAULT_EXPLODE_FACTOR } else { 0.0 };
    }

    pub fn explode_factor(&self) -> f64 {
        self.explode_factor
    }

    pub fn set_explode_factor(&mut self, factor: f64) -> Result<(), NumericError> {
        self.explode_factor = check_non_negative(factor)?;
        Ok(())
    }

    pub fn tangential_gap_factor(&self) -> f64 {
        self.tangential_gap_factor
    }

    pub fn set_tangential_gap_factor(&mut self, factor: f64) -> Result<(), NumericError> {
        self.tangential_gap_factor = check_non_negative(factor)?;
        Ok(())
    }

    pub fn radial_gap_factor(&self) -> f64 {
        self.radial_gap_factor
    }

    pub fn set_radial_gap_factor(&mut self, factor: f64) -> Result<(), NumericError> {
        self.radial_gap_factor = check_non_negative(factor)?;
        Ok(())
    }
}

/// Pseudo-3D extrusion attributes, one set per diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeDAttributes {
    pub enabled: bool,
    /// Extrusion depth. Non-negative values are absolute pixels; negative
    /// values are a percentage of the available plotting height.
    pub depth: f64,
    /// Paint the side walls with a darkened variant of the slice color.
    pub use_shadow_colors: bool,
}

impl Default for ThreeDAttributes {
    fn default() -> Self {
        ThreeDAttributes {
            enabled: false,
            depth: 20.0,
            use_shadow_colors: true,
        }
    }
}

impl ThreeDAttributes {
    /// Resolve the configured depth against the available plotting height.
    /// The returned magnitude is used for both layout and wall geometry.
    pub fn resolve_depth(&self, available: f64) -> f64 {
        if self.depth >= 0.0 {
            self.depth
        } else {
            -self.depth / 100.0 * available
        }
    }
}

/// Diagram-wide attributes shared by the polar chart variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramAttributes {
    /// Rotational offset applied to angle zero, in degrees.
    pub start_position: f64,
    granularity: f64,
    /// Whether an exploding inner ring displaces the rings outside it.
    pub expand_when_exploded: bool,
    /// Close each radar dataset by appending its first point.
    pub close_datasets: bool,
    /// Alpha factor for the radar fill layer; zero disables the layer.
    pub fill_alpha: f64,
}

impl Default for DiagramAttributes {
    fn default() -> Self {
        DiagramAttributes {
            start_position: 0.0,
            granularity: DEFAULT_GRANULARITY,
            expand_when_exploded: false,
            close_datasets: true,
            fill_alpha: 0.0,
        }
    }
}

impl DiagramAttributes {
    /// The angular step used to approximate arcs, in degrees.
    ///
    /// Values outside [0.05, 36.0] fall back to 1.0 so a misconfigured
    /// near-zero step cannot produce pathologically large polygons.
    pub fn granularity(&self) -> f64 {
        if self.granularity < GRANULARITY_MIN || self.granularity > GRANULARITY_MAX {
            warn!(granularity = self.granularity, "granularity out of range, using default");
            DEFAULT_GRANULARITY
        } else {
            self.granularity
        }
    }

    pub fn set_granularity(&mut self, granularity: f64) {
        self.granularity = granularity;
    }
}

/// Value label attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextAttributes {
    pub visible: bool,
    pub font_size: f64,
    pub color: Color,
}

impl Default for TextAttributes {
    fn default() -> Self {
        TextAttributes {
            visible: true,
            font_size: 12.0,
            color: Color::BLACK,
        }
    }
}

/// Fill and outline style of one dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetStyle {
    pub brush: Color,
    pub pen: Stroke,
}

impl DatasetStyle {
    pub fn new(brush: Color) -> DatasetStyle {
        DatasetStyle {
            brush,
            pen: Stroke::default(),
        }
    }
}

/// Default dataset colors, cycled by dataset index.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(255, 0, 0),
    Color::rgb(0, 128, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(255, 255, 0),
    Color::rgb(139, 0, 0),
    Color::rgb(0, 100, 0),
    Color::rgb(0, 0, 139),
    Color::rgb(255, 140, 0),
];

/// Style for a dataset index, cycling through the default palette when no
/// explicit style is configured.
pub(crate) fn palette_style(styles: &[DatasetStyle], index: usize) -> DatasetStyle {
    styles.get(index).copied().unwrap_or_else(|| {
        DatasetStyle::new(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explode_false_zeroes_factor() {
        let mut attrs = SliceAttributes::new();
        attrs.set_explode_factor(0.25).unwrap();
        assert!(attrs.explode());
        attrs.set_explode(false);
        assert_eq!(attrs.explode_factor(), 0.0);
        assert!(!attrs.explode());
    }

    #[test]
    fn explode_true_installs_default_factor() {
        let mut attrs = SliceAttributes::new();
        attrs.set_explode(true);
        assert_eq!(attrs.explode_factor(), DEFAULT_EXPLODE_FACTOR);
    }

    #[test]
    fn explode_factor_rejects_negative() {
        let mut attrs = SliceAttributes::new();
        assert_eq!(
            attrs.set_explode_factor(-0.5),
            Err(NumericError::Negative)
        );
        assert_eq!(attrs.explode_factor(), 0.0);
    }

    #[test]
    fn granularity_in_range_passes_through() {
        let mut attrs = DiagramAttributes::default();
        attrs.set_granularity(10.0);
        assert_eq!(attrs.granularity(), 10.0);
        attrs.set_granularity(0.05);
        assert_eq!(attrs.granularity(), 0.05);
        attrs.set_granularity(36.0);
        assert_eq!(attrs.granularity(), 36.0);
    }

    #[test]
    fn granularity_out_of_range_falls_back() {
        let mut attrs = DiagramAttributes::default();
        attrs.set_granularity(0.01);
        assert_eq!(attrs.granularity(), 1.0);
        attrs.set_granularity(50.0);
        assert_eq!(attrs.granularity(), 1.0);
    }

    #[test]
    fn three_d_depth_resolution() {
        let absolute = ThreeDAttributes {
            enabled: true,
            depth: 25.0,
            use_shadow_colors: true,
        };
        assert_eq!(absolute.resolve_depth(200.0), 25.0);

        let relative = ThreeDAttributes {
            enabled: true,
            depth: -10.0,
            use_shadow_colors: true,
        };
        assert_eq!(relative.resolve_depth(200.0), 20.0);
    }

    #[test]
    fn palette_cycles() {
        let styles: Vec<DatasetStyle> = Vec::new();
        assert_eq!(palette_style(&styles, 0).brush, DEFAULT_PALETTE[0]);
        assert_eq!(
            palette_style(&styles, DEFAULT_PALETTE.len() + 1).brush,
            DEFAULT_PALETTE[1]
        );
    }
}
