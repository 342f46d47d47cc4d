use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::error::{OscilloError, OscilloResult};
use crate::render::{Color, LayerGeometry, LinePrimitive};

/// Stroke styling for grid rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub color: Color,
    pub stroke_width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(195, 195, 195),
            stroke_width: 1.0,
        }
    }
}

impl GridStyle {
    pub fn validate(self) -> OscilloResult<Self> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(OscilloError::InvalidData(
                "grid stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        Ok(self)
    }
}

/// Square grid level-of-detail state.
///
/// `spacing` is the world interval between adjacent grid lines and never
/// drops below 1. `starting_spacing` is the density of the "home" view;
/// zooming out never coarsens past one doubling of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLod {
    spacing: u32,
    starting_spacing: u32,
    length: u32,
    minimum_reached: bool,
}

impl GridLod {
    /// Creates the grid for a square half-extent of `length` world units.
    pub fn new(length: u32) -> OscilloResult<Self> {
        if length == 0 {
            return Err(OscilloError::InvalidData(
                "grid length must be >= 1".to_owned(),
            ));
        }

        let starting_spacing = (length / 20).max(1);
        Ok(Self {
            spacing: starting_spacing,
            starting_spacing,
            length,
            minimum_reached: false,
        })
    }

    #[must_use]
    pub fn spacing(self) -> u32 {
        self.spacing
    }

    #[must_use]
    pub fn starting_spacing(self) -> u32 {
        self.starting_spacing
    }

    #[must_use]
    pub fn length(self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn minimum_reached(self) -> bool {
        self.minimum_reached
    }

    /// Coarsens the grid one step (zoom out).
    ///
    /// Spacing above `starting_spacing` is clamped back to it before
    /// doubling, so the zoomed-out density never exceeds one doubling of
    /// the home view. The clamp is lossy on purpose.
    pub fn double_up(&mut self) {
        if self.spacing > self.starting_spacing {
            self.spacing = self.starting_spacing;
        }
        self.spacing *= 2;
    }

    /// Refines the grid one step (zoom in), flooring spacing at 1.
    pub fn double_down(&mut self) {
        self.spacing /= 2;
        if self.spacing == 0 {
            self.spacing = 1;
        }
        if self.spacing == 1 {
            self.minimum_reached = true;
        }
    }

    /// Reads and clears the minimum-spacing flag.
    pub fn take_minimum_reached(&mut self) -> bool {
        std::mem::take(&mut self.minimum_reached)
    }

    /// Regenerates the full grid geometry at the current spacing.
    ///
    /// Horizontal lines sit at `y = spacing, 2*spacing, .. < length`, each
    /// spanning `x in [0, length]`, with symmetric vertical lines. The
    /// caller swaps the returned batch into the scene whole.
    #[must_use]
    pub fn build(self, style: GridStyle) -> LayerGeometry {
        let mut geometry = LayerGeometry::new();
        let length = f64::from(self.length);

        let mut offset = self.spacing;
        while offset < self.length {
            let at = f64::from(offset);
            geometry.lines.push(LinePrimitive::new(
                Point3::on_plane(0.0, at),
                Point3::on_plane(length, at),
                style.stroke_width,
                style.color,
            ));
            geometry.lines.push(LinePrimitive::new(
                Point3::on_plane(at, 0.0),
                Point3::on_plane(at, length),
                style.stroke_width,
                style.color,
            ));
            offset += self.spacing;
        }

        geometry
    }
}
