use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point3;
use crate::error::{OscilloError, OscilloResult};
use crate::render::{Color, LayerGeometry, TextHAlign, TextPrimitive};

/// Styling for axis-label rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: Color,
    pub font_size_px: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.0, 0.0, 0.0),
            font_size_px: 12.0,
        }
    }
}

impl LabelStyle {
    pub fn validate(self) -> OscilloResult<Self> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(OscilloError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        Ok(self)
    }
}

/// Axis-label level-of-detail state.
///
/// Label spacing starts coupled to the grid spacing but steps on its own.
/// Unlike the grid there is no clamp against a starting value, so labels
/// can keep coarsening indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelLod {
    spacing: u32,
    axis_extent: u32,
    time_span: f64,
    digit_width: u32,
}

impl AxisLabelLod {
    pub fn new(axis_extent: u32, initial_spacing: u32, time_span: f64) -> OscilloResult<Self> {
        if axis_extent == 0 {
            return Err(OscilloError::InvalidData(
                "axis extent must be >= 1".to_owned(),
            ));
        }
        if initial_spacing == 0 {
            return Err(OscilloError::InvalidData(
                "label spacing must be >= 1".to_owned(),
            ));
        }
        if !time_span.is_finite() || time_span <= 0.0 {
            return Err(OscilloError::InvalidData(
                "time span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            spacing: initial_spacing,
            axis_extent,
            time_span,
            digit_width: decimal_digits(axis_extent),
        })
    }

    #[must_use]
    pub fn spacing(self) -> u32 {
        self.spacing
    }

    #[must_use]
    pub fn axis_extent(self) -> u32 {
        self.axis_extent
    }

    #[must_use]
    pub fn time_span(self) -> f64 {
        self.time_span
    }

    #[must_use]
    pub fn digit_width(self) -> u32 {
        self.digit_width
    }

    pub fn double_up_spacing(&mut self) {
        self.spacing = self.spacing.saturating_mul(2);
    }

    pub fn double_down_spacing(&mut self) {
        self.spacing = (self.spacing / 2).max(1);
    }

    /// Regenerates the label set at the current spacing.
    ///
    /// One label pair per multiple of `spacing` up to the axis extent: an
    /// x-axis label carrying the accumulated fractional time value and a
    /// y-axis label carrying the raw coordinate. The time value accumulates
    /// by `time_span / 20` per generated row, so relabeling after a spacing
    /// change restarts the accumulation at the first surviving label.
    #[must_use]
    pub fn build(self, style: LabelStyle) -> LayerGeometry {
        let mut geometry = LayerGeometry::new();
        let step = self.time_span / 20.0;
        let y_label_x = -2.0 * f64::from(self.digit_width);

        let mut time_value = 0.0;
        let mut offset = self.spacing;
        while offset <= self.axis_extent {
            time_value += step;
            let at = f64::from(offset);

            let row: SmallVec<[TextPrimitive; 2]> = SmallVec::from_buf([
                TextPrimitive::new(
                    format_time_label(time_value),
                    Point3::on_plane(at, 0.0),
                    style.font_size_px,
                    style.color,
                    TextHAlign::Center,
                ),
                TextPrimitive::new(
                    offset.to_string(),
                    Point3::on_plane(y_label_x, at),
                    style.font_size_px,
                    style.color,
                    TextHAlign::Right,
                ),
            ]);
            geometry.texts.extend(row);

            offset += self.spacing;
        }

        geometry
    }
}

fn decimal_digits(value: u32) -> u32 {
    value.checked_ilog10().unwrap_or(0) + 1
}

/// Formats an accumulated time value with up to three fractional digits.
fn format_time_label(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisLabelLod, LabelStyle, decimal_digits, format_time_label};

    #[test]
    fn time_labels_trim_trailing_zeros() {
        assert_eq!(format_time_label(0.05), "0.05");
        assert_eq!(format_time_label(1.0), "1");
        assert_eq!(format_time_label(2.500), "2.5");
        assert_eq!(format_time_label(0.0), "0");
    }

    #[test]
    fn digit_width_counts_decimal_digits_of_the_extent() {
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(968), 3);
    }

    #[test]
    fn build_pairs_time_and_coordinate_labels_per_multiple() {
        let labels = AxisLabelLod::new(10, 5, 1.0).expect("valid labels");
        let geometry = labels.build(LabelStyle::default());
        // Multiples 5 and 10: two rows, two labels each.
        assert_eq!(geometry.texts.len(), 4);

        // First row: time label at (5, 0), coordinate label offset left.
        assert_eq!(geometry.texts[0].text, "0.05");
        assert_eq!(geometry.texts[0].position.x, 5.0);
        assert_eq!(geometry.texts[1].text, "5");
        assert_eq!(geometry.texts[1].position.x, -4.0);
        assert_eq!(geometry.texts[1].position.y, 5.0);
    }

    #[test]
    fn relabeling_restarts_time_accumulation_from_zero() {
        let mut labels = AxisLabelLod::new(100, 10, 2.0).expect("valid labels");
        let before = labels.build(LabelStyle::default());
        labels.double_up_spacing();
        let after = labels.build(LabelStyle::default());

        // First surviving label restarts at one step regardless of position.
        assert_eq!(before.texts[0].text, after.texts[0].text);
        assert_eq!(after.texts[0].position.x, 20.0);
    }
}
