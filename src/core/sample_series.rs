use crate::core::types::Point3;
use crate::error::{OscilloError, OscilloResult};

/// One channel's ordered sample sequence plus derived extents.
///
/// Created once at load time by the ingestion boundary; the polyline built
/// from it is immutable thereafter and redraws reuse the same geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    name: String,
    values: Vec<f64>,
    max_value: f64,
}

impl SampleSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> OscilloResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(OscilloError::InvalidData(
                "sample series name must not be empty".to_owned(),
            ));
        }
        if values.is_empty() {
            return Err(OscilloError::InvalidData(format!(
                "sample series `{name}` must contain at least one sample"
            )));
        }

        let mut max_value = f64::NEG_INFINITY;
        for value in &values {
            if !value.is_finite() {
                return Err(OscilloError::InvalidData(format!(
                    "sample series `{name}` contains a non-finite sample"
                )));
            }
            max_value = max_value.max(*value);
        }

        Ok(Self {
            name,
            values,
            max_value,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Materializes the series as a polyline in the `z = 0` plane.
    ///
    /// Sample value maps to `x`, sample index to `y`, matching the layout
    /// the scene and camera assume.
    #[must_use]
    pub fn polyline(&self) -> Vec<Point3> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| Point3::on_plane(*value, index as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SampleSeries;

    #[test]
    fn series_tracks_max_value_and_length() {
        let series = SampleSeries::new("channel_1", vec![17.0, 121.0, 40.5]).expect("valid series");
        assert_eq!(series.len(), 3);
        assert_eq!(series.max_value(), 121.0);
    }

    #[test]
    fn polyline_maps_value_to_x_and_index_to_y() {
        let series = SampleSeries::new("channel_1", vec![5.0, 7.0]).expect("valid series");
        let points = series.polyline();
        assert_eq!(points[0].x, 5.0);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[1].x, 7.0);
        assert_eq!(points[1].y, 1.0);
        assert!(points.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn empty_or_non_finite_series_is_rejected() {
        assert!(SampleSeries::new("channel_1", Vec::new()).is_err());
        assert!(SampleSeries::new("channel_1", vec![1.0, f64::NAN]).is_err());
    }
}
