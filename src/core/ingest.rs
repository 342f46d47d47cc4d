use tracing::debug;

use crate::core::SampleSeries;
use crate::error::{OscilloError, OscilloResult};

/// Validated output of the ingestion boundary.
///
/// The file-parsing layer (CSV/XLSX, external to this crate) produces one
/// column of samples per channel; this type is the only shape the engine
/// accepts, so degenerate inputs are rejected before any scene exists.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedChannels {
    series: Vec<SampleSeries>,
    time_span: Option<f64>,
}

impl LoadedChannels {
    pub fn new(series: Vec<SampleSeries>, time_span: Option<f64>) -> OscilloResult<Self> {
        if series.is_empty() {
            return Err(OscilloError::EmptyChannelSet);
        }
        if let Some(span) = time_span {
            if !span.is_finite() || span <= 0.0 {
                return Err(OscilloError::InvalidData(
                    "detected time span must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(Self { series, time_span })
    }

    #[must_use]
    pub fn series(&self) -> &[SampleSeries] {
        &self.series
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.series.len()
    }

    /// Largest sample value across all channels.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .map(SampleSeries::max_value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Longest channel length, in samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(SampleSeries::len).max().unwrap_or(0)
    }

    /// Time span detected from a leading time row, when one was present.
    #[must_use]
    pub fn time_span(&self) -> Option<f64> {
        self.time_span
    }
}

/// Contract implemented by ingestion collaborators.
pub trait SampleSource {
    fn load(&self) -> OscilloResult<LoadedChannels>;
}

/// In-memory column-major matrix source.
///
/// This is the shape tabular parsers hand over: one column per channel.
/// With `with_time_column`, the first column is treated as a time row and
/// only contributes the detected time span.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSource {
    columns: Vec<Vec<f64>>,
    time_column: bool,
}

impl MatrixSource {
    #[must_use]
    pub fn new(columns: Vec<Vec<f64>>) -> Self {
        Self {
            columns,
            time_column: false,
        }
    }

    /// Treats the first column as a leading time row.
    #[must_use]
    pub fn with_time_column(mut self) -> Self {
        self.time_column = true;
        self
    }
}

impl SampleSource for MatrixSource {
    fn load(&self) -> OscilloResult<LoadedChannels> {
        let mut columns = self.columns.iter();

        let time_span = if self.time_column {
            let time = columns.next().ok_or(OscilloError::EmptyChannelSet)?;
            let increasing = time.windows(2).all(|pair| pair[1] > pair[0]);
            match (time.first(), time.last()) {
                (Some(first), Some(last)) if increasing && last > first => Some(last - first),
                _ => {
                    return Err(OscilloError::InvalidData(
                        "time column must be non-empty and strictly increasing".to_owned(),
                    ));
                }
            }
        } else {
            None
        };

        let mut series = Vec::new();
        for (index, column) in columns.enumerate() {
            series.push(SampleSeries::new(
                format!("channel_{}", index + 1),
                column.clone(),
            )?);
        }

        let loaded = LoadedChannels::new(series, time_span)?;
        debug!(
            channels = loaded.channel_count(),
            samples = loaded.sample_count(),
            time_span = ?loaded.time_span(),
            "loaded channel matrix"
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::{MatrixSource, SampleSource};
    use crate::error::OscilloError;

    #[test]
    fn matrix_columns_become_numbered_channels() {
        let source = MatrixSource::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let loaded = source.load().expect("load matrix");
        assert_eq!(loaded.channel_count(), 2);
        assert_eq!(loaded.series()[0].name(), "channel_1");
        assert_eq!(loaded.series()[1].name(), "channel_2");
        assert_eq!(loaded.time_span(), None);
    }

    #[test]
    fn leading_time_column_yields_span_and_is_not_a_channel() {
        let source =
            MatrixSource::new(vec![vec![0.0, 0.5, 1.5], vec![9.0, 8.0, 7.0]]).with_time_column();
        let loaded = source.load().expect("load matrix");
        assert_eq!(loaded.channel_count(), 1);
        assert_eq!(loaded.time_span(), Some(1.5));
    }

    #[test]
    fn non_increasing_time_column_is_rejected() {
        let source =
            MatrixSource::new(vec![vec![0.0, 2.0, 1.0], vec![9.0, 8.0, 7.0]]).with_time_column();
        assert!(matches!(source.load(), Err(OscilloError::InvalidData(_))));
    }

    #[test]
    fn empty_matrix_is_rejected_at_the_boundary() {
        let result = MatrixSource::new(Vec::new()).load();
        assert!(matches!(result, Err(OscilloError::EmptyChannelSet)));
    }
}
