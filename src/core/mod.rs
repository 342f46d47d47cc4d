pub mod ingest;
pub mod sample_series;
pub mod types;

pub use ingest::{LoadedChannels, MatrixSource, SampleSource};
pub use sample_series::SampleSeries;
pub use types::{Point3, Viewport};
