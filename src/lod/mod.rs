pub mod axis_labels;
pub mod grid;
pub mod scale_state;

pub use axis_labels::{AxisLabelLod, LabelStyle};
pub use grid::{GridLod, GridStyle};
pub use scale_state::{LodTransition, ScaleStateMachine, ZoomTick};
