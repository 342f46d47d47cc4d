use tracing::debug;

use crate::core::{LoadedChannels, Point3, SampleSource};
use crate::error::{OscilloError, OscilloResult};
use crate::interaction::CameraController;
use crate::lod::{AxisLabelLod, GridLod, ScaleStateMachine};
use crate::render::{LayerGeometry, LinePrimitive, PolylinePrimitive, Renderer, Scene};

use super::engine::{AXES_LAYER, GRID_LAYER, LABEL_LAYER};
use super::visibility::{ChannelFigure, ChannelVisibilityManager};
use super::{ViewportEngine, ViewportEngineConfig};

impl<R: Renderer> ViewportEngine<R> {
    /// Builds the scene from already-ingested channels.
    ///
    /// Constructs channel figures with palette colors, the static axes, the
    /// grid at its computed starting spacing, the label set, and the home
    /// camera over the plotted extent.
    pub fn new(
        renderer: R,
        config: ViewportEngineConfig,
        channels: LoadedChannels,
    ) -> OscilloResult<Self> {
        config.validate()?;
        let palette = config.palette()?;

        for series in channels.series() {
            if series.len() < 2 {
                return Err(OscilloError::InvalidData(format!(
                    "channel `{}` needs at least two samples to plot",
                    series.name()
                )));
            }
        }

        let x_max = channels.max_value();
        let y_max = channels.sample_count() as f64;
        let axis_length = axis_half_extent(x_max, y_max);

        // Grid covers four times the axis extent so panning past the data
        // still shows grid lines.
        let grid = GridLod::new(axis_length.saturating_mul(4))?;
        let time_span = channels.time_span().unwrap_or(config.time_span);
        let labels = AxisLabelLod::new(axis_length, grid.starting_spacing(), time_span)?;

        let home_center = Point3::on_plane(x_max / 2.0, y_max / 2.0);
        let home_distance = (2.0 * x_max).max(2.0 * y_max);
        let camera = CameraController::new(config.viewport, home_center, home_distance)?;

        let mut scene = Scene::new();
        scene.replace_layer(AXES_LAYER, axes_geometry(axis_length, &config));
        scene.replace_layer(GRID_LAYER, grid.build(config.grid_style));
        scene.replace_layer(LABEL_LAYER, labels.build(config.label_style));

        let mut visibility = ChannelVisibilityManager::new();
        for (index, series) in channels.series().iter().enumerate() {
            let color = palette.color_for(index);
            let geometry = LayerGeometry::new().with_polyline(PolylinePrimitive::new(
                series.polyline(),
                config.channel_stroke_width,
                color,
            ));
            visibility.register(ChannelFigure::new(series.name(), color, geometry), &mut scene)?;
        }

        debug!(
            channels = channels.channel_count(),
            samples = channels.sample_count(),
            axis_length,
            starting_spacing = grid.starting_spacing(),
            time_span,
            "initialized viewport scene"
        );

        Ok(Self {
            renderer,
            config,
            scene,
            camera,
            grid,
            labels,
            scale_state: ScaleStateMachine::new(),
            visibility,
        })
    }

    /// Loads channels from an ingestion collaborator, then builds the scene.
    pub fn from_source(
        renderer: R,
        config: ViewportEngineConfig,
        source: &impl SampleSource,
    ) -> OscilloResult<Self> {
        let channels = source.load()?;
        Self::new(renderer, config, channels)
    }
}

/// Half-extent covering both the value range and the sample count.
fn axis_half_extent(x_max: f64, y_max: f64) -> u32 {
    let extent = (2.0 * x_max.max(y_max)).ceil();
    if extent.is_finite() && extent >= 1.0 {
        extent as u32
    } else {
        1
    }
}

/// Two full axis lines through the origin, built once per scene.
fn axes_geometry(axis_length: u32, config: &ViewportEngineConfig) -> LayerGeometry {
    let reach = f64::from(axis_length);
    LayerGeometry::new()
        .with_line(LinePrimitive::new(
            Point3::on_plane(-reach, 0.0),
            Point3::on_plane(reach, 0.0),
            config.axis_stroke_width,
            config.axis_color,
        ))
        .with_line(LinePrimitive::new(
            Point3::on_plane(0.0, -reach),
            Point3::on_plane(0.0, reach),
            config.axis_stroke_width,
            config.axis_color,
        ))
}
