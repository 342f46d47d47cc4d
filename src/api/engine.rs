use crate::error::OscilloResult;
use crate::interaction::{CameraController, CameraState};
use crate::lod::{AxisLabelLod, GridLod, ScaleStateMachine};
use crate::render::{Color, Renderer, Scene, SceneFrame};

use super::engine_config::ViewportEngineConfig;
use super::visibility::ChannelVisibilityManager;

pub(super) const AXES_LAYER: &str = "axes";
pub(super) const GRID_LAYER: &str = "grid";
pub(super) const LABEL_LAYER: &str = "axis-labels";

/// Main orchestration facade consumed by host applications.
///
/// `ViewportEngine` coordinates the camera, the grid/label LOD pair, the
/// zoom hysteresis state machine, channel visibility, and renderer calls.
/// All input is handled synchronously in delivery order; a LOD transition
/// is fully applied to the scene before the next `render` call.
pub struct ViewportEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ViewportEngineConfig,
    pub(super) scene: Scene,
    pub(super) camera: CameraController,
    pub(super) grid: GridLod,
    pub(super) labels: AxisLabelLod,
    pub(super) scale_state: ScaleStateMachine,
    pub(super) visibility: ChannelVisibilityManager,
}

impl<R: Renderer> ViewportEngine<R> {
    /// Flattens the current scene and hands it to the renderer.
    pub fn render(&mut self) -> OscilloResult<()> {
        let frame = SceneFrame::from_scene(self.config.viewport, &self.scene);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn config(&self) -> &ViewportEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.camera.camera()
    }

    #[must_use]
    pub fn grid(&self) -> GridLod {
        self.grid
    }

    #[must_use]
    pub fn labels(&self) -> AxisLabelLod {
        self.labels
    }

    #[must_use]
    pub fn scale_counter(&self) -> i32 {
        self.scale_state.counter()
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.visibility.channel_count()
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.visibility.channel_names()
    }

    pub fn is_channel_visible(&self, name: &str) -> OscilloResult<bool> {
        self.visibility.is_visible(name)
    }

    /// Palette color assigned to a channel, for legend chrome.
    pub fn channel_color(&self, name: &str) -> OscilloResult<Color> {
        self.visibility.color(name)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
