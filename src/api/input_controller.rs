use tracing::{debug, trace};

use crate::error::OscilloResult;
use crate::interaction::{Modifiers, PointerButton, WheelDelta};
use crate::lod::{LodTransition, ZoomTick};
use crate::render::Renderer;

use super::ViewportEngine;
use super::engine::{GRID_LAYER, LABEL_LAYER};
use super::visibility::VisibilityChange;

impl<R: Renderer> ViewportEngine<R> {
    pub fn pointer_press(&mut self, x: f64, y: f64) {
        self.camera.on_press(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.camera.on_move(x, y);
    }

    pub fn pointer_release(&mut self, button: PointerButton) {
        self.camera.on_release(button);
    }

    /// Handles one wheel event: camera zoom plus the LOD tick it implies.
    pub fn wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) {
        if let Some(tick) = self.camera.on_wheel(delta, modifiers) {
            self.apply_zoom_tick(tick);
        }
    }

    /// Per-channel toggle-click handler for UI chrome.
    pub fn toggle_channel(&mut self, name: &str) -> OscilloResult<VisibilityChange> {
        self.visibility.toggle(name, &mut self.scene)
    }

    /// Bulk show-all/hide-all handler for UI chrome.
    pub fn set_all_channels(&mut self, visible: bool) -> Vec<VisibilityChange> {
        self.visibility.set_all(visible, &mut self.scene)
    }

    /// Advances the hysteresis machine and rebuilds LOD layers on a fire.
    ///
    /// The swap is atomic per layer: the old batch is replaced by the fresh
    /// one in a single step, so no partially rebuilt grid is ever rendered.
    pub(super) fn apply_zoom_tick(&mut self, tick: ZoomTick) {
        trace!(?tick, counter = self.scale_state.counter(), "zoom tick");

        if let Some(transition) = self.scale_state.apply_tick(tick) {
            match transition {
                LodTransition::Refine => {
                    self.grid.double_down();
                    self.labels.double_down_spacing();
                }
                LodTransition::Coarsen => {
                    self.grid.double_up();
                    self.labels.double_up_spacing();
                }
            }

            debug!(
                ?transition,
                grid_spacing = self.grid.spacing(),
                label_spacing = self.labels.spacing(),
                "applied lod transition"
            );
            self.scene
                .replace_layer(GRID_LAYER, self.grid.build(self.config.grid_style));
            self.scene
                .replace_layer(LABEL_LAYER, self.labels.build(self.config.label_style));
        }

        // Spacing has bottomed out: park the counter on the coarsen boundary
        // so the next tick in either direction backs the LOD out.
        if self.grid.take_minimum_reached() {
            self.scale_state.arm_coarsen();
        }
    }
}
