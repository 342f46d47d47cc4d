use serde::{Deserialize, Serialize};

use crate::core::{Point3, Viewport};
use crate::error::{OscilloError, OscilloResult};
use crate::lod::ZoomTick;

/// Multiplicative zoom base applied per unit of wheel delta.
pub const WHEEL_ZOOM_BASE: f64 = 0.999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Keyboard modifiers relevant to wheel handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Wheel adjusts field of view instead of distance.
    pub fov_zoom: bool,
}

/// Raw wheel event deltas.
///
/// The horizontal component wins; the vertical one is the fallback when
/// horizontal is zero, matching how tilt wheels report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    pub horizontal: f64,
    pub vertical: f64,
}

impl WheelDelta {
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn effective(self) -> f64 {
        if self.horizontal != 0.0 {
            self.horizontal
        } else {
            self.vertical
        }
    }
}

/// Camera pose over the fixed top-down orthographic view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub distance: f64,
    pub field_of_view: f64,
    pub center: Point3,
    pub pan_offset: Point3,
}

impl CameraState {
    /// Home pose: look-at center and zoom distance with the default FOV.
    #[must_use]
    pub fn home(center: Point3, distance: f64) -> Self {
        Self {
            distance,
            field_of_view: 60.0,
            center,
            pan_offset: Point3::on_plane(0.0, 0.0),
        }
    }
}

/// Converts pointer and wheel input into camera mutations.
///
/// Composition over a plain state struct instead of widget subclassing:
/// the host forwards events here and reads the pose back when drawing.
/// Pan never touches `distance`/`field_of_view` and zoom never touches
/// `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    state: CameraState,
    viewport: Viewport,
    down_position: Option<(f64, f64)>,
    prev_pan_position: Option<(f64, f64)>,
    moved_since_press: bool,
}

impl CameraController {
    pub fn new(viewport: Viewport, home_center: Point3, distance: f64) -> OscilloResult<Self> {
        if !viewport.is_valid() {
            return Err(OscilloError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !home_center.is_finite() {
            return Err(OscilloError::InvalidData(
                "camera center must be finite".to_owned(),
            ));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(OscilloError::InvalidData(
                "camera distance must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            state: CameraState::home(home_center, distance),
            viewport,
            down_position: None,
            prev_pan_position: None,
            moved_since_press: false,
        })
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// World units covered by one pixel at the current pose.
    #[must_use]
    pub fn world_per_pixel(&self) -> f64 {
        let half_fov = (self.state.field_of_view / 2.0).to_radians();
        2.0 * self.state.distance * half_fov.tan() / f64::from(self.viewport.height)
    }

    /// World point under a pixel position. Screen y grows downward.
    #[must_use]
    pub fn world_at_pixel(&self, x: f64, y: f64) -> Point3 {
        let scale = self.world_per_pixel();
        let dx = x - f64::from(self.viewport.width) / 2.0;
        let dy = y - f64::from(self.viewport.height) / 2.0;
        Point3::on_plane(self.state.center.x + dx * scale, self.state.center.y - dy * scale)
    }

    pub fn on_press(&mut self, x: f64, y: f64) {
        self.down_position = Some((x, y));
        self.prev_pan_position = Some((x, y));
        self.moved_since_press = false;
    }

    /// Applies one drag step as a view-relative pan.
    ///
    /// Pan is delta-based: the recorded position advances every move event,
    /// so the world point under the cursor stays under the cursor. Moves
    /// without a preceding press are ignored.
    pub fn on_move(&mut self, x: f64, y: f64) {
        let Some((prev_x, prev_y)) = self.prev_pan_position else {
            return;
        };

        let dx = x - prev_x;
        let dy = y - prev_y;
        if dx != 0.0 || dy != 0.0 {
            self.moved_since_press = true;
            let scale = self.world_per_pixel();
            self.pan_by(-dx * scale, dy * scale);
        }
        self.prev_pan_position = Some((x, y));
    }

    /// Ends the gesture; a primary-button press-and-release without motion
    /// recenters the camera on the pressed point.
    pub fn on_release(&mut self, button: PointerButton) {
        if let Some((down_x, down_y)) = self.down_position {
            if !self.moved_since_press && button == PointerButton::Primary {
                let target = self.world_at_pixel(down_x, down_y);
                self.pan_by(target.x - self.state.center.x, target.y - self.state.center.y);
            }
        }
        self.down_position = None;
        self.prev_pan_position = None;
        self.moved_since_press = false;
    }

    /// Applies wheel input and returns the zoom tick to forward, if any.
    ///
    /// With the FOV modifier the delta reshapes perspective only; without
    /// it the zoom is a pure multiplicative distance change, monotonic in
    /// the delta sign.
    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Option<ZoomTick> {
        let effective = delta.effective();
        if !effective.is_finite() || effective == 0.0 {
            return None;
        }

        if modifiers.fov_zoom {
            self.state.field_of_view *= WHEEL_ZOOM_BASE.powf(effective);
            return None;
        }

        self.state.distance *= WHEEL_ZOOM_BASE.powf(effective);
        ZoomTick::from_delta(effective)
    }

    fn pan_by(&mut self, world_dx: f64, world_dy: f64) {
        self.state.center.x += world_dx;
        self.state.center.y += world_dy;
        self.state.pan_offset.x += world_dx;
        self.state.pan_offset.y += world_dy;
    }
}
