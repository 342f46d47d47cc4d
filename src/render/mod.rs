mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod scene;

pub use frame::SceneFrame;
pub use null_renderer::NullRenderer;
pub use palette::Palette;
pub use primitives::{Color, LinePrimitive, PolylinePrimitive, TextHAlign, TextPrimitive};
pub use scene::{LayerGeometry, Scene};

use crate::error::OscilloResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `SceneFrame` so
/// drawing code remains isolated from viewport and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &SceneFrame) -> OscilloResult<()>;
}
