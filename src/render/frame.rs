use crate::core::Viewport;
use crate::error::{OscilloError, OscilloResult};
use crate::render::{LinePrimitive, PolylinePrimitive, Scene, TextPrimitive};

/// Backend-agnostic scene for one draw pass.
///
/// Primitives are flattened from scene layers in insertion order, so a
/// backend can draw them sequentially without knowing about layers.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl SceneFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            polylines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_scene(viewport: Viewport, scene: &Scene) -> Self {
        let mut frame = Self::new(viewport);
        for (_, geometry) in scene.layers() {
            frame.lines.extend(geometry.lines.iter().copied());
            frame.polylines.extend(geometry.polylines.iter().cloned());
            frame.texts.extend(geometry.texts.iter().cloned());
        }
        frame
    }

    pub fn validate(&self) -> OscilloResult<()> {
        if !self.viewport.is_valid() {
            return Err(OscilloError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.polylines.is_empty() && self.texts.is_empty()
    }
}
