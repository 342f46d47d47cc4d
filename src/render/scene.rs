use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::OscilloResult;
use crate::render::{LinePrimitive, PolylinePrimitive, TextPrimitive};

/// Immutable geometry batch produced by one rebuild pass.
///
/// Batches are constructed whole and swapped into the scene atomically;
/// nothing mutates a batch after it has been inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerGeometry {
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> OscilloResult<()> {
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

/// Named geometry layers in insertion order.
///
/// The scene is the single externally shared resource: exactly one owner
/// adds and removes layers, and a layer is either fully present or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    layers: IndexMap<String, LayerGeometry>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps a layer in one step, returning the replaced geometry.
    pub fn replace_layer(
        &mut self,
        name: impl Into<String>,
        geometry: LayerGeometry,
    ) -> Option<LayerGeometry> {
        self.layers.insert(name.into(), geometry)
    }

    /// Removes a layer while preserving the insertion order of the rest.
    pub fn remove_layer(&mut self, name: &str) -> Option<LayerGeometry> {
        self.layers.shift_remove(name)
    }

    #[must_use]
    pub fn contains_layer(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&LayerGeometry> {
        self.layers.get(name)
    }

    pub fn layers(&self) -> impl Iterator<Item = (&str, &LayerGeometry)> {
        self.layers
            .iter()
            .map(|(name, geometry)| (name.as_str(), geometry))
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
