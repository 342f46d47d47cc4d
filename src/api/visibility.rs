use indexmap::IndexMap;
use tracing::debug;

use crate::error::{OscilloError, OscilloResult};
use crate::render::{Color, LayerGeometry, Scene};

/// One channel's renderable figure plus its toggle state.
///
/// The geometry is built once at load time; toggling swaps the same batch
/// in and out of the scene without regenerating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFigure {
    name: String,
    color: Color,
    geometry: LayerGeometry,
    visible: bool,
}

impl ChannelFigure {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, geometry: LayerGeometry) -> Self {
        Self {
            name: name.into(),
            color,
            geometry,
            visible: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Notification emitted once per actual visibility flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
    pub name: String,
    pub visible: bool,
}

/// Maps channel names to figures and keeps scene layers in step.
///
/// Visibility is binary: a channel's layer is either fully present in the
/// scene or absent. Iteration order is registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelVisibilityManager {
    figures: IndexMap<String, ChannelFigure>,
}

impl ChannelVisibilityManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a figure and inserts its layer (figures start visible).
    ///
    /// The scene key namespace is shared with non-channel layers (axes,
    /// grid, labels), so a name that already exists in the scene is
    /// rejected rather than silently replacing another owner's geometry.
    pub fn register(&mut self, figure: ChannelFigure, scene: &mut Scene) -> OscilloResult<()> {
        if self.figures.contains_key(figure.name()) {
            return Err(OscilloError::InvalidData(format!(
                "channel `{}` is already registered",
                figure.name()
            )));
        }
        if scene.contains_layer(figure.name()) {
            return Err(OscilloError::InvalidData(format!(
                "channel `{}` collides with an existing scene layer",
                figure.name()
            )));
        }

        scene.replace_layer(figure.name().to_owned(), figure.geometry.clone());
        self.figures.insert(figure.name().to_owned(), figure);
        Ok(())
    }

    /// Flips one channel and syncs its scene layer.
    pub fn toggle(&mut self, name: &str, scene: &mut Scene) -> OscilloResult<VisibilityChange> {
        let figure = self
            .figures
            .get_mut(name)
            .ok_or_else(|| OscilloError::UnknownChannel(name.to_owned()))?;
        Ok(Self::flip(figure, scene))
    }

    /// Drives every channel to `visible`, flipping only those that differ.
    ///
    /// Unchanged channels are never touched, so toggle side effects fire
    /// exactly once per channel that actually changed.
    pub fn set_all(&mut self, visible: bool, scene: &mut Scene) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        for index in 0..self.figures.len() {
            let (_, figure) = self
                .figures
                .get_index_mut(index)
                .expect("index within figure count");
            if figure.visible != visible {
                changes.push(Self::flip(figure, scene));
            }
        }
        changes
    }

    pub fn is_visible(&self, name: &str) -> OscilloResult<bool> {
        self.figures
            .get(name)
            .map(ChannelFigure::is_visible)
            .ok_or_else(|| OscilloError::UnknownChannel(name.to_owned()))
    }

    /// Color assigned to a channel at registration.
    pub fn color(&self, name: &str) -> OscilloResult<Color> {
        self.figures
            .get(name)
            .map(ChannelFigure::color)
            .ok_or_else(|| OscilloError::UnknownChannel(name.to_owned()))
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.figures.keys().map(String::as_str)
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.figures.len()
    }

    fn flip(figure: &mut ChannelFigure, scene: &mut Scene) -> VisibilityChange {
        figure.visible = !figure.visible;
        if figure.visible {
            scene.replace_layer(figure.name.clone(), figure.geometry.clone());
        } else {
            scene.remove_layer(&figure.name);
        }

        debug!(
            channel = %figure.name,
            visible = figure.visible,
            "channel visibility changed"
        );
        VisibilityChange {
            name: figure.name.clone(),
            visible: figure.visible,
        }
    }
}
