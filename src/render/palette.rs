use crate::error::{OscilloError, OscilloResult};
use crate::render::Color;

/// Channel colors in assignment order, matching the palette oscillogram
/// operators are used to. Some hues repeat on purpose.
const DEFAULT_COLORS: [Color; 32] = [
    Color::from_rgb8(255, 165, 0),   // orange
    Color::from_rgb8(0, 128, 0),     // green
    Color::from_rgb8(0, 0, 255),     // blue
    Color::from_rgb8(255, 0, 0),     // red
    Color::from_rgb8(0, 255, 255),   // aqua
    Color::from_rgb8(255, 165, 0),   // orange
    Color::from_rgb8(255, 105, 180), // hotpink
    Color::from_rgb8(0, 255, 127),   // springgreen
    Color::from_rgb8(138, 43, 226),  // blueviolet
    Color::from_rgb8(255, 69, 0),    // orangered
    Color::from_rgb8(65, 105, 225),  // royalblue
    Color::from_rgb8(0, 128, 0),     // green
    Color::from_rgb8(221, 160, 221), // plum
    Color::from_rgb8(175, 238, 238), // paleturquoise
    Color::from_rgb8(152, 251, 152), // palegreen
    Color::from_rgb8(0, 0, 128),     // navy
    Color::from_rgb8(64, 224, 208),  // turquoise
    Color::from_rgb8(199, 21, 133),  // mediumvioletred
    Color::from_rgb8(184, 134, 11),  // darkgoldenrod
    Color::from_rgb8(255, 0, 255),   // fuchsia
    Color::from_rgb8(70, 130, 180),  // steelblue
    Color::from_rgb8(240, 128, 128), // lightcoral
    Color::from_rgb8(216, 191, 216), // thistle
    Color::from_rgb8(240, 230, 140), // khaki
    Color::from_rgb8(127, 255, 0),   // chartreuse
    Color::from_rgb8(0, 128, 128),   // teal
    Color::from_rgb8(139, 69, 19),   // saddlebrown
    Color::from_rgb8(238, 130, 238), // violet
    Color::from_rgb8(255, 250, 205), // lemonchiffon
    Color::from_rgb8(128, 128, 0),   // olive
    Color::from_rgb8(255, 255, 0),   // yellow
    Color::from_rgb8(119, 136, 153), // lightslategray
];

/// Read-only ordered color resource indexed by channel number.
///
/// Channel indices past the palette length wrap modulo its length, so color
/// assignment is total for any channel count.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> OscilloResult<Self> {
        if colors.is_empty() {
            return Err(OscilloError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn color_for(&self, channel_index: usize) -> Color {
        self.colors[channel_index % self.colors.len()]
    }
}
