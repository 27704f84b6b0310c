//! Composes Merry's idle demo frame.
//!
//! The frame is a fixed stack of layers drawn back to front: body, head,
//! face mask, eyes with their glow outlines, then ears. Geometry and colors
//! are constants; the only input is the palette the colors resolve through.

use crate::canvas::Canvas;
use crate::color::{with_alpha, ColorError};
use crate::config::GeneratorConfig;
use crate::palette::{ColorRole, Palette};
use crate::shapes::{BoundingBox, Shape};
use image::RgbaImage;

/// Opacity of the neon glow around the eyes
pub const GLOW_ALPHA: u8 = 128;

const OPAQUE: u8 = 255;

/// Geometry of a layer, kept `const`-friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerShape {
    Ellipse(BoundingBox),
    RectOutline(BoundingBox),
    Triangle([(i32, i32); 3]),
}

impl LayerShape {
    pub fn to_shape(self) -> Shape {
        match self {
            LayerShape::Ellipse(bbox) => Shape::Ellipse(bbox),
            LayerShape::RectOutline(bbox) => Shape::RectOutline(bbox),
            LayerShape::Triangle(vertices) => Shape::Polygon(vertices.to_vec()),
        }
    }
}

/// One drawing step of the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub name: &'static str,
    pub shape: LayerShape,
    pub role: ColorRole,
    pub alpha: u8,
}

/// Layers of the idle_01 demo frame, back to front.
pub const IDLE_DEMO_LAYERS: [Layer; 9] = [
    Layer {
        name: "body",
        shape: LayerShape::Ellipse(BoundingBox::new(22, 28, 42, 50)),
        role: ColorRole::BodyBase,
        alpha: OPAQUE,
    },
    Layer {
        name: "head",
        shape: LayerShape::Ellipse(BoundingBox::new(26, 20, 38, 32)),
        role: ColorRole::BodyBase,
        alpha: OPAQUE,
    },
    Layer {
        name: "face_mask",
        shape: LayerShape::Ellipse(BoundingBox::new(28, 22, 36, 28)),
        role: ColorRole::PointsDark,
        alpha: OPAQUE,
    },
    Layer {
        name: "left_eye",
        shape: LayerShape::Ellipse(BoundingBox::new(29, 24, 31, 26)),
        role: ColorRole::EyesBlue,
        alpha: OPAQUE,
    },
    Layer {
        name: "left_eye_glow",
        shape: LayerShape::RectOutline(BoundingBox::new(28, 23, 32, 27)),
        role: ColorRole::EyesGlow,
        alpha: GLOW_ALPHA,
    },
    Layer {
        name: "right_eye",
        shape: LayerShape::Ellipse(BoundingBox::new(33, 24, 35, 26)),
        role: ColorRole::EyesBlue,
        alpha: OPAQUE,
    },
    Layer {
        name: "right_eye_glow",
        shape: LayerShape::RectOutline(BoundingBox::new(32, 23, 36, 27)),
        role: ColorRole::EyesGlow,
        alpha: GLOW_ALPHA,
    },
    Layer {
        name: "left_ear",
        shape: LayerShape::Triangle([(28, 20), (30, 16), (32, 20)]),
        role: ColorRole::PointsDark,
        alpha: OPAQUE,
    },
    Layer {
        name: "right_ear",
        shape: LayerShape::Triangle([(32, 20), (34, 16), (36, 20)]),
        role: ColorRole::PointsDark,
        alpha: OPAQUE,
    },
];

/// Paint `layers` in order onto a fresh transparent canvas.
///
/// # Errors
///
/// Returns `ColorError` if a palette entry used by a layer is not a valid
/// hex color.
pub fn compose(
    width: u32,
    height: u32,
    palette: &Palette,
    layers: &[Layer],
) -> Result<RgbaImage, ColorError> {
    let mut canvas = Canvas::new(width, height);
    for layer in layers {
        let color = with_alpha(palette.rgba(layer.role)?, layer.alpha);
        let written = canvas.paint(&layer.shape.to_shape(), color);
        tracing::debug!(layer = layer.name, role = %layer.role, pixels = written, "painted layer");
    }
    Ok(canvas.into_image())
}

/// Draw the basic idle_01 pose for `config`.
pub fn draw_idle_demo(config: &GeneratorConfig) -> Result<RgbaImage, ColorError> {
    let [width, height] = config.canvas_size;
    compose(width, height, &config.palette, &IDLE_DEMO_LAYERS)
}
