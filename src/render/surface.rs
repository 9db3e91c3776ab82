use std::collections::BTreeMap;

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::region::ResolvedGeometry,
    render::chart::ChartKind,
    render::text::TextRun,
    spec::model::{RegionName, Series},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A target surface populated with positioned primitives.
///
/// Coordinates are authoritative in inches; a downstream serializer derives
/// pixel or point forms through [`crate::foundation::units`].
pub struct Surface {
    /// Surface width in inches.
    pub width_in: f64,
    /// Surface height in inches.
    pub height_in: f64,
    /// Placed primitives in paint order.
    pub primitives: Vec<Placed>,
}

impl Surface {
    /// Create an empty surface sized to the resolved slide.
    pub fn new(geometry: &ResolvedGeometry) -> Self {
        Self {
            width_in: geometry.slide_width_in,
            height_in: geometry.slide_height_in,
            primitives: Vec::new(),
        }
    }

    /// Append a placed primitive.
    pub fn push(&mut self, placed: Placed) {
        self.primitives.push(placed);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// One primitive positioned on the surface.
pub struct Placed {
    /// Identifier of the content element this primitive renders, if any.
    pub element_id: Option<String>,
    /// Region the primitive was placed into, if any.
    pub region: Option<RegionName>,
    /// Absolute frame in inches.
    pub frame_in: Rect,
    /// Paint order; higher draws later.
    pub z: i32,
    /// The primitive payload.
    pub primitive: Primitive,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Positioned primitive kinds emitted by renderer strategies.
pub enum Primitive {
    /// Styled text runs.
    Text(TextBlock),
    /// A filled panel or card background.
    Panel(Panel),
    /// An image frame; pixels are fetched downstream.
    Image(ImageFrame),
    /// A tabular grid.
    Table(TableGrid),
    /// A chart plot area.
    Chart(ChartPlot),
    /// A labeled placeholder box for degraded content.
    Placeholder(Placeholder),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center within the frame.
    Center,
    /// Align to the right edge.
    Right,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A block of styled text runs sharing one frame.
pub struct TextBlock {
    /// Ordered runs; concatenation is the full block text.
    pub runs: Vec<TextRun>,
    /// Font size in points.
    pub size_pt: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Text color as `#RRGGBB` hex.
    pub color: String,
    /// Font family name.
    pub font_family: String,
    /// Whether the whole block renders bold.
    pub bold: bool,
    /// Horizontal alignment within the frame.
    pub align: TextAlign,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A filled rectangle with optional rounded corners.
pub struct Panel {
    /// Fill color as `#RRGGBB` hex.
    pub fill: String,
    /// Corner radius in pixels.
    pub corner_radius_px: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// An image placeholder frame.
pub struct ImageFrame {
    /// Alternative text.
    pub alt: String,
    /// Optional upstream provider hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hint: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A table rendered as a grid of cells.
pub struct TableGrid {
    /// Column headers.
    pub headers: Vec<String>,
    /// Body rows.
    pub rows: Vec<Vec<String>>,
    /// Header row fill color.
    pub header_fill: String,
    /// Cell text size in points.
    pub text_size_pt: f64,
    /// Cell text color.
    pub text_color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A chart plot area.
pub struct ChartPlot {
    /// Chart kind.
    pub kind: ChartKind,
    /// Category labels.
    pub labels: Vec<String>,
    /// Data series.
    pub series: Vec<Series>,
    /// Accent color for the primary series.
    pub accent: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A labeled placeholder box standing in for degraded content.
pub struct Placeholder {
    /// Human-readable label describing what was degraded.
    pub label: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// Per-element presentation hints returned alongside the surface.
///
/// Hints are an explicit side table keyed by element identifier, not
/// metadata bolted onto placed primitives, so downstream consumers can
/// ignore them wholesale.
pub struct ElementHints {
    /// Suggested entrance order for staged reveal.
    pub appear_order: u32,
    /// Emphasis color applied to accent runs, if any matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_color: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A completed render artifact: the surface plus the hint side table.
pub struct BuildArtifact {
    /// The populated surface.
    pub surface: Surface,
    /// Presentation hints keyed by content element id.
    pub hints: BTreeMap<String, ElementHints>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
