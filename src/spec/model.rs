use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A complete declarative slide specification.
///
/// A spec is a pure data model authored upstream (typically as JSON) and
/// consumed read-only by this engine. It is never mutated in place: the
/// validator, geometry resolvers and renderer strategies all borrow it for
/// the duration of one build call and retain nothing afterwards.
///
/// Building a positioned artifact from a spec is performed by
/// [`crate::TieredBuilder::build`].
pub struct SlideSpec {
    /// Slide-level metadata (locale, theme, aspect ratio).
    pub meta: Meta,
    /// Content elements, each a tagged variant with a stable identifier.
    pub content: Vec<ContentElement>,
    /// Grid, named regions and content anchors.
    pub layout: Layout,
    /// Style token set; missing sections fall back to built-in defaults.
    #[serde(default)]
    pub style: StyleTokens,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Slide-level metadata.
pub struct Meta {
    /// BCP-47-ish locale tag for the slide content.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Theme name for authoring/debugging; carries no layout semantics.
    #[serde(default)]
    pub theme: String,
    /// Slide aspect ratio, which fixes the slide dimensions in inches.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Supported slide aspect ratios.
pub enum AspectRatio {
    /// 16:9 widescreen, 10in x 5.625in.
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// 4:3 standard, 10in x 7.5in.
    #[serde(rename = "4:3")]
    Standard,
}

impl AspectRatio {
    /// Slide width in inches.
    pub fn slide_width_in(self) -> f64 {
        10.0
    }

    /// Slide height in inches.
    pub fn slide_height_in(self) -> f64 {
        match self {
            AspectRatio::Widescreen => 5.625,
            AspectRatio::Standard => 7.5,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A content element of the slide.
///
/// Elements form a closed tagged union; each variant carries a stable `id`
/// that anchors reference. Unknown kinds are rejected at deserialization,
/// so downstream code never checks element shape ad hoc.
pub enum ContentElement {
    /// Slide title.
    Title(TitleElement),
    /// Optional subtitle under the title.
    Subtitle(SubtitleElement),
    /// A group of bullet points.
    BulletGroup(BulletGroupElement),
    /// A highlighted callout card.
    Callout(CalloutElement),
    /// A data table.
    Table(TableElement),
    /// A chart described by labels and series.
    Chart(ChartElement),
    /// An image placeholder.
    Image(ImageElement),
}

impl ContentElement {
    /// Stable identifier of this element.
    pub fn id(&self) -> &str {
        match self {
            ContentElement::Title(e) => &e.id,
            ContentElement::Subtitle(e) => &e.id,
            ContentElement::BulletGroup(e) => &e.id,
            ContentElement::Callout(e) => &e.id,
            ContentElement::Table(e) => &e.id,
            ContentElement::Chart(e) => &e.id,
            ContentElement::Image(e) => &e.id,
        }
    }

    /// Canonical kind name, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentElement::Title(_) => "title",
            ContentElement::Subtitle(_) => "subtitle",
            ContentElement::BulletGroup(_) => "bullet_group",
            ContentElement::Callout(_) => "callout",
            ContentElement::Table(_) => "table",
            ContentElement::Chart(_) => "chart",
            ContentElement::Image(_) => "image",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Slide title text.
pub struct TitleElement {
    /// Stable element identifier.
    pub id: String,
    /// Title text.
    pub text: String,
    /// Words to render with accent emphasis (case-insensitive, word-boundary).
    #[serde(default)]
    pub accent_words: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Subtitle text.
pub struct SubtitleElement {
    /// Stable element identifier.
    pub id: String,
    /// Subtitle text.
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A group of bullet points rendered as one block.
pub struct BulletGroupElement {
    /// Stable element identifier.
    pub id: String,
    /// Bullets in display order.
    pub bullets: Vec<Bullet>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// One bullet point.
pub struct Bullet {
    /// Bullet text.
    pub text: String,
    /// Words to render with accent emphasis.
    #[serde(default)]
    pub accent_words: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A highlighted callout card with a short title and body.
pub struct CalloutElement {
    /// Stable element identifier.
    pub id: String,
    /// Callout heading.
    pub title: String,
    /// Callout body text.
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A data table with a header row.
pub struct TableElement {
    /// Stable element identifier.
    pub id: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Body rows; each row should have one cell per header.
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A chart described declaratively by labels and series.
pub struct ChartElement {
    /// Stable element identifier.
    pub id: String,
    /// Chart kind identifier, parsed at the render boundary (`bar`, `line`, `pie`).
    pub chart_kind: String,
    /// Category labels along the primary axis.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Data series.
    #[serde(default)]
    pub series: Vec<Series>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// One named data series of a chart.
pub struct Series {
    /// Series name for the legend.
    pub name: String,
    /// One value per category label.
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// An image placeholder; the engine positions a frame, it never fetches pixels.
pub struct ImageElement {
    /// Stable element identifier.
    pub id: String,
    /// Alternative text describing the image.
    pub alt: String,
    /// Optional hint for the upstream image provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hint: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Grid, regions and anchors for one slide.
pub struct Layout {
    /// Grid configuration.
    pub grid: Grid,
    /// Declared regions; names are drawn from a closed set.
    pub regions: Vec<Region>,
    /// Bindings of content elements into regions.
    #[serde(default)]
    pub anchors: Vec<Anchor>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Grid configuration in pixels.
pub struct Grid {
    /// Row count; must be >= 1.
    pub rows: u32,
    /// Column count; must be >= 1.
    pub cols: u32,
    /// Gutter between cells in pixels; must be >= 0.
    #[serde(default = "default_gutter_px")]
    pub gutter_px: f64,
    /// Outer margins in pixels.
    #[serde(default)]
    pub margins_px: Edges,
}

fn default_gutter_px() -> f64 {
    8.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Edge values in pixels.
pub struct Edges {
    /// Left edge.
    #[serde(default)]
    pub left: f64,
    /// Right edge.
    #[serde(default)]
    pub right: f64,
    /// Top edge.
    #[serde(default)]
    pub top: f64,
    /// Bottom edge.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Uniform edges.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Closed set of region names.
pub enum RegionName {
    /// Top banner region.
    Header,
    /// Main content region.
    Body,
    /// Bottom strip region.
    Footer,
    /// Side column region.
    Aside,
}

impl std::fmt::Display for RegionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RegionName::Header => "header",
            RegionName::Body => "body",
            RegionName::Footer => "footer",
            RegionName::Aside => "aside",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
/// A named rectangular zone of the grid, in 1-indexed cell coordinates.
pub struct Region {
    /// Region name.
    pub name: RegionName,
    /// First row occupied (1-indexed).
    pub row_start: u32,
    /// First column occupied (1-indexed).
    pub col_start: u32,
    /// Number of rows spanned; must be >= 1.
    pub row_span: u32,
    /// Number of columns spanned; must be >= 1.
    pub col_span: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Binding of one content element into one region.
pub struct Anchor {
    /// Identifier of the bound content element.
    pub ref_id: String,
    /// Target region name; must match a declared region.
    pub region: RegionName,
    /// Ordering key within the region; ties preserve declaration order.
    #[serde(default)]
    pub order: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Style token set for one slide.
pub struct StyleTokens {
    /// Color palette.
    pub palette: Palette,
    /// Typography scale.
    pub typography: Typography,
    /// Spacing tokens.
    pub spacing: Spacing,
    /// Corner radius tokens.
    pub radii: Radii,
    /// Contrast requirements.
    pub contrast: Contrast,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            typography: Typography::default(),
            spacing: Spacing::default(),
            radii: Radii::default(),
            contrast: Contrast::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Color palette as `#RRGGBB` hex strings.
pub struct Palette {
    /// Primary brand color.
    pub primary: String,
    /// Accent color used for emphasis.
    pub accent: String,
    /// Slide background color.
    pub background: String,
    /// Card/panel surface color.
    pub surface: String,
    /// Default text color.
    pub text_color: String,
    /// Neutral scale from lightest to darkest.
    pub neutrals: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#2563EB".to_string(),
            accent: "#F59E0B".to_string(),
            background: "#FFFFFF".to_string(),
            surface: "#F8FAFC".to_string(),
            text_color: "#0F172A".to_string(),
            neutrals: vec![
                "#F8FAFC".to_string(),
                "#E2E8F0".to_string(),
                "#94A3B8".to_string(),
                "#475569".to_string(),
                "#0F172A".to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Typography scale in points.
pub struct Typography {
    /// Font family name.
    pub font_family: String,
    /// Title size in points.
    pub title_size_pt: f64,
    /// Subtitle size in points.
    pub subtitle_size_pt: f64,
    /// Body size in points.
    pub body_size_pt: f64,
    /// Caption size in points.
    pub caption_size_pt: f64,
    /// Whether accent runs render bold.
    pub accent_bold: bool,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            title_size_pt: 36.0,
            subtitle_size_pt: 20.0,
            body_size_pt: 14.0,
            caption_size_pt: 11.0,
            accent_bold: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Spacing tokens in pixels.
pub struct Spacing {
    /// Inner padding applied inside each region.
    pub region_pad_px: f64,
    /// Vertical gap between stacked items.
    pub item_gap_px: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            region_pad_px: 12.0,
            item_gap_px: 8.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Corner radius tokens in pixels.
pub struct Radii {
    /// Radius for cards and panels.
    pub card_px: f64,
}

impl Default for Radii {
    fn default() -> Self {
        Self { card_px: 8.0 }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Contrast requirements checked by the validator.
pub struct Contrast {
    /// Minimum text/background contrast ratio.
    pub min_ratio: f64,
}

impl Default for Contrast {
    fn default() -> Self {
        Self { min_ratio: 4.5 }
    }
}

impl SlideSpec {
    /// Look up a content element by its stable identifier.
    pub fn element_by_id(&self, id: &str) -> Option<&ContentElement> {
        self.content.iter().find(|e| e.id() == id)
    }

    /// Look up a declared region by name.
    pub fn region_by_name(&self, name: RegionName) -> Option<&Region> {
        self.layout.regions.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/model.rs"]
mod tests;
