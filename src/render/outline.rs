use std::collections::BTreeMap;

use kurbo::Rect;

use crate::{
    foundation::error::DecklineResult,
    geometry::region::ResolvedGeometry,
    render::chart::chart_kind_or_default,
    render::strategy::{RenderStrategy, plan_regions, text_height_in, wrapped_line_count},
    render::surface::{
        BuildArtifact, ElementHints, Placed, Placeholder, Primitive, Surface, TextAlign, TextBlock,
    },
    render::text::TextRun,
    spec::model::{ContentElement, SlideSpec},
};

const SIZE_PT: f64 = 12.0;
const LINE_HEIGHT: f64 = 1.25;
const TEXT_COLOR: &str = "#111111";
const FONT_FAMILY: &str = "Inter";
const PAD_IN: f64 = 0.06;

/// The context-free last tier.
///
/// Ignores the declared style tokens entirely and stacks plain text blocks
/// with built-in defaults, degrading tables, charts and images to labeled
/// placeholder boxes. Every frame is clamped into its region rectangle, so
/// this strategy is total: it cannot fail for any structurally valid
/// specification, which is what guarantees the orchestrator always returns
/// a usable artifact.
pub struct OutlineStrategy;

impl RenderStrategy for OutlineStrategy {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn render(
        &self,
        spec: &SlideSpec,
        geometry: &ResolvedGeometry,
    ) -> DecklineResult<BuildArtifact> {
        let mut surface = Surface::new(geometry);
        let mut hints = BTreeMap::new();
        let mut z = 0i32;
        let mut appear = 0u32;

        for plan in plan_regions(spec, geometry) {
            let pad = PAD_IN
                .min(plan.rect.width() * 0.25)
                .min(plan.rect.height() * 0.25)
                .max(0.0);
            let inner = plan.rect.inset(-pad);
            let mut cursor = inner.y0;

            for element in plan.elements {
                let (text, primitive) = degrade(element);
                let ideal = match &primitive {
                    Some(_) => 0.4,
                    None => text_height_in(
                        wrapped_line_count(&text, SIZE_PT, inner.width().max(0.1)),
                        SIZE_PT,
                        LINE_HEIGHT,
                    ),
                };

                // Clamp into the region; a crowded region yields degenerate
                // frames at the bottom edge, never a frame outside it.
                let y0 = cursor.clamp(inner.y0, inner.y1);
                let y1 = (cursor + ideal).clamp(inner.y0, inner.y1);
                let frame = Rect::new(inner.x0, y0, inner.x1, y1);

                surface.push(Placed {
                    element_id: Some(element.id().to_string()),
                    region: Some(plan.name),
                    frame_in: frame,
                    z,
                    primitive: primitive.unwrap_or_else(|| {
                        Primitive::Text(TextBlock {
                            runs: vec![TextRun {
                                text,
                                emphasized: false,
                            }],
                            size_pt: SIZE_PT,
                            line_height: LINE_HEIGHT,
                            color: TEXT_COLOR.to_string(),
                            font_family: FONT_FAMILY.to_string(),
                            bold: matches!(element, ContentElement::Title(_)),
                            align: TextAlign::Left,
                        })
                    }),
                });
                z += 1;

                hints.insert(
                    element.id().to_string(),
                    ElementHints {
                        appear_order: appear,
                        emphasis_color: None,
                    },
                );
                appear += 1;
                cursor = y1 + PAD_IN * 0.5;
            }
        }

        Ok(BuildArtifact { surface, hints })
    }
}

/// Reduce an element to plain text, or to a labeled placeholder for content
/// that has no meaningful text-only form.
fn degrade(element: &ContentElement) -> (String, Option<Primitive>) {
    match element {
        ContentElement::Title(e) => (e.text.clone(), None),
        ContentElement::Subtitle(e) => (e.text.clone(), None),
        ContentElement::BulletGroup(e) => {
            let joined = e
                .bullets
                .iter()
                .map(|b| format!("\u{2022} {}", b.text))
                .collect::<Vec<_>>()
                .join("  ");
            (joined, None)
        }
        ContentElement::Callout(e) => (format!("{}: {}", e.title, e.body), None),
        ContentElement::Table(e) => {
            let label = format!(
                "table {}\u{d7}{}: {}",
                e.rows.len(),
                e.headers.len(),
                e.headers.join(", ")
            );
            (String::new(), Some(Primitive::Placeholder(Placeholder { label })))
        }
        ContentElement::Chart(e) => {
            let label = format!(
                "{}, {} series",
                chart_kind_or_default(&e.chart_kind).label(),
                e.series.len()
            );
            (String::new(), Some(Primitive::Placeholder(Placeholder { label })))
        }
        ContentElement::Image(e) => {
            let label = format!("image: {}", e.alt);
            (String::new(), Some(Primitive::Placeholder(Placeholder { label })))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/outline.rs"]
mod tests;
