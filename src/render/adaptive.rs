use std::collections::BTreeMap;

use kurbo::Rect;

use crate::{
    foundation::error::{DecklineError, DecklineResult},
    foundation::units::{pt_to_in, px_to_in},
    geometry::region::ResolvedGeometry,
    render::chart::chart_kind_or_default,
    render::strategy::{
        EPS_IN, RenderStrategy, plan_regions, text_height_in, wrapped_line_count,
    },
    render::surface::{
        BuildArtifact, ChartPlot, ElementHints, ImageFrame, Placed, Primitive, Surface, TableGrid,
        TextAlign, TextBlock,
    },
    render::text::{TextRun, highlight_accent_words},
    spec::model::{ContentElement, RegionName, Series, SlideSpec, StyleTokens},
    spec::validate::parse_hex_rgb,
};

/// Smallest font size the adaptive tier will shrink to, in points.
const MIN_SIZE_PT: f64 = 8.0;

/// The middle tier: substitutes professional defaults where the declared
/// tokens are malformed or sparse, shrinks type to fit, and truncates
/// overflowing content with a visible ellipsis marker rather than failing.
///
/// It raises only when a region is too small to hold even a single line at
/// the minimum size.
pub struct AdaptiveStrategy;

impl RenderStrategy for AdaptiveStrategy {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn render(
        &self,
        spec: &SlideSpec,
        geometry: &ResolvedGeometry,
    ) -> DecklineResult<BuildArtifact> {
        let style = sanitize_style(&spec.style);
        let mut surface = Surface::new(geometry);
        let mut hints = BTreeMap::new();
        let mut z = 0i32;
        let mut appear = 0u32;

        for plan in plan_regions(spec, geometry) {
            // Padding shrinks to fit rather than exhausting a small region.
            let pad_in = px_to_in(style.spacing.region_pad_px)
                .min(plan.rect.width() * 0.1)
                .min(plan.rect.height() * 0.1)
                .max(0.0);
            let inner = plan.rect.inset(-pad_in);
            let min_line_in = text_height_in(1, MIN_SIZE_PT, 1.2);
            if inner.height() + EPS_IN < min_line_in || inner.width() <= EPS_IN {
                return Err(DecklineError::render(format!(
                    "region '{}' is too small to hold a single line of text",
                    plan.name
                )));
            }

            let gap_in = px_to_in(style.spacing.item_gap_px).max(0.0);
            let mut cursor = inner.y0;
            for element in plan.elements {
                let remaining = (inner.y1 - cursor).max(0.0);
                let (consumed, emphasis) = emit_fitted(
                    &mut surface,
                    &mut z,
                    &style,
                    element,
                    plan.name,
                    inner,
                    cursor,
                    remaining,
                );
                hints.entry(element.id().to_string()).or_insert_with(|| {
                    let order = appear;
                    appear += 1;
                    ElementHints {
                        appear_order: order,
                        emphasis_color: emphasis,
                    }
                });
                cursor += consumed + gap_in;
            }
        }

        Ok(BuildArtifact { surface, hints })
    }
}

/// Replace malformed tokens with the built-in defaults, field by field.
fn sanitize_style(style: &StyleTokens) -> StyleTokens {
    let defaults = StyleTokens::default();
    let mut out = style.clone();

    for (value, fallback) in [
        (&mut out.palette.primary, &defaults.palette.primary),
        (&mut out.palette.accent, &defaults.palette.accent),
        (&mut out.palette.background, &defaults.palette.background),
        (&mut out.palette.surface, &defaults.palette.surface),
        (&mut out.palette.text_color, &defaults.palette.text_color),
    ] {
        if parse_hex_rgb(value).is_none() {
            *value = fallback.clone();
        }
    }
    if out.palette.neutrals.iter().any(|n| parse_hex_rgb(n).is_none()) {
        out.palette.neutrals = defaults.palette.neutrals.clone();
    }

    for (value, fallback) in [
        (
            &mut out.typography.title_size_pt,
            defaults.typography.title_size_pt,
        ),
        (
            &mut out.typography.subtitle_size_pt,
            defaults.typography.subtitle_size_pt,
        ),
        (
            &mut out.typography.body_size_pt,
            defaults.typography.body_size_pt,
        ),
        (
            &mut out.typography.caption_size_pt,
            defaults.typography.caption_size_pt,
        ),
    ] {
        if !value.is_finite() || *value <= 0.0 {
            *value = fallback;
        }
    }
    if out.typography.title_size_pt <= out.typography.body_size_pt {
        out.typography = defaults.typography.clone();
    }

    if !out.spacing.region_pad_px.is_finite() || out.spacing.region_pad_px < 0.0 {
        out.spacing.region_pad_px = defaults.spacing.region_pad_px;
    }
    if !out.spacing.item_gap_px.is_finite() || out.spacing.item_gap_px < 0.0 {
        out.spacing.item_gap_px = defaults.spacing.item_gap_px;
    }

    out
}

/// Render one element into whatever vertical space remains, degrading as
/// needed. Returns the height consumed and an optional emphasis color hint.
#[allow(clippy::too_many_arguments)]
fn emit_fitted(
    surface: &mut Surface,
    z: &mut i32,
    style: &StyleTokens,
    element: &ContentElement,
    region: RegionName,
    inner: Rect,
    cursor: f64,
    remaining: f64,
) -> (f64, Option<String>) {
    match element {
        ContentElement::Title(e) => {
            let runs = highlight_accent_words(&e.text, &e.accent_words);
            let emphasis = runs
                .iter()
                .any(|r| r.emphasized)
                .then(|| style.palette.accent.clone());
            let h = fitted_text(
                surface,
                z,
                style,
                &e.id,
                region,
                inner,
                cursor,
                remaining,
                runs,
                style.typography.title_size_pt,
                1.15,
                style.palette.primary.clone(),
                true,
            );
            (h, emphasis)
        }
        ContentElement::Subtitle(e) => {
            let runs = vec![TextRun {
                text: e.text.clone(),
                emphasized: false,
            }];
            let h = fitted_text(
                surface,
                z,
                style,
                &e.id,
                region,
                inner,
                cursor,
                remaining,
                runs,
                style.typography.subtitle_size_pt,
                1.2,
                style.palette.text_color.clone(),
                false,
            );
            (h, None)
        }
        ContentElement::BulletGroup(e) => {
            let mut consumed = 0.0;
            let mut emphasis = None;
            let line_h = |size: f64, text: &str| {
                text_height_in(wrapped_line_count(text, size, inner.width()), size, 1.3)
            };
            let size = style.typography.body_size_pt;
            for (idx, bullet) in e.bullets.iter().enumerate() {
                let text = format!("\u{2022} {}", bullet.text);
                let needed = line_h(size, &text);
                let left = remaining - consumed;
                if needed > left {
                    // Out of space: a visible ellipsis marker replaces the
                    // remaining bullets instead of dropping them silently.
                    // Always emitted, so the group keeps a primitive even in
                    // a full region.
                    let marker_h = line_h(size, "\u{2022} \u{2026}").min(left.max(0.0));
                    push_text(
                        surface,
                        z,
                        &e.id,
                        region,
                        clamped_frame(inner, cursor + consumed, cursor + consumed + marker_h),
                        vec![TextRun {
                            text: "\u{2022} \u{2026}".to_string(),
                            emphasized: false,
                        }],
                        size,
                        1.3,
                        style.palette.text_color.clone(),
                        &style.typography.font_family,
                        false,
                    );
                    consumed += marker_h;
                    break;
                }
                let runs = highlight_accent_words(&text, &bullet.accent_words);
                if emphasis.is_none() && runs.iter().any(|r| r.emphasized) {
                    emphasis = Some(style.palette.accent.clone());
                }
                push_text(
                    surface,
                    z,
                    &e.id,
                    region,
                    Rect::new(inner.x0, cursor + consumed, inner.x1, cursor + consumed + needed),
                    runs,
                    size,
                    1.3,
                    style.palette.text_color.clone(),
                    &style.typography.font_family,
                    false,
                );
                consumed += needed;
                if idx + 1 < e.bullets.len() {
                    consumed += px_to_in(style.spacing.item_gap_px) * 0.5;
                }
            }
            (consumed.min(remaining), emphasis)
        }
        ContentElement::Callout(e) => {
            // Degrade the card into a compact two-line text block.
            let text = format!("{} \u{2014} {}", e.title, e.body);
            let runs = vec![TextRun {
                text,
                emphasized: false,
            }];
            let h = fitted_text(
                surface,
                z,
                style,
                &e.id,
                region,
                inner,
                cursor,
                remaining,
                runs,
                style.typography.body_size_pt,
                1.3,
                style.palette.text_color.clone(),
                false,
            );
            (h, None)
        }
        ContentElement::Table(e) => {
            let headers = if e.headers.is_empty() {
                vec![String::new()]
            } else {
                e.headers.clone()
            };
            let width = headers.len();
            let row_h = pt_to_in(style.typography.body_size_pt * 1.8);
            let max_rows = ((remaining / row_h).floor() as usize).saturating_sub(1);
            let mut rows: Vec<Vec<String>> = e
                .rows
                .iter()
                .take(max_rows)
                .map(|row| normalize_row(row, width))
                .collect();
            let truncated = rows.len() < e.rows.len();
            if truncated && !rows.is_empty() {
                let last = rows.len() - 1;
                rows[last] = vec!["\u{2026}".to_string(); width];
            }
            let height = (row_h * (rows.len() + 1) as f64).min(remaining).max(0.0);
            let frame = clamped_frame(inner, cursor, cursor + height);
            push(
                surface,
                z,
                &e.id,
                region,
                frame,
                Primitive::Table(TableGrid {
                    headers,
                    rows,
                    header_fill: style.palette.primary.clone(),
                    text_size_pt: style.typography.body_size_pt,
                    text_color: style.palette.text_color.clone(),
                }),
            );
            (height, None)
        }
        ContentElement::Chart(e) => {
            let kind = chart_kind_or_default(&e.chart_kind);
            let series: Vec<Series> = e
                .series
                .iter()
                .map(|s| Series {
                    name: s.name.clone(),
                    values: normalize_values(&s.values, e.labels.len()),
                })
                .collect();
            let height = remaining.max(0.0);
            let frame = clamped_frame(inner, cursor, cursor + height);
            push(
                surface,
                z,
                &e.id,
                region,
                frame,
                Primitive::Chart(ChartPlot {
                    kind,
                    labels: e.labels.clone(),
                    series,
                    accent: style.palette.accent.clone(),
                }),
            );
            (height, None)
        }
        ContentElement::Image(e) => {
            let height = remaining.max(0.0);
            let frame = clamped_frame(inner, cursor, cursor + height);
            push(
                surface,
                z,
                &e.id,
                region,
                frame,
                Primitive::Image(ImageFrame {
                    alt: e.alt.clone(),
                    source_hint: e.source_hint.clone(),
                }),
            );
            (height, None)
        }
    }
}

/// Place a text block, shrinking the font until it fits `remaining` and
/// truncating with an ellipsis if the minimum size is still too tall.
#[allow(clippy::too_many_arguments)]
fn fitted_text(
    surface: &mut Surface,
    z: &mut i32,
    style: &StyleTokens,
    id: &str,
    region: RegionName,
    inner: Rect,
    cursor: f64,
    remaining: f64,
    runs: Vec<TextRun>,
    base_size_pt: f64,
    line_height: f64,
    color: String,
    bold: bool,
) -> f64 {
    let full_text: String = runs.iter().map(|r| r.text.as_str()).collect();

    let mut size = base_size_pt;
    let mut height;
    loop {
        let lines = wrapped_line_count(&full_text, size, inner.width());
        height = text_height_in(lines, size, line_height);
        if height <= remaining || size <= MIN_SIZE_PT {
            break;
        }
        size = (size * 0.85).max(MIN_SIZE_PT);
    }

    let (final_runs, final_height) = if height <= remaining {
        (runs, height)
    } else {
        // Even the minimum size is too tall: truncate to the lines that fit.
        let line_in = text_height_in(1, size, line_height);
        let max_lines = ((remaining / line_in).floor() as usize).max(1);
        let per_line = full_text.chars().count().max(1)
            / wrapped_line_count(&full_text, size, inner.width()).max(1);
        let keep = per_line.max(1) * max_lines;
        let truncated: String = full_text.chars().take(keep.saturating_sub(1)).collect();
        (
            vec![TextRun {
                text: format!("{truncated}\u{2026}"),
                emphasized: false,
            }],
            (line_in * max_lines as f64).min(remaining),
        )
    };

    // Pushed even at zero height: a full region yields a degenerate frame
    // at the bottom edge, never a missing primitive.
    push_text(
        surface,
        z,
        id,
        region,
        clamped_frame(inner, cursor, cursor + final_height),
        final_runs,
        size,
        line_height,
        color,
        &style.typography.font_family,
        bold,
    );
    final_height
}

/// Vertical extent clamped into the region's inner rect. Crowded regions
/// yield degenerate frames at the bottom edge, never an escaping frame.
fn clamped_frame(inner: Rect, y0: f64, y1: f64) -> Rect {
    let top = y0.clamp(inner.y0, inner.y1);
    let bottom = y1.clamp(top, inner.y1);
    Rect::new(inner.x0, top, inner.x1, bottom)
}

fn normalize_row(row: &[String], width: usize) -> Vec<String> {
    let mut out: Vec<String> = row.iter().take(width).cloned().collect();
    out.resize(width, String::new());
    out
}

fn normalize_values(values: &[f64], len: usize) -> Vec<f64> {
    let mut out: Vec<f64> = values.iter().take(len).copied().collect();
    out.resize(len, 0.0);
    out
}

fn push(
    surface: &mut Surface,
    z: &mut i32,
    id: &str,
    region: RegionName,
    frame: Rect,
    primitive: Primitive,
) {
    surface.push(Placed {
        element_id: Some(id.to_string()),
        region: Some(region),
        frame_in: frame,
        z: *z,
        primitive,
    });
    *z += 1;
}

#[allow(clippy::too_many_arguments)]
fn push_text(
    surface: &mut Surface,
    z: &mut i32,
    id: &str,
    region: RegionName,
    frame: Rect,
    runs: Vec<TextRun>,
    size_pt: f64,
    line_height: f64,
    color: String,
    font_family: &str,
    bold: bool,
) {
    push(
        surface,
        z,
        id,
        region,
        frame,
        Primitive::Text(TextBlock {
            runs,
            size_pt,
            line_height,
            color,
            font_family: font_family.to_string(),
            bold,
            align: TextAlign::Left,
        }),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/adaptive.rs"]
mod tests;
