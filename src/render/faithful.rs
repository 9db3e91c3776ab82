use std::collections::BTreeMap;

use kurbo::Rect;

use crate::{
    foundation::error::{DecklineError, DecklineResult},
    foundation::units::{pt_to_in, px_to_in},
    geometry::region::ResolvedGeometry,
    render::chart::parse_chart_kind,
    render::strategy::{
        EPS_IN, RenderStrategy, plan_regions, text_height_in, wrapped_line_count,
    },
    render::surface::{
        BuildArtifact, ChartPlot, ElementHints, ImageFrame, Panel, Placed, Primitive, Surface,
        TableGrid, TextAlign, TextBlock,
    },
    render::text::{TextRun, highlight_accent_words},
    spec::model::{ContentElement, RegionName, SlideSpec, StyleTokens},
    spec::validate::parse_hex_rgb,
};

/// The most spec-literal tier.
///
/// Every declared style token is honored verbatim, and nothing is guessed:
/// malformed colors, ragged tables, unknown chart kinds and content that
/// overflows its region are all render failures handed back to the
/// orchestrator for the next tier to absorb.
pub struct FaithfulStrategy;

impl RenderStrategy for FaithfulStrategy {
    fn name(&self) -> &'static str {
        "faithful"
    }

    fn render(
        &self,
        spec: &SlideSpec,
        geometry: &ResolvedGeometry,
    ) -> DecklineResult<BuildArtifact> {
        require_valid_tokens(&spec.style)?;

        let mut pass = Pass {
            style: &spec.style,
            surface: Surface::new(geometry),
            hints: BTreeMap::new(),
            z: 0,
            appear: 0,
        };

        let pad_in = px_to_in(spec.style.spacing.region_pad_px);
        let gap_in = px_to_in(spec.style.spacing.item_gap_px);

        for plan in plan_regions(spec, geometry) {
            let inner = plan.rect.inset(-pad_in);
            if inner.width() <= EPS_IN || inner.height() <= EPS_IN {
                return Err(DecklineError::render(format!(
                    "region padding leaves no usable space in region '{}'",
                    plan.name
                )));
            }
            let mut cursor = inner.y0;
            for element in plan.elements {
                let consumed = pass.emit(element, plan.name, inner, cursor)?;
                cursor += consumed + gap_in;
            }
        }

        Ok(BuildArtifact {
            surface: pass.surface,
            hints: pass.hints,
        })
    }
}

fn require_valid_tokens(style: &StyleTokens) -> DecklineResult<()> {
    let palette = &style.palette;
    for (name, value) in [
        ("primary", &palette.primary),
        ("accent", &palette.accent),
        ("background", &palette.background),
        ("surface", &palette.surface),
        ("text_color", &palette.text_color),
    ] {
        if parse_hex_rgb(value).is_none() {
            return Err(DecklineError::render(format!(
                "palette.{name} '{value}' is not #RRGGBB hex"
            )));
        }
    }
    let typo = &style.typography;
    for (name, value) in [
        ("title_size_pt", typo.title_size_pt),
        ("subtitle_size_pt", typo.subtitle_size_pt),
        ("body_size_pt", typo.body_size_pt),
        ("caption_size_pt", typo.caption_size_pt),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(DecklineError::render(format!(
                "typography.{name} must be finite and > 0"
            )));
        }
    }
    Ok(())
}

struct Pass<'a> {
    style: &'a StyleTokens,
    surface: Surface,
    hints: BTreeMap<String, ElementHints>,
    z: i32,
    appear: u32,
}

impl Pass<'_> {
    /// Render one element at `cursor` inside `inner`, returning the height
    /// consumed. Overflow past the region's inner rect is an error, never a
    /// silent clamp.
    fn emit(
        &mut self,
        element: &ContentElement,
        region: RegionName,
        inner: Rect,
        cursor: f64,
    ) -> DecklineResult<f64> {
        match element {
            ContentElement::Title(e) => {
                let runs = highlight_accent_words(&e.text, &e.accent_words);
                self.hint(&e.id, &runs);
                self.text_block(
                    &e.id,
                    region,
                    inner,
                    cursor,
                    runs,
                    self.style.typography.title_size_pt,
                    1.15,
                    self.style.palette.primary.clone(),
                    true,
                )
            }
            ContentElement::Subtitle(e) => {
                let runs = vec![TextRun {
                    text: e.text.clone(),
                    emphasized: false,
                }];
                self.hint(&e.id, &runs);
                let color = self
                    .style
                    .palette
                    .neutrals
                    .get(3)
                    .cloned()
                    .unwrap_or_else(|| self.style.palette.text_color.clone());
                self.text_block(
                    &e.id,
                    region,
                    inner,
                    cursor,
                    runs,
                    self.style.typography.subtitle_size_pt,
                    1.2,
                    color,
                    false,
                )
            }
            ContentElement::BulletGroup(e) => {
                let gap_in = px_to_in(self.style.spacing.item_gap_px) * 0.5;
                let mut consumed = 0.0;
                let mut any_emphasis = false;
                for (idx, bullet) in e.bullets.iter().enumerate() {
                    let text = format!("\u{2022} {}", bullet.text);
                    let runs = highlight_accent_words(&text, &bullet.accent_words);
                    any_emphasis |= runs.iter().any(|r| r.emphasized);
                    let h = self.text_block(
                        &e.id,
                        region,
                        inner,
                        cursor + consumed,
                        runs,
                        self.style.typography.body_size_pt,
                        1.3,
                        self.style.palette.text_color.clone(),
                        false,
                    )?;
                    consumed += h;
                    if idx + 1 < e.bullets.len() {
                        consumed += gap_in;
                    }
                }
                let emphasis = any_emphasis.then(|| self.style.palette.accent.clone());
                self.record_hint(&e.id, emphasis);
                Ok(consumed)
            }
            ContentElement::Callout(e) => self.callout(e, region, inner, cursor),
            ContentElement::Table(e) => {
                if e.headers.is_empty() {
                    return Err(DecklineError::render(format!(
                        "table '{}' has no headers",
                        e.id
                    )));
                }
                for (idx, row) in e.rows.iter().enumerate() {
                    if row.len() != e.headers.len() {
                        return Err(DecklineError::render(format!(
                            "table '{}' row {} has {} cells, expected {}",
                            e.id,
                            idx,
                            row.len(),
                            e.headers.len()
                        )));
                    }
                }
                let row_h = pt_to_in(self.style.typography.body_size_pt * 1.8);
                let height = row_h * (e.rows.len() + 1) as f64;
                self.fit(&e.id, region, inner, cursor, height)?;
                let frame = Rect::new(inner.x0, cursor, inner.x1, cursor + height);
                self.place(
                    &e.id,
                    region,
                    frame,
                    Primitive::Table(TableGrid {
                        headers: e.headers.clone(),
                        rows: e.rows.clone(),
                        header_fill: self.style.palette.primary.clone(),
                        text_size_pt: self.style.typography.body_size_pt,
                        text_color: self.style.palette.text_color.clone(),
                    }),
                );
                self.record_hint(&e.id, None);
                Ok(height)
            }
            ContentElement::Chart(e) => {
                let kind = parse_chart_kind(&e.chart_kind)?;
                for series in &e.series {
                    if series.values.len() != e.labels.len() {
                        return Err(DecklineError::render(format!(
                            "chart '{}' series '{}' has {} values for {} labels",
                            e.id,
                            series.name,
                            series.values.len(),
                            e.labels.len()
                        )));
                    }
                }
                let height = inner.y1 - cursor;
                if height < 1.0 {
                    return Err(DecklineError::render(format!(
                        "chart '{}' needs at least 1in of height in region '{region}', {height:.2}in left",
                        e.id
                    )));
                }
                let frame = Rect::new(inner.x0, cursor, inner.x1, cursor + height);
                self.place(
                    &e.id,
                    region,
                    frame,
                    Primitive::Chart(ChartPlot {
                        kind,
                        labels: e.labels.clone(),
                        series: e.series.clone(),
                        accent: self.style.palette.accent.clone(),
                    }),
                );
                self.record_hint(&e.id, None);
                Ok(height)
            }
            ContentElement::Image(e) => {
                let height = inner.y1 - cursor;
                if height < 0.75 {
                    return Err(DecklineError::render(format!(
                        "image '{}' needs at least 0.75in of height in region '{region}', {height:.2}in left",
                        e.id
                    )));
                }
                let frame = Rect::new(inner.x0, cursor, inner.x1, cursor + height);
                self.place(
                    &e.id,
                    region,
                    frame,
                    Primitive::Image(ImageFrame {
                        alt: e.alt.clone(),
                        source_hint: e.source_hint.clone(),
                    }),
                );
                self.record_hint(&e.id, None);
                Ok(height)
            }
        }
    }

    fn callout(
        &mut self,
        e: &crate::spec::model::CalloutElement,
        region: RegionName,
        inner: Rect,
        cursor: f64,
    ) -> DecklineResult<f64> {
        let pad_in = px_to_in(self.style.spacing.region_pad_px);
        let text_width = inner.width() - 2.0 * pad_in;
        if text_width <= EPS_IN {
            return Err(DecklineError::render(format!(
                "callout '{}' has no usable width in region '{region}'",
                e.id
            )));
        }
        let size = self.style.typography.body_size_pt;
        let title_h = text_height_in(wrapped_line_count(&e.title, size, text_width), size, 1.3);
        let body_h = text_height_in(wrapped_line_count(&e.body, size, text_width), size, 1.3);
        let card_h = title_h + body_h + 3.0 * pad_in;
        self.fit(&e.id, region, inner, cursor, card_h)?;

        let card = Rect::new(inner.x0, cursor, inner.x1, cursor + card_h);
        self.place(
            &e.id,
            region,
            card,
            Primitive::Panel(Panel {
                fill: self.style.palette.surface.clone(),
                corner_radius_px: self.style.radii.card_px,
            }),
        );
        let title_frame = Rect::new(
            card.x0 + pad_in,
            card.y0 + pad_in,
            card.x1 - pad_in,
            card.y0 + pad_in + title_h,
        );
        self.place(
            &e.id,
            region,
            title_frame,
            Primitive::Text(TextBlock {
                runs: vec![TextRun {
                    text: e.title.clone(),
                    emphasized: false,
                }],
                size_pt: size,
                line_height: 1.3,
                color: self.style.palette.primary.clone(),
                font_family: self.style.typography.font_family.clone(),
                bold: true,
                align: TextAlign::Left,
            }),
        );
        let body_frame = Rect::new(
            title_frame.x0,
            title_frame.y1 + pad_in,
            title_frame.x1,
            title_frame.y1 + pad_in + body_h,
        );
        self.place(
            &e.id,
            region,
            body_frame,
            Primitive::Text(TextBlock {
                runs: vec![TextRun {
                    text: e.body.clone(),
                    emphasized: false,
                }],
                size_pt: size,
                line_height: 1.3,
                color: self.style.palette.text_color.clone(),
                font_family: self.style.typography.font_family.clone(),
                bold: false,
                align: TextAlign::Left,
            }),
        );
        self.record_hint(&e.id, None);
        Ok(card_h)
    }

    #[allow(clippy::too_many_arguments)]
    fn text_block(
        &mut self,
        id: &str,
        region: RegionName,
        inner: Rect,
        cursor: f64,
        runs: Vec<TextRun>,
        size_pt: f64,
        line_height: f64,
        color: String,
        bold: bool,
    ) -> DecklineResult<f64> {
        let full_text: String = runs.iter().map(|r| r.text.as_str()).collect();
        let lines = wrapped_line_count(&full_text, size_pt, inner.width());
        let height = text_height_in(lines, size_pt, line_height);
        self.fit(id, region, inner, cursor, height)?;
        let frame = Rect::new(inner.x0, cursor, inner.x1, cursor + height);
        self.place(
            id,
            region,
            frame,
            Primitive::Text(TextBlock {
                runs,
                size_pt,
                line_height,
                color,
                font_family: self.style.typography.font_family.clone(),
                bold,
                align: TextAlign::Left,
            }),
        );
        Ok(height)
    }

    fn fit(
        &self,
        id: &str,
        region: RegionName,
        inner: Rect,
        cursor: f64,
        needed: f64,
    ) -> DecklineResult<()> {
        if cursor + needed > inner.y1 + EPS_IN {
            return Err(DecklineError::render(format!(
                "element '{id}' overflows region '{region}' by {:.2}in",
                cursor + needed - inner.y1
            )));
        }
        Ok(())
    }

    fn place(&mut self, id: &str, region: RegionName, frame: Rect, primitive: Primitive) {
        self.surface.push(Placed {
            element_id: Some(id.to_string()),
            region: Some(region),
            frame_in: frame,
            z: self.z,
            primitive,
        });
        self.z += 1;
    }

    fn hint(&mut self, id: &str, runs: &[TextRun]) {
        let emphasis = runs
            .iter()
            .any(|r| r.emphasized)
            .then(|| self.style.palette.accent.clone());
        self.record_hint(id, emphasis);
    }

    fn record_hint(&mut self, id: &str, emphasis: Option<String>) {
        if self.hints.contains_key(id) {
            return;
        }
        let order = self.appear;
        self.appear += 1;
        self.hints.insert(
            id.to_string(),
            ElementHints {
                appear_order: order,
                emphasis_color: emphasis,
            },
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/faithful.rs"]
mod tests;
