use kurbo::Rect;

use crate::{
    foundation::error::DecklineResult,
    foundation::units::{in_to_pt, pt_to_in},
    geometry::region::ResolvedGeometry,
    render::surface::BuildArtifact,
    spec::model::{ContentElement, RegionName, SlideSpec},
};

/// Tolerance used when comparing inch coordinates.
pub(crate) const EPS_IN: f64 = 1e-6;

/// One renderer implementation within the orchestrator's fallback chain.
///
/// Every strategy honors the same contract: anchor `order` ascending within
/// each region (ties preserve declaration order), no primitive outside its
/// region's rectangle, no content element silently dropped. Variants differ
/// only in how strictly declared style tokens are honored versus substituted
/// with heuristic defaults.
pub trait RenderStrategy {
    /// Stable strategy name, reported in build telemetry.
    fn name(&self) -> &'static str;

    /// Populate a surface from the immutable spec and resolved geometry.
    ///
    /// Either returns a completed artifact or a render error; no partial
    /// artifact is ever exposed.
    fn render(&self, spec: &SlideSpec, geometry: &ResolvedGeometry)
    -> DecklineResult<BuildArtifact>;
}

/// A region's rectangle plus the content elements to render into it, in
/// final paint order.
pub(crate) struct RegionPlan<'a> {
    pub name: RegionName,
    pub rect: Rect,
    pub elements: Vec<&'a ContentElement>,
}

/// Assign every content element to a region, in paint order.
///
/// Anchored elements are sorted ascending by anchor `order` within their
/// region; the sort is stable, so equal orders keep anchor declaration
/// order. Elements with no anchor are never dropped: they flow into the
/// `body` region (or the first declared region when `body` is absent),
/// after the anchored elements, in content declaration order.
pub(crate) fn plan_regions<'a>(
    spec: &'a SlideSpec,
    geometry: &ResolvedGeometry,
) -> Vec<RegionPlan<'a>> {
    let mut plans: Vec<RegionPlan<'a>> = spec
        .layout
        .regions
        .iter()
        .filter_map(|region| {
            geometry.regions.get(&region.name).map(|rect| RegionPlan {
                name: region.name,
                rect: *rect,
                elements: Vec::new(),
            })
        })
        .collect();

    for plan in &mut plans {
        let mut anchored: Vec<(i32, &'a ContentElement)> = spec
            .layout
            .anchors
            .iter()
            .filter(|a| a.region == plan.name)
            .filter_map(|a| spec.element_by_id(&a.ref_id).map(|e| (a.order, e)))
            .collect();
        anchored.sort_by_key(|(order, _)| *order);
        plan.elements.extend(anchored.into_iter().map(|(_, e)| e));
    }

    let overflow_region = plans
        .iter()
        .position(|p| p.name == RegionName::Body)
        .or(if plans.is_empty() { None } else { Some(0) });
    if let Some(idx) = overflow_region {
        for element in &spec.content {
            let is_anchored = spec
                .layout
                .anchors
                .iter()
                .any(|a| a.ref_id == element.id());
            if !is_anchored {
                plans[idx].elements.push(element);
            }
        }
    }

    plans
}

/// Whether `inner` lies within `outer`, inch-tolerant.
pub(crate) fn rect_contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 - EPS_IN
        && inner.y0 >= outer.y0 - EPS_IN
        && inner.x1 <= outer.x1 + EPS_IN
        && inner.y1 <= outer.y1 + EPS_IN
}

/// Estimated line count for text wrapped into a frame of the given width.
///
/// A deterministic average-glyph-width model; the downstream text shaper
/// owns exact wrapping, this only has to be stable across preview and
/// export so both derive the same frames.
pub(crate) fn wrapped_line_count(text: &str, size_pt: f64, width_in: f64) -> usize {
    let chars = text.chars().count().max(1);
    let glyph_width_pt = size_pt * 0.55;
    let per_line = (in_to_pt(width_in) / glyph_width_pt).floor().max(1.0) as usize;
    chars.div_ceil(per_line)
}

/// Height in inches of `lines` lines at the given size and line height.
pub(crate) fn text_height_in(lines: usize, size_pt: f64, line_height: f64) -> f64 {
    pt_to_in(lines as f64 * size_pt * line_height)
}

#[cfg(test)]
#[path = "../../tests/unit/render/strategy.rs"]
mod tests;
