use std::collections::BTreeMap;

use kurbo::Rect;

use crate::{
    foundation::error::{DecklineError, DecklineResult},
    geometry::grid::{ResolvedGrid, resolve_grid},
    spec::model::{Region, RegionName, SlideSpec},
};

#[derive(Clone, Debug, serde::Serialize)]
/// Fully resolved slide geometry in inches.
///
/// Derived, never persisted: recomputed on every resolution call. Pixel and
/// point forms of any rectangle are obtained through
/// [`crate::foundation::units`], never recomputed independently.
pub struct ResolvedGeometry {
    /// Slide width in inches.
    pub slide_width_in: f64,
    /// Slide height in inches.
    pub slide_height_in: f64,
    /// Width of one grid cell in inches.
    pub cell_width_in: f64,
    /// Height of one grid cell in inches.
    pub cell_height_in: f64,
    /// Absolute rectangle per declared region, in inches.
    pub regions: BTreeMap<RegionName, Rect>,
}

/// Position one region on a resolved grid.
///
/// Bounds are validated before any coordinate is computed; a violation is
/// reported as a bounds error naming the offending region.
pub fn position_region(grid: &ResolvedGrid, region: &Region) -> DecklineResult<Rect> {
    if region.row_span == 0 || region.col_span == 0 {
        return Err(DecklineError::bounds(format!(
            "region '{}' must span at least one row and one column",
            region.name
        )));
    }
    if region.row_start == 0 || region.col_start == 0 {
        return Err(DecklineError::bounds(format!(
            "region '{}' coordinates are 1-indexed; row_start and col_start must be >= 1",
            region.name
        )));
    }
    // Subtraction instead of `start + span - 1` so extreme deserialized
    // values cannot overflow.
    if region.row_start > grid.rows || region.row_span > grid.rows - (region.row_start - 1) {
        return Err(DecklineError::bounds(format!(
            "region '{}' exceeds grid rows (start {}, span {}, {} rows)",
            region.name, region.row_start, region.row_span, grid.rows
        )));
    }
    if region.col_start > grid.cols || region.col_span > grid.cols - (region.col_start - 1) {
        return Err(DecklineError::bounds(format!(
            "region '{}' exceeds grid cols (start {}, span {}, {} cols)",
            region.name, region.col_start, region.col_span, grid.cols
        )));
    }

    let x = grid.margin_left_in
        + f64::from(region.col_start - 1) * (grid.cell_width_in + grid.gutter_in);
    let y = grid.margin_top_in
        + f64::from(region.row_start - 1) * (grid.cell_height_in + grid.gutter_in);
    let width = f64::from(region.col_span) * grid.cell_width_in
        + f64::from(region.col_span - 1) * grid.gutter_in;
    let height = f64::from(region.row_span) * grid.cell_height_in
        + f64::from(region.row_span - 1) * grid.gutter_in;

    Ok(Rect::new(x, y, x + width, y + height))
}

/// Resolve the complete geometry for one slide specification.
///
/// This is the single shared geometry path for every consumer; the preview
/// and export surfaces both call it and therefore derive bit-for-bit
/// identical coordinates.
#[tracing::instrument(skip(spec))]
pub fn resolve_geometry(spec: &SlideSpec) -> DecklineResult<ResolvedGeometry> {
    let grid = resolve_grid(&spec.layout.grid, spec.meta.aspect_ratio)?;

    let mut regions = BTreeMap::new();
    for region in &spec.layout.regions {
        let rect = position_region(&grid, region)?;
        regions.insert(region.name, rect);
    }

    Ok(ResolvedGeometry {
        slide_width_in: grid.slide_width_in,
        slide_height_in: grid.slide_height_in,
        cell_width_in: grid.cell_width_in,
        cell_height_in: grid.cell_height_in,
        regions,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/region.rs"]
mod tests;
