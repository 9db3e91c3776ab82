use crate::{
    foundation::error::{DecklineError, DecklineResult},
    foundation::units::px_to_in,
    spec::model::{AspectRatio, Grid},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A grid resolved against concrete slide dimensions, in inches.
///
/// Derived on every resolution call and never cached across calls; both the
/// preview and export surfaces must obtain geometry through this type so the
/// two can never diverge.
pub struct ResolvedGrid {
    /// Row count.
    pub rows: u32,
    /// Column count.
    pub cols: u32,
    /// Slide width in inches.
    pub slide_width_in: f64,
    /// Slide height in inches.
    pub slide_height_in: f64,
    /// Left margin in inches.
    pub margin_left_in: f64,
    /// Top margin in inches.
    pub margin_top_in: f64,
    /// Gutter between cells in inches.
    pub gutter_in: f64,
    /// Width of one cell in inches.
    pub cell_width_in: f64,
    /// Height of one cell in inches.
    pub cell_height_in: f64,
}

/// Resolve per-cell dimensions for a grid on a slide of the given aspect ratio.
///
/// A non-positive cell dimension means the grid, as configured, cannot
/// render; this is reported as a geometry error naming the failing axis and
/// is never silently clamped.
pub fn resolve_grid(grid: &Grid, aspect: AspectRatio) -> DecklineResult<ResolvedGrid> {
    if grid.rows == 0 || grid.cols == 0 {
        return Err(DecklineError::geometry(
            "grid must have rows >= 1 and cols >= 1",
        ));
    }

    let slide_width_in = aspect.slide_width_in();
    let slide_height_in = aspect.slide_height_in();
    let gutter_in = px_to_in(grid.gutter_px);

    let margin_left_in = px_to_in(grid.margins_px.left);
    let margin_right_in = px_to_in(grid.margins_px.right);
    let margin_top_in = px_to_in(grid.margins_px.top);
    let margin_bottom_in = px_to_in(grid.margins_px.bottom);

    let avail_width_in = slide_width_in - margin_left_in - margin_right_in;
    let avail_height_in = slide_height_in - margin_top_in - margin_bottom_in;

    let gutters_x_in = f64::from(grid.cols - 1) * gutter_in;
    let gutters_y_in = f64::from(grid.rows - 1) * gutter_in;

    let cell_width_in = (avail_width_in - gutters_x_in) / f64::from(grid.cols);
    let cell_height_in = (avail_height_in - gutters_y_in) / f64::from(grid.rows);

    if !cell_width_in.is_finite() || cell_width_in <= 0.0 {
        return Err(DecklineError::geometry(format!(
            "cell width is non-positive ({cell_width_in:.4}in) for {} cols on a {slide_width_in}in slide",
            grid.cols
        )));
    }
    if !cell_height_in.is_finite() || cell_height_in <= 0.0 {
        return Err(DecklineError::geometry(format!(
            "cell height is non-positive ({cell_height_in:.4}in) for {} rows on a {slide_height_in}in slide",
            grid.rows
        )));
    }

    Ok(ResolvedGrid {
        rows: grid.rows,
        cols: grid.cols,
        slide_width_in,
        slide_height_in,
        margin_left_in,
        margin_top_in,
        gutter_in,
        cell_width_in,
        cell_height_in,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/grid.rs"]
mod tests;
