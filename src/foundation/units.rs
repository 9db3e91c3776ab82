//! Fixed-DPI unit conversions shared by every geometry consumer.
//!
//! All slide geometry is authoritative in inches; pixel and point forms are
//! derived through these functions and never recomputed independently.

/// Pixels per inch underlying all pixel conversions.
pub const PX_PER_IN: f64 = 96.0;

/// Typographic points per inch.
pub const PT_PER_IN: f64 = 72.0;

/// Convert pixels to inches.
pub fn px_to_in(px: f64) -> f64 {
    px / PX_PER_IN
}

/// Convert inches to pixels.
pub fn in_to_px(inches: f64) -> f64 {
    inches * PX_PER_IN
}

/// Convert pixels to typographic points.
pub fn px_to_pt(px: f64) -> f64 {
    px * (PT_PER_IN / PX_PER_IN)
}

/// Convert typographic points to pixels.
pub fn pt_to_px(pt: f64) -> f64 {
    pt * (PX_PER_IN / PT_PER_IN)
}

/// Convert typographic points to inches.
pub fn pt_to_in(pt: f64) -> f64 {
    pt / PT_PER_IN
}

/// Convert inches to typographic points.
pub fn in_to_pt(inches: f64) -> f64 {
    inches * PT_PER_IN
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/units.rs"]
mod tests;
