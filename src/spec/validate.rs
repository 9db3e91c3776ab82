use std::collections::BTreeMap;

use serde::Serialize;

use crate::spec::model::{ContentElement, SlideSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a validation finding.
pub enum Severity {
    /// Blocking defect; no render is attempted.
    Structural,
    /// Non-blocking warning; rendering proceeds.
    Advisory,
}

#[derive(Clone, Debug, Serialize)]
/// One validation finding.
pub struct Issue {
    /// Finding severity.
    pub severity: Severity,
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize)]
/// Result of validating a [`SlideSpec`].
///
/// Structural issues block rendering; advisory issues are returned as data
/// so callers can warn and continue.
pub struct ValidationReport {
    /// All findings, in discovery order.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Whether the spec passed every structural check.
    pub fn is_structurally_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| i.severity == Severity::Structural)
    }

    /// Structural findings only.
    pub fn structural(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Structural)
    }

    /// Advisory findings only.
    pub fn advisories(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Advisory)
    }

    fn push(&mut self, severity: Severity, code: &str, message: impl Into<String>) {
        self.issues.push(Issue {
            severity,
            code: code.to_string(),
            message: message.into(),
        });
    }
}

/// Validate a slide specification.
///
/// Structural checks cover the grid invariants and every cross-reference
/// between anchors, regions and content elements. Advisory checks cover
/// style-token quality (hex formats, neutral scale length, typographic
/// monotonicity, contrast) and never prevent rendering.
#[tracing::instrument(skip(spec))]
pub fn validate_spec(spec: &SlideSpec) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_grid(spec, &mut report);
    check_regions(spec, &mut report);
    check_content_ids(spec, &mut report);
    check_anchors(spec, &mut report);
    check_style(spec, &mut report);

    report
}

fn check_grid(spec: &SlideSpec, report: &mut ValidationReport) {
    let grid = &spec.layout.grid;
    if grid.rows == 0 {
        report.push(Severity::Structural, "grid.rows", "grid rows must be >= 1");
    }
    if grid.cols == 0 {
        report.push(Severity::Structural, "grid.cols", "grid cols must be >= 1");
    }
    if !grid.gutter_px.is_finite() || grid.gutter_px < 0.0 {
        report.push(
            Severity::Structural,
            "grid.gutter",
            "grid gutter_px must be finite and >= 0",
        );
    }
    for (name, value) in [
        ("left", grid.margins_px.left),
        ("right", grid.margins_px.right),
        ("top", grid.margins_px.top),
        ("bottom", grid.margins_px.bottom),
    ] {
        if !value.is_finite() || value < 0.0 {
            report.push(
                Severity::Structural,
                "grid.margins",
                format!("grid margins_px.{name} must be finite and >= 0"),
            );
        }
    }
}

fn check_regions(spec: &SlideSpec, report: &mut ValidationReport) {
    if spec.layout.regions.is_empty() {
        report.push(
            Severity::Structural,
            "layout.regions",
            "layout must declare at least one region",
        );
    }
    let mut seen = BTreeMap::new();
    for region in &spec.layout.regions {
        if seen.insert(region.name, ()).is_some() {
            report.push(
                Severity::Structural,
                "region.duplicate",
                format!("region '{}' is declared more than once", region.name),
            );
        }
    }
}

fn check_content_ids(spec: &SlideSpec, report: &mut ValidationReport) {
    if spec.content.is_empty() {
        report.push(
            Severity::Advisory,
            "content.empty",
            "spec declares no content elements",
        );
    }
    let mut seen = BTreeMap::new();
    for element in &spec.content {
        if element.id().trim().is_empty() {
            report.push(
                Severity::Structural,
                "content.id",
                format!("{} element has an empty id", element.kind_name()),
            );
            continue;
        }
        if seen.insert(element.id().to_string(), ()).is_some() {
            report.push(
                Severity::Structural,
                "content.duplicate_id",
                format!("content id '{}' is declared more than once", element.id()),
            );
        }
    }
}

fn check_anchors(spec: &SlideSpec, report: &mut ValidationReport) {
    let mut anchored = BTreeMap::new();
    for anchor in &spec.layout.anchors {
        if spec.region_by_name(anchor.region).is_none() {
            report.push(
                Severity::Structural,
                "anchor.region",
                format!(
                    "anchor '{}' targets undeclared region '{}'",
                    anchor.ref_id, anchor.region
                ),
            );
        }
        let matches = matching_elements(&spec.content, &anchor.ref_id);
        if matches == 0 {
            report.push(
                Severity::Structural,
                "anchor.ref",
                format!(
                    "anchor ref_id '{}' does not match any content element",
                    anchor.ref_id
                ),
            );
        }
        if anchored.insert(anchor.ref_id.clone(), ()).is_some() {
            report.push(
                Severity::Structural,
                "anchor.duplicate",
                format!("content id '{}' is anchored more than once", anchor.ref_id),
            );
        }
    }
}

fn matching_elements(content: &[ContentElement], id: &str) -> usize {
    content.iter().filter(|e| e.id() == id).count()
}

fn check_style(spec: &SlideSpec, report: &mut ValidationReport) {
    let palette = &spec.style.palette;
    for (name, value) in [
        ("primary", &palette.primary),
        ("accent", &palette.accent),
        ("background", &palette.background),
        ("surface", &palette.surface),
        ("text_color", &palette.text_color),
    ] {
        if parse_hex_rgb(value).is_none() {
            report.push(
                Severity::Advisory,
                "palette.hex",
                format!("palette.{name} '{value}' is not #RRGGBB hex"),
            );
        }
    }
    for value in &palette.neutrals {
        if parse_hex_rgb(value).is_none() {
            report.push(
                Severity::Advisory,
                "palette.hex",
                format!("palette neutral '{value}' is not #RRGGBB hex"),
            );
        }
    }
    if palette.neutrals.len() < 5 {
        report.push(
            Severity::Advisory,
            "palette.neutrals",
            format!(
                "neutral scale has {} entries; at least 5 recommended",
                palette.neutrals.len()
            ),
        );
    }

    let typo = &spec.style.typography;
    if !(typo.title_size_pt > typo.subtitle_size_pt && typo.subtitle_size_pt > typo.body_size_pt) {
        report.push(
            Severity::Advisory,
            "typography.scale",
            "typographic sizes should satisfy title > subtitle > body",
        );
    }

    if let (Some(text), Some(bg)) = (
        parse_hex_rgb(&palette.text_color),
        parse_hex_rgb(&palette.background),
    ) {
        let ratio = contrast_ratio(text, bg);
        if ratio < spec.style.contrast.min_ratio {
            report.push(
                Severity::Advisory,
                "contrast.text",
                format!(
                    "text/background contrast {ratio:.2} is below minimum {:.2}",
                    spec.style.contrast.min_ratio
                ),
            );
        }
    }
}

/// Parse a strict `#RRGGBB` hex color.
pub fn parse_hex_rgb(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// WCAG contrast ratio between two sRGB colors, in `[1, 21]`.
pub fn contrast_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

fn relative_luminance(rgb: [u8; 3]) -> f64 {
    fn linearize(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(rgb[0]) + 0.7152 * linearize(rgb[1]) + 0.0722 * linearize(rgb[2])
}

#[cfg(test)]
#[path = "../../tests/unit/spec/validate.rs"]
mod tests;
