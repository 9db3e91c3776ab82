use super::*;
use crate::{
    Anchor, AspectRatio, Edges, Grid, Layout, Meta, Region, RegionName, StyleTokens,
    SubtitleElement, TitleElement,
};

fn base_spec() -> SlideSpec {
    SlideSpec {
        meta: Meta {
            locale: "en".to_string(),
            theme: String::new(),
            aspect_ratio: AspectRatio::Widescreen,
        },
        content: vec![
            ContentElement::Title(TitleElement {
                id: "t1".to_string(),
                text: "Title".to_string(),
                accent_words: vec![],
            }),
            ContentElement::Subtitle(SubtitleElement {
                id: "s1".to_string(),
                text: "Sub".to_string(),
            }),
        ],
        layout: Layout {
            grid: Grid {
                rows: 8,
                cols: 12,
                gutter_px: 8.0,
                margins_px: Edges::uniform(24.0),
            },
            regions: vec![
                Region {
                    name: RegionName::Header,
                    row_start: 1,
                    col_start: 1,
                    row_span: 2,
                    col_span: 12,
                },
                Region {
                    name: RegionName::Body,
                    row_start: 3,
                    col_start: 1,
                    row_span: 6,
                    col_span: 12,
                },
            ],
            anchors: vec![
                Anchor {
                    ref_id: "t1".to_string(),
                    region: RegionName::Header,
                    order: 0,
                },
                Anchor {
                    ref_id: "s1".to_string(),
                    region: RegionName::Body,
                    order: 0,
                },
            ],
        },
        style: StyleTokens::default(),
    }
}

fn codes(report: &ValidationReport, severity: Severity) -> Vec<String> {
    report
        .issues
        .iter()
        .filter(|i| i.severity == severity)
        .map(|i| i.code.clone())
        .collect()
}

#[test]
fn well_formed_spec_has_no_issues() {
    let report = validate_spec(&base_spec());
    assert!(report.is_structurally_valid());
    assert!(report.issues.is_empty(), "got: {:?}", report.issues);
}

#[test]
fn anchor_to_undeclared_region_is_structural() {
    let mut spec = base_spec();
    spec.layout.anchors[0].region = RegionName::Footer;
    let report = validate_spec(&spec);
    assert!(!report.is_structurally_valid());
    assert!(codes(&report, Severity::Structural).contains(&"anchor.region".to_string()));
}

#[test]
fn anchor_to_unknown_element_is_structural() {
    let mut spec = base_spec();
    spec.layout.anchors[0].ref_id = "ghost".to_string();
    let report = validate_spec(&spec);
    assert!(codes(&report, Severity::Structural).contains(&"anchor.ref".to_string()));
}

#[test]
fn element_anchored_twice_is_structural() {
    let mut spec = base_spec();
    spec.layout.anchors.push(Anchor {
        ref_id: "t1".to_string(),
        region: RegionName::Body,
        order: 5,
    });
    let report = validate_spec(&spec);
    assert!(codes(&report, Severity::Structural).contains(&"anchor.duplicate".to_string()));
}

#[test]
fn duplicate_content_id_is_structural() {
    let mut spec = base_spec();
    spec.content.push(ContentElement::Subtitle(SubtitleElement {
        id: "t1".to_string(),
        text: "imposter".to_string(),
    }));
    let report = validate_spec(&spec);
    assert!(codes(&report, Severity::Structural).contains(&"content.duplicate_id".to_string()));
}

#[test]
fn duplicate_region_declaration_is_structural() {
    let mut spec = base_spec();
    spec.layout.regions.push(Region {
        name: RegionName::Header,
        row_start: 8,
        col_start: 1,
        row_span: 1,
        col_span: 1,
    });
    let report = validate_spec(&spec);
    assert!(codes(&report, Severity::Structural).contains(&"region.duplicate".to_string()));
}

#[test]
fn degenerate_grid_is_structural() {
    let mut spec = base_spec();
    spec.layout.grid.rows = 0;
    spec.layout.grid.gutter_px = -1.0;
    let report = validate_spec(&spec);
    let structural = codes(&report, Severity::Structural);
    assert!(structural.contains(&"grid.rows".to_string()));
    assert!(structural.contains(&"grid.gutter".to_string()));
}

#[test]
fn no_regions_is_structural() {
    let mut spec = base_spec();
    spec.layout.regions.clear();
    spec.layout.anchors.clear();
    let report = validate_spec(&spec);
    assert!(codes(&report, Severity::Structural).contains(&"layout.regions".to_string()));
}

#[test]
fn malformed_hex_is_advisory_only() {
    let mut spec = base_spec();
    spec.style.palette.accent = "orange".to_string();
    let report = validate_spec(&spec);
    assert!(report.is_structurally_valid());
    assert!(codes(&report, Severity::Advisory).contains(&"palette.hex".to_string()));
}

#[test]
fn short_neutral_scale_is_advisory() {
    let mut spec = base_spec();
    spec.style.palette.neutrals.truncate(2);
    let report = validate_spec(&spec);
    assert!(report.is_structurally_valid());
    assert!(codes(&report, Severity::Advisory).contains(&"palette.neutrals".to_string()));
}

#[test]
fn non_monotonic_type_scale_is_advisory() {
    let mut spec = base_spec();
    spec.style.typography.subtitle_size_pt = 40.0;
    let report = validate_spec(&spec);
    assert!(report.is_structurally_valid());
    assert!(codes(&report, Severity::Advisory).contains(&"typography.scale".to_string()));
}

#[test]
fn low_contrast_is_advisory() {
    let mut spec = base_spec();
    spec.style.palette.text_color = "#EEEEEE".to_string();
    spec.style.palette.background = "#FFFFFF".to_string();
    let report = validate_spec(&spec);
    assert!(report.is_structurally_valid());
    assert!(codes(&report, Severity::Advisory).contains(&"contrast.text".to_string()));
}

#[test]
fn hex_parsing_is_strict() {
    assert_eq!(parse_hex_rgb("#FFFFFF"), Some([255, 255, 255]));
    assert_eq!(parse_hex_rgb("#0f172a"), Some([15, 23, 42]));
    assert_eq!(parse_hex_rgb("FFFFFF"), None);
    assert_eq!(parse_hex_rgb("#FFF"), None);
    assert_eq!(parse_hex_rgb("#GGGGGG"), None);
    assert_eq!(parse_hex_rgb("#FFFFFF00"), None);
}

#[test]
fn contrast_ratio_matches_wcag_extremes() {
    let black_on_white = contrast_ratio([0, 0, 0], [255, 255, 255]);
    assert!((black_on_white - 21.0).abs() < 0.01);
    let same = contrast_ratio([128, 128, 128], [128, 128, 128]);
    assert!((same - 1.0).abs() < 1e-9);
}
