use super::*;
use crate::{
    Anchor, AspectRatio, Bullet, BulletGroupElement, ChartElement, ChartKind, Edges, Grid, Layout,
    Meta, Region, Series, TableElement, TitleElement, render::strategy::rect_contains,
    resolve_geometry, spec::model::SubtitleElement,
};

fn spec_with(content: Vec<ContentElement>, anchors: Vec<Anchor>) -> SlideSpec {
    SlideSpec {
        meta: Meta {
            locale: "en".to_string(),
            theme: String::new(),
            aspect_ratio: AspectRatio::Widescreen,
        },
        content,
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
            anchors,
        },
        style: StyleTokens::default(),
    }
}

fn accent_title() -> ContentElement {
    ContentElement::Title(TitleElement {
        id: "t1".to_string(),
        text: "Grow revenue by 40%".to_string(),
        accent_words: vec!["revenue".to_string()],
    })
}

fn render(spec: &SlideSpec) -> DecklineResult<BuildArtifact> {
    let geometry = resolve_geometry(spec)?;
    FaithfulStrategy.render(spec, &geometry)
}

#[test]
fn title_and_subtitle_render_within_their_regions() {
    let spec = spec_with(
        vec![
            accent_title(),
            ContentElement::Subtitle(SubtitleElement {
                id: "s1".to_string(),
                text: "Full-year outlook".to_string(),
            }),
        ],
        vec![
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
    );
    let geometry = resolve_geometry(&spec).unwrap();
    let artifact = FaithfulStrategy.render(&spec, &geometry).unwrap();

    assert_eq!(artifact.surface.primitives.len(), 2);
    for placed in &artifact.surface.primitives {
        let region = placed.region.expect("content primitives carry a region");
        let rect = geometry.regions[&region];
        assert!(
            rect_contains(rect, placed.frame_in),
            "{:?} escapes {region}",
            placed.frame_in
        );
    }
}

#[test]
fn accent_match_records_an_emphasis_hint() {
    let spec = spec_with(
        vec![accent_title()],
        vec![Anchor {
            ref_id: "t1".to_string(),
            region: RegionName::Header,
            order: 0,
        }],
    );
    let artifact = render(&spec).unwrap();
    let hint = &artifact.hints["t1"];
    assert_eq!(hint.appear_order, 0);
    assert_eq!(hint.emphasis_color.as_deref(), Some("#F59E0B"));

    match &artifact.surface.primitives[0].primitive {
        Primitive::Text(block) => {
            assert!(block.runs.iter().any(|r| r.emphasized && r.text == "revenue"));
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn appear_order_follows_paint_order() {
    let spec = spec_with(
        vec![
            accent_title(),
            ContentElement::Subtitle(SubtitleElement {
                id: "s1".to_string(),
                text: "sub".to_string(),
            }),
        ],
        vec![
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
    );
    let artifact = render(&spec).unwrap();
    assert_eq!(artifact.hints["t1"].appear_order, 0);
    assert_eq!(artifact.hints["s1"].appear_order, 1);
}

#[test]
fn malformed_palette_hex_is_a_render_error() {
    let mut spec = spec_with(vec![], vec![]);
    spec.style.palette.primary = "blue".to_string();
    let err = render(&spec).unwrap_err();
    match err {
        DecklineError::Render(msg) => assert!(msg.contains("primary"), "got: {msg}"),
        other => panic!("expected render error, got {other:?}"),
    }
}

#[test]
fn ragged_table_is_a_render_error() {
    let spec = spec_with(
        vec![ContentElement::Table(TableElement {
            id: "tab1".to_string(),
            headers: vec!["Region".to_string(), "Revenue".to_string()],
            rows: vec![vec![
                "EMEA".to_string(),
                "1.2M".to_string(),
                "extra".to_string(),
            ]],
        })],
        vec![Anchor {
            ref_id: "tab1".to_string(),
            region: RegionName::Body,
            order: 0,
        }],
    );
    let err = render(&spec).unwrap_err();
    match err {
        DecklineError::Render(msg) => {
            assert!(msg.contains("tab1"), "got: {msg}");
            assert!(msg.contains("expected 2"), "got: {msg}");
        }
        other => panic!("expected render error, got {other:?}"),
    }
}

#[test]
fn unknown_chart_kind_is_a_render_error() {
    let spec = spec_with(
        vec![ContentElement::Chart(ChartElement {
            id: "c1".to_string(),
            chart_kind: "scatter".to_string(),
            labels: vec!["Q1".to_string()],
            series: vec![Series {
                name: "rev".to_string(),
                values: vec![1.0],
            }],
        })],
        vec![Anchor {
            ref_id: "c1".to_string(),
            region: RegionName::Body,
            order: 0,
        }],
    );
    assert!(matches!(
        render(&spec),
        Err(DecklineError::Render(msg)) if msg.contains("scatter")
    ));
}

#[test]
fn overflowing_content_fails_instead_of_clamping() {
    let bullets = (0..12)
        .map(|i| Bullet {
            text: format!("point number {i}"),
            accent_words: vec![],
        })
        .collect();
    let spec = spec_with(
        vec![ContentElement::BulletGroup(BulletGroupElement {
            id: "b1".to_string(),
            bullets,
        })],
        vec![Anchor {
            ref_id: "b1".to_string(),
            region: RegionName::Header,
            order: 0,
        }],
    );
    let err = render(&spec).unwrap_err();
    match err {
        DecklineError::Render(msg) => {
            assert!(msg.contains("overflows region 'header'"), "got: {msg}");
        }
        other => panic!("expected render error, got {other:?}"),
    }
}

#[test]
fn table_and_chart_render_as_structured_primitives() {
    let spec = spec_with(
        vec![
            ContentElement::Table(TableElement {
                id: "tab1".to_string(),
                headers: vec!["Region".to_string(), "Revenue".to_string()],
                rows: vec![vec!["EMEA".to_string(), "1.2M".to_string()]],
            }),
            ContentElement::Chart(ChartElement {
                id: "c1".to_string(),
                chart_kind: "line".to_string(),
                labels: vec!["Q1".to_string(), "Q2".to_string()],
                series: vec![Series {
                    name: "rev".to_string(),
                    values: vec![1.0, 2.0],
                }],
            }),
        ],
        vec![
            Anchor {
                ref_id: "tab1".to_string(),
                region: RegionName::Body,
                order: 0,
            },
            Anchor {
                ref_id: "c1".to_string(),
                region: RegionName::Body,
                order: 1,
            },
        ],
    );
    let artifact = render(&spec).unwrap();
    assert!(artifact
        .surface
        .primitives
        .iter()
        .any(|p| matches!(p.primitive, Primitive::Table(_))));
    assert!(artifact
        .surface
        .primitives
        .iter()
        .any(|p| matches!(&p.primitive, Primitive::Chart(plot) if plot.kind == ChartKind::Line)));
}
