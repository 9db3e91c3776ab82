use super::*;
use std::collections::BTreeMap as Map;

use kurbo::Rect;

fn geometry() -> ResolvedGeometry {
    ResolvedGeometry {
        slide_width_in: 10.0,
        slide_height_in: 5.625,
        cell_width_in: 0.715,
        cell_height_in: 0.568,
        regions: Map::new(),
    }
}

#[test]
fn surface_is_sized_to_the_resolved_slide() {
    let surface = Surface::new(&geometry());
    assert_eq!(surface.width_in, 10.0);
    assert_eq!(surface.height_in, 5.625);
    assert!(surface.primitives.is_empty());
}

#[test]
fn push_preserves_paint_order() {
    let mut surface = Surface::new(&geometry());
    for (i, label) in ["back", "front"].iter().enumerate() {
        surface.push(Placed {
            element_id: None,
            region: None,
            frame_in: Rect::new(0.0, 0.0, 1.0, 1.0),
            z: i as i32,
            primitive: Primitive::Placeholder(Placeholder {
                label: label.to_string(),
            }),
        });
    }
    assert_eq!(surface.primitives.len(), 2);
    assert_eq!(surface.primitives[0].z, 0);
    assert_eq!(surface.primitives[1].z, 1);
}

#[test]
fn artifact_serializes_with_inch_frames() {
    let mut surface = Surface::new(&geometry());
    surface.push(Placed {
        element_id: Some("t1".to_string()),
        region: Some(RegionName::Header),
        frame_in: Rect::new(0.25, 0.25, 9.75, 1.469),
        z: 0,
        primitive: Primitive::Text(TextBlock {
            runs: vec![TextRun {
                text: "Title".to_string(),
                emphasized: false,
            }],
            size_pt: 36.0,
            line_height: 1.2,
            color: "#0F172A".to_string(),
            font_family: "Inter".to_string(),
            bold: true,
            align: TextAlign::Left,
        }),
    });
    let mut hints = BTreeMap::new();
    hints.insert(
        "t1".to_string(),
        ElementHints {
            appear_order: 0,
            emphasis_color: None,
        },
    );
    let artifact = BuildArtifact { surface, hints };

    let json = serde_json::to_string(&artifact).unwrap();
    let back: BuildArtifact = serde_json::from_str(&json).unwrap();
    assert_eq!(back.surface.primitives.len(), 1);
    assert_eq!(back.surface.primitives[0].element_id.as_deref(), Some("t1"));
    assert!((back.surface.primitives[0].frame_in.x1 - 9.75).abs() < 1e-12);
    // absent emphasis is omitted from the wire form, not serialized as null
    assert!(!json.contains("emphasis_color"));
}

#[test]
fn default_hints_carry_no_emphasis() {
    let hints = ElementHints::default();
    assert_eq!(hints.appear_order, 0);
    assert!(hints.emphasis_color.is_none());
}
