//! Deckline is a slide layout resolution and tiered rendering engine.
//!
//! It turns a declarative slide specification (`SlideSpec`, a grid with
//! named regions, anchored content elements and a style-token set) into a
//! positioned artifact (`BuildArtifact`), identically for a live preview and
//! an exported document.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: [`validate_spec`]. Structural defects block, advisory
//!    findings ride along as warnings.
//! 2. **Resolve**: [`resolve_geometry`]. Grid cell dimensions and one
//!    absolute rectangle per region, authoritative in inches.
//! 3. **Render**: [`TieredBuilder::build`]. An ordered fallback chain of
//!    [`RenderStrategy`] tiers, from spec-literal to a context-free tier
//!    that cannot fail for structurally valid input.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One geometry path**: the unit converter, grid resolver and region
//!   positioner are the same functions for every consumer; pixel/point
//!   forms are derived, never recomputed.
//! - **Stateless and synchronous**: the spec is immutable for the duration
//!   of one build call and no component retains cross-call state, so
//!   concurrent builds cannot interfere.
//! - **Guaranteed success**: once structural validation passes, the last
//!   tier of the default chain always produces a usable artifact.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod build;
mod foundation;
mod geometry;
mod render;
mod spec;

pub use build::orchestrator::{AttemptTelemetry, BuildResult, TieredBuilder};
pub use foundation::error::{DecklineError, DecklineResult};
pub use foundation::units::{
    PT_PER_IN, PX_PER_IN, in_to_pt, in_to_px, pt_to_in, pt_to_px, px_to_in, px_to_pt,
};
pub use geometry::grid::{ResolvedGrid, resolve_grid};
pub use geometry::region::{ResolvedGeometry, position_region, resolve_geometry};
pub use render::adaptive::AdaptiveStrategy;
pub use render::chart::{ChartKind, chart_kind_or_default, parse_chart_kind};
pub use render::faithful::FaithfulStrategy;
pub use render::outline::OutlineStrategy;
pub use render::strategy::RenderStrategy;
pub use render::surface::{
    BuildArtifact, ChartPlot, ElementHints, ImageFrame, Panel, Placed, Placeholder, Primitive,
    Surface, TableGrid, TextAlign, TextBlock,
};
pub use render::text::{TextRun, highlight_accent_words};
pub use spec::model::{
    Anchor, AspectRatio, Bullet, BulletGroupElement, CalloutElement, ChartElement, ContentElement,
    Contrast, Edges, Grid, ImageElement, Layout, Meta, Palette, Radii, Region, RegionName, Series,
    SlideSpec, Spacing, StyleTokens, SubtitleElement, TableElement, TitleElement, Typography,
};
pub use spec::validate::{
    Issue, Severity, ValidationReport, contrast_ratio, parse_hex_rgb, validate_spec,
};
