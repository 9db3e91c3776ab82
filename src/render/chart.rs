use serde::{Deserialize, Serialize};

use crate::foundation::error::{DecklineError, DecklineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Closed set of chart kinds understood by the renderer strategies.
pub enum ChartKind {
    /// Vertical bar chart.
    Bar,
    /// Line chart.
    Line,
    /// Pie chart.
    Pie,
}

impl ChartKind {
    /// Human-readable label for degraded placeholders.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar chart",
            ChartKind::Line => "line chart",
            ChartKind::Pie => "pie chart",
        }
    }
}

/// Parse a chart kind identifier strictly.
///
/// Spec-literal tiers call this and treat an unknown kind as a render
/// failure; looser tiers use [`chart_kind_or_default`] instead.
pub fn parse_chart_kind(kind: &str) -> DecklineResult<ChartKind> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "bar" => Ok(ChartKind::Bar),
        "line" => Ok(ChartKind::Line),
        "pie" => Ok(ChartKind::Pie),
        other => Err(DecklineError::render(format!(
            "unknown chart kind '{other}'"
        ))),
    }
}

/// Parse a chart kind leniently, defaulting unknown kinds to [`ChartKind::Bar`].
pub fn chart_kind_or_default(kind: &str) -> ChartKind {
    parse_chart_kind(kind).unwrap_or(ChartKind::Bar)
}

#[cfg(test)]
#[path = "../../tests/unit/render/chart.rs"]
mod tests;
