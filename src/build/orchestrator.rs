use std::time::Instant;

use serde::Serialize;

use crate::{
    foundation::error::{DecklineError, DecklineResult},
    geometry::region::resolve_geometry,
    render::adaptive::AdaptiveStrategy,
    render::faithful::FaithfulStrategy,
    render::outline::OutlineStrategy,
    render::strategy::RenderStrategy,
    render::surface::BuildArtifact,
    spec::model::SlideSpec,
    spec::validate::{ValidationReport, validate_spec},
};

#[derive(Clone, Debug, Serialize)]
/// Telemetry for one strategy attempt.
pub struct AttemptTelemetry {
    /// Strategy name.
    pub stage: String,
    /// Whether the attempt produced an artifact.
    pub succeeded: bool,
    /// Attempt duration in milliseconds.
    pub duration_ms: f64,
    /// Error message for a failed attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
/// Outcome of one successful tiered build.
///
/// Ephemeral, one per build call; nothing is retained across calls.
pub struct BuildResult {
    /// Name of the strategy that produced the artifact.
    pub stage: String,
    /// The completed artifact.
    pub artifact: BuildArtifact,
    /// Validation report; only advisory issues can be present here.
    pub report: ValidationReport,
    /// Per-attempt telemetry, in attempt order.
    pub attempts: Vec<AttemptTelemetry>,
}

/// Owns the ordered renderer strategy chain and the fallback protocol.
///
/// Strategies are attempted strictly in order against the identical
/// immutable spec and geometry; the first success wins and later tiers are
/// never invoked. The default chain ends in [`OutlineStrategy`], which is
/// total for structurally valid specs, so exhaustion is a configuration
/// defect rather than a user-facing condition.
pub struct TieredBuilder {
    strategies: Vec<Box<dyn RenderStrategy>>,
}

impl Default for TieredBuilder {
    fn default() -> Self {
        Self::with_default_tiers()
    }
}

impl TieredBuilder {
    /// Builder with the default chain: faithful, adaptive, outline.
    pub fn with_default_tiers() -> Self {
        Self {
            strategies: vec![
                Box::new(FaithfulStrategy),
                Box::new(AdaptiveStrategy),
                Box::new(OutlineStrategy),
            ],
        }
    }

    /// Builder with a custom strategy chain.
    ///
    /// The caller is responsible for ending the chain with a strategy that
    /// cannot fail for structurally valid specs; the builder only requires
    /// the chain to be non-empty.
    pub fn new(strategies: Vec<Box<dyn RenderStrategy>>) -> DecklineResult<Self> {
        if strategies.is_empty() {
            return Err(DecklineError::structural(
                "at least one render strategy must be configured",
            ));
        }
        Ok(Self { strategies })
    }

    /// Names of the configured strategies, in attempt order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the tiered build protocol for one spec.
    ///
    /// 1. Structural validation failure short-circuits with a hard error;
    ///    no strategy is attempted.
    /// 2. Geometry is resolved once; geometry and bounds defects are hard
    ///    errors.
    /// 3. Strategies run in order; a failed attempt is recorded and the
    ///    next tier runs. No partial artifact from a failed attempt is ever
    ///    exposed.
    /// 4. First success returns; exhaustion returns an aggregate error
    ///    carrying every attempt failure.
    #[tracing::instrument(skip(self, spec))]
    pub fn build(&self, spec: &SlideSpec) -> DecklineResult<BuildResult> {
        let report = validate_spec(spec);
        if !report.is_structurally_valid() {
            let joined = report
                .structural()
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DecklineError::structural(joined));
        }

        let geometry = resolve_geometry(spec)?;

        let mut attempts = Vec::with_capacity(self.strategies.len());
        let mut errors = Vec::new();
        for strategy in &self.strategies {
            let started = Instant::now();
            match strategy.render(spec, &geometry) {
                Ok(artifact) => {
                    let duration_ms = started.elapsed().as_secs_f64() * 1e3;
                    tracing::info!(
                        stage = strategy.name(),
                        duration_ms,
                        "render strategy succeeded"
                    );
                    attempts.push(AttemptTelemetry {
                        stage: strategy.name().to_string(),
                        succeeded: true,
                        duration_ms,
                        error: None,
                    });
                    return Ok(BuildResult {
                        stage: strategy.name().to_string(),
                        artifact,
                        report,
                        attempts,
                    });
                }
                Err(err) => {
                    let duration_ms = started.elapsed().as_secs_f64() * 1e3;
                    tracing::warn!(
                        stage = strategy.name(),
                        duration_ms,
                        error = %err,
                        "render strategy failed; trying next tier"
                    );
                    attempts.push(AttemptTelemetry {
                        stage: strategy.name().to_string(),
                        succeeded: false,
                        duration_ms,
                        error: Some(err.to_string()),
                    });
                    errors.push(format!("{}: {err}", strategy.name()));
                }
            }
        }

        Err(DecklineError::Aggregate(errors))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/orchestrator.rs"]
mod tests;
