/// Convenience result type used across deckline.
pub type DecklineResult<T> = Result<T, DecklineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DecklineError {
    /// Blocking structural defect in the slide specification; no render is attempted.
    #[error("structural error: {0}")]
    Structural(String),

    /// The grid, as configured, cannot produce a positive cell dimension.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// A declared region exceeds the grid extents.
    #[error("bounds error: {0}")]
    Bounds(String),

    /// One renderer strategy could not complete; recovered by the orchestrator.
    #[error("render error: {0}")]
    Render(String),

    /// Every configured strategy raised. A configuration defect, not a user-facing condition.
    #[error("all render strategies failed: {}", .0.join("; "))]
    Aggregate(Vec<String>),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DecklineError {
    /// Build a [`DecklineError::Structural`] value.
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::Structural(msg.into())
    }

    /// Build a [`DecklineError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`DecklineError::Bounds`] value.
    pub fn bounds(msg: impl Into<String>) -> Self {
        Self::Bounds(msg.into())
    }

    /// Build a [`DecklineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DecklineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
