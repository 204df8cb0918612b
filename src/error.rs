use thiserror::Error;

/// Top-level error type for cut-list extraction.
#[derive(Debug, Error)]
pub enum CutlistError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("parameter out of range: {0}")]
    ParameterOutOfRange(String),
}

/// Errors related to topological lookups and structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Per-body analysis failures.
///
/// These never abort an extraction; they are attached to the offending
/// body as a [`crate::cutlist::BodyWarning`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("geometry unavailable: {0}")]
    GeometryUnavailable(String),

    #[error("degenerate extent {x} x {y} x {z}")]
    DegenerateGeometry { x: f64, y: f64, z: f64 },
}

/// Invalid extraction settings, rejected before any body is analyzed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tolerance must not be negative, got {0}")]
    NegativeTolerance(f64),

    #[error("tolerance must be finite")]
    NonFiniteTolerance,

    #[error("unknown length unit: {0:?}")]
    UnknownUnit(String),
}

/// Convenience type alias for results using [`CutlistError`].
pub type Result<T> = std::result::Result<T, CutlistError>;
