use thiserror::Error;

/// Errors surfaced by rasterization and its input validation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RasterError {
    #[error("radius {radius} must be between 0 and {max}")]
    InvalidRadius { radius: i64, max: i64 },

    #[error("curve has zero length and no usable direction")]
    DegenerateCurve,

    #[error("malformed tangent '{0}': expected a number or 'vertical'")]
    MalformedTangent(String),

    #[error("parameter '{0}' must be finite")]
    NonFinite(&'static str),

    #[error("parameter '{param}' out of range [{min}, {max}]: got {got}")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },

    #[error("curve needs {requested} samples, limit is {max}")]
    TooManySamples { requested: u64, max: u64 },

    #[error("band width {width} must be between 1 and {max}")]
    InvalidWidth { width: u32, max: u32 },

    #[error("path has no cells")]
    EmptyPath,

    #[error("line {line}: expected three integers, got '{content}'")]
    MalformedCoordinates { line: usize, content: String },

    #[error("invalid request json: {0}")]
    Json(String),
}

impl RasterError {
    /// Stable machine-readable code, used by bindings that cannot carry the enum.
    pub fn code(&self) -> &'static str {
        match self {
            RasterError::InvalidRadius { .. } => "invalid_radius",
            RasterError::DegenerateCurve => "degenerate_curve",
            RasterError::MalformedTangent(_) => "malformed_tangent",
            RasterError::NonFinite(_) => "non_finite",
            RasterError::OutOfRange { .. } => "out_of_range",
            RasterError::TooManySamples { .. } => "too_many_samples",
            RasterError::InvalidWidth { .. } => "invalid_width",
            RasterError::EmptyPath => "empty_path",
            RasterError::MalformedCoordinates { .. } => "malformed_coordinates",
            RasterError::Json(_) => "invalid_json",
        }
    }
}

impl From<serde_json::Error> for RasterError {
    fn from(e: serde_json::Error) -> Self {
        RasterError::Json(e.to_string())
    }
}
