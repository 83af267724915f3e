pub type Result<T> = std::result::Result<T, Error>;

/// Configuration-integrity failures.
///
/// Placement itself never fails; these only surface when a layout that code depends on is absent
/// or malformed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step `{step_id}` has no ring layout configured")]
    MissingRingConfig { step_id: String },

    #[error("ring layout must define at least one ring")]
    EmptyRingConfig,

    #[error(
        "ring `{ring_id}` has radius {radius}; radii must be positive and strictly ascending from inner to outer"
    )]
    RingRadiiNotAscending { ring_id: String, radius: f64 },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("invalid {what}: {value}")]
    InvalidDimension { what: String, value: f64 },

    #[error("layout configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
