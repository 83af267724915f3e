pub type Result<T> = std::result::Result<T, CanvasError>;

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("no {kind} with id `{id}`")]
    ItemNotFound { kind: &'static str, id: String },

    #[error("grouping needs at least two top-level notes, got {count}")]
    GroupTooSmall { count: usize },

    #[error("item `{id}` is not a group")]
    NotAGroup { id: String },

    #[error("no grid column `{id}`")]
    ColumnNotFound { id: String },

    #[error(transparent)]
    Layout(#[from] pinboard_core::Error),
}

impl CanvasError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::ItemNotFound {
            kind,
            id: id.into(),
        }
    }
}
