use thiserror::Error;

/// Precondition violations raised by render list edits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("object id {id} is out of range for a render list of {len} entries")]
    InvalidObjectId { id: usize, len: usize },

    #[error("object id {0} belongs to the translation gizmo")]
    GizmoObject(usize),
}

/// Failures while reading or writing scene and terrain data.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene serialisation failed: {0}")]
    Serialisation(#[from] serde_json::Error),

    #[error("heightmap holds {actual} samples, expected {expected}")]
    HeightmapSize { expected: usize, actual: usize },
}
