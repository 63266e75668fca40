#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("vertex {label:?} requires coordinates but none were passed")]
    MissingCoordinates { label: String },

    #[error("vertex {label:?} has non-finite coordinates")]
    NonFiniteCoordinates { label: String },

    #[error("the graph does not store coordinates for its vertices")]
    GraphHasNoCoordinates,

    #[error("vertex {label:?} already exists")]
    DuplicateLabel { label: String },

    #[error("a vertex already exists at ({x}, {y})")]
    DuplicateCoordinates { x: f64, y: f64 },

    #[error("vertex not found: {label:?}")]
    VertexNotFound { label: String },

    #[error("edge not found: {from:?} -> {to:?}")]
    EdgeNotFound { from: String, to: String },

    #[error("self loops are not supported (vertex {label:?})")]
    SelfLoopNotSupported { label: String },

    #[error("invalid edge weight: {weight:?}")]
    InvalidWeight { weight: Option<f64> },

    #[error("renaming would give two vertices the label {label:?}")]
    LabelCollision { label: String },
}

pub type Result<T> = std::result::Result<T, Error>;
