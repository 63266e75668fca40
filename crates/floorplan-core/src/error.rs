pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] floorgraph::Error),

    #[error("invalid department label {label:?}: labels must be non-empty and must not contain '.'")]
    BadLabel { label: String },

    #[error("department {label:?} needs at least 3 boundary points, got {count}")]
    InsufficientPoints { label: String, count: usize },

    #[error("department {label:?} has non-finite coordinates")]
    NonFiniteCoordinates { label: String },

    #[error("department {label:?} has a zero-area boundary")]
    DegeneratePolygon { label: String },

    #[error("point {name:?} ({x}, {y}) is not strictly inside department {label:?}")]
    PointOutsidePolygon {
        label: String,
        name: String,
        x: f64,
        y: f64,
    },

    #[error("department {label:?} already has a point named {name:?} or at the same coordinates")]
    NameCollision { label: String, name: String },

    #[error("facility bounds must be positive and finite, got ({max_x}, {max_y})")]
    NonPositiveBounds { max_x: f64, max_y: f64 },

    #[error("department {label:?} does not fit into the facility bounds ({max_x}, {max_y})")]
    OutOfBounds { label: String, max_x: f64, max_y: f64 },

    #[error("department {label:?} is already registered")]
    DuplicateDepartment { label: String },

    #[error("unknown department: {label:?}")]
    UnknownDepartment { label: String },

    #[error("transport quantity must be an integer, got {value:?}")]
    NonIntegerQuantity { value: String },

    #[error("timestamp {value:?} does not match the format YYYY-MM-DD HH:MM:SS")]
    MalformedTimestamp { value: String },

    #[error("date range starts after it ends ({from} > {to})")]
    InvalidDateRange { from: String, to: String },
}
