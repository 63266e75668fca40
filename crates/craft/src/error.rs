#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("optimization needs at least two departments, got {count}")]
    NotEnoughDepartments { count: usize },

    #[error("invalid optimizer options: {message}")]
    InvalidOptions { message: String },

    #[error("layout cost is not finite: {cost}")]
    NonFiniteCost { cost: f64 },

    #[error(transparent)]
    Facility(#[from] floorplan_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
