#![forbid(unsafe_code)]

//! Factory floor model (headless).
//!
//! - [`geom`]: polygon area, centroid and strict point-in-polygon membership
//! - [`Department`]: a labelled polygon with named interior points
//! - [`FacilityState`]: bounded set of departments plus the transport graph linking their
//!   centroids, the cost matrices derived from it and department swaps
//! - [`transport`]: record validation and batch ingestion
//!
//! Graph vertices are labelled `<department>.<point>`; department labels therefore never contain
//! a `.`.

pub mod department;
pub mod error;
pub mod facility;
pub mod geom;
pub mod snapshot;
pub mod time;
pub mod transport;
pub mod view;

pub use department::{CENTROID, Department, VERTEX_DELIMITER, vertex_label};
pub use error::{Error, Result};
pub use facility::{FacilityBounds, FacilityState};
pub use geom::{Point, point};
pub use snapshot::{DepartmentSnapshot, FacilitySnapshot};
pub use transport::{
    DateRange, IngestReport, RawTransportRecord, Transport, TransportGraph, TransportOutcome,
    TransportRecord,
};
pub use view::{DepartmentView, VisualizationData};
