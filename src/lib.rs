pub mod builder;
pub mod config;
pub mod curve;
pub mod decompose;
pub mod error;
pub mod geometry_utilities;
pub mod path;
pub mod point_index;
pub mod shapes;
pub mod svg;

pub use crate::curve::Curve;
pub use crate::error::{LoadError, ParseError};
pub use crate::path::{Path, PathCommand};
pub use crate::point_index::{IndexedPoint, PointType};
