pub mod descriptor;
pub mod positional;
pub mod segments;
pub mod variant;

pub use crate::domain::model::{DataElement, FieldVector, Segment};
pub use crate::domain::ports::LayoutStrategy;
pub use crate::utils::error::Result;
