pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::FintsConfig;
pub use crate::core::{
    descriptor::{DescriptorLayout, FieldDescriptor, FieldValue},
    positional::PositionalLayout,
    variant::{resolve_tan, TanVariant, VariantKey},
};
pub use crate::domain::model::{DataElement, FieldVector, Segment};
pub use crate::domain::ports::LayoutStrategy;
pub use crate::utils::error::{Result, SegmentError};
