use crate::domain::model::{FieldVector, Segment};
use crate::utils::error::Result;

/// Produces the ordered data elements of one segment type and version.
///
/// Implemented by the positional templates of legacy segments and by the
/// descriptor engine.
pub trait LayoutStrategy: Send + Sync {
    fn segment_type(&self) -> &'static str;
    fn version(&self) -> u32;
    fn layout(&self) -> Result<FieldVector>;

    /// Lay out and wrap into a numbered segment. Nothing is built on error.
    fn build(&self, number: u32) -> Result<Segment> {
        let elements = self.layout()?;
        Ok(Segment {
            segment_type: self.segment_type(),
            version: self.version(),
            number,
            elements,
        })
    }
}
