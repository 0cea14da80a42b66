use time::Date;

use crate::blocks::BlockName;

/// All errors the generation pipeline can return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A required block never matched, or matched with blank content, when
    /// parsing a generated document. One missing block invalidates the
    /// whole agreement; there is no partial result.
    #[error("missing required block: {0}")]
    MissingBlock(BlockName),

    /// The reference date is too close to the calendar maximum for the
    /// contract term to yield a representable end date.
    #[error("contract end date out of range for effective date {0}")]
    EndDateOutOfRange(Date),
}
