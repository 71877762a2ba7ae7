use thiserror::Error;

/// Error for pagination parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("offset must be greater than or equal to 0, got {0}")]
    NegativeOffset(i64),

    #[error("limit must be between 0 and {max}, got {actual}")]
    LimitOutOfRange { max: i64, actual: i64 },
}

/// Offset/limit window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;

    /// Build a page, falling back to defaults for absent values.
    ///
    /// # Errors
    /// * `NegativeOffset` - Offset below zero
    /// * `LimitOutOfRange` - Limit below zero or above `MAX_LIMIT`
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Result<Self, PageError> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);

        if offset < 0 {
            return Err(PageError::NegativeOffset(offset));
        }
        if !(0..=Self::MAX_LIMIT).contains(&limit) {
            return Err(PageError::LimitOutOfRange {
                max: Self::MAX_LIMIT,
                actual: limit,
            });
        }

        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
