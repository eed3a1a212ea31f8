use thiserror::Error;

/// Errors raised while assembling ribbon tab sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RibbonError {
    #[error("tab value \"home\" is reserved for the first tab")]
    ReservedTabValue,

    #[error("first tab must be \"home\", got \"{0}\"")]
    NotHomeTab(String),

    #[error("duplicate tab value \"{0}\"")]
    DuplicateTabValue(String),
}
