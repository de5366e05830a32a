use thiserror::Error;

/// Raised when a region drawn from the fixed supported set has no loadable
/// backing data. Unsupported regions never produce this error; they are
/// reported as "no metadata" instead. An unreadable record for a supported
/// region is a packaging defect, not a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Short number metadata for supported region {0} could not be read")]
pub struct MetadataUnreadableError(pub String);
