use thiserror::Error;

/// Errors raised by the URL store and its persistence path.
///
/// A lookup miss is not an error; it is reported as `None`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The persisted source is not a well-formed code-to-url document.
    #[error("can't decode mapping: {0}")]
    Decode(String),
    /// The persisted source could not be opened or read.
    #[error("can't read mapping source: {0}")]
    Io(String),
    /// The persisted sink could not be written.
    #[error("can't write mapping: {0}")]
    Write(String),
}
