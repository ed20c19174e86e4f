use std::io::BufRead;

/// Defines the contract for reading a bootstrap data set line by line.
///
/// Implemented in `rego_core::sources` for files and in-memory text.
pub trait LineSource: Send + Sync {
    /// Human readable origin of the data, used in logs and load reports.
    fn name(&self) -> String;

    /// Opens the source for reading from its first line (the header).
    ///
    /// # Returns
    /// * `Ok(reader)` - A buffered reader positioned at the start.
    /// * `Err(_)` - The source is missing or unreadable.
    fn open(&self) -> anyhow::Result<Box<dyn BufRead + '_>>;
}
