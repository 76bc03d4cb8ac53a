use crate::error::ShortenerError;
use crate::record::{MappingRecord, UrlStats};
use crate::shortcode::ShortCode;

type Result<T> = std::result::Result<T, ShortenerError>;

/// The contract the HTTP layer relies on.
pub trait Shortener: Send + Sync + 'static {
    /// Allocates a fresh short code for an already validated URL and registers it.
    fn allocate(&self, original_url: &str) -> Result<ShortCode>;

    /// Retrieves a snapshot of the mapping for the given short code.
    /// Returns `None` if the code does not exist.
    fn lookup(&self, code: &ShortCode) -> Option<MappingRecord>;

    /// Counts one click on the short code. Unknown codes are ignored.
    fn record_click(&self, code: &ShortCode);

    /// Returns usage statistics for the short code, or `None` if it does not exist.
    fn stats(&self, code: &ShortCode) -> Option<UrlStats>;

    /// Number of mappings currently stored.
    fn link_count(&self) -> usize;
}
