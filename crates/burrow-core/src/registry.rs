pub mod memory;

use crate::record::MappingRecord;
use crate::shortcode::ShortCode;

/// Authoritative store of short code to [`MappingRecord`] mappings.
///
/// Every operation is atomic with respect to the others. None of them can
/// fail: an unknown code is reported as `None`/`false` or ignored.
pub trait Registry: Send + Sync + 'static {
    /// Inserts a new record with zero clicks, stamped with the current time.
    ///
    /// Callers must make sure `code` is not taken yet. If it is, the
    /// existing record is replaced.
    fn create(&self, code: &ShortCode, original_url: &str);

    /// Inserts a new record only if `code` is free.
    /// Returns `true` if the record was inserted.
    fn create_if_absent(&self, code: &ShortCode, original_url: &str) -> bool;

    /// Returns a snapshot of the record for a given short code.
    /// Returns `None` if the code does not exist.
    fn get(&self, code: &ShortCode) -> Option<MappingRecord>;

    /// Checks whether a short code already exists in the registry.
    fn exists(&self, code: &ShortCode) -> bool;

    /// Adds one click to the record. Unknown codes are ignored.
    fn increment_click(&self, code: &ShortCode);

    /// Number of stored mappings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
