use crate::Generator;
use burrow_core::error::{CoreError, Result};
use burrow_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// Minimum number of counter digits in a generated code.
const COUNTER_WIDTH: usize = 6;

/// A sequential short code generator.
///
/// Produces `<prefix><counter>` codes like "bw000000", "bw000001", etc.
/// Within one instance the candidates never repeat, which makes it handy
/// for deterministic setups and tests.
///
/// The prefix is checked up front so that every code the counter can reach,
/// up to `u64::MAX`, is a valid [`ShortCode`] and can be looked up again.
#[derive(Debug)]
pub struct SeqGenerator {
    next: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a generator counting from zero.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self> {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator whose first code uses `offset` as its counter.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Result<Self> {
        let prefix = prefix.into();
        Self::check_prefix(&prefix)?;

        Ok(Self {
            next: AtomicU64::new(offset),
            prefix,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn check_prefix(prefix: &str) -> Result<()> {
        ShortCode::new(Self::format_code(prefix, u64::MAX))
            .map(|_| ())
            .map_err(|err| {
                CoreError::InvalidShortCode(format!("unusable generator prefix '{prefix}': {err}"))
            })
    }

    fn format_code(prefix: &str, n: u64) -> String {
        format!("{prefix}{n:0width$}", width = COUNTER_WIDTH)
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(Self::format_code(&self.prefix, n))
    }
}
