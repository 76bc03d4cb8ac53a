use burrow_core::{MappingRecord, Registry, ShortCode, Shortener, ShortenerError, UrlStats};
use burrow_generator::Generator;
use std::sync::Arc;
use tracing::{debug, warn};

/// How many candidates are tried before giving up on an allocation.
pub const MAX_ATTEMPTS: usize = 10;

/// The allocator: a concrete implementation of the `Shortener` trait.
///
/// It wraps a [`Registry`] and a [`Generator`]. Each allocation draws up to
/// [`MAX_ATTEMPTS`] candidates and registers the first one that is free.
/// The check and the insert happen in one [`Registry::create_if_absent`]
/// call, so two concurrent allocations can never claim the same code.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    registry: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Registry, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with the given generator.
    pub fn new(registry: R, generator: G) -> Self {
        Self::with_registry(Arc::new(registry), generator)
    }

    /// Creates a new `ShortenerService` on top of a registry that is
    /// shared with other owners.
    pub fn with_registry(registry: Arc<R>, generator: G) -> Self {
        Self {
            registry,
            generator: Arc::new(generator),
        }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }
}

impl<R: Registry, G: Generator> Shortener for ShortenerService<R, G> {
    fn allocate(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate: ShortCode = self.generator.generate().into();

            if self.registry.create_if_absent(&candidate, original_url) {
                debug!(code = %candidate, attempt, "allocated short code");
                return Ok(candidate);
            }

            debug!(code = %candidate, attempt, "short code collision");
        }

        warn!(attempts = MAX_ATTEMPTS, "short code allocation exhausted");
        Err(ShortenerError::AllocationExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    fn lookup(&self, code: &ShortCode) -> Option<MappingRecord> {
        self.registry.get(code)
    }

    fn record_click(&self, code: &ShortCode) {
        self.registry.increment_click(code);
    }

    fn stats(&self, code: &ShortCode) -> Option<UrlStats> {
        self.registry.get(code).map(UrlStats::from)
    }

    fn link_count(&self) -> usize {
        self.registry.len()
    }
}
