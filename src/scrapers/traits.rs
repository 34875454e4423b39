use crate::models::RawCard;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for rendered-page providers
/// The poll loop only needs raw listing cards for a search URL, so the
/// pipeline can be driven by synthetic cards in tests instead of a real browser
#[async_trait]
pub trait FragmentProvider: Send + Sync {
    /// Fetch the rendered page at `url` and return its listing cards.
    /// An empty list means no listings appeared within the bounded wait.
    async fn fetch(&self, url: &str) -> Result<Vec<RawCard>>;

    /// Get the name of the provider source
    fn source_name(&self) -> &'static str;
}
