use async_trait::async_trait;

use realestate_client::{ClientError, Listing, ListingFilter, RealEstateClient};

/// Anything that can produce listings for a filter.
///
/// `RealEstateClient` is the production implementation; tests substitute
/// scripted doubles. The seam exists so the browser never depends on a
/// process-wide client instance.
#[async_trait]
pub trait ListingSource: Send + Sync + 'static {
    async fn fetch_listings(&self, filter: ListingFilter)
        -> Result<Vec<Listing>, ClientError>;
}

#[async_trait]
impl ListingSource for RealEstateClient {
    async fn fetch_listings(
        &self,
        filter: ListingFilter,
    ) -> Result<Vec<Listing>, ClientError> {
        RealEstateClient::fetch_listings(self, filter).await
    }
}
