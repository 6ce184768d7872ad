//! Pure REST client for the real-estate listings endpoint.
//!
//! A minimal client for fetching property listings filtered by rent/buy.
//! Stateless: each call is a single GET with no retries, safe to share and
//! reuse across calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use realestate_client::{ListingFilter, RealEstateClient};
//!
//! let client = RealEstateClient::new(realestate_client::DEFAULT_BASE_URL);
//!
//! let listings = client.fetch_listings(ListingFilter::Rent).await?;
//! for listing in &listings {
//!     println!("{} {:?}", listing.id, listing.price);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ClientError, Result};
pub use types::{Listing, ListingFilter, ListingType};

/// Endpoint host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://mars.udacity.com";

pub struct RealEstateClient {
    http: reqwest::Client,
    base_url: String,
}

impl RealEstateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the listings matching `filter`, in the order the endpoint
    /// returns them.
    ///
    /// A record that fails field-level decoding fails the whole call; the
    /// endpoint has no per-record recovery.
    pub async fn fetch_listings(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        let url = format!("{}/realestate", self.base_url);
        tracing::debug!(filter = filter.query_value(), "Requesting listings");

        let resp = self
            .http
            .get(&url)
            .query(&[("filter", filter.query_value())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        // Decode from text rather than resp.json() so transport failures and
        // schema failures surface as distinct variants.
        let body = resp.text().await?;
        let listings: Vec<Listing> = serde_json::from_str(&body)?;

        tracing::info!(
            count = listings.len(),
            filter = filter.query_value(),
            "Fetched listings"
        );
        Ok(listings)
    }
}
