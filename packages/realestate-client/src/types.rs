use serde::Deserialize;

/// Query filter understood by the listings endpoint.
///
/// Forwarded unchanged as the `filter` query parameter; the endpoint owns
/// the literal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListingFilter {
    #[default]
    All,
    Rent,
    Buy,
}

impl ListingFilter {
    /// The literal query value the endpoint expects for this filter.
    pub fn query_value(self) -> &'static str {
        match self {
            ListingFilter::All => "all",
            ListingFilter::Rent => "rent",
            ListingFilter::Buy => "buy",
        }
    }
}

/// Whether a listing is offered for rent or for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Buy,
    /// Any type literal the endpoint adds that this client does not know.
    #[serde(other)]
    Unknown,
}

/// A single property listing returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub img_src: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    /// Absent for some listing types; rentals quote a monthly figure.
    pub price: Option<f64>,
}
