//! Observable browse state for remote real-estate listings.
//!
//! The presentation layer subscribes to three watch channels — fetch status,
//! the current listing collection, and a pending single-item selection — and
//! drives everything else through `update_filter`, `select_listing` and
//! `clear_selection`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use browse::{FetchStatus, ListingBrowser};
//! use realestate_client::{ListingFilter, RealEstateClient};
//!
//! let client = RealEstateClient::new(realestate_client::DEFAULT_BASE_URL);
//! let browser = ListingBrowser::new(Arc::new(client));
//!
//! let mut status = browser.status();
//! status.wait_for(|s| *s != FetchStatus::Loading).await?;
//! for listing in browser.listings().borrow().iter() {
//!     println!("{}", listing.id);
//! }
//! ```

pub mod controller;
pub mod source;

pub use controller::{FetchStatus, ListingBrowser};
pub use source::ListingSource;

pub use realestate_client::{ClientError, Listing, ListingFilter, ListingType};
