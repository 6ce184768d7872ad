//! Observable controller driving listing fetches.
//!
//! `ListingBrowser` owns three watch channels — status, listings, selection —
//! and is their only writer. Observers subscribe through `status()`,
//! `listings()` and `selection()` and are woken on every change; no polling.
//!
//! Each `update_filter` call issues an independent fetch tagged with a
//! monotonically increasing token. A fetch publishes its outcome only while
//! it is still the newest issued request, so a slow response can never
//! overwrite the result of a request issued after it.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use realestate_client::{ClientError, Listing, ListingFilter};

use crate::source::ListingSource;

/// Lifecycle of the most recent fetch attempt.
///
/// There is no separate "never fetched" state: construction issues a fetch
/// immediately, so `Loading` covers the first request too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Error,
    Done,
}

/// Channel senders plus the newest-request token, shared with fetch tasks.
///
/// All publication happens while holding `latest`, so a stale resolution and
/// a newer `begin_fetch` can never interleave their writes.
struct Shared {
    status: watch::Sender<FetchStatus>,
    listings: watch::Sender<Vec<Listing>>,
    selection: watch::Sender<Option<Listing>>,
    latest: Mutex<u64>,
}

impl Shared {
    /// Claim the next request token and publish `Loading`.
    fn begin_fetch(&self) -> u64 {
        let mut latest = self.latest.lock().expect("publish lock poisoned");
        *latest += 1;
        self.status.send_replace(FetchStatus::Loading);
        *latest
    }

    /// Publish the outcome of the fetch tagged `token`, unless a newer
    /// request has been issued since.
    fn resolve_fetch(&self, token: u64, result: Result<Vec<Listing>, ClientError>) {
        let latest = self.latest.lock().expect("publish lock poisoned");
        if *latest != token {
            tracing::debug!(token, newest = *latest, "Discarding stale listings response");
            return;
        }

        match result {
            Ok(listings) => {
                self.status.send_replace(FetchStatus::Done);
                // An empty result leaves the published collection untouched;
                // only a non-empty fetch replaces it.
                if !listings.is_empty() {
                    self.listings.send_replace(listings);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Listings fetch failed");
                self.status.send_replace(FetchStatus::Error);
                self.listings.send_replace(Vec::new());
            }
        }
    }
}

/// Observable browse state over a `ListingSource`.
///
/// Constructing a browser fetches immediately with `ListingFilter::All`;
/// callers only interact again to change the filter or to route a selection.
pub struct ListingBrowser {
    source: Arc<dyn ListingSource>,
    shared: Arc<Shared>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl ListingBrowser {
    /// Create a browser and immediately fetch with the default filter.
    ///
    /// Must be called from within a tokio runtime; fetches run as spawned
    /// tasks.
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        let shared = Arc::new(Shared {
            status: watch::channel(FetchStatus::Loading).0,
            listings: watch::channel(Vec::new()).0,
            selection: watch::channel(None).0,
            latest: Mutex::new(0),
        });
        let browser = Self {
            source,
            shared,
            in_flight: Mutex::new(Vec::new()),
        };
        browser.update_filter(ListingFilter::default());
        browser
    }

    /// Subscribe to the fetch status.
    pub fn status(&self) -> watch::Receiver<FetchStatus> {
        self.shared.status.subscribe()
    }

    /// Subscribe to the published listing collection, in endpoint order.
    pub fn listings(&self) -> watch::Receiver<Vec<Listing>> {
        self.shared.listings.subscribe()
    }

    /// Subscribe to the pending selection.
    pub fn selection(&self) -> watch::Receiver<Option<Listing>> {
        self.shared.selection.subscribe()
    }

    /// Issue a fresh fetch for `filter`.
    ///
    /// Always fetches, even when `filter` matches the previous call. `Loading`
    /// is published synchronously, before this method returns.
    pub fn update_filter(&self, filter: ListingFilter) {
        let token = self.shared.begin_fetch();

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let result = source.fetch_listings(filter).await;
            shared.resolve_fetch(token, result);
        });

        let mut in_flight = self.in_flight.lock().expect("in-flight registry poisoned");
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }

    /// Record `listing` as the pending selection and notify observers.
    ///
    /// The presentation layer navigates on it, then acknowledges with
    /// `clear_selection` so re-observing the state does not navigate again.
    pub fn select_listing(&self, listing: Listing) {
        self.shared.selection.send_replace(Some(listing));
    }

    /// Acknowledge the pending selection, publishing `None`.
    pub fn clear_selection(&self) {
        self.shared.selection.send_replace(None);
    }
}

impl Drop for ListingBrowser {
    fn drop(&mut self) {
        // Nothing should publish after the observing side is gone.
        if let Ok(mut in_flight) = self.in_flight.lock() {
            for handle in in_flight.drain(..) {
                handle.abort();
            }
        }
    }
}
