//! Reconciles the local store with the remote snapshot.
//!
//! The local store always wins as the rendered truth: a refresh merges the
//! remote list on top of the cache (additive, never deleting local-only
//! records) and then re-reads the store, whether or not the fetch succeeded.

use crate::{RemoteClient, RemoteFetchError};

use roster_core::User;
use roster_db::{Result as DbErrorResult, UserRepository};

use std::sync::Arc;

use log::{info, warn};

/// Where the published view came from.
#[derive(Debug)]
pub enum RefreshSource {
    /// The remote fetch succeeded and was merged before the re-read.
    Remote,
    /// The remote fetch failed; the view is the cache as-is.
    CacheFallback { cause: RemoteFetchError },
}

/// The result of a refresh: the current view plus its freshness.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub source: RefreshSource,
    pub users: Vec<User>,
}

impl RefreshOutcome {
    pub fn is_fresh(&self) -> bool {
        matches!(self.source, RefreshSource::Remote)
    }
}

/// One-way sync from the remote feed into the local store.
///
/// Concurrent `refresh()` calls are not deduplicated or serialized; callers
/// that need exactly-once semantics must avoid overlapping refreshes.
pub struct SyncCoordinator {
    store: Arc<UserRepository>,
    remote: RemoteClient,
}

impl SyncCoordinator {
    pub fn new(store: Arc<UserRepository>, remote: RemoteClient) -> Self {
        Self { store, remote }
    }

    /// Best-effort refresh.
    ///
    /// Remote failures are never returned: the outcome degrades to
    /// [`RefreshSource::CacheFallback`] carrying the cause, and the cached
    /// view is published unchanged. Store errors DO propagate.
    pub async fn refresh(&self) -> DbErrorResult<RefreshOutcome> {
        match self.remote.fetch_customers().await {
            Ok(customers) => {
                // Additive merge: overwrite matching ids, keep everything else
                self.store.bulk_upsert(&customers).await?;
                let users = self.store.find_all().await?;
                info!("refreshed directory from remote: {} records merged", customers.len());

                Ok(RefreshOutcome {
                    source: RefreshSource::Remote,
                    users,
                })
            }
            Err(cause) => {
                warn!("remote fetch failed, serving cached directory: {cause}");
                let users = self.store.find_all().await?;

                Ok(RefreshOutcome {
                    source: RefreshSource::CacheFallback { cause },
                    users,
                })
            }
        }
    }
}
