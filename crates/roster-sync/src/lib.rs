pub mod client;
pub mod coordinator;
pub mod error;

pub use client::remote_client::RemoteClient;
pub use coordinator::{RefreshOutcome, RefreshSource, SyncCoordinator};
pub use error::{RemoteFetchError, Result};
