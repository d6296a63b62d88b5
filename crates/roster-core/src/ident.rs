//! Local id generation and id provenance.
//!
//! Remote-origin ids are pure decimal digit strings. Locally created ids are
//! a millisecond timestamp joined to a random base-36 suffix, so the two
//! shapes can never collide and a record's origin stays inferable from its
//! id alone.

use chrono::Utc;
use rand::Rng;

const LOCAL_ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Where a record's id says it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdProvenance {
    /// Pure decimal digit string, assigned by the remote source.
    Remote,
    /// Timestamp-random shape, assigned on this device.
    Local,
}

/// Generate a locally-unique id: `"{unix_millis}-{random suffix}"`.
///
/// The separator guarantees the result is never a pure digit string, so it
/// always classifies as [`IdProvenance::Local`].
pub fn generate_local_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..LOCAL_ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Classify an id by shape.
pub fn id_provenance(id: &str) -> IdProvenance {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        IdProvenance::Remote
    } else {
        IdProvenance::Local
    }
}
