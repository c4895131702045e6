//! Stable identities for media items within one editing session.

use atelier_core::RemoteId;
use std::collections::HashSet;
use uuid::Uuid;

/// Key of a local file, minted when the file enters the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct LocalKey(Uuid);

impl LocalKey {
    /// Mint a random key that is not in `taken`.
    pub(crate) fn mint(taken: &HashSet<LocalKey>) -> Self {
        loop {
            let key = LocalKey(Uuid::new_v4());
            if !taken.contains(&key) {
                return key;
            }
        }
    }
}

/// Opaque identity of one media item.
///
/// Remote tokens derive from the stored id, so seeding the same post twice
/// yields the same tokens. Local tokens are minted fresh and never reused
/// within a session, even after the item is removed.
///
/// The display form (`e:<id>`, `n:<key>`) is for logs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum MediaToken {
    /// An item the backend already stores
    #[display("e:{}", _0)]
    Remote(RemoteId),
    /// A file selected during this session
    #[display("n:{}", _0)]
    Local(LocalKey),
}

impl MediaToken {
    /// Whether this token refers to a stored item.
    pub fn is_remote(&self) -> bool {
        matches!(self, MediaToken::Remote(_))
    }

    /// Whether this token refers to a local file.
    pub fn is_local(&self) -> bool {
        matches!(self, MediaToken::Local(_))
    }
}

impl From<RemoteId> for MediaToken {
    fn from(id: RemoteId) -> Self {
        MediaToken::Remote(id)
    }
}
