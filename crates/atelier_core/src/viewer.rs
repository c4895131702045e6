//! The viewer on the other side of every gallery surface.

use crate::{RoleId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identity of whoever is looking at a post.
///
/// Anonymous viewers have no id and are never authors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    /// Resolved user id, if logged in
    #[serde(default)]
    pub id: Option<UserId>,
    /// Whether the identity provider flags this user as an author
    #[serde(default)]
    pub is_author: bool,
}

impl Viewer {
    /// A logged-out viewer.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in viewer.
    pub fn user(id: impl Into<UserId>) -> Self {
        Self {
            id: Some(id.into()),
            is_author: false,
        }
    }

    /// A logged-in viewer flagged as an author.
    pub fn author(id: impl Into<UserId>) -> Self {
        Self {
            id: Some(id.into()),
            is_author: true,
        }
    }
}

/// The role set held by a viewer, as resolved by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Deref)]
#[serde(transparent)]
pub struct ViewerRoles(HashSet<RoleId>);

impl ViewerRoles {
    /// An empty role set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the viewer holds the given role.
    pub fn holds(&self, role: &RoleId) -> bool {
        self.0.contains(role)
    }
}

impl<R: Into<RoleId>> FromIterator<R> for ViewerRoles {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
