//! A plain subject for callers without their own user type.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use grc_core::traits::RoleHolder;

/// A subject identified by an optional numeric id and a set of role names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Numeric user id, recorded as the audit actor.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display-cased role names.
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl Principal {
    /// Create an anonymous principal holding `roles`.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a user id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl RoleHolder for Principal {
    fn roles(&self) -> BTreeSet<String> {
        self.roles.clone()
    }

    fn actor_id(&self) -> Option<i64> {
        self.id
    }
}
