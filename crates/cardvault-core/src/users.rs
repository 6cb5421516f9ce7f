//! User Directory - the static set of mock users
//!
//! The first user is the default "current user". Profiles are read-only apart
//! from like/dislike counters, where each viewer holds at most one vote per
//! profile.

use std::collections::{BTreeMap, HashSet};

use tracing::info;

use crate::error::{VaultError, VaultResult};
use crate::types::{Reaction, User, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
    /// (viewer, profile) -> vote
    reactions: BTreeMap<(UserId, UserId), Reaction>,
}

impl UserDirectory {
    /// Build a directory from a non-empty list of users with unique ids
    pub fn new(users: Vec<User>) -> VaultResult<Self> {
        if users.is_empty() {
            return Err(VaultError::InvalidDirectory("no users".to_string()));
        }

        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(&user.id) {
                return Err(VaultError::InvalidDirectory(format!(
                    "duplicate user id {}",
                    user.id
                )));
            }
        }

        Ok(Self {
            users,
            reactions: BTreeMap::new(),
        })
    }

    /// The user the session starts as
    pub fn default_user(&self) -> &User {
        &self.users[0]
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    /// Everyone except `exclude`, for gift and trade pickers
    pub fn recipients(&self, exclude: &UserId) -> Vec<&User> {
        self.users.iter().filter(|u| &u.id != exclude).collect()
    }

    /// The vote `viewer` currently holds on `profile`, if any
    pub fn reaction(&self, viewer: &UserId, profile: &UserId) -> Option<Reaction> {
        self.reactions
            .get(&(viewer.clone(), profile.clone()))
            .copied()
    }

    /// Cast a like or dislike on `profile`.
    ///
    /// Repeating the vote already held is a no-op; casting the opposite vote
    /// moves it from one counter to the other.
    pub fn toggle_user_like(
        &mut self,
        viewer: &UserId,
        profile: &UserId,
        reaction: Reaction,
    ) -> VaultResult<()> {
        let key = (viewer.clone(), profile.clone());
        let previous = self.reactions.get(&key).copied();
        if previous == Some(reaction) {
            return Ok(());
        }

        let user = self.user_mut(profile)?;
        if let Some(old) = previous {
            Self::decrement(user, old);
        }
        match reaction {
            Reaction::Like => user.likes += 1,
            Reaction::Dislike => user.dislikes += 1,
        }
        self.reactions.insert(key, reaction);

        info!(viewer = %viewer, profile = %profile, ?reaction, "Profile vote cast");
        Ok(())
    }

    /// Withdraw whatever vote `viewer` holds on `profile`
    pub fn clear_reaction(&mut self, viewer: &UserId, profile: &UserId) -> VaultResult<()> {
        let key = (viewer.clone(), profile.clone());
        let Some(old) = self.reactions.remove(&key) else {
            return Ok(());
        };
        let user = self.user_mut(profile)?;
        Self::decrement(user, old);
        Ok(())
    }

    fn user_mut(&mut self, id: &UserId) -> VaultResult<&mut User> {
        self.users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| VaultError::UserNotFound(id.to_string()))
    }

    fn decrement(user: &mut User, reaction: Reaction) {
        match reaction {
            Reaction::Like => user.likes = user.likes.saturating_sub(1),
            Reaction::Dislike => user.dislikes = user.dislikes.saturating_sub(1),
        }
    }
}
