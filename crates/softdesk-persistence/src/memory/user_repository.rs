//! In-memory user table

use async_trait::async_trait;
use softdesk_domain::{DomainResult, NewUser, User, UserChanges, UserId, UserRepository};

use super::InMemoryStore;
use crate::error::PersistenceError;

const USERNAME_TAKEN: &str = "A user with that username already exists.";

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_user(&self, user: NewUser) -> DomainResult<User> {
        let mut state = self.state.write();
        if state.users.values().any(|u| u.username() == user.username) {
            return Err(PersistenceError::unique("username", USERNAME_TAKEN).into());
        }
        let id = state.next_user_id();
        let user = User::from_new(id, user);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.read().users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let state = self.state.read();
        Ok(state.users.values().find(|u| u.username() == username).cloned())
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.read().users.values().cloned().collect())
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> DomainResult<User> {
        let mut state = self.state.write();
        if let Some(username) = &changes.username {
            if state.users.values().any(|u| u.username() == username && u.id() != id) {
                return Err(PersistenceError::unique("username", USERNAME_TAKEN).into());
            }
        }
        let stored = state
            .users
            .get_mut(&id)
            .ok_or_else(|| PersistenceError::not_found("User", id))?;
        stored.apply(changes)?;
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use softdesk_domain::DomainError;

    use super::*;
    use crate::memory::fixtures;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = InMemoryStore::new();
        let a = fixtures::user(&store, "alice").await;
        let b = fixtures::user(&store, "bob").await;
        assert_eq!(a.id(), UserId::new(1));
        assert_eq!(b.id(), UserId::new(2));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;

        let err = store
            .insert_user(NewUser {
                username: "alice".into(),
                password_hash: "x".into(),
                birth_date: alice.birth_date(),
                can_be_contacted: true,
                can_data_be_shared: true,
                is_admin: false,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError { ref field, .. } if field == "username"));

        // Saving a user under its own name is not a conflict.
        let rename = UserChanges {
            username: Some("alice".into()),
            ..Default::default()
        };
        assert!(store.update_user(alice.id(), rename).await.is_ok());
    }

    #[tokio::test]
    async fn test_rename_onto_taken_username_rejected() {
        let store = InMemoryStore::new();
        fixtures::user(&store, "alice").await;
        let bob = fixtures::user(&store, "bob").await;
        let rename = UserChanges {
            username: Some("alice".into()),
            ..Default::default()
        };
        assert!(store.update_user(bob.id(), rename).await.is_err());

        let stored = store.find_user(bob.id()).await.unwrap().unwrap();
        assert_eq!(stored.username(), "bob");
    }

    #[tokio::test]
    async fn test_consent_update_keeps_concurrent_promotion() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;

        let promote = UserChanges {
            is_admin: Some(true),
            ..Default::default()
        };
        store.update_user(alice.id(), promote).await.unwrap();

        // Written from a snapshot taken before the promotion.
        assert!(!alice.is_admin());
        let consents = UserChanges {
            can_be_contacted: Some(true),
            ..Default::default()
        };
        let updated = store.update_user(alice.id(), consents).await.unwrap();
        assert!(updated.is_admin());
        assert!(updated.can_be_contacted());
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let found = store.find_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id(), alice.id());
        assert!(store.find_user_by_username("Alice").await.unwrap().is_none());
    }
}
