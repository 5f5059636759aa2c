//! In-memory contributor table

use async_trait::async_trait;
use softdesk_domain::{Contributor, ContributorId, ContributorRepository, DomainResult, UserId};

use super::InMemoryStore;

#[async_trait]
impl ContributorRepository for InMemoryStore {
    async fn get_or_create_contributor(&self, user: UserId) -> DomainResult<Contributor> {
        let mut state = self.state.write();
        Ok(state.get_or_create_contributor(user)?)
    }

    async fn find_contributor(&self, id: ContributorId) -> DomainResult<Option<Contributor>> {
        Ok(self.state.read().contributors.get(&id).cloned())
    }

    async fn find_contributor_by_user(&self, user: UserId) -> DomainResult<Option<Contributor>> {
        let state = self.state.read();
        Ok(state
            .contributor_by_user
            .get(&user)
            .and_then(|id| state.contributors.get(id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::memory::fixtures;

    #[tokio::test]
    async fn test_get_or_create_reuses_row() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let first = store.get_or_create_contributor(alice.id()).await.unwrap();
        let second = store.get_or_create_contributor(alice.id()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.user(), alice.id());
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let store = InMemoryStore::new();
        assert!(store.get_or_create_contributor(UserId::new(42)).await.is_err());
        assert!(store.find_contributor_by_user(UserId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_get_or_create_yields_one_row() {
        let store = Arc::new(InMemoryStore::new());
        let alice = fixtures::user(&store, "alice").await;

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                let user = alice.id();
                tokio::spawn(async move { store.get_or_create_contributor(user).await.unwrap() })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id());
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);
        assert_eq!(store.state.read().contributors.len(), 1);
    }
}
