//! In-memory comment table

use async_trait::async_trait;
use softdesk_domain::{Comment, CommentId, CommentRepository, DomainResult, NewComment};

use super::InMemoryStore;
use crate::error::PersistenceError;

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        comment.validate()?;

        let mut state = self.state.write();
        if !state.issues.contains_key(&comment.issue) {
            return Err(PersistenceError::not_found("Issue", comment.issue).into());
        }
        state.require_user(comment.author)?;

        let id = state.next_comment_id()?;
        let comment = Comment::from_new(id, comment);
        state.comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.state.read().comments.get(&id).cloned())
    }

    async fn list_comments(&self) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<_> = self.state.read().comments.values().cloned().collect();
        comments.sort_by_key(|c| (c.created_time(), c.id()));
        Ok(comments)
    }

    async fn update_comment(&self, comment: &Comment) -> DomainResult<()> {
        let mut state = self.state.write();
        match state.comments.get_mut(&comment.id()) {
            Some(stored) => {
                *stored = comment.clone();
                Ok(())
            }
            None => Err(PersistenceError::not_found("Comment", comment.id()).into()),
        }
    }

    async fn delete_comment(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.write();
        state
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PersistenceError::not_found("Comment", id).into())
    }
}

#[cfg(test)]
mod tests {
    use softdesk_domain::{DomainError, IssueId, IssueRepository, IssueTag, NewIssue, Priority};

    use super::*;
    use crate::memory::fixtures;

    #[tokio::test]
    async fn test_comment_on_missing_issue_rejected() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let err = store
            .create_comment(NewComment {
                issue: IssueId::new(5),
                description: "hello".into(),
                author: alice.id(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound { .. }));
    }

    #[tokio::test]
    async fn test_comments_get_unique_random_ids() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let project = fixtures::project(&store, "Alpha", &alice).await;
        let issue = store
            .create_issue(NewIssue {
                project: project.id(),
                name: "Typo".into(),
                description: String::new(),
                priority: Priority::Low,
                tag: IssueTag::Task,
                author: alice.id(),
                contributor: None,
            })
            .await
            .unwrap();

        let mut ids = Vec::new();
        for i in 0..20 {
            let comment = store
                .create_comment(NewComment {
                    issue: issue.id(),
                    description: format!("note {i}"),
                    author: alice.id(),
                })
                .await
                .unwrap();
            ids.push(comment.id());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(store.list_comments().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let store = InMemoryStore::new();
        assert!(store.delete_comment(CommentId::new()).await.is_err());
    }
}
