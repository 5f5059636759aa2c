//! In-memory issue table

use async_trait::async_trait;
use softdesk_domain::{ContributorId, DomainError, DomainResult, Issue, IssueId, IssueRepository, NewIssue};

use super::{InMemoryStore, StoreState};
use crate::error::PersistenceError;

impl StoreState {
    fn require_contributor(&self, id: ContributorId) -> DomainResult<()> {
        if self.contributors.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::validation(
                "contributor",
                format!("Invalid pk \"{id}\" - object does not exist."),
            ))
        }
    }

    fn ensure_assignable(&self, issue: &Issue) -> DomainResult<()> {
        let project = self
            .projects
            .get(&issue.project())
            .ok_or_else(|| PersistenceError::not_found("Project", issue.project()))?;
        Issue::ensure_assignable(project, issue.contributor())
    }
}

#[async_trait]
impl IssueRepository for InMemoryStore {
    async fn create_issue(&self, issue: NewIssue) -> DomainResult<Issue> {
        issue.validate()?;

        let mut state = self.state.write();
        if !state.projects.contains_key(&issue.project) {
            return Err(PersistenceError::not_found("Project", issue.project).into());
        }
        state.require_user(issue.author)?;

        let contributor = match issue.contributor {
            Some(id) => {
                state.require_contributor(id)?;
                id
            }
            None => state.get_or_create_contributor(issue.author)?.id(),
        };

        let id = state.next_issue_id();
        let issue = Issue::from_new(id, issue, contributor);
        state.ensure_assignable(&issue)?;
        state.issues.insert(id, issue.clone());
        Ok(issue)
    }

    async fn find_issue(&self, id: IssueId) -> DomainResult<Option<Issue>> {
        Ok(self.state.read().issues.get(&id).cloned())
    }

    async fn list_issues(&self) -> DomainResult<Vec<Issue>> {
        Ok(self.state.read().issues.values().cloned().collect())
    }

    async fn update_issue(&self, issue: &Issue) -> DomainResult<()> {
        let mut state = self.state.write();
        if !state.issues.contains_key(&issue.id()) {
            return Err(PersistenceError::not_found("Issue", issue.id()).into());
        }
        state.require_contributor(issue.contributor())?;
        state.ensure_assignable(issue)?;
        state.issues.insert(issue.id(), issue.clone());
        Ok(())
    }

    async fn delete_issue(&self, id: IssueId) -> DomainResult<()> {
        let mut state = self.state.write();
        if !state.issues.contains_key(&id) {
            return Err(PersistenceError::not_found("Issue", id).into());
        }
        let comments = state.remove_issue_cascade(id);
        tracing::debug!(issue = %id, comments, "Issue deleted with comments");
        Ok(())
    }
}
