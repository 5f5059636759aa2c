//! In-Memory Store
//!
//! Thread-safe in-memory implementation of every domain repository. All
//! tables sit behind a single `RwLock`, so each repository call runs under
//! one lock acquisition and is atomic with respect to concurrent requests.

mod comment_repository;
mod contributor_repository;
mod issue_repository;
mod project_repository;
mod user_repository;

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use softdesk_domain::{
    Comment, CommentId, Contributor, ContributorId, Issue, IssueId, Project, ProjectId, User,
    UserId,
};

use crate::error::PersistenceError;

/// Attempts at drawing an unused random comment id
const COMMENT_ID_ATTEMPTS: usize = 8;

#[derive(Debug, Default)]
struct Sequences {
    user: u64,
    contributor: u64,
    project: u64,
    issue: u64,
}

impl Sequences {
    fn next(counter: &mut u64) -> u64 {
        *counter += 1;
        *counter
    }
}

/// All tables; only touched while holding the store lock
#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    contributors: BTreeMap<ContributorId, Contributor>,
    contributor_by_user: HashMap<UserId, ContributorId>,
    projects: BTreeMap<ProjectId, Project>,
    issues: BTreeMap<IssueId, Issue>,
    comments: HashMap<CommentId, Comment>,
    sequences: Sequences,
}

impl StoreState {
    fn next_user_id(&mut self) -> UserId {
        UserId::new(Sequences::next(&mut self.sequences.user))
    }

    fn next_project_id(&mut self) -> ProjectId {
        ProjectId::new(Sequences::next(&mut self.sequences.project))
    }

    fn next_issue_id(&mut self) -> IssueId {
        IssueId::new(Sequences::next(&mut self.sequences.issue))
    }

    fn next_comment_id(&self) -> Result<CommentId, PersistenceError> {
        (0..COMMENT_ID_ATTEMPTS)
            .map(|_| CommentId::new())
            .find(|id| !self.comments.contains_key(id))
            .ok_or_else(|| PersistenceError::ConcurrencyConflict("comment id space".into()))
    }

    fn require_user(&self, id: UserId) -> Result<&User, PersistenceError> {
        self.users
            .get(&id)
            .ok_or_else(|| PersistenceError::not_found("User", id))
    }

    /// One contributor per user, created on first use
    fn get_or_create_contributor(&mut self, user: UserId) -> Result<Contributor, PersistenceError> {
        self.require_user(user)?;
        if let Some(id) = self.contributor_by_user.get(&user) {
            if let Some(existing) = self.contributors.get(id) {
                return Ok(existing.clone());
            }
        }

        let id = ContributorId::new(Sequences::next(&mut self.sequences.contributor));
        let contributor = Contributor::new(id, user);
        self.contributors.insert(id, contributor.clone());
        self.contributor_by_user.insert(user, id);
        tracing::debug!(user = %user, contributor = %id, "Registered contributor");
        Ok(contributor)
    }

    fn project_name_taken(&self, name: &str, except: Option<ProjectId>) -> bool {
        self.projects
            .values()
            .any(|p| p.name() == name && Some(p.id()) != except)
    }

    fn remove_issue_cascade(&mut self, id: IssueId) -> usize {
        if self.issues.remove(&id).is_none() {
            return 0;
        }
        let before = self.comments.len();
        self.comments.retain(|_, comment| comment.issue() != id);
        before - self.comments.len()
    }
}

/// Thread-safe in-memory store implementing every repository port
///
/// # Example
///
/// ```ignore
/// use softdesk_persistence::InMemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(InMemoryStore::new());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Row counts `(users, projects, issues, comments)`, for tests and health output
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let state = self.state.read();
        (
            state.users.len(),
            state.projects.len(),
            state.issues.len(),
            state.comments.len(),
        )
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use softdesk_domain::{NewProject, NewUser, Project, ProjectRepository, ProjectType, User, UserRepository};

    use super::InMemoryStore;

    pub async fn user(store: &InMemoryStore, username: &str) -> User {
        store
            .insert_user(NewUser {
                username: username.to_string(),
                password_hash: "hash".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                can_be_contacted: false,
                can_data_be_shared: false,
                is_admin: false,
            })
            .await
            .unwrap()
    }

    pub async fn project(store: &InMemoryStore, name: &str, author: &User) -> Project {
        store
            .create_project(NewProject {
                name: name.to_string(),
                description: String::new(),
                project_type: ProjectType::Backend,
                author: author.id(),
            })
            .await
            .unwrap()
    }
}
