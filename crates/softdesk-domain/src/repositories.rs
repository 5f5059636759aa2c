//! Repository interfaces for data persistence
//!
//! The domain layer defines only the contracts; `softdesk-persistence`
//! provides the implementations. Every mutating method is one atomic
//! transaction: existence checks and the write that depends on them must not
//! interleave with another request.

use async_trait::async_trait;

use crate::{
    entities::{
        Comment, Contributor, Issue, NewComment, NewIssue, NewProject, NewUser, Project,
        ProjectChanges, User, UserChanges,
    },
    errors::DomainResult,
    value_objects::{CommentId, ContributorId, IssueId, ProjectId, UserId},
};

/// Repository for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a taken username is a validation failure on `username`
    async fn insert_user(&self, user: NewUser) -> DomainResult<User>;

    async fn find_user(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_user_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn list_users(&self) -> DomainResult<Vec<User>>;

    /// Apply `changes` to the stored account and return it. Fields left
    /// `None` keep their stored value; renaming onto a taken username fails
    /// validation.
    async fn update_user(&self, id: UserId, changes: UserChanges) -> DomainResult<User>;
}

/// Repository for contributor (membership) records
#[async_trait]
pub trait ContributorRepository: Send + Sync {
    /// Return the user's contributor, creating it on first use
    async fn get_or_create_contributor(&self, user: UserId) -> DomainResult<Contributor>;

    async fn find_contributor(&self, id: ContributorId) -> DomainResult<Option<Contributor>>;

    async fn find_contributor_by_user(&self, user: UserId) -> DomainResult<Option<Contributor>>;
}

/// Repository for projects
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Create a project: rejects a duplicate name, get-or-creates the author's
    /// contributor and seeds the member set with it
    async fn create_project(&self, project: NewProject) -> DomainResult<Project>;

    async fn find_project(&self, id: ProjectId) -> DomainResult<Option<Project>>;

    async fn list_projects(&self) -> DomainResult<Vec<Project>>;

    /// Apply `changes` to the stored project and return it. The member set
    /// is never touched; renaming onto another project's name fails
    /// validation.
    async fn update_project(&self, id: ProjectId, changes: ProjectChanges) -> DomainResult<Project>;

    /// Get-or-create the user's contributor and add it to the member set.
    /// Idempotent.
    async fn add_project_contributor(&self, project: ProjectId, user: UserId) -> DomainResult<Project>;

    /// Delete the project together with its issues and their comments
    async fn delete_project(&self, id: ProjectId) -> DomainResult<()>;
}

/// Repository for issues
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// File an issue. Without a contributor the author's contributor is
    /// get-or-created and assigned; an explicit contributor must be a member
    /// of the project.
    async fn create_issue(&self, issue: NewIssue) -> DomainResult<Issue>;

    async fn find_issue(&self, id: IssueId) -> DomainResult<Option<Issue>>;

    async fn list_issues(&self) -> DomainResult<Vec<Issue>>;

    /// Persist changes; the contributor must be a member of the issue's project
    async fn update_issue(&self, issue: &Issue) -> DomainResult<()>;

    /// Delete the issue together with its comments
    async fn delete_issue(&self, id: IssueId) -> DomainResult<()>;
}

/// Repository for comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Post a comment under a fresh random id; the issue must exist
    async fn create_comment(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    async fn list_comments(&self) -> DomainResult<Vec<Comment>>;

    async fn update_comment(&self, comment: &Comment) -> DomainResult<()>;

    async fn delete_comment(&self, id: CommentId) -> DomainResult<()>;
}

/// The full data store: every repository behind one transactional backend
pub trait Store:
    UserRepository + ContributorRepository + ProjectRepository + IssueRepository + CommentRepository
{
}

impl<T> Store for T where
    T: UserRepository
        + ContributorRepository
        + ProjectRepository
        + IssueRepository
        + CommentRepository
{
}
