//! Comment Application Service

use std::collections::HashSet;
use std::sync::Arc;

use softdesk_domain::{Comment, CommentChanges, CommentId, IssueId, NewComment, Store};
use softdesk_permissions::{Action, Actor, InstanceTarget, ProjectScope, ResourceKind};

use super::access::{enforce, project_scope, require_authenticated, username_of, Visibility};
use crate::dto::{CommentDto, CommentFilter, CreateCommentCommand, UpdateCommentCommand, UpdateMode};
use crate::errors::{ApplicationError, ApplicationResult};

pub struct CommentService {
    store: Arc<dyn Store>,
}

impl CommentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Comment on an issue of a project the actor contributes to. The author
    /// is always the actor.
    pub async fn create(&self, actor: &Actor, cmd: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        let author = require_authenticated(actor)?;
        let scope = self.issue_scope(actor, cmd.issue).await?;
        enforce(actor, ResourceKind::Comment, Action::Create, scope, None)?;

        let comment = self
            .store
            .create_comment(NewComment {
                issue: cmd.issue,
                description: cmd.description,
                author,
            })
            .await?;
        tracing::info!(comment = %comment.id(), issue = %comment.issue(), author = %author, "Comment posted");
        self.view(&comment).await
    }

    /// Comments on issues of every project the actor can see
    pub async fn list(&self, actor: &Actor, filter: &CommentFilter) -> ApplicationResult<Vec<CommentDto>> {
        enforce(actor, ResourceKind::Comment, Action::List, ProjectScope::Unresolved, None)?;
        let visibility = Visibility::of(self.store.as_ref(), actor).await?;
        let projects: HashSet<_> = visibility
            .projects(self.store.as_ref())
            .await?
            .iter()
            .map(|p| p.id())
            .collect();
        let issues: HashSet<_> = self
            .store
            .list_issues()
            .await?
            .iter()
            .filter(|i| projects.contains(&i.project()))
            .map(|i| i.id())
            .collect();

        let mut views = Vec::new();
        for comment in self.store.list_comments().await? {
            if issues.contains(&comment.issue()) && filter.issue.map_or(true, |i| comment.issue() == i) {
                views.push(self.view(&comment).await?);
            }
        }
        Ok(views)
    }

    pub async fn get(&self, actor: &Actor, id: CommentId) -> ApplicationResult<CommentDto> {
        let comment = self.load(actor, id).await?;
        let scope = self.issue_scope(actor, comment.issue()).await?;
        self.authorize(actor, Action::Retrieve, scope, &comment)?;
        self.view(&comment).await
    }

    /// Change the description; any other field is fixed at creation
    pub async fn update(
        &self,
        actor: &Actor,
        id: CommentId,
        mode: UpdateMode,
        cmd: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let mut comment = self.load(actor, id).await?;
        let scope = self.issue_scope(actor, comment.issue()).await?;
        self.authorize(actor, mode.action(), scope, &comment)?;

        mode.require("description", &cmd.description)?;
        comment.apply(CommentChanges {
            description: cmd.description,
        })?;
        self.store.update_comment(&comment).await?;
        tracing::info!(comment = %id, ?mode, "Comment updated");
        self.view(&comment).await
    }

    pub async fn delete(&self, actor: &Actor, id: CommentId) -> ApplicationResult<()> {
        let comment = self.load(actor, id).await?;
        let scope = self.issue_scope(actor, comment.issue()).await?;
        self.authorize(actor, Action::Destroy, scope, &comment)?;
        self.store.delete_comment(id).await?;
        tracing::info!(comment = %id, "Comment deleted");
        Ok(())
    }

    /// Membership in the project owning `issue`; a missing issue is `Unresolved`
    async fn issue_scope(&self, actor: &Actor, issue: IssueId) -> ApplicationResult<ProjectScope> {
        match self.store.find_issue(issue).await? {
            Some(issue) => project_scope(self.store.as_ref(), actor, issue.project()).await,
            None => Ok(ProjectScope::Unresolved),
        }
    }

    async fn load(&self, actor: &Actor, id: CommentId) -> ApplicationResult<Comment> {
        require_authenticated(actor)?;
        self.store
            .find_comment(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Comment", id))
    }

    fn authorize(&self, actor: &Actor, action: Action, scope: ProjectScope, comment: &Comment) -> ApplicationResult<()> {
        let target = InstanceTarget::new(ResourceKind::Comment, comment.author());
        enforce(actor, ResourceKind::Comment, action, scope, Some(&target))
    }

    async fn view(&self, comment: &Comment) -> ApplicationResult<CommentDto> {
        Ok(CommentDto {
            id: comment.id(),
            issue: comment.issue(),
            description: comment.description().to_string(),
            author: comment.author(),
            author_username: username_of(self.store.as_ref(), comment.author()).await?,
            created_time: comment.created_time(),
        })
    }
}
