//! Issue Application Service
//!
//! Issues live inside a project; creating, viewing and editing them requires
//! membership of that project.

use std::collections::HashSet;
use std::sync::Arc;

use softdesk_domain::{Issue, IssueChanges, IssueId, NewIssue, Store};
use softdesk_permissions::{Action, Actor, InstanceTarget, ProjectScope, ResourceKind};

use super::access::{contributor_dto, enforce, project_scope, require_authenticated, Visibility};
use crate::dto::{
    CreateIssueCommand, IssueDetailDto, IssueFilter, IssueSummaryDto, UpdateIssueCommand,
    UpdateMode,
};
use crate::errors::{ApplicationError, ApplicationResult};

pub struct IssueService {
    store: Arc<dyn Store>,
}

impl IssueService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// File an issue in a project the actor contributes to. Without an
    /// explicit contributor the issue is assigned to the author.
    pub async fn create(&self, actor: &Actor, cmd: CreateIssueCommand) -> ApplicationResult<IssueDetailDto> {
        let author = require_authenticated(actor)?;
        let scope = project_scope(self.store.as_ref(), actor, cmd.project).await?;
        enforce(actor, ResourceKind::Issue, Action::Create, scope, None)?;

        let issue = self
            .store
            .create_issue(NewIssue {
                project: cmd.project,
                name: cmd.name,
                description: cmd.description,
                priority: cmd.priority,
                tag: cmd.tag,
                author,
                contributor: cmd.contributor,
            })
            .await?;
        tracing::info!(issue = %issue.id(), project = %issue.project(), author = %author, "Issue created");
        self.detail(&issue).await
    }

    /// Issues of every project the actor can see
    pub async fn list(&self, actor: &Actor, filter: &IssueFilter) -> ApplicationResult<Vec<IssueSummaryDto>> {
        enforce(actor, ResourceKind::Issue, Action::List, ProjectScope::Unresolved, None)?;
        let visibility = Visibility::of(self.store.as_ref(), actor).await?;
        let visible: HashSet<_> = visibility
            .projects(self.store.as_ref())
            .await?
            .iter()
            .map(|p| p.id())
            .collect();

        let mut issues: Vec<_> = self
            .store
            .list_issues()
            .await?
            .into_iter()
            .filter(|i| visible.contains(&i.project()) && filter.matches(i))
            .collect();
        issues.sort_by_key(|i| i.id());
        Ok(issues.iter().map(IssueSummaryDto::from_domain).collect())
    }

    pub async fn get(&self, actor: &Actor, id: IssueId) -> ApplicationResult<IssueDetailDto> {
        let issue = self.load(actor, id).await?;
        let scope = project_scope(self.store.as_ref(), actor, issue.project()).await?;
        self.authorize(actor, Action::Retrieve, scope, &issue)?;
        self.detail(&issue).await
    }

    /// Full (PUT) or partial (PATCH) update. Moving the issue to another
    /// project requires membership of both projects.
    pub async fn update(
        &self,
        actor: &Actor,
        id: IssueId,
        mode: UpdateMode,
        cmd: UpdateIssueCommand,
    ) -> ApplicationResult<IssueDetailDto> {
        let mut issue = self.load(actor, id).await?;

        let mut scope = project_scope(self.store.as_ref(), actor, issue.project()).await?;
        if let Some(destination) = cmd.project.filter(|p| *p != issue.project()) {
            scope = scope.and(project_scope(self.store.as_ref(), actor, destination).await?);
        }
        self.authorize(actor, mode.action(), scope, &issue)?;

        mode.require("project", &cmd.project)?;
        mode.require("name", &cmd.name)?;
        mode.require("priority", &cmd.priority)?;
        mode.require("tag", &cmd.tag)?;

        issue.apply(IssueChanges {
            project: cmd.project,
            name: cmd.name,
            description: cmd.description,
            priority: cmd.priority,
            tag: cmd.tag,
            contributor: cmd.contributor,
        })?;
        self.store.update_issue(&issue).await?;
        tracing::info!(issue = %id, project = %issue.project(), ?mode, "Issue updated");
        self.detail(&issue).await
    }

    /// Delete the issue and its comments, author or admin only
    pub async fn delete(&self, actor: &Actor, id: IssueId) -> ApplicationResult<()> {
        let issue = self.load(actor, id).await?;
        let scope = project_scope(self.store.as_ref(), actor, issue.project()).await?;
        self.authorize(actor, Action::Destroy, scope, &issue)?;
        self.store.delete_issue(id).await?;
        tracing::info!(issue = %id, "Issue deleted");
        Ok(())
    }

    async fn load(&self, actor: &Actor, id: IssueId) -> ApplicationResult<Issue> {
        require_authenticated(actor)?;
        self.store
            .find_issue(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Issue", id))
    }

    fn authorize(&self, actor: &Actor, action: Action, scope: ProjectScope, issue: &Issue) -> ApplicationResult<()> {
        let target = InstanceTarget::new(ResourceKind::Issue, issue.author());
        enforce(actor, ResourceKind::Issue, action, scope, Some(&target))
    }

    async fn detail(&self, issue: &Issue) -> ApplicationResult<IssueDetailDto> {
        let store = self.store.as_ref();
        let comments = store
            .list_comments()
            .await?
            .into_iter()
            .filter(|c| c.issue() == issue.id())
            .map(|c| c.id())
            .collect();

        Ok(IssueDetailDto {
            id: issue.id(),
            project: issue.project(),
            name: issue.name().to_string(),
            description: issue.description().to_string(),
            priority: issue.priority(),
            tag: issue.tag(),
            author: issue.author(),
            contributor: contributor_dto(store, issue.contributor()).await?,
            created_time: issue.created_time(),
            comments,
        })
    }
}
