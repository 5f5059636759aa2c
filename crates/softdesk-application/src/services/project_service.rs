//! Project Application Service
//!
//! Project lifecycle and membership. Every lookup is visibility-scoped: a
//! project the actor cannot see behaves as if it did not exist.

use std::sync::Arc;

use softdesk_domain::{NewProject, Project, ProjectChanges, ProjectId, Store};
use softdesk_permissions::{Action, Actor, InstanceTarget, ProjectScope, ResourceKind};

use super::access::{contributor_dto, enforce, require_authenticated, username_of, Visibility};
use crate::dto::{
    AddContributorCommand, CreateProjectCommand, ProjectDetailDto, ProjectFilter,
    ProjectSummaryDto, UpdateMode, UpdateProjectCommand,
};
use crate::errors::{ApplicationError, ApplicationResult};

pub struct ProjectService {
    store: Arc<dyn Store>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a project authored by the actor, who becomes its first contributor
    pub async fn create(&self, actor: &Actor, cmd: CreateProjectCommand) -> ApplicationResult<ProjectDetailDto> {
        enforce(actor, ResourceKind::Project, Action::Create, ProjectScope::Unresolved, None)?;
        let author = require_authenticated(actor)?;

        let project = self
            .store
            .create_project(NewProject {
                name: cmd.name,
                description: cmd.description,
                project_type: cmd.project_type,
                author,
            })
            .await?;
        tracing::info!(project = %project.id(), name = %project.name(), author = %author, "Project created");
        self.detail(&project).await
    }

    pub async fn list(&self, actor: &Actor, filter: &ProjectFilter) -> ApplicationResult<Vec<ProjectSummaryDto>> {
        enforce(actor, ResourceKind::Project, Action::List, ProjectScope::Unresolved, None)?;
        let visibility = Visibility::of(self.store.as_ref(), actor).await?;
        Ok(visibility
            .projects(self.store.as_ref())
            .await?
            .iter()
            .filter(|p| filter.matches(p))
            .map(ProjectSummaryDto::from_domain)
            .collect())
    }

    pub async fn get(&self, actor: &Actor, id: ProjectId) -> ApplicationResult<ProjectDetailDto> {
        let project = self.load(actor, id, Action::Retrieve).await?;
        self.detail(&project).await
    }

    /// Full (PUT) or partial (PATCH) update, author or admin only
    pub async fn update(
        &self,
        actor: &Actor,
        id: ProjectId,
        mode: UpdateMode,
        cmd: UpdateProjectCommand,
    ) -> ApplicationResult<ProjectDetailDto> {
        self.load(actor, id, mode.action()).await?;
        mode.require("name", &cmd.name)?;
        mode.require("type", &cmd.project_type)?;

        let project = self
            .store
            .update_project(
                id,
                ProjectChanges {
                    name: cmd.name,
                    description: cmd.description,
                    project_type: cmd.project_type,
                },
            )
            .await?;
        tracing::info!(project = %id, ?mode, "Project updated");
        self.detail(&project).await
    }

    /// Add a user, by username, to the member set. Re-adding is a no-op.
    pub async fn add_contributor(
        &self,
        actor: &Actor,
        id: ProjectId,
        cmd: AddContributorCommand,
    ) -> ApplicationResult<ProjectDetailDto> {
        self.load(actor, id, Action::AddContributor).await?;

        let username = cmd
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApplicationError::validation("username", "Username is required"))?;
        let user = self
            .store
            .find_user_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", &username))?;

        let project = self.store.add_project_contributor(id, user.id()).await?;
        tracing::info!(project = %id, user = %user.id(), "Contributor added");
        self.detail(&project).await
    }

    /// Delete the project with its issues and comments
    pub async fn delete(&self, actor: &Actor, id: ProjectId) -> ApplicationResult<()> {
        self.load(actor, id, Action::Destroy).await?;
        self.store.delete_project(id).await?;
        tracing::info!(project = %id, "Project deleted");
        Ok(())
    }

    /// Load a visible project and run both gates for `action`
    async fn load(&self, actor: &Actor, id: ProjectId, action: Action) -> ApplicationResult<Project> {
        enforce(actor, ResourceKind::Project, action, ProjectScope::Unresolved, None)?;
        let visibility = Visibility::of(self.store.as_ref(), actor).await?;
        let project = self
            .store
            .find_project(id)
            .await?
            .filter(|p| visibility.can_see(p))
            .ok_or_else(|| ApplicationError::not_found("Project", id))?;

        let target = InstanceTarget::new(ResourceKind::Project, project.author());
        enforce(actor, ResourceKind::Project, action, ProjectScope::Unresolved, Some(&target))?;
        Ok(project)
    }

    async fn detail(&self, project: &Project) -> ApplicationResult<ProjectDetailDto> {
        let store = self.store.as_ref();

        let mut contributors = Vec::with_capacity(project.contributors().len());
        for id in project.contributors() {
            contributors.push(contributor_dto(store, *id).await?);
        }

        let mut issues: Vec<_> = store
            .list_issues()
            .await?
            .iter()
            .filter(|i| i.project() == project.id())
            .map(|i| i.id())
            .collect();
        issues.sort();

        Ok(ProjectDetailDto {
            id: project.id(),
            name: project.name().to_string(),
            description: project.description().to_string(),
            project_type: project.project_type(),
            author: project.author(),
            author_username: username_of(store, project.author()).await?,
            contributors,
            created_time: project.created_time(),
            issues,
        })
    }
}
