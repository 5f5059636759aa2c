//! Shared authorization plumbing for the services

use softdesk_domain::{ContributorId, Project, ProjectId, Store, UserId};
use softdesk_permissions::{
    AccessDecision, Action, Actor, Authorizer, InstanceTarget, ProjectScope, ResourceKind,
};

use crate::dto::ContributorDto;
use crate::errors::{ApplicationError, ApplicationResult};

/// Authenticated user id, or `NotAuthenticated`
pub(crate) fn require_authenticated(actor: &Actor) -> ApplicationResult<UserId> {
    actor.user_id().ok_or(ApplicationError::NotAuthenticated)
}

/// Run both gates and turn a denial into the matching error
pub(crate) fn enforce(
    actor: &Actor,
    kind: ResourceKind,
    action: Action,
    scope: ProjectScope,
    target: Option<&InstanceTarget>,
) -> ApplicationResult<()> {
    match Authorizer::authorize(actor, kind, action, scope, target) {
        AccessDecision::Allow => Ok(()),
        AccessDecision::Deny => Err(ApplicationError::denied(actor)),
    }
}

/// Actor's membership in `project`; a missing project is `Unresolved`
pub(crate) async fn project_scope(
    store: &dyn Store,
    actor: &Actor,
    project: ProjectId,
) -> ApplicationResult<ProjectScope> {
    let Some(user) = actor.user_id() else {
        return Ok(ProjectScope::NonMember);
    };
    let Some(project) = store.find_project(project).await? else {
        return Ok(ProjectScope::Unresolved);
    };
    let contributor = store.find_contributor_by_user(user).await?;
    Ok(ProjectScope::from_membership(
        contributor.is_some_and(|c| project.has_member(c.id())),
    ))
}

/// Visibility of a project: admins see everything, others what they author
/// or contribute to
pub(crate) struct Visibility {
    user: UserId,
    is_admin: bool,
    contributor: Option<ContributorId>,
}

impl Visibility {
    pub(crate) async fn of(store: &dyn Store, actor: &Actor) -> ApplicationResult<Self> {
        let user = require_authenticated(actor)?;
        let contributor = store.find_contributor_by_user(user).await?.map(|c| c.id());
        Ok(Self {
            user,
            is_admin: actor.is_admin(),
            contributor,
        })
    }

    pub(crate) fn can_see(&self, project: &Project) -> bool {
        self.is_admin || project.is_visible_to(self.user, self.contributor)
    }

    /// All projects the actor can see, in id order
    pub(crate) async fn projects(&self, store: &dyn Store) -> ApplicationResult<Vec<Project>> {
        let mut projects: Vec<_> = store
            .list_projects()
            .await?
            .into_iter()
            .filter(|p| self.can_see(p))
            .collect();
        projects.sort_by_key(|p| p.id());
        Ok(projects)
    }
}

/// Resolve a contributor record to its account for display
pub(crate) async fn contributor_dto(
    store: &dyn Store,
    id: ContributorId,
) -> ApplicationResult<ContributorDto> {
    let contributor = store
        .find_contributor(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("Contributor", id))?;
    let user = store
        .find_user(contributor.user())
        .await?
        .ok_or_else(|| ApplicationError::not_found("User", contributor.user()))?;
    Ok(ContributorDto {
        id,
        user: user.id(),
        username: user.username().to_string(),
    })
}

pub(crate) async fn username_of(store: &dyn Store, user: UserId) -> ApplicationResult<String> {
    store
        .find_user(user)
        .await?
        .map(|u| u.username().to_string())
        .ok_or_else(|| ApplicationError::not_found("User", user))
}
