//! In-memory project table

use async_trait::async_trait;
use softdesk_domain::{
    DomainResult, NewProject, Project, ProjectChanges, ProjectId, ProjectRepository, UserId,
};

use super::InMemoryStore;
use crate::error::PersistenceError;

const NAME_TAKEN: &str = "Project with this name already exist";

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn create_project(&self, project: NewProject) -> DomainResult<Project> {
        project.validate()?;

        let mut state = self.state.write();
        if state.project_name_taken(&project.name, None) {
            return Err(PersistenceError::unique("name", NAME_TAKEN).into());
        }
        let author = state.get_or_create_contributor(project.author)?;
        let id = state.next_project_id();
        let project = Project::from_new(id, project, author.id());
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        Ok(self.state.read().projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        Ok(self.state.read().projects.values().cloned().collect())
    }

    async fn update_project(&self, id: ProjectId, changes: ProjectChanges) -> DomainResult<Project> {
        let mut state = self.state.write();
        if let Some(name) = &changes.name {
            if state.project_name_taken(name, Some(id)) {
                return Err(PersistenceError::unique("name", NAME_TAKEN).into());
            }
        }
        let stored = state
            .projects
            .get_mut(&id)
            .ok_or_else(|| PersistenceError::not_found("Project", id))?;
        stored.apply(changes)?;
        Ok(stored.clone())
    }

    async fn add_project_contributor(&self, project: ProjectId, user: UserId) -> DomainResult<Project> {
        let mut state = self.state.write();
        if !state.projects.contains_key(&project) {
            return Err(PersistenceError::not_found("Project", project).into());
        }
        let contributor = state.get_or_create_contributor(user)?;
        let stored = state
            .projects
            .get_mut(&project)
            .ok_or_else(|| PersistenceError::not_found("Project", project))?;
        if stored.add_contributor(contributor.id()) {
            tracing::debug!(project = %project, user = %user, "Contributor added to project");
        }
        Ok(stored.clone())
    }

    async fn delete_project(&self, id: ProjectId) -> DomainResult<()> {
        let mut state = self.state.write();
        if state.projects.remove(&id).is_none() {
            return Err(PersistenceError::not_found("Project", id).into());
        }
        let issue_ids: Vec<_> = state
            .issues
            .values()
            .filter(|issue| issue.project() == id)
            .map(|issue| issue.id())
            .collect();
        let mut comments = 0;
        for issue in &issue_ids {
            comments += state.remove_issue_cascade(*issue);
        }
        tracing::debug!(
            project = %id,
            issues = issue_ids.len(),
            comments,
            "Project deleted with dependents"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use softdesk_domain::{ContributorRepository, DomainError, ProjectType};

    use super::*;
    use crate::memory::fixtures;

    #[tokio::test]
    async fn test_author_registered_as_contributor() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let project = fixtures::project(&store, "Alpha", &alice).await;

        let contributor = store.find_contributor_by_user(alice.id()).await.unwrap().unwrap();
        assert_eq!(project.contributors().len(), 1);
        assert!(project.has_member(contributor.id()));
    }

    #[tokio::test]
    async fn test_author_contributor_reused_across_projects() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let a = fixtures::project(&store, "Alpha", &alice).await;
        let b = fixtures::project(&store, "Beta", &alice).await;
        assert_eq!(a.contributors(), b.contributors());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        fixtures::project(&store, "Alpha", &alice).await;

        let err = store
            .create_project(NewProject {
                name: "Alpha".into(),
                description: String::new(),
                project_type: ProjectType::Android,
                author: alice.id(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError { ref field, .. } if field == "name"));

        // Case-sensitive exact match only
        assert!(store
            .create_project(NewProject {
                name: "alpha".into(),
                description: String::new(),
                project_type: ProjectType::Android,
                author: alice.id(),
            })
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_keeps_own_name_but_not_others() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let alpha = fixtures::project(&store, "Alpha", &alice).await;
        fixtures::project(&store, "Beta", &alice).await;

        let updated = store
            .update_project(
                alpha.id(),
                ProjectChanges {
                    name: Some("Alpha".into()),
                    description: Some("kept name".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description(), "kept name");

        let err = store
            .update_project(
                alpha.id(),
                ProjectChanges {
                    name: Some("Beta".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError { ref field, .. } if field == "name"));
        let stored = store.find_project(alpha.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Alpha");
    }

    #[tokio::test]
    async fn test_update_keeps_members_added_after_load() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let bob = fixtures::user(&store, "bob").await;
        let alpha = fixtures::project(&store, "Alpha", &alice).await;

        // A request read the project, then bob joined before it wrote back.
        let loaded = store.find_project(alpha.id()).await.unwrap().unwrap();
        assert_eq!(loaded.contributors().len(), 1);
        store.add_project_contributor(alpha.id(), bob.id()).await.unwrap();

        let updated = store
            .update_project(
                loaded.id(),
                ProjectChanges {
                    description: Some("patched".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description(), "patched");
        assert_eq!(updated.contributors().len(), 2);

        let bob_contributor = store.find_contributor_by_user(bob.id()).await.unwrap().unwrap();
        let stored = store.find_project(alpha.id()).await.unwrap().unwrap();
        assert!(stored.has_member(bob_contributor.id()));
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let store = InMemoryStore::new();
        let err = store
            .update_project(ProjectId::new(9), ProjectChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_contributor_idempotent() {
        let store = InMemoryStore::new();
        let alice = fixtures::user(&store, "alice").await;
        let bob = fixtures::user(&store, "bob").await;
        let project = fixtures::project(&store, "Alpha", &alice).await;

        store.add_project_contributor(project.id(), bob.id()).await.unwrap();
        let project = store.add_project_contributor(project.id(), bob.id()).await.unwrap();

        assert_eq!(project.contributors().len(), 2);
        let bob_contributor = store.find_contributor_by_user(bob.id()).await.unwrap().unwrap();
        assert!(project.has_member(bob_contributor.id()));
    }

    #[tokio::test]
    async fn test_add_contributor_to_missing_project() {
        let store = InMemoryStore::new();
        let bob = fixtures::user(&store, "bob").await;
        let err = store
            .add_project_contributor(ProjectId::new(9), bob.id())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound { .. }));
    }
}
