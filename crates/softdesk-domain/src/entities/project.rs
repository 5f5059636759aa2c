//! Project aggregate
//!
//! A project owns its issues and carries the contributor member set. The
//! author is a member from creation and never changes.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate_name;
use crate::errors::DomainResult;
use crate::value_objects::{ContributorId, ProjectId, ProjectType, UserId};

/// Data for a project about to be created
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub author: UserId,
}

impl NewProject {
    pub fn validate(&self) -> DomainResult<()> {
        validate_name("name", &self.name)
    }
}

/// Field changes for an update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<ProjectType>,
}

/// Project aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    project_type: ProjectType,
    author: UserId,
    created_time: DateTime<Utc>,
    contributors: BTreeSet<ContributorId>,
}

impl Project {
    /// Materialize a stored project; `author_contributor` seeds the member set
    pub fn from_new(id: ProjectId, new: NewProject, author_contributor: ContributorId) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            project_type: new.project_type,
            author: new.author,
            created_time: Utc::now(),
            contributors: BTreeSet::from([author_contributor]),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    pub fn contributors(&self) -> &BTreeSet<ContributorId> {
        &self.contributors
    }

    pub fn has_member(&self, contributor: ContributorId) -> bool {
        self.contributors.contains(&contributor)
    }

    /// Whether `user` authors the project or is a member through `contributor`
    pub fn is_visible_to(&self, user: UserId, contributor: Option<ContributorId>) -> bool {
        self.author == user || contributor.is_some_and(|c| self.has_member(c))
    }

    /// Add a member. Returns `false` when already present.
    pub fn add_contributor(&mut self, contributor: ContributorId) -> bool {
        self.contributors.insert(contributor)
    }

    /// Apply changes after validating them. Name uniqueness is the store's job.
    pub fn apply(&mut self, changes: ProjectChanges) -> DomainResult<()> {
        if let Some(name) = &changes.name {
            validate_name("name", name)?;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(project_type) = changes.project_type {
            self.project_type = project_type;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::from_new(
            ProjectId::new(1),
            NewProject {
                name: "Alpha".into(),
                description: String::new(),
                project_type: ProjectType::Backend,
                author: UserId::new(1),
            },
            ContributorId::new(10),
        )
    }

    #[test]
    fn test_author_is_member_from_creation() {
        let p = project();
        assert_eq!(p.contributors().len(), 1);
        assert!(p.has_member(ContributorId::new(10)));
    }

    #[test]
    fn test_add_contributor_is_idempotent() {
        let mut p = project();
        assert!(p.add_contributor(ContributorId::new(11)));
        assert!(!p.add_contributor(ContributorId::new(11)));
        assert_eq!(p.contributors().len(), 2);
    }

    #[test]
    fn test_visibility() {
        let p = project();
        assert!(p.is_visible_to(UserId::new(1), None));
        assert!(p.is_visible_to(UserId::new(2), Some(ContributorId::new(10))));
        assert!(!p.is_visible_to(UserId::new(2), Some(ContributorId::new(99))));
        assert!(!p.is_visible_to(UserId::new(2), None));
    }

    #[test]
    fn test_apply_rejects_blank_name_without_partial_change() {
        let mut p = project();
        let err = p.apply(ProjectChanges {
            name: Some("  ".into()),
            description: Some("changed".into()),
            project_type: None,
        });
        assert!(err.is_err());
        assert_eq!(p.name(), "Alpha");
        assert_eq!(p.description(), "");
    }
}
