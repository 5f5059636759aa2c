//! Issue entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{validate_name, Project};
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{ContributorId, IssueId, IssueTag, Priority, ProjectId, UserId};

/// Data for an issue about to be filed
///
/// `contributor: None` means "assign the author".
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub project: ProjectId,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub tag: IssueTag,
    pub author: UserId,
    pub contributor: Option<ContributorId>,
}

impl NewIssue {
    pub fn validate(&self) -> DomainResult<()> {
        validate_name("name", &self.name)
    }
}

/// Field changes for an update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct IssueChanges {
    pub project: Option<ProjectId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub tag: Option<IssueTag>,
    pub contributor: Option<ContributorId>,
}

/// Issue entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    project: ProjectId,
    name: String,
    description: String,
    priority: Priority,
    tag: IssueTag,
    author: UserId,
    contributor: ContributorId,
    created_time: DateTime<Utc>,
}

impl Issue {
    /// Materialize a stored issue with its resolved assignee
    pub fn from_new(id: IssueId, new: NewIssue, contributor: ContributorId) -> Self {
        Self {
            id,
            project: new.project,
            name: new.name,
            description: new.description,
            priority: new.priority,
            tag: new.tag,
            author: new.author,
            contributor,
            created_time: Utc::now(),
        }
    }

    /// The assigned contributor must belong to the issue's project.
    pub fn ensure_assignable(project: &Project, contributor: ContributorId) -> DomainResult<()> {
        if project.has_member(contributor) {
            Ok(())
        } else {
            Err(DomainError::validation(
                "contributor",
                format!(
                    "Contributor {contributor} is not a member of project {}.",
                    project.id()
                ),
            ))
        }
    }

    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tag(&self) -> IssueTag {
        self.tag
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn contributor(&self) -> ContributorId {
        self.contributor
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    /// Apply field changes. Membership of the resulting contributor in the
    /// resulting project is checked by the store inside the write transaction.
    pub fn apply(&mut self, changes: IssueChanges) -> DomainResult<()> {
        if let Some(name) = &changes.name {
            validate_name("name", name)?;
        }
        if let Some(project) = changes.project {
            self.project = project;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(tag) = changes.tag {
            self.tag = tag;
        }
        if let Some(contributor) = changes.contributor {
            self.contributor = contributor;
        }
        Ok(())
    }
}
