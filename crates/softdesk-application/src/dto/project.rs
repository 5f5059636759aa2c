//! Project DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use softdesk_domain::{ContributorId, IssueId, Project, ProjectId, ProjectType, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectCommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub project_type: ProjectType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<ProjectType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddContributorCommand {
    pub username: Option<String>,
}

/// Exact-match listing filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub project_type: Option<ProjectType>,
    pub name: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.project_type.map_or(true, |t| project.project_type() == t)
            && self.name.as_deref().map_or(true, |n| project.name() == n)
    }
}

/// A contributor record together with its account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorDto {
    pub id: ContributorId,
    pub user: UserId,
    pub username: String,
}

/// List view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummaryDto {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
}

impl ProjectSummaryDto {
    pub fn from_domain(project: &Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_string(),
            description: project.description().to_string(),
            project_type: project.project_type(),
        }
    }
}

/// Detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetailDto {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub author: UserId,
    pub author_username: String,
    pub contributors: Vec<ContributorDto>,
    pub created_time: DateTime<Utc>,
    pub issues: Vec<IssueId>,
}
