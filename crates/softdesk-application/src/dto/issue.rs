//! Issue DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use softdesk_domain::{CommentId, ContributorId, Issue, IssueId, IssueTag, Priority, ProjectId, UserId};

use super::ContributorDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueCommand {
    pub project: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub tag: IssueTag,
    pub contributor: Option<ContributorId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIssueCommand {
    pub project: Option<ProjectId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub tag: Option<IssueTag>,
    pub contributor: Option<ContributorId>,
}

/// Exact-match listing filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFilter {
    pub tag: Option<IssueTag>,
    pub name: Option<String>,
    pub priority: Option<Priority>,
    pub project: Option<ProjectId>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        self.tag.map_or(true, |t| issue.tag() == t)
            && self.name.as_deref().map_or(true, |n| issue.name() == n)
            && self.priority.map_or(true, |p| issue.priority() == p)
            && self.project.map_or(true, |p| issue.project() == p)
    }
}

/// List view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSummaryDto {
    pub id: IssueId,
    pub name: String,
    pub project: ProjectId,
    pub priority: Priority,
    pub tag: IssueTag,
}

impl IssueSummaryDto {
    pub fn from_domain(issue: &Issue) -> Self {
        Self {
            id: issue.id(),
            name: issue.name().to_string(),
            project: issue.project(),
            priority: issue.priority(),
            tag: issue.tag(),
        }
    }
}

/// Detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDetailDto {
    pub id: IssueId,
    pub project: ProjectId,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub tag: IssueTag,
    pub author: UserId,
    pub contributor: ContributorDto,
    pub created_time: DateTime<Utc>,
    pub comments: Vec<CommentId>,
}
