//! API request and response models
//!
//! Request bodies accept missing fields so a missing field is reported as a
//! field-level validation error rather than a parse failure.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use softdesk_application::dto::{
    AddContributorCommand, CommentDto, CommentFilter, ContributorDto, CreateCommentCommand,
    CreateIssueCommand, CreateProjectCommand, IssueDetailDto, IssueFilter, IssueSummaryDto,
    LoginCommand, ProjectDetailDto, ProjectFilter, ProjectSummaryDto, RegisterUserCommand,
    TokenDto, UpdateCommentCommand, UpdateIssueCommand, UpdateProjectCommand, UpdateUserCommand,
    UserDto,
};
use softdesk_domain::{ContributorId, IssueId, IssueTag, Priority, ProjectId, ProjectType};

use crate::error::{ApiError, ApiResult};

pub const API_PREFIX: &str = "/api/v1";

fn required<T>(field: &str, value: Option<T>) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::required(field))
}

fn issue_link(id: IssueId) -> String {
    format!("{API_PREFIX}/issues/{id}")
}

fn comment_link(id: impl std::fmt::Display) -> String {
    format!("{API_PREFIX}/comments/{id}")
}

// ============================================================================
// Auth and users
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_command(self) -> ApiResult<LoginCommand> {
        Ok(LoginCommand {
            username: required("username", self.username)?,
            password: required("password", self.password)?,
        })
    }
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<TokenDto> for TokenResponse {
    fn from(dto: TokenDto) -> Self {
        Self {
            access_token: dto.access_token,
            token_type: dto.token_type,
            expires_at: dto.expires_at,
            user: dto.user.into(),
        }
    }
}

/// Registration, full and partial account updates
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserRequest {
    pub username: Option<String>,
    /// Write-only
    pub password: Option<String>,
    /// Confirmation, must equal `password`
    pub password2: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub can_be_contacted: Option<bool>,
    pub can_data_be_shared: Option<bool>,
}

impl UserRequest {
    pub fn into_register(self) -> ApiResult<RegisterUserCommand> {
        Ok(RegisterUserCommand {
            username: required("username", self.username)?,
            password: required("password", self.password)?,
            password2: required("password2", self.password2)?,
            birth_date: required("birth_date", self.birth_date)?,
            can_be_contacted: self.can_be_contacted.unwrap_or(false),
            can_data_be_shared: self.can_data_be_shared.unwrap_or(false),
        })
    }

    pub fn into_update(self) -> UpdateUserCommand {
        UpdateUserCommand {
            username: self.username,
            password: self.password,
            password2: self.password2,
            birth_date: self.birth_date,
            can_be_contacted: self.can_be_contacted,
            can_data_be_shared: self.can_data_be_shared,
        }
    }
}

/// Account view; the password is never returned
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub birth_date: NaiveDate,
    pub can_be_contacted: bool,
    pub can_data_be_shared: bool,
    pub is_admin: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id.get(),
            username: dto.username,
            birth_date: dto.birth_date,
            can_be_contacted: dto.can_be_contacted,
            can_data_be_shared: dto.can_data_be_shared,
            is_admin: dto.is_admin,
            date_joined: dto.date_joined,
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

/// Project create, full and partial update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `Back-end`, `Front-end`, `iOS` or `Android`
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub project_type: Option<ProjectType>,
}

impl ProjectRequest {
    pub fn into_create(self) -> ApiResult<CreateProjectCommand> {
        Ok(CreateProjectCommand {
            name: required("name", self.name)?,
            description: self.description.unwrap_or_default(),
            project_type: required("type", self.project_type)?,
        })
    }

    pub fn into_update(self) -> UpdateProjectCommand {
        UpdateProjectCommand {
            name: self.name,
            description: self.description,
            project_type: self.project_type,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddContributorRequest {
    pub username: Option<String>,
}

impl From<AddContributorRequest> for AddContributorCommand {
    fn from(request: AddContributorRequest) -> Self {
        Self {
            username: request.username,
        }
    }
}

/// Project listing filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectQuery {
    #[serde(rename = "type")]
    #[param(value_type = Option<String>)]
    pub project_type: Option<ProjectType>,
    pub name: Option<String>,
}

impl From<ProjectQuery> for ProjectFilter {
    fn from(query: ProjectQuery) -> Self {
        Self {
            project_type: query.project_type,
            name: query.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectListItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
}

impl From<ProjectSummaryDto> for ProjectListItem {
    fn from(dto: ProjectSummaryDto) -> Self {
        Self {
            id: dto.id.get(),
            name: dto.name,
            description: dto.description,
            project_type: dto.project_type.as_str().to_string(),
        }
    }
}

/// Member of a project, or the assignee of an issue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContributorResponse {
    /// Contributor record id
    pub id: u64,
    pub user: u64,
    pub username: String,
}

impl From<ContributorDto> for ContributorResponse {
    fn from(dto: ContributorDto) -> Self {
        Self {
            id: dto.id.get(),
            user: dto.user.get(),
            username: dto.username,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub author: u64,
    pub author_username: String,
    pub contributors: Vec<ContributorResponse>,
    pub created_time: DateTime<Utc>,
    /// Links to the project's issues
    pub issues: Vec<String>,
}

impl From<ProjectDetailDto> for ProjectDetailResponse {
    fn from(dto: ProjectDetailDto) -> Self {
        Self {
            id: dto.id.get(),
            name: dto.name,
            description: dto.description,
            project_type: dto.project_type.as_str().to_string(),
            author: dto.author.get(),
            author_username: dto.author_username,
            contributors: dto.contributors.into_iter().map(Into::into).collect(),
            created_time: dto.created_time,
            issues: dto.issues.into_iter().map(issue_link).collect(),
        }
    }
}

// ============================================================================
// Issues
// ============================================================================

/// Issue create, full and partial update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IssueRequest {
    pub project: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `Low`, `Medium` or `High`
    #[schema(value_type = Option<String>)]
    pub priority: Option<Priority>,
    /// `BUG`, `Feature` or `Task`
    #[schema(value_type = Option<String>)]
    pub tag: Option<IssueTag>,
    /// Contributor record id; defaults to the author on creation
    pub contributor: Option<u64>,
}

impl IssueRequest {
    pub fn into_create(self) -> ApiResult<CreateIssueCommand> {
        Ok(CreateIssueCommand {
            project: ProjectId::new(required("project", self.project)?),
            name: required("name", self.name)?,
            description: self.description.unwrap_or_default(),
            priority: required("priority", self.priority)?,
            tag: required("tag", self.tag)?,
            contributor: self.contributor.map(ContributorId::new),
        })
    }

    pub fn into_update(self) -> UpdateIssueCommand {
        UpdateIssueCommand {
            project: self.project.map(ProjectId::new),
            name: self.name,
            description: self.description,
            priority: self.priority,
            tag: self.tag,
            contributor: self.contributor.map(ContributorId::new),
        }
    }
}

/// Issue listing filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IssueQuery {
    #[param(value_type = Option<String>)]
    pub tag: Option<IssueTag>,
    pub name: Option<String>,
    #[param(value_type = Option<String>)]
    pub priority: Option<Priority>,
    pub project: Option<u64>,
}

impl From<IssueQuery> for IssueFilter {
    fn from(query: IssueQuery) -> Self {
        Self {
            tag: query.tag,
            name: query.name,
            priority: query.priority,
            project: query.project.map(ProjectId::new),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueListItem {
    pub id: u64,
    pub name: String,
    pub project: u64,
    pub priority: String,
    pub tag: String,
    pub link: String,
}

impl From<IssueSummaryDto> for IssueListItem {
    fn from(dto: IssueSummaryDto) -> Self {
        Self {
            id: dto.id.get(),
            name: dto.name,
            project: dto.project.get(),
            priority: dto.priority.as_str().to_string(),
            tag: dto.tag.as_str().to_string(),
            link: issue_link(dto.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueDetailResponse {
    pub id: u64,
    pub project: u64,
    pub name: String,
    pub description: String,
    pub priority: String,
    pub tag: String,
    pub author: u64,
    pub contributor: ContributorResponse,
    pub created_time: DateTime<Utc>,
    /// Links to the issue's comments
    pub comments: Vec<String>,
}

impl From<IssueDetailDto> for IssueDetailResponse {
    fn from(dto: IssueDetailDto) -> Self {
        Self {
            id: dto.id.get(),
            project: dto.project.get(),
            name: dto.name,
            description: dto.description,
            priority: dto.priority.as_str().to_string(),
            tag: dto.tag.as_str().to_string(),
            author: dto.author.get(),
            contributor: dto.contributor.into(),
            created_time: dto.created_time,
            comments: dto.comments.into_iter().map(comment_link).collect(),
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

/// Comment create and update. Any `author` sent by the client is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub issue: Option<u64>,
    pub description: Option<String>,
}

impl CommentRequest {
    pub fn into_create(self) -> ApiResult<CreateCommentCommand> {
        Ok(CreateCommentCommand {
            issue: IssueId::new(required("issue", self.issue)?),
            description: required("description", self.description)?,
        })
    }

    pub fn into_update(self) -> UpdateCommentCommand {
        UpdateCommentCommand {
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentQuery {
    pub issue: Option<u64>,
}

impl From<CommentQuery> for CommentFilter {
    fn from(query: CommentQuery) -> Self {
        Self {
            issue: query.issue.map(IssueId::new),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub issue: u64,
    pub description: String,
    pub author: u64,
    pub author_username: String,
    pub created_time: DateTime<Utc>,
    pub link: String,
}

impl From<CommentDto> for CommentResponse {
    fn from(dto: CommentDto) -> Self {
        Self {
            id: dto.id.to_string(),
            issue: dto.issue.get(),
            description: dto.description,
            author: dto.author.get(),
            author_username: dto.author_username,
            created_time: dto.created_time,
            link: comment_link(dto.id),
        }
    }
}

// ============================================================================
// Health
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Seconds since start-up
    pub uptime: u64,
}
