//! Comment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use softdesk_domain::{CommentId, IssueId, UserId};

/// New comment; the author is always the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentCommand {
    pub issue: IssueId,
    pub description: String,
}

/// Only the description of a comment can change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentCommand {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentFilter {
    pub issue: Option<IssueId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: CommentId,
    pub issue: IssueId,
    pub description: String,
    pub author: UserId,
    pub author_username: String,
    pub created_time: DateTime<Utc>,
}
