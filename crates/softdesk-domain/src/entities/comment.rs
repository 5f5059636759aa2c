//! Comment entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CommentId, IssueId, UserId};

/// Data for a comment about to be posted
#[derive(Debug, Clone)]
pub struct NewComment {
    pub issue: IssueId,
    pub description: String,
    pub author: UserId,
}

impl NewComment {
    pub fn validate(&self) -> DomainResult<()> {
        Comment::validate_description(&self.description)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommentChanges {
    pub description: Option<String>,
}

/// Comment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    issue: IssueId,
    description: String,
    author: UserId,
    created_time: DateTime<Utc>,
}

impl Comment {
    pub fn from_new(id: CommentId, new: NewComment) -> Self {
        Self {
            id,
            issue: new.issue,
            description: new.description,
            author: new.author,
            created_time: Utc::now(),
        }
    }

    fn validate_description(description: &str) -> DomainResult<()> {
        if description.trim().is_empty() {
            return Err(DomainError::validation(
                "description",
                "This field may not be blank.",
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn issue(&self) -> IssueId {
        self.issue
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    pub fn apply(&mut self, changes: CommentChanges) -> DomainResult<()> {
        if let Some(description) = changes.description {
            Self::validate_description(&description)?;
            self.description = description;
        }
        Ok(())
    }
}
