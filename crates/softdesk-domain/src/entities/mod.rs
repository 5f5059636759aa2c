//! Domain entities

mod comment;
mod contributor;
mod issue;
mod project;
mod user;

pub use comment::{Comment, CommentChanges, NewComment};
pub use contributor::Contributor;
pub use issue::{Issue, IssueChanges, NewIssue};
pub use project::{NewProject, Project, ProjectChanges};
pub use user::{age_on, NewUser, User, UserChanges, MINIMUM_AGE};

/// Maximum length of project and issue names
pub const MAX_NAME_LENGTH: usize = 128;

pub(crate) fn validate_name(field: &str, name: &str) -> crate::DomainResult<()> {
    if name.trim().is_empty() {
        return Err(crate::DomainError::validation(field, "This field may not be blank."));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(crate::DomainError::validation(
            field,
            format!("Ensure this field has no more than {MAX_NAME_LENGTH} characters."),
        ));
    }
    Ok(())
}
