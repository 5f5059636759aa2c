//! Value objects representing immutable domain concepts

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a store-assigned sequential identifier.
macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Raw numeric value
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

sequential_id!(
    /// User identifier
    UserId
);
sequential_id!(
    /// Contributor (project membership record) identifier
    ContributorId
);
sequential_id!(
    /// Project identifier
    ProjectId
);
sequential_id!(
    /// Issue identifier
    IssueId
);

/// Comment identifier
///
/// Random rather than sequential so comment URLs cannot be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(uuid::Uuid);

impl CommentId {
    /// Generate a new random comment ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl From<uuid::Uuid> for CommentId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform a project targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Back-end")]
    Backend,
    #[serde(rename = "Front-end")]
    Frontend,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "Android")]
    Android,
}

impl ProjectType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Backend => "Back-end",
            ProjectType::Frontend => "Front-end",
            ProjectType::Ios => "iOS",
            ProjectType::Android => "Android",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueTag {
    #[serde(rename = "BUG")]
    Bug,
    Feature,
    Task,
}

impl IssueTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueTag::Bug => "BUG",
            IssueTag::Feature => "Feature",
            IssueTag::Task => "Task",
        }
    }
}

impl fmt::Display for IssueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_serialize_as_numbers() {
        let json = serde_json::to_string(&ProjectId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ProjectId = serde_json::from_str("7").unwrap();
        assert_eq!(back.get(), 7);
    }

    #[test]
    fn test_comment_ids_are_distinct() {
        assert_ne!(CommentId::new(), CommentId::new());
    }

    #[test]
    fn test_comment_id_parse() {
        let id = CommentId::new();
        assert_eq!(CommentId::from_string(&id.to_string()).unwrap(), id);
        assert!(CommentId::from_string("12").is_err());
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(serde_json::to_string(&ProjectType::Backend).unwrap(), "\"Back-end\"");
        assert_eq!(serde_json::to_string(&ProjectType::Ios).unwrap(), "\"iOS\"");
        assert_eq!(serde_json::to_string(&IssueTag::Bug).unwrap(), "\"BUG\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");

        let tag: IssueTag = serde_json::from_str("\"Feature\"").unwrap();
        assert_eq!(tag, IssueTag::Feature);
        assert!(serde_json::from_str::<ProjectType>("\"Backend\"").is_err());
    }
}
