//! Action-to-policy tables

use serde::{Deserialize, Serialize};

/// What a request tries to do. The transport layer maps HTTP verbs onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    List,
    Create,
    Retrieve,
    Update,
    PartialUpdate,
    Destroy,
    /// `POST /projects/:id/add_contributor`
    AddContributor,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::List,
        Action::Create,
        Action::Retrieve,
        Action::Update,
        Action::PartialUpdate,
        Action::Destroy,
        Action::AddContributor,
    ];

    /// Update, partial update and destroy
    pub fn is_mutating(&self) -> bool {
        matches!(self, Action::Update | Action::PartialUpdate | Action::Destroy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Create => "create",
            Action::Retrieve => "retrieve",
            Action::Update => "update",
            Action::PartialUpdate => "partial_update",
            Action::Destroy => "destroy",
            Action::AddContributor => "add_contributor",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource family a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    User,
    Project,
    Issue,
    Comment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::User,
        ResourceKind::Project,
        ResourceKind::Issue,
        ResourceKind::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Project => "project",
            ResourceKind::Issue => "issue",
            ResourceKind::Comment => "comment",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gate applied before an instance is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionRule {
    /// Anyone, including anonymous actors
    Open,
    AdminOnly,
    Authenticated,
    /// Authenticated and a contributor of the owning project
    ProjectContributor,
}

/// Gate applied to a loaded instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceRule {
    PassThrough,
    /// The instance is the actor's own account, or the actor is admin
    SelfOrAdmin,
    /// The actor wrote the instance, or the actor is admin
    AuthorOrAdmin,
}

/// Collection-level policy table
pub fn collection_rule(kind: ResourceKind, action: Action) -> CollectionRule {
    use Action::*;
    use ResourceKind::*;

    match (kind, action) {
        (User, Create) => CollectionRule::Open,
        (User, List) => CollectionRule::AdminOnly,
        (User, _) => CollectionRule::Authenticated,
        (Project, _) => CollectionRule::Authenticated,
        (Issue | Comment, Create | Retrieve | Update | PartialUpdate) => {
            CollectionRule::ProjectContributor
        }
        (Issue | Comment, List | Destroy | AddContributor) => CollectionRule::Authenticated,
    }
}

/// Instance-level policy table
pub fn instance_rule(kind: ResourceKind, action: Action) -> InstanceRule {
    match kind {
        ResourceKind::User => InstanceRule::SelfOrAdmin,
        ResourceKind::Project | ResourceKind::Issue | ResourceKind::Comment => {
            if action.is_mutating() {
                InstanceRule::AuthorOrAdmin
            } else {
                InstanceRule::PassThrough
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_table() {
        assert_eq!(collection_rule(ResourceKind::User, Action::Create), CollectionRule::Open);
        assert_eq!(collection_rule(ResourceKind::User, Action::List), CollectionRule::AdminOnly);
        assert_eq!(
            collection_rule(ResourceKind::User, Action::Retrieve),
            CollectionRule::Authenticated
        );
        for action in Action::ALL {
            assert_eq!(instance_rule(ResourceKind::User, action), InstanceRule::SelfOrAdmin);
        }
    }

    #[test]
    fn test_issue_and_comment_table() {
        for kind in [ResourceKind::Issue, ResourceKind::Comment] {
            assert_eq!(collection_rule(kind, Action::List), CollectionRule::Authenticated);
            assert_eq!(collection_rule(kind, Action::Destroy), CollectionRule::Authenticated);
            for action in [Action::Create, Action::Retrieve, Action::Update, Action::PartialUpdate] {
                assert_eq!(collection_rule(kind, action), CollectionRule::ProjectContributor);
            }
        }
    }

    #[test]
    fn test_mutations_require_author() {
        for kind in [ResourceKind::Project, ResourceKind::Issue, ResourceKind::Comment] {
            assert_eq!(instance_rule(kind, Action::Update), InstanceRule::AuthorOrAdmin);
            assert_eq!(instance_rule(kind, Action::PartialUpdate), InstanceRule::AuthorOrAdmin);
            assert_eq!(instance_rule(kind, Action::Destroy), InstanceRule::AuthorOrAdmin);
            assert_eq!(instance_rule(kind, Action::Retrieve), InstanceRule::PassThrough);
        }
        assert_eq!(
            instance_rule(ResourceKind::Project, Action::AddContributor),
            InstanceRule::PassThrough
        );
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::PartialUpdate).unwrap();
        assert_eq!(json, "\"partial_update\"");
        let back: Action = serde_json::from_str("\"add_contributor\"").unwrap();
        assert_eq!(back, Action::AddContributor);
    }
}
