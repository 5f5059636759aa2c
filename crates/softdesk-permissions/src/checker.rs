//! Permission checking logic

use softdesk_domain::UserId;

use crate::{
    actor::Actor,
    policy::{collection_rule, instance_rule, Action, CollectionRule, InstanceRule, ResourceKind},
};

/// Decision result from permission checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    fn from_bool(allowed: bool) -> Self {
        if allowed {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny
        }
    }
}

impl std::fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessDecision::Allow => write!(f, "allow"),
            AccessDecision::Deny => write!(f, "deny"),
        }
    }
}

/// Actor's relation to the project owning an issue or comment.
///
/// Resolved by the caller from the payload or the stored target. Anything the
/// caller could not resolve is `Unresolved`, which denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectScope {
    Unresolved,
    Member,
    NonMember,
}

impl ProjectScope {
    pub fn from_membership(is_member: bool) -> Self {
        if is_member {
            ProjectScope::Member
        } else {
            ProjectScope::NonMember
        }
    }

    /// Combine two scopes; only member + member stays a member
    pub fn and(self, other: ProjectScope) -> ProjectScope {
        match (self, other) {
            (ProjectScope::Member, ProjectScope::Member) => ProjectScope::Member,
            (ProjectScope::Unresolved, _) | (_, ProjectScope::Unresolved) => {
                ProjectScope::Unresolved
            }
            _ => ProjectScope::NonMember,
        }
    }
}

/// A loaded instance, reduced to what the instance gate needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceTarget {
    pub kind: ResourceKind,
    /// The account itself for users, the author otherwise
    pub owner: UserId,
}

impl InstanceTarget {
    pub fn new(kind: ResourceKind, owner: UserId) -> Self {
        Self { kind, owner }
    }
}

/// Stateless authorization engine
pub struct Authorizer;

impl Authorizer {
    /// Collection-level gate
    pub fn check_collection(
        actor: &Actor,
        kind: ResourceKind,
        action: Action,
        scope: ProjectScope,
    ) -> AccessDecision {
        let allowed = match collection_rule(kind, action) {
            CollectionRule::Open => true,
            CollectionRule::AdminOnly => actor.is_admin(),
            CollectionRule::Authenticated => actor.is_authenticated(),
            CollectionRule::ProjectContributor => {
                actor.is_authenticated() && scope == ProjectScope::Member
            }
        };
        AccessDecision::from_bool(allowed)
    }

    /// Instance-level gate
    pub fn check_instance(actor: &Actor, action: Action, target: &InstanceTarget) -> AccessDecision {
        if !actor.is_authenticated() {
            return AccessDecision::Deny;
        }
        let allowed = match instance_rule(target.kind, action) {
            InstanceRule::PassThrough => true,
            InstanceRule::SelfOrAdmin | InstanceRule::AuthorOrAdmin => {
                actor.is_self_or_admin(target.owner)
            }
        };
        AccessDecision::from_bool(allowed)
    }

    /// Run the collection gate, then the instance gate when a target is given
    pub fn authorize(
        actor: &Actor,
        kind: ResourceKind,
        action: Action,
        scope: ProjectScope,
        target: Option<&InstanceTarget>,
    ) -> AccessDecision {
        let collection = Self::check_collection(actor, kind, action, scope);
        if !collection.is_allowed() {
            tracing::debug!(
                actor = ?actor.user_id(),
                %kind,
                %action,
                ?scope,
                "Collection gate denied request"
            );
            return collection;
        }

        let Some(target) = target else {
            return collection;
        };

        let instance = Self::check_instance(actor, action, target);
        if !instance.is_allowed() {
            tracing::debug!(
                actor = ?actor.user_id(),
                %kind,
                %action,
                owner = %target.owner,
                "Instance gate denied request"
            );
        }
        instance
    }
}
