//! Property tests over the whole policy table

use proptest::prelude::*;
use proptest::sample::select;
use softdesk_domain::UserId;
use softdesk_permissions::*;

fn any_action() -> impl Strategy<Value = Action> {
    select(Action::ALL.to_vec())
}

fn any_kind() -> impl Strategy<Value = ResourceKind> {
    select(ResourceKind::ALL.to_vec())
}

fn any_scope() -> impl Strategy<Value = ProjectScope> {
    select(vec![
        ProjectScope::Unresolved,
        ProjectScope::Member,
        ProjectScope::NonMember,
    ])
}

proptest! {
    /// Anonymous actors only ever get to register
    #[test]
    fn test_anonymous_only_registers(kind in any_kind(), action in any_action(), scope in any_scope()) {
        let decision = Authorizer::authorize(&Actor::Anonymous, kind, action, scope, None);
        let expected = kind == ResourceKind::User && action == Action::Create;
        prop_assert_eq!(decision.is_allowed(), expected);
    }

    /// The instance gate never lets a non-owner, non-admin mutate anything
    #[test]
    fn test_non_owner_cannot_mutate(kind in any_kind(), owner in 1u64..1000, actor in 1000u64..2000) {
        let target = InstanceTarget::new(kind, UserId::new(owner));
        let actor = Actor::user(UserId::new(actor));
        for action in [Action::Update, Action::PartialUpdate, Action::Destroy] {
            prop_assert_eq!(Authorizer::check_instance(&actor, action, &target), AccessDecision::Deny);
        }
    }

    /// Admins pass every instance gate
    #[test]
    fn test_admin_passes_instance_gate(kind in any_kind(), action in any_action(), owner in 1u64..1000) {
        let target = InstanceTarget::new(kind, UserId::new(owner));
        let admin = Actor::admin(UserId::new(5000));
        prop_assert_eq!(Authorizer::check_instance(&admin, action, &target), AccessDecision::Allow);
    }

    /// Without membership, nobody reaches an issue or comment through the
    /// contributor-gated actions
    #[test]
    fn test_contributor_gate_fails_closed(
        kind in select(vec![ResourceKind::Issue, ResourceKind::Comment]),
        action in select(vec![Action::Create, Action::Retrieve, Action::Update, Action::PartialUpdate]),
        scope in select(vec![ProjectScope::Unresolved, ProjectScope::NonMember]),
        is_admin in any::<bool>(),
    ) {
        let actor = Actor::Authenticated { user_id: UserId::new(1), is_admin };
        prop_assert_eq!(
            Authorizer::check_collection(&actor, kind, action, scope),
            AccessDecision::Deny
        );
    }
}
