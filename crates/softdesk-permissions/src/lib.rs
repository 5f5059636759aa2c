//! Authorization engine for SoftDesk
//!
//! Pure decision functions mapping `(actor, action, resource)` to allow/deny.
//! Two layers run in order: the collection gate (before an instance exists,
//! or for listings) and the instance gate (once the target is loaded). Both
//! must allow; a collection denial short-circuits the instance gate.

pub mod actor;
pub mod checker;
pub mod policy;

pub use actor::Actor;
pub use checker::{AccessDecision, Authorizer, InstanceTarget, ProjectScope};
pub use policy::{Action, CollectionRule, InstanceRule, ResourceKind};
