//! SoftDesk Domain Layer
//!
//! Entities, value objects and invariants of the issue tracker, plus the ports
//! (repository and identity-provider traits) that infrastructure crates implement.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                           │
//! ├───────────────────────────────────────────────────────────────┤
//! │  entities/          │ value_objects     │ ports / repositories │
//! │  User, Contributor  │ UserId, ProjectId │ Store (all repos)    │
//! │  Project, Issue     │ ProjectType       │ IdentityProvider     │
//! │  Comment            │ Priority, IssueTag│                      │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ownership: a [`Project`](entities::Project) owns its issues, an
//! [`Issue`](entities::Issue) owns its comments. Users and contributors are
//! shared rows owned by the store.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, DomainResult};
pub use ports::{AccessToken, IdentityProvider};
pub use repositories::{
    CommentRepository, ContributorRepository, IssueRepository, ProjectRepository, Store,
    UserRepository,
};
pub use value_objects::*;
