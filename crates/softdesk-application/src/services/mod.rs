//! Application layer services
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Services                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UserService     - registration, accounts, admin bootstrap   │
//! │  AuthService     - login and bearer token resolution         │
//! │  ProjectService  - projects and their member sets            │
//! │  IssueService    - issues inside projects                    │
//! │  CommentService  - comments on issues                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation asks the authorization engine before it reads or writes.
//! Project scope (is the actor a member of the owning project?) is resolved
//! here from the store and handed to the engine, which stays pure.

mod access;
mod auth_service;
mod comment_service;
mod issue_service;
mod project_service;
mod user_service;

use std::sync::Arc;

use softdesk_domain::{IdentityProvider, Store};

pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use issue_service::IssueService;
pub use project_service::ProjectService;
pub use user_service::UserService;

/// All services over one store and one identity provider
pub struct Services {
    pub users: UserService,
    pub auth: AuthService,
    pub projects: ProjectService,
    pub issues: IssueService,
    pub comments: CommentService,
}

impl Services {
    pub fn new(store: Arc<dyn Store>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            users: UserService::new(store.clone(), identity.clone()),
            auth: AuthService::new(store.clone(), identity),
            projects: ProjectService::new(store.clone()),
            issues: IssueService::new(store.clone()),
            comments: CommentService::new(store),
        }
    }
}
