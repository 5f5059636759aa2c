//! SoftDesk Application Layer
//!
//! Use cases over the domain: each service checks the authorization engine,
//! enforces write-time invariants through the store, and maps results to DTOs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Services          │ DTOs                  │ Errors                     │
//! │  UserService       │ RegisterUserCommand   │ ApplicationError           │
//! │  AuthService       │ ProjectDetailDto      │                            │
//! │  ProjectService    │ IssueDetailDto        │                            │
//! │  IssueService      │ CommentDto            │                            │
//! │  CommentService    │ UpdateMode            │                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//!            │ asks                          │ reads/writes
//!            ▼                               ▼
//!   softdesk-permissions              softdesk-domain::Store
//! ```

pub mod dto;
pub mod errors;
pub mod services;

pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::*;
