//! SoftDesk Persistence Layer
//!
//! Repository implementations for the domain ports.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Infrastructure Layer                        │
//! │  memory/InMemoryStore                                         │
//! │    users │ contributors │ projects │ issues │ comments        │
//! │    (one RwLock: each repository call is one transaction)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              ▲ implements
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain: UserRepository, ContributorRepository,              │
//! │  ProjectRepository, IssueRepository, CommentRepository       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use softdesk_persistence::InMemoryStore;
//! use softdesk_domain::Store;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
//! ```

pub mod error;
pub mod memory;

pub use error::PersistenceError;
pub use memory::InMemoryStore;
