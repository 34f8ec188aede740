//! Persistence for users and tasks.
//!
//! Each store is a thin, cloneable wrapper over the shared `SqlitePool`. Stores
//! know nothing about callers or ownership; those checks live in the handlers.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
