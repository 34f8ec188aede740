pub mod task;
pub mod user;

pub use task::{Task, TaskInput, DEFAULT_PRIORITY};
pub use user::{User, UserSummary};
