//! In-memory adapters for the task module.

mod tasks;

pub use tasks::InMemoryTaskRepository;
