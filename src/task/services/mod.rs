//! Orchestration services for task tracking.

pub mod tracking;

pub use tracking::{
    CreateTaskRequest, TaskTrackingError, TaskTrackingResult, TaskTrackingService,
    UpdateTaskRequest,
};
