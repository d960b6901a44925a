pub mod core;

pub use crate::core::api::{
    ApiClient, ApiError, AuthRepository, Credentials, LoginResponse, NewTask, Registration, Role,
    Task, TaskRepository, TaskStatus, TaskUpdate, User, UserRepository,
};
pub use crate::core::form::TaskDraft;
pub use crate::core::list::{StatusFilter, TaskList};
pub use crate::core::route::{Access, Route, resolve};
pub use crate::core::session::{FileSessionStore, Session, SessionStore};

#[cfg(feature = "gui")]
pub mod gui;
