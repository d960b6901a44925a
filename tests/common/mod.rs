mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from quicktask for tests
pub use quicktask::{
    ApiClient, ApiError, AuthRepository, Credentials, FileSessionStore, NewTask, Registration,
    Role, Route, Session, SessionStore, StatusFilter, Task, TaskDraft, TaskList, TaskRepository,
    TaskStatus, TaskUpdate, User, UserRepository, resolve,
};
