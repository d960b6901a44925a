use crate::core::{api::Role, session::Session};

/// The navigable surface of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    AdminTasks,
    MemberTasks,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

impl Route {
    /// Map a path string to a route. Unknown paths land on the dashboard,
    /// where the guard sorts out whether the caller may actually see it.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/admin/tasks" => Route::AdminTasks,
            "/member/tasks" => Route::MemberTasks,
            _ => Route::Dashboard,
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::Register => Access::Public,
            Route::Dashboard => Access::Authenticated,
            Route::AdminTasks => Access::Role(Role::Admin),
            Route::MemberTasks => Access::Role(Role::Member),
        }
    }
}

/// Decide which route actually opens for a navigation request. Callers pass
/// a freshly read session so a logout elsewhere is observed here.
pub fn resolve(requested: Route, session: Option<&Session>) -> Route {
    match requested.access() {
        Access::Public => requested,
        Access::Authenticated => match session {
            Some(_) => requested,
            None => Route::Login,
        },
        Access::Role(required) => match session {
            None => Route::Login,
            Some(session) if session.role == required => requested,
            Some(_) => Route::Dashboard,
        },
    }
}
