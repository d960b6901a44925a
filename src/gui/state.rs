use crate::core::{api::ApiClient, session::SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// The single notification surface. Whatever screen is active renders at
/// most one of these as a dismissible banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug)]
pub struct AppState {
    pub api: ApiClient,
    pub session_store: Box<dyn SessionStore>,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(api: ApiClient, session_store: impl SessionStore + 'static) -> Self {
        Self {
            api,
            session_store: Box::new(session_store),
            notice: None,
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
