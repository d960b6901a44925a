pub mod admin_tasks;
pub mod dashboard;
pub mod login;
pub mod member_tasks;
pub mod register;

use iced::{Element, Task};

use crate::{
    core::route::{self, Route},
    gui::{AppState, Message, state::NoticeKind},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Login(login::LoginScreen),
    Register(register::RegisterScreen),
    Dashboard(dashboard::DashboardScreen),
    AdminTasks(admin_tasks::AdminTasksScreen),
    MemberTasks(member_tasks::MemberTasksScreen),
}

impl ScreenData {
    /// Build the screen behind an already resolved route, together with its
    /// initial fetches. The dashboard needs the stored role; losing the
    /// session between resolution and here just lands on the login screen.
    pub fn open(route: Route, state: &AppState) -> (Self, Task<Message>) {
        match route {
            Route::Login => (
                ScreenData::Login(login::LoginScreen::default()),
                Task::none(),
            ),
            Route::Register => (
                ScreenData::Register(register::RegisterScreen::default()),
                Task::none(),
            ),
            Route::Dashboard => {
                let Some(session) = state.session_store.read() else {
                    return (
                        ScreenData::Login(login::LoginScreen::default()),
                        Task::none(),
                    );
                };
                (
                    ScreenData::Dashboard(dashboard::DashboardScreen::new(session.role)),
                    Task::none(),
                )
            }
            Route::AdminTasks => {
                let (screen, task) = admin_tasks::AdminTasksScreen::open(&state.api);
                (ScreenData::AdminTasks(screen), task.map(Message::AdminTasks))
            }
            Route::MemberTasks => {
                let (screen, task) = member_tasks::MemberTasksScreen::open(&state.api);
                (
                    ScreenData::MemberTasks(screen),
                    task.map(Message::MemberTasks),
                )
            }
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Login(screen) => screen.view().map(Message::Login),
            ScreenData::Register(screen) => screen.view().map(Message::Register),
            ScreenData::Dashboard(screen) => screen.view().map(Message::Dashboard),
            ScreenData::AdminTasks(screen) => screen.view().map(Message::AdminTasks),
            ScreenData::MemberTasks(screen) => screen.view().map(Message::MemberTasks),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(route)) => {
                // Gating always works from a fresh read so a logout done
                // elsewhere is picked up on the next navigation.
                let session = state.session_store.read();
                state
                    .api
                    .set_token(session.as_ref().map(|s| s.token.clone()));
                let resolved = route::resolve(route, session.as_ref());
                let (screen, task) = ScreenData::open(resolved, state);
                *x = screen;
                task.map(ScreenMessage::ScreenMessage)
            }
            (x, Message::LoggedIn(session)) => {
                match state.session_store.set(&session) {
                    Ok(()) => state.notify(NoticeKind::Info, "Logged in successfully"),
                    Err(error) => {
                        tracing::warn!(%error, "failed to persist session");
                        state.notify(NoticeKind::Error, "Could not save your session");
                    }
                }
                state.api.set_token(Some(session.token));
                let (screen, task) = ScreenData::open(Route::Dashboard, state);
                *x = screen;
                task.map(ScreenMessage::ScreenMessage)
            }
            (x, Message::LoggedOut) => {
                if let Err(error) = state.session_store.clear() {
                    tracing::warn!(%error, "failed to clear session");
                }
                state.api.set_token(None);
                state.dismiss_notice();
                let (screen, task) = ScreenData::open(Route::Login, state);
                *x = screen;
                task.map(ScreenMessage::ScreenMessage)
            }
            (_, Message::DismissNotice) => {
                state.dismiss_notice();
                Task::none()
            }
            (ScreenData::Login(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    login::ParentMessage::LoggedIn(session) => Task::done(
                        ScreenMessage::ScreenMessage(Message::LoggedIn(session)),
                    ),
                    login::ParentMessage::OpenRegister => Task::done(
                        ScreenMessage::ScreenMessage(Message::Navigate(Route::Register)),
                    ),
                },
            },
            (ScreenData::Register(page), Message::Register(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Register)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    register::ParentMessage::Registered => {
                        state.notify(NoticeKind::Info, "Registration successful. Please log in.");
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(
                            Route::Login,
                        )))
                    }
                    register::ParentMessage::OpenLogin => Task::done(
                        ScreenMessage::ScreenMessage(Message::Navigate(Route::Login)),
                    ),
                },
            },
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    dashboard::ParentMessage::OpenTasks(route) => Task::done(
                        ScreenMessage::ScreenMessage(Message::Navigate(route)),
                    ),
                    dashboard::ParentMessage::Logout => {
                        Task::done(ScreenMessage::ScreenMessage(Message::LoggedOut))
                    }
                },
            },
            (ScreenData::AdminTasks(page), Message::AdminTasks(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AdminTasks)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            (ScreenData::MemberTasks(page), Message::MemberTasks(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::MemberTasks)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            // A message for a screen that is no longer active.
            _ => Task::none(),
        }
    }
}
