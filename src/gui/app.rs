use iced::{Element, Task, Theme, widget::column};

use crate::{
    core::{
        api::ApiClient,
        route::{self, Route},
        session::SessionStore,
    },
    gui::{
        AppState, Message,
        screens::{Screen, ScreenData, ScreenMessage},
        widgets,
    },
};

pub struct QuickTaskApp {
    state: AppState,
    screen: ScreenData,
}

impl QuickTaskApp {
    /// The start route goes through the same gate as every later
    /// navigation, so an unauthenticated launch lands on login.
    pub fn new(
        api: ApiClient,
        session_store: impl SessionStore + 'static,
        start: Route,
    ) -> (Self, Task<Message>) {
        let mut state = AppState::new(api, session_store);
        let session = state.session_store.read();
        state
            .api
            .set_token(session.as_ref().map(|s| s.token.clone()));
        let resolved = route::resolve(start, session.as_ref());
        let (screen, task) = ScreenData::open(resolved, &state);
        (Self { state, screen }, task)
    }

    pub fn title(&self) -> String {
        "QuickTask - Task Tracking".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut layout = column![].spacing(10);
        if let Some(session) = self.state.session_store.read() {
            layout = layout.push(widgets::navbar(session.role));
        }
        if let Some(notice) = &self.state.notice {
            layout = layout.push(widgets::notice_banner(notice));
        }
        layout
            .push(self.screen.view().map(unwrap_screen_message))
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
