use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{api::Role, route::Route},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    role: Role,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenTasks(Route),
    Logout,
}

impl DashboardScreen {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let panel = match self.role {
            Role::Admin => column![
                text("Admin Panel").size(22),
                text("Create tasks and assign them to members."),
                button("All Tasks").on_press(ScreenMessage::ParentMessage(
                    ParentMessage::OpenTasks(Route::AdminTasks)
                )),
            ],
            Role::Member => column![
                text("Member Panel").size(22),
                text("View your assigned tasks and update their status."),
                button("My Tasks").on_press(ScreenMessage::ParentMessage(
                    ParentMessage::OpenTasks(Route::MemberTasks)
                )),
            ],
        }
        .spacing(15)
        .align_x(Center);

        let content = column![
            text("Welcome to QuickTask").size(28),
            container(panel).style(bordered_box).padding(20),
            button("Logout")
                .style(button::secondary)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::Logout)),
        ]
        .spacing(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
