use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text, text_input},
};

use crate::{
    core::api::{ApiError, AuthRepository, Registration},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    name: String,
    email: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum RegisterMessage {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Finished(Result<(), String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Registered,
    OpenLogin,
}

impl RegisterScreen {
    fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl Screen for RegisterScreen {
    type Message = RegisterMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut form = column![
            text("Register for QuickTask").size(28),
            text_input("Name", &self.name)
                .on_input(|value| ScreenMessage::ScreenMessage(RegisterMessage::NameChanged(value))),
            text_input("Email", &self.email).on_input(|value| {
                ScreenMessage::ScreenMessage(RegisterMessage::EmailChanged(value))
            }),
            text_input("Password", &self.password)
                .secure(true)
                .on_input(|value| {
                    ScreenMessage::ScreenMessage(RegisterMessage::PasswordChanged(value))
                })
                .on_submit(ScreenMessage::ScreenMessage(RegisterMessage::Submit)),
        ]
        .spacing(15)
        .max_width(360)
        .align_x(Center);

        if let Some(error) = &self.error {
            form = form.push(text(error).style(text::danger));
        }

        let submit = if self.busy {
            button("Registering...")
        } else {
            button("Register").on_press_maybe(
                self.is_submittable()
                    .then_some(ScreenMessage::ScreenMessage(RegisterMessage::Submit)),
            )
        };

        form = form.push(submit).push(
            button("Back to login")
                .style(button::text)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenLogin)),
        );

        container(form)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            RegisterMessage::NameChanged(value) => {
                self.name = value;
                Task::none()
            }
            RegisterMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            RegisterMessage::PasswordChanged(value) => {
                self.password = value;
                Task::none()
            }
            RegisterMessage::Submit => {
                if self.busy || !self.is_submittable() {
                    return Task::none();
                }
                self.busy = true;
                self.error = None;
                let api = state.api.clone();
                let registration = Registration {
                    name: self.name.trim().to_owned(),
                    email: self.email.trim().to_owned(),
                    password: self.password.clone(),
                };
                Task::perform(
                    async move { api.register(&registration).await },
                    |result| {
                        ScreenMessage::ScreenMessage(RegisterMessage::Finished(match result {
                            Ok(()) => Ok(()),
                            Err(ApiError::Api { message, .. }) => Err(message),
                            Err(_) => Err("Registration failed".to_owned()),
                        }))
                    },
                )
            }
            RegisterMessage::Finished(Ok(())) => {
                self.busy = false;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Registered))
            }
            RegisterMessage::Finished(Err(error)) => {
                self.busy = false;
                self.error = Some(error);
                Task::none()
            }
        }
    }
}
