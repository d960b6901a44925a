use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text, text_input},
};

use crate::{
    core::{
        api::{ApiError, AuthRepository, Credentials},
        session::Session,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Finished(Result<Session, String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    LoggedIn(Session),
    OpenRegister,
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut form = column![
            text("Login to QuickTask").size(28),
            text_input("Email", &self.email)
                .on_input(|value| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(value))),
            text_input("Password", &self.password)
                .secure(true)
                .on_input(|value| {
                    ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(value))
                })
                .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit)),
        ]
        .spacing(15)
        .max_width(360)
        .align_x(Center);

        if let Some(error) = &self.error {
            form = form.push(text(error).style(text::danger));
        }

        let submit = if self.busy {
            button("Logging in...")
        } else {
            button("Login").on_press(ScreenMessage::ScreenMessage(LoginMessage::Submit))
        };

        form = form.push(submit).push(
            button("No account? Register")
                .style(button::text)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenRegister)),
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
            LoginMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            LoginMessage::PasswordChanged(value) => {
                self.password = value;
                Task::none()
            }
            LoginMessage::Submit => {
                if self.busy {
                    return Task::none();
                }
                self.busy = true;
                self.error = None;
                let api = state.api.clone();
                let credentials = Credentials {
                    email: self.email.trim().to_owned(),
                    password: self.password.clone(),
                };
                Task::perform(
                    async move { api.login(&credentials).await },
                    |result| {
                        ScreenMessage::ScreenMessage(LoginMessage::Finished(match result {
                            Ok(response) => Ok(Session {
                                token: response.token,
                                role: response.role,
                            }),
                            // The server's rejection message goes on the
                            // form; transport failures get a generic line.
                            Err(ApiError::Api { message, .. }) => Err(message),
                            Err(_) => Err("Login failed".to_owned()),
                        }))
                    },
                )
            }
            LoginMessage::Finished(Ok(session)) => {
                self.busy = false;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::LoggedIn(
                    session,
                )))
            }
            LoginMessage::Finished(Err(error)) => {
                self.busy = false;
                self.error = Some(error);
                Task::none()
            }
        }
    }
}
