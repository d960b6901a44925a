use iced::{
    Element, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};
use iced_aw::DatePicker;
use iced_widget::container::bordered_box;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult};

use crate::{
    core::{
        api::{self, ApiClient, ApiError, TaskRepository, User, UserRepository, format_due_date},
        form::TaskDraft,
        list::{StatusFilter, TaskList},
    },
    gui::{
        AppState,
        state::NoticeKind,
        screens::{Screen, ScreenMessage},
        widgets,
    },
};

#[derive(Debug, Clone, Default)]
pub struct AdminTasksScreen {
    list: TaskList,
    users: Vec<User>,
    draft: TaskDraft,
    saving: bool,
    show_date_picker: bool,
}

#[derive(Debug, Clone)]
pub enum AdminTasksMessage {
    TasksFetched(Result<Vec<api::Task>, String>),
    UsersFetched(Result<Vec<User>, String>),
    FilterPicked(StatusFilter),
    TitleChanged(String),
    DescriptionChanged(String),
    AssigneePicked(User),
    ToggleDatePicker,
    DatePickerCancelled,
    DatePicked(iced_aw::date_picker::Date),
    ClearDueDate,
    Edit(api::Task),
    CancelEdit,
    Submit,
    Saved(Result<(), String>),
    DeleteRequested(String),
    DeleteConfirmed(String, bool),
    Deleted(Result<(), String>),
}

impl AdminTasksScreen {
    /// Fresh screen plus the initial task and user fetches.
    pub fn open(api: &ApiClient) -> (Self, Task<ScreenMessage<Self>>) {
        let screen = Self::default();
        let tasks = fetch_tasks(api);
        let users = fetch_users(api);
        (screen, Task::batch([tasks, users]))
    }

    fn selected_assignee(&self) -> Option<User> {
        let id = self.draft.assigned_to.as_deref()?;
        self.users.iter().find(|user| user.id == id).cloned()
    }

    fn form(&self) -> Element<'_, ScreenMessage<Self>> {
        let heading = if self.draft.is_edit() {
            "Edit Task"
        } else {
            "Create Task"
        };

        let date_label = match self.draft.due_date {
            Some(date) => format_due_date(date),
            None => "Set due date".to_owned(),
        };
        let date_button = button(text(date_label)).style(button::secondary).on_press(
            ScreenMessage::ScreenMessage(AdminTasksMessage::ToggleDatePicker),
        );
        let date_picker = DatePicker::new(
            self.show_date_picker,
            picker_date(self.draft.due_date),
            date_button,
            ScreenMessage::ScreenMessage(AdminTasksMessage::DatePickerCancelled),
            |date| ScreenMessage::ScreenMessage(AdminTasksMessage::DatePicked(date)),
        );
        let mut date_row = row![date_picker].spacing(10);
        if self.draft.due_date.is_some() {
            date_row = date_row.push(
                button("Clear")
                    .style(button::text)
                    .on_press(ScreenMessage::ScreenMessage(AdminTasksMessage::ClearDueDate)),
            );
        }

        let submit_label = match (self.saving, self.draft.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Save Changes",
            (false, false) => "Create Task",
        };
        let mut actions = row![
            button(text(submit_label)).on_press_maybe(
                (!self.saving && self.draft.is_submittable())
                    .then_some(ScreenMessage::ScreenMessage(AdminTasksMessage::Submit)),
            )
        ]
        .spacing(10);
        if self.draft.is_edit() {
            actions = actions.push(
                button("Cancel")
                    .style(button::secondary)
                    .on_press(ScreenMessage::ScreenMessage(AdminTasksMessage::CancelEdit)),
            );
        }

        let form = column![
            text(heading).size(22),
            text_input("Title", &self.draft.title).on_input(|value| {
                ScreenMessage::ScreenMessage(AdminTasksMessage::TitleChanged(value))
            }),
            text_input("Description", &self.draft.description).on_input(|value| {
                ScreenMessage::ScreenMessage(AdminTasksMessage::DescriptionChanged(value))
            }),
            pick_list(self.users.clone(), self.selected_assignee(), |user| {
                ScreenMessage::ScreenMessage(AdminTasksMessage::AssigneePicked(user))
            })
            .placeholder("Assign to"),
            date_row,
            actions,
        ]
        .spacing(15);

        container(form).style(bordered_box).padding(20).into()
    }

    fn task_row<'a>(&self, task: &'a api::Task) -> Element<'a, ScreenMessage<Self>> {
        let mut details = column![
            text(&task.title).size(18),
            text(format!("Status: {}", task.status)),
        ]
        .spacing(5);
        if !task.description.is_empty() {
            details = details.push(text(&task.description));
        }
        if let Some(assignee) = &task.assigned_to {
            details = details.push(text(format!("Assigned to: {}", assignee.name)));
        }
        if let Some(due) = task.due_date {
            details = details.push(text(format!("Due: {}", format_due_date(due))));
        }

        let actions = column![
            button("Edit").style(button::secondary).on_press(
                ScreenMessage::ScreenMessage(AdminTasksMessage::Edit(task.clone()))
            ),
            button("Delete").style(button::danger).on_press(
                ScreenMessage::ScreenMessage(AdminTasksMessage::DeleteRequested(task.id.clone()))
            ),
        ]
        .spacing(5);

        container(
            row![details.width(iced::Length::Fill), actions]
                .spacing(10)
                .padding(10),
        )
        .style(bordered_box)
        .into()
    }
}

impl Screen for AdminTasksScreen {
    type Message = AdminTasksMessage;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let filter = widgets::status_filter(self.list.filter(), |filter| {
            ScreenMessage::ScreenMessage(AdminTasksMessage::FilterPicked(filter))
        });

        let mut tasks = column![text("All Tasks").size(22), filter].spacing(10);
        if self.list.is_empty() {
            tasks = tasks.push(text("No tasks yet."));
        } else {
            for task in self.list.visible() {
                tasks = tasks.push(self.task_row(task));
            }
        }

        container(
            row![
                container(self.form()).width(iced::Length::FillPortion(2)),
                iced::widget::scrollable(tasks).width(iced::Length::FillPortion(3)),
            ]
            .spacing(20)
            .padding(20),
        )
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AdminTasksMessage::TasksFetched(Ok(tasks)) => {
                self.list.replace(tasks);
                Task::none()
            }
            AdminTasksMessage::TasksFetched(Err(error)) => {
                tracing::warn!(%error, "task list fetch failed");
                state.notify(NoticeKind::Error, format!("Could not load tasks: {error}"));
                Task::none()
            }
            AdminTasksMessage::UsersFetched(Ok(users)) => {
                self.users = users;
                Task::none()
            }
            AdminTasksMessage::UsersFetched(Err(error)) => {
                tracing::warn!(%error, "user list fetch failed");
                state.notify(NoticeKind::Error, format!("Could not load users: {error}"));
                Task::none()
            }
            AdminTasksMessage::FilterPicked(filter) => {
                self.list.set_filter(filter);
                Task::none()
            }
            AdminTasksMessage::TitleChanged(value) => {
                self.draft.title = value;
                Task::none()
            }
            AdminTasksMessage::DescriptionChanged(value) => {
                self.draft.description = value;
                Task::none()
            }
            AdminTasksMessage::AssigneePicked(user) => {
                self.draft.assigned_to = Some(user.id);
                Task::none()
            }
            AdminTasksMessage::ToggleDatePicker => {
                self.show_date_picker = !self.show_date_picker;
                Task::none()
            }
            AdminTasksMessage::DatePickerCancelled => {
                self.show_date_picker = false;
                Task::none()
            }
            AdminTasksMessage::DatePicked(date) => {
                self.show_date_picker = false;
                self.draft.due_date = calendar_date(date);
                Task::none()
            }
            AdminTasksMessage::ClearDueDate => {
                self.draft.due_date = None;
                Task::none()
            }
            AdminTasksMessage::Edit(task) => {
                self.draft.begin_edit(&task);
                Task::none()
            }
            AdminTasksMessage::CancelEdit => {
                self.draft.reset();
                Task::none()
            }
            AdminTasksMessage::Submit => {
                if self.saving || !self.draft.is_submittable() {
                    return Task::none();
                }
                let api = state.api.clone();
                if let Some(id) = self.draft.editing() {
                    let id = id.to_owned();
                    let update = self.draft.update();
                    self.saving = true;
                    Task::perform(
                        async move { api.update_task(&id, &update).await.map(|_| ()) },
                        finish_save,
                    )
                } else if let Some(new_task) = self.draft.new_task() {
                    self.saving = true;
                    Task::perform(
                        async move { api.create_task(&new_task).await.map(|_| ()) },
                        finish_save,
                    )
                } else {
                    Task::none()
                }
            }
            AdminTasksMessage::Saved(Ok(())) => {
                self.saving = false;
                self.draft.reset();
                fetch_tasks(&state.api)
            }
            AdminTasksMessage::Saved(Err(error)) => {
                // Keep the draft so the admin can fix and resubmit.
                self.saving = false;
                state.notify(NoticeKind::Error, format!("Failed to save task: {error}"));
                Task::none()
            }
            AdminTasksMessage::DeleteRequested(id) => Task::perform(
                AsyncMessageDialog::new()
                    .set_title("Delete task")
                    .set_description("Delete this task?")
                    .set_buttons(MessageButtons::YesNo)
                    .show(),
                move |result| {
                    ScreenMessage::ScreenMessage(AdminTasksMessage::DeleteConfirmed(
                        id.clone(),
                        matches!(result, MessageDialogResult::Yes),
                    ))
                },
            ),
            AdminTasksMessage::DeleteConfirmed(id, confirmed) => {
                if !confirmed {
                    return Task::none();
                }
                let api = state.api.clone();
                Task::perform(async move { api.delete_task(&id).await }, |result| {
                    ScreenMessage::ScreenMessage(AdminTasksMessage::Deleted(
                        result.map_err(|e: ApiError| e.to_string()),
                    ))
                })
            }
            AdminTasksMessage::Deleted(Ok(())) => fetch_tasks(&state.api),
            AdminTasksMessage::Deleted(Err(error)) => {
                state.notify(NoticeKind::Error, format!("Could not delete task: {error}"));
                Task::none()
            }
        }
    }
}

fn finish_save(result: Result<(), ApiError>) -> ScreenMessage<AdminTasksScreen> {
    ScreenMessage::ScreenMessage(AdminTasksMessage::Saved(result.map_err(|e| e.to_string())))
}

fn fetch_tasks(api: &ApiClient) -> Task<ScreenMessage<AdminTasksScreen>> {
    let api = api.clone();
    Task::perform(
        async move { api.list_tasks().await.map_err(|e| e.to_string()) },
        |result| ScreenMessage::ScreenMessage(AdminTasksMessage::TasksFetched(result)),
    )
}

fn fetch_users(api: &ApiClient) -> Task<ScreenMessage<AdminTasksScreen>> {
    let api = api.clone();
    Task::perform(
        async move { api.list_members().await.map_err(|e| e.to_string()) },
        |result| ScreenMessage::ScreenMessage(AdminTasksMessage::UsersFetched(result)),
    )
}

fn picker_date(date: Option<time::Date>) -> iced_aw::date_picker::Date {
    match date {
        Some(date) => iced_aw::date_picker::Date {
            year: date.year(),
            month: u32::from(u8::from(date.month())),
            day: u32::from(date.day()),
        },
        None => iced_aw::date_picker::Date::today(),
    }
}

fn calendar_date(date: iced_aw::date_picker::Date) -> Option<time::Date> {
    let month = time::Month::try_from(u8::try_from(date.month).ok()?).ok()?;
    time::Date::from_calendar_date(date.year, month, u8::try_from(date.day).ok()?).ok()
}
