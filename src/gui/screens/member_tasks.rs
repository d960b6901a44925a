use iced::{
    Element, Task,
    widget::{column, container, pick_list, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{
        api::{self, ApiClient, TaskRepository, TaskStatus, TaskUpdate, format_due_date},
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
pub struct MemberTasksScreen {
    list: TaskList,
    updating: Option<String>,
}

#[derive(Debug, Clone)]
pub enum MemberTasksMessage {
    TasksFetched(Result<Vec<api::Task>, String>),
    FilterPicked(StatusFilter),
    StatusPicked(String, TaskStatus),
    StatusSaved(Result<(), String>),
}

impl MemberTasksScreen {
    pub fn open(api: &ApiClient) -> (Self, Task<ScreenMessage<Self>>) {
        (Self::default(), fetch_tasks(api))
    }

    fn task_row<'a>(&self, task: &'a api::Task) -> Element<'a, ScreenMessage<Self>> {
        let mut details = column![text(&task.title).size(18)].spacing(5);
        if !task.description.is_empty() {
            details = details.push(text(&task.description));
        }
        if let Some(due) = task.due_date {
            details = details.push(text(format!("Due: {}", format_due_date(due))));
        }

        // The row whose update is in flight loses its picker until the
        // server answers; one status change runs at a time.
        let status: Element<'a, ScreenMessage<Self>> =
            if self.updating.as_deref() == Some(task.id.as_str()) {
                text("Saving...").into()
            } else {
                let id = task.id.clone();
                pick_list(TaskStatus::ALL, Some(task.status), move |status| {
                    ScreenMessage::ScreenMessage(MemberTasksMessage::StatusPicked(
                        id.clone(),
                        status,
                    ))
                })
                .into()
            };

        container(
            row![details.width(iced::Length::Fill), status]
                .spacing(10)
                .padding(10),
        )
        .style(bordered_box)
        .into()
    }
}

impl Screen for MemberTasksScreen {
    type Message = MemberTasksMessage;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let filter = widgets::status_filter(self.list.filter(), |filter| {
            ScreenMessage::ScreenMessage(MemberTasksMessage::FilterPicked(filter))
        });

        let mut tasks = column![text("My Tasks").size(22), filter].spacing(10);
        if self.list.is_empty() {
            tasks = tasks.push(text("No tasks assigned to you yet."));
        } else {
            for task in self.list.visible() {
                tasks = tasks.push(self.task_row(task));
            }
        }

        container(scrollable(tasks)).padding(20).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            MemberTasksMessage::TasksFetched(Ok(tasks)) => {
                self.list.replace(tasks);
                Task::none()
            }
            MemberTasksMessage::TasksFetched(Err(error)) => {
                tracing::warn!(%error, "task list fetch failed");
                state.notify(NoticeKind::Error, format!("Could not load tasks: {error}"));
                Task::none()
            }
            MemberTasksMessage::FilterPicked(filter) => {
                self.list.set_filter(filter);
                Task::none()
            }
            MemberTasksMessage::StatusPicked(id, status) => {
                if self.updating.is_some() {
                    return Task::none();
                }
                self.updating = Some(id.clone());
                let api = state.api.clone();
                let update = TaskUpdate {
                    status: Some(status),
                    ..TaskUpdate::default()
                };
                Task::perform(
                    async move { api.update_task(&id, &update).await.map(|_| ()) },
                    |result| {
                        ScreenMessage::ScreenMessage(MemberTasksMessage::StatusSaved(
                            result.map_err(|e| e.to_string()),
                        ))
                    },
                )
            }
            MemberTasksMessage::StatusSaved(Ok(())) => {
                self.updating = None;
                fetch_tasks(&state.api)
            }
            MemberTasksMessage::StatusSaved(Err(error)) => {
                self.updating = None;
                state.notify(
                    NoticeKind::Error,
                    format!("Could not update task status: {error}"),
                );
                Task::none()
            }
        }
    }
}

fn fetch_tasks(api: &ApiClient) -> Task<ScreenMessage<MemberTasksScreen>> {
    let api = api.clone();
    Task::perform(
        async move { api.list_tasks().await.map_err(|e| e.to_string()) },
        |result| ScreenMessage::ScreenMessage(MemberTasksMessage::TasksFetched(result)),
    )
}
