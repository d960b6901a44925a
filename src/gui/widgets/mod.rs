use iced::{
    Alignment::Center,
    Element, Theme,
    widget::{button, container, pick_list, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{api::Role, list::StatusFilter, route::Route},
    gui::{
        Message,
        state::{Notice, NoticeKind},
    },
};

/// Top bar shown whenever a session exists: app title back to the
/// dashboard, the current role, and logout.
pub fn navbar(role: Role) -> Element<'static, Message> {
    container(
        row![
            button(text("QuickTask").size(20))
                .style(button::text)
                .on_press(Message::Navigate(Route::Dashboard)),
            container(text(format!("Role: {role}"))).width(iced::Length::Fill),
            button("Logout")
                .style(button::secondary)
                .on_press(Message::LoggedOut),
        ]
        .spacing(20)
        .align_y(Center),
    )
    .style(bordered_box)
    .padding(10)
    .width(iced::Length::Fill)
    .into()
}

/// The single notification surface, colored by kind.
pub fn notice_banner(notice: &Notice) -> Element<'_, Message> {
    let kind = notice.kind;
    let style = move |theme: &Theme| {
        let palette = theme.extended_palette();
        let pair = match kind {
            NoticeKind::Info => palette.success.weak,
            NoticeKind::Error => palette.danger.weak,
        };
        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            ..bordered_box(theme)
        }
    };

    container(
        row![
            container(text(&notice.message)).width(iced::Length::Fill),
            button("Dismiss")
                .style(button::text)
                .on_press(Message::DismissNotice),
        ]
        .spacing(10)
        .align_y(Center),
    )
    .style(style)
    .padding(10)
    .width(iced::Length::Fill)
    .into()
}

/// Status filter row used by both task screens.
pub fn status_filter<'a, Message: Clone + 'a>(
    current: StatusFilter,
    on_pick: impl Fn(StatusFilter) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text("Filter by status:"),
        pick_list(StatusFilter::ALL, Some(current), on_pick),
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}
