use crate::{
    core::{route::Route, session::Session},
    gui::screens::{
        ScreenMessage, admin_tasks::AdminTasksScreen, dashboard::DashboardScreen,
        login::LoginScreen, member_tasks::MemberTasksScreen, register::RegisterScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(ScreenMessage<LoginScreen>),
    Register(ScreenMessage<RegisterScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    AdminTasks(ScreenMessage<AdminTasksScreen>),
    MemberTasks(ScreenMessage<MemberTasksScreen>),
    Navigate(Route),
    LoggedIn(Session),
    LoggedOut,
    DismissNotice,
}
