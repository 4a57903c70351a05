//! UI Components
//!
//! Reusable Leptos components.

mod delete_task_button;
mod home_view;
mod notice_banner;
mod pager;
mod search_input;
mod sign_in_form;
mod sign_up_form;
mod task_card;
mod task_edit_dialog;
mod task_form;
mod task_list;
mod task_toolbar;
mod tasks_view;

pub use delete_task_button::DeleteTaskButton;
pub use home_view::HomeView;
pub use notice_banner::NoticeBanner;
pub use pager::Pager;
pub use search_input::SearchInput;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;
pub use task_card::TaskCard;
pub use task_edit_dialog::TaskEditDialog;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_toolbar::TaskToolbar;
pub use tasks_view::TasksView;
