//! UI Components
//!
//! Leptos components for the to-do page.

mod activity_log;
mod delete_confirm_button;
mod filter_bar;
mod new_todo_form;
mod notice;
mod todo_item;
mod todo_list;
mod toolbar;

pub use activity_log::ActivityLog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use notice::NoticeLine;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use toolbar::Toolbar;
