//! Application State
//!
//! The whole to-do list lives in one `AppState`, wrapped in a Leptos
//! `reactive_stores::Store` for field-level reactivity. Mutations are plain
//! methods so they can be tested without a browser.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{RemoteTodo, Todo};

/// Global application state with field-level reactivity
///
/// Serialized wholesale into localStorage after every mutation. Keys are
/// camelCase so lists saved by earlier versions of the page still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Visible todos, in insertion order
    #[serde(default)]
    pub todos: Vec<Todo>,
    /// Current filter text
    #[serde(default, rename = "filteredWord")]
    pub filter_word: String,
    /// Next id to hand out; always above every id in use
    #[serde(default = "first_id")]
    pub next_id: u32,
    /// Completed todos moved aside by "hide completed"
    #[serde(default, rename = "filteredTodos")]
    pub hidden_todos: Vec<Todo>,
}

fn first_id() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            filter_word: String::new(),
            next_id: first_id(),
            hidden_todos: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new todo. Whitespace-only text is rejected.
    pub fn add_todo(&mut self, text: &str) -> AppResult<u32> {
        if text.trim().is_empty() {
            return Err(AppError::InvalidInput("todo text cannot be empty".to_string()));
        }
        let id = self.take_id()?;
        self.todos.push(Todo::new(id, text.to_string()));
        log::info!("[TODO] Added #{}", id);
        Ok(id)
    }

    pub fn remove_todo(&mut self, id: u32) -> AppResult<Todo> {
        let index = self.position(id)?;
        let todo = self.todos.remove(index);
        log::info!("[TODO] Removed #{} {:?}", todo.id, todo.text);
        Ok(todo)
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle_todo(&mut self, id: u32) -> AppResult<bool> {
        let index = self.position(id)?;
        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;
        Ok(todo.completed)
    }

    pub fn edit_todo(&mut self, id: u32, text: &str) -> AppResult<()> {
        if text.trim().is_empty() {
            log::warn!("[TODO] Edit of #{} rejected: empty text", id);
            return Err(AppError::InvalidInput("todo text cannot be empty".to_string()));
        }
        let index = self.position(id)?;
        self.todos[index].text = text.to_string();
        Ok(())
    }

    pub fn set_filter_word(&mut self, word: &str) {
        self.filter_word = word.to_string();
    }

    /// Move completed todos to the hidden list, returning how many moved
    pub fn hide_completed(&mut self) -> usize {
        let (done, open): (Vec<Todo>, Vec<Todo>) =
            std::mem::take(&mut self.todos).into_iter().partition(|t| t.completed);
        self.todos = open;
        let moved = done.len();
        self.hidden_todos.extend(done);
        log::info!("[TODO] Hid {} completed", moved);
        moved
    }

    /// Put hidden todos back at the end of the list
    pub fn show_completed(&mut self) -> usize {
        let restored = self.hidden_todos.len();
        self.todos.append(&mut self.hidden_todos);
        log::info!("[TODO] Restored {} completed", restored);
        restored
    }

    /// Drop every todo, hidden ones included, and restart ids at 1
    pub fn delete_all(&mut self) {
        self.todos.clear();
        self.hidden_todos.clear();
        self.next_id = first_id();
        log::info!("[TODO] Deleted all items");
    }

    /// Append a fetched sample under a fresh local id
    pub fn import_todo(&mut self, remote: RemoteTodo) -> AppResult<u32> {
        let id = self.take_id()?;
        self.todos.push(Todo {
            id,
            text: remote.text,
            completed: remote.completed,
        });
        log::info!("[IMPORT] Added sample #{} as #{}", remote.id, id);
        Ok(id)
    }

    /// Raise `next_id` above every id present. Needed after loading a blob
    /// written by hand or by an older page. A blob holding the largest
    /// possible id leaves no room for new ones and is rejected.
    pub fn normalize(&mut self) -> AppResult<()> {
        let max_id = self
            .todos
            .iter()
            .chain(self.hidden_todos.iter())
            .map(|t| t.id)
            .max();
        if let Some(max_id) = max_id {
            if self.next_id <= max_id {
                self.next_id = max_id.checked_add(1).ok_or_else(|| {
                    AppError::Serialization(format!("todo id {} is out of range", max_id))
                })?;
            }
        }
        if self.next_id == 0 {
            self.next_id = first_id();
        }
        Ok(())
    }

    /// One-line description for debug logs
    pub fn summary(&self) -> String {
        format!(
            "{} todos ({} completed), {} hidden, filter={:?}, next_id={}",
            self.todos.len(),
            self.todos.iter().filter(|t| t.completed).count(),
            self.hidden_todos.len(),
            self.filter_word,
            self.next_id
        )
    }

    /// Hand out `next_id`. Fails once the counter cannot advance, so an id
    /// is never issued twice.
    fn take_id(&mut self) -> AppResult<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(AppError::IdsExhausted)?;
        Ok(id)
    }

    fn position(&self, id: u32) -> AppResult<usize> {
        self.todos.iter().position(|t| t.id == id).ok_or_else(|| {
            log::warn!("[TODO] No visible todo #{}", id);
            AppError::NotFound(id)
        })
    }
}
