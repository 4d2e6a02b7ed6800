//! Browser tests for localStorage persistence.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use todo_list_ui::error::AppError;
use todo_list_ui::state::AppState;
use todo_list_ui::storage::{load_state, save_state, LocalStorage, StateStorage};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_key(name: &str) -> String {
    let key = format!("todo-app-test-{}", name);
    let storage = LocalStorage::open().unwrap();
    storage.set(&key, "").unwrap();
    key
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let key = fresh_key("round-trip");
    let storage = LocalStorage::open().unwrap();

    let mut state = AppState::new();
    state.add_todo("Milk").unwrap();
    state.add_todo("Eggs").unwrap();
    state.toggle_todo(1).unwrap();
    save_state(&storage, &key, &state).unwrap();

    let loaded = load_state(&storage, &key).unwrap().unwrap();
    assert_eq!(loaded, state);
}

#[wasm_bindgen_test]
fn missing_key_loads_nothing() {
    let storage = LocalStorage::open().unwrap();
    assert_eq!(load_state(&storage, "todo-app-test-never-written"), Ok(None));
}

#[wasm_bindgen_test]
fn empty_blob_is_a_serialization_error() {
    let key = fresh_key("empty");
    let storage = LocalStorage::open().unwrap();
    assert!(matches!(load_state(&storage, &key), Err(AppError::Serialization(_))));
}
