//! Todo List Entry Point

fn main() {
    todo_list_ui::start();
}
