//! localStorage 永続化の結合テスト（wasm-pack test --headless で実行する）

#![cfg(target_arch = "wasm32")]

use signscape_board_wasm::storage;
use signscape_common::TaskStatus;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tasks_survive_reload() {
    let mut store = storage::load_store();
    let before = store.tasks().len();
    store.add_task(
        "persisted".to_string(),
        String::new(),
        TaskStatus::Todo,
        "2026-01-01T00:00:00.000Z".to_string(),
    );
    storage::save_tasks(&store).expect("保存失敗");

    let reloaded = storage::load_store();
    assert_eq!(reloaded.tasks().len(), before + 1);
    assert_eq!(reloaded.tasks().last().unwrap().title, "persisted");
}

#[wasm_bindgen_test]
fn malformed_payload_falls_back_to_empty() {
    use gloo::storage::{LocalStorage, Storage};

    LocalStorage::raw().set_item("kanbanTasks", "{broken").unwrap();
    let store = storage::load_store();
    assert!(store.tasks().is_empty());
}
