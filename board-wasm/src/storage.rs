//! localStorage 永続化
//!
//! 2つのキーにそれぞれリスト全量のJSON配列を書き戻す（差分なし、上書きのみ）。

use gloo::storage::{LocalStorage, Storage};
use signscape_common::board::{decode_feedback, decode_tasks};
use signscape_common::{BoardStore, Error, Result};

const TASKS_KEY: &str = "kanbanTasks";
const FEEDBACK_KEY: &str = "kanbanFeedback";

/// 保存済み状態からストアを復元する
///
/// キーが無い・ペイロードが壊れている場合は空リストに倒す。
/// 採番カウンタは起動時刻のエポックミリ秒で初期化する。
pub fn load_store() -> BoardStore {
    let raw = LocalStorage::raw();
    let tasks = raw
        .get_item(TASKS_KEY)
        .ok()
        .flatten()
        .map(|json| decode_tasks(&json))
        .unwrap_or_default();
    let feedback = raw
        .get_item(FEEDBACK_KEY)
        .ok()
        .flatten()
        .map(|json| decode_feedback(&json))
        .unwrap_or_default();
    BoardStore::restore(tasks, feedback, js_sys::Date::now() as u64)
}

/// タスクリストを書き戻す
pub fn save_tasks(store: &BoardStore) -> Result<()> {
    let json = store.tasks_json()?;
    LocalStorage::raw()
        .set_item(TASKS_KEY, &json)
        .map_err(|err| Error::Storage(format!("{err:?}")))
}

/// フィードバックリストを書き戻す
pub fn save_feedback(store: &BoardStore) -> Result<()> {
    let json = store.feedback_json()?;
    LocalStorage::raw()
        .set_item(FEEDBACK_KEY, &json)
        .map_err(|err| Error::Storage(format!("{err:?}")))
}
