//! メインアプリケーションコンポーネント
//!
//! ストアへの変更は全て dispatch 経由: BoardEvent を apply し、
//! 返ってきた Mutation に応じて該当リストを永続化する。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use signscape_common::{BoardEvent, Mutation, TaskStatus};

use crate::components::{
    board_column::BoardColumn, feedback_modal::FeedbackModal, task_modal::TaskModal,
    toast::ToastStack,
};
use crate::storage;

/// 現在時刻のISO文字列
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let store = RwSignal::new(storage::load_store());
    let (current_column, set_current_column) = signal(None::<TaskStatus>);
    let (show_feedback, set_show_feedback) = signal(false);
    let (dragged_task, set_dragged_task) = signal(None::<u64>);
    let (drag_over, set_drag_over) = signal(None::<TaskStatus>);
    let notices = RwSignal::new(Vec::<(u64, String)>::new());
    let notice_seq = StoredValue::new(0u64);

    // 通知は3秒後に自分を取り除く。複数同時表示あり
    let push_notice = move |message: &str| {
        notice_seq.update_value(|n| *n += 1);
        let id = notice_seq.get_value();
        let message = message.to_string();
        notices.update(|list| list.push((id, message)));
        Timeout::new(3000, move || {
            notices.update(|list| list.retain(|(nid, _)| *nid != id));
        })
        .forget();
    };

    let dispatch = move |event: BoardEvent| {
        let mutation = store
            .try_update(|s| s.apply(event))
            .unwrap_or(Mutation::None);
        let result = match mutation {
            Mutation::Tasks => store.with_untracked(storage::save_tasks),
            Mutation::Feedback => store.with_untracked(storage::save_feedback),
            Mutation::None => Ok(()),
        };
        if let Err(err) = result {
            web_sys::console::error_1(&format!("Failed to persist board state: {err}").into());
        }
    };

    let on_add = move |status: TaskStatus| set_current_column.set(Some(status));

    let on_task_submit = move |title: String, description: String| {
        if let Some(status) = current_column.get_untracked() {
            dispatch(BoardEvent::TaskCreated {
                status,
                title,
                description,
                created_at: now_iso(),
            });
            set_current_column.set(None);
            push_notice("Task added successfully!");
        }
    };
    let on_task_close = move |_: ()| set_current_column.set(None);

    let on_delete = move |id: u64| {
        let window = web_sys::window().unwrap();
        let confirmed = window
            .confirm_with_message("Are you sure you want to delete this task?")
            .unwrap_or(false);
        if confirmed {
            dispatch(BoardEvent::TaskDeleted { id });
            push_notice("Task deleted successfully!");
        }
    };

    let on_drop = move |status: TaskStatus| {
        if let Some(id) = dragged_task.get_untracked() {
            dispatch(BoardEvent::TaskDropped { id, status });
        }
        set_dragged_task.set(None);
        set_drag_over.set(None);
    };

    let on_feedback_submit = move |kind: String, text: String, email: String| {
        dispatch(BoardEvent::FeedbackSubmitted {
            kind,
            text,
            email,
            date: now_iso(),
        });
        set_show_feedback.set(false);
        push_notice("Thank you for your feedback!");

        // 本来はサーバ送信する。現状はコンソールに残すだけ
        if let Some(entry) = store.with_untracked(|s| s.feedback().last().cloned()) {
            web_sys::console::log_1(&format!("Feedback submitted: {entry:?}").into());
        }
    };
    let on_feedback_close = move |_: ()| set_show_feedback.set(false);

    view! {
        <div class="container">
            <header class="header">
                <h1>"Task Board"</h1>
                <button class="btn btn-secondary" on:click=move |_| set_show_feedback.set(true)>
                    "Feedback"
                </button>
            </header>

            <div class="board">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <BoardColumn
                            status=status
                            store=store
                            drag_over=drag_over
                            set_drag_over=set_drag_over
                            dragged_task=dragged_task
                            set_dragged_task=set_dragged_task
                            on_add=on_add
                            on_drop=on_drop
                            on_delete=on_delete
                        />
                    })
                    .collect_view()}
            </div>

            <Show when=move || current_column.get().is_some()>
                <TaskModal on_submit=on_task_submit on_close=on_task_close />
            </Show>

            <Show when=move || show_feedback.get()>
                <FeedbackModal on_submit=on_feedback_submit on_close=on_feedback_close />
            </Show>

            <ToastStack notices=notices />
        </div>
    }
}
