//! カラムコンポーネント
//!
//! ドロップ時はDOMを動かさず、ストアから3カラムとも描き直す。

use leptos::prelude::*;
use signscape_common::{BoardStore, Task, TaskStatus};
use web_sys::DragEvent;

#[component]
pub fn BoardColumn<FA, FD, FX>(
    status: TaskStatus,
    store: RwSignal<BoardStore>,
    drag_over: ReadSignal<Option<TaskStatus>>,
    set_drag_over: WriteSignal<Option<TaskStatus>>,
    dragged_task: ReadSignal<Option<u64>>,
    set_dragged_task: WriteSignal<Option<u64>>,
    on_add: FA,
    on_drop: FD,
    on_delete: FX,
) -> impl IntoView
where
    FA: Fn(TaskStatus) + 'static + Clone + Send,
    FD: Fn(TaskStatus) + 'static + Clone + Send,
    FX: Fn(u64) + 'static + Clone + Send,
{
    // バッジ数もタスク列もストアの全走査から導出する
    let count = move || store.with(|s| s.count(status));
    let tasks = move || store.with(|s| s.tasks_for(status));
    let is_drag_over = move || drag_over.get() == Some(status);

    view! {
        <div class="column" data-status=status.as_str()>
            <div class="column-header">
                <h2>{status.label()}</h2>
                <span class="task-count">{count}</span>
            </div>

            <div
                class="tasks"
                class:drag-over=is_drag_over
                on:dragover=move |ev: DragEvent| ev.prevent_default()
                on:dragenter=move |_| set_drag_over.set(Some(status))
                on:dragleave=move |_| set_drag_over.set(None)
                on:drop={
                    let on_drop = on_drop.clone();
                    move |ev: DragEvent| {
                        ev.prevent_default();
                        on_drop(status);
                    }
                }
            >
                <For
                    each=tasks
                    key=|task| task.id
                    children=move |task| {
                        let on_delete = on_delete.clone();
                        view! {
                            <TaskCard
                                task=task
                                dragged_task=dragged_task
                                set_dragged_task=set_dragged_task
                                set_drag_over=set_drag_over
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </div>

            <button
                class="add-task-btn"
                on:click={
                    let on_add = on_add.clone();
                    move |_| on_add(status)
                }
            >
                "+ Add Task"
            </button>
        </div>
    }
}

#[component]
fn TaskCard<FX>(
    task: Task,
    dragged_task: ReadSignal<Option<u64>>,
    set_dragged_task: WriteSignal<Option<u64>>,
    set_drag_over: WriteSignal<Option<TaskStatus>>,
    on_delete: FX,
) -> impl IntoView
where
    FX: Fn(u64) + 'static + Clone + Send,
{
    let task_id = task.id;
    let is_dragging = move || dragged_task.get() == Some(task_id);

    view! {
        <div
            class="task"
            class:dragging=is_dragging
            draggable="true"
            on:dragstart=move |_| set_dragged_task.set(Some(task_id))
            on:dragend=move |_| {
                set_dragged_task.set(None);
                set_drag_over.set(None);
            }
        >
            <div class="task-title">{task.title.clone()}</div>
            {(!task.description.is_empty()).then(|| view! {
                <div class="task-description">{task.description.clone()}</div>
            })}
            <div class="task-actions">
                <button class="task-delete" on:click=move |_| on_delete(task_id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
