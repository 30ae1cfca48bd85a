//! タスク追加モーダル

use leptos::prelude::*;
use web_sys::SubmitEvent;

#[component]
pub fn TaskModal<FS, FC>(on_submit: FS, on_close: FC) -> impl IntoView
where
    FS: Fn(String, String) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    // モーダルを開くたびにコンポーネントが作り直されるのでフォームは常に空
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let close_button = on_close.clone();
    let close_backdrop = on_close.clone();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(title.get_untracked(), description.get_untracked());
    };

    view! {
        <div class="modal" on:click=move |_| close_backdrop(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="close" on:click=move |_| close_button(())>"×"</button>
                <h2>"Add New Task"</h2>
                <form on:submit=submit>
                    <div class="form-group">
                        <label for="task-title">"Title"</label>
                        <input
                            type="text"
                            id="task-title"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="task-description">"Description"</label>
                        <textarea
                            id="task-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary">"Add Task"</button>
                </form>
            </div>
        </div>
    }
}
