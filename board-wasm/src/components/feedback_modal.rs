//! フィードバックモーダル
//!
//! 集めるだけで画面には出さない一方通行のフォーム。

use leptos::prelude::*;
use web_sys::SubmitEvent;

#[component]
pub fn FeedbackModal<FS, FC>(on_submit: FS, on_close: FC) -> impl IntoView
where
    FS: Fn(String, String, String) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    let (kind, set_kind) = signal("general".to_string());
    let (text, set_text) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let close_button = on_close.clone();
    let close_backdrop = on_close.clone();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(
            kind.get_untracked(),
            text.get_untracked(),
            email.get_untracked(),
        );
    };

    view! {
        <div class="modal" on:click=move |_| close_backdrop(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="close" on:click=move |_| close_button(())>"×"</button>
                <h2>"Send Feedback"</h2>
                <form on:submit=submit>
                    <div class="form-group">
                        <label for="feedback-type">"Type"</label>
                        <select
                            id="feedback-type"
                            on:change=move |ev| set_kind.set(event_target_value(&ev))
                        >
                            <option value="general" selected=move || kind.get() == "general">
                                "General Feedback"
                            </option>
                            <option value="bug" selected=move || kind.get() == "bug">
                                "Bug Report"
                            </option>
                            <option value="feature" selected=move || kind.get() == "feature">
                                "Feature Request"
                            </option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="feedback-text">"Feedback"</label>
                        <textarea
                            id="feedback-text"
                            rows="4"
                            required
                            prop:value=move || text.get()
                            on:input=move |ev| set_text.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="feedback-email">"Email (optional)"</label>
                        <input
                            type="email"
                            id="feedback-email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">"Submit"</button>
                </form>
            </div>
        </div>
    }
}
