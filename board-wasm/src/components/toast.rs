//! 操作成功の一時通知

use leptos::prelude::*;

#[component]
pub fn ToastStack(notices: RwSignal<Vec<(u64, String)>>) -> impl IntoView {
    view! {
        <div class="success-messages">
            <For
                each=move || notices.get()
                key=|(id, _)| *id
                children=|(_, message)| view! { <div class="success-message">{message}</div> }
            />
        </div>
    }
}
