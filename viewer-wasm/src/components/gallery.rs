//! カードギャラリーコンポーネント

use leptos::prelude::*;
use signscape_common::{language_name, preview_text, CorpusRecord};

#[component]
pub fn Gallery<F>(records: Memo<Vec<CorpusRecord>>, on_open: F) -> impl IntoView
where
    F: Fn(CorpusRecord) + 'static + Clone + Send + Sync,
{
    view! {
        <Show
            when=move || !records.get().is_empty()
            fallback=|| view! { <p class="gallery-empty">"検索結果がありません"</p> }
        >
            {
                let on_open = on_open.clone();
                view! {
                    <div class="gallery">
                        <For
                            each=move || records.get()
                            key=|record| record.id.clone()
                            children=move |record| {
                                let on_open = on_open.clone();
                                view! { <Card record=record on_open=on_open /> }
                            }
                        />
                    </div>
                }
            }
        </Show>
    }
}

#[component]
fn Card<F>(record: CorpusRecord, on_open: F) -> impl IntoView
where
    F: Fn(CorpusRecord) + 'static + Clone + Send,
{
    let preview = preview_text(&record);
    let tags: Vec<String> = record
        .languages()
        .into_iter()
        .map(|code| language_name(code).to_string())
        .collect();

    let opened = record.clone();
    view! {
        <div class="card" on:click=move |_| on_open(opened.clone())>
            <img
                class="card-image"
                src=record.image.clone()
                alt=record.id.clone()
                loading="lazy"
            />
            <div class="card-content">
                <p class="card-text">{preview}</p>
                <div class="card-tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="card-tag">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
