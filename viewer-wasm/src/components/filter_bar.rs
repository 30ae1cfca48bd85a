//! フィルタパネルコンポーネント

use leptos::prelude::*;
use signscape_common::{language_name, FilterOptions};

#[component]
pub fn FilterBar<FT, FP, FL>(
    options: ReadSignal<FilterOptions>,
    on_search_text: FT,
    on_search_pictogram: FP,
    on_language: FL,
) -> impl IntoView
where
    FT: Fn(String) + 'static + Clone + Send,
    FP: Fn(String) + 'static + Clone + Send,
    FL: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="filter-panel">
            <div class="form-group">
                <label for="search-input">"テキスト検索"</label>
                <input
                    type="text"
                    id="search-input"
                    placeholder="看板の文字を検索..."
                    on:input=move |ev| on_search_text(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="pictogram-input">"ピクトグラム検索"</label>
                <input
                    type="text"
                    id="pictogram-input"
                    placeholder="ピクトグラムを検索..."
                    on:input=move |ev| on_search_pictogram(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="language-select">"言語"</label>
                <select
                    id="language-select"
                    on:change=move |ev| on_language(event_target_value(&ev))
                >
                    <option value="">"すべて"</option>
                    <For
                        each=move || options.get().languages
                        key=|code| code.clone()
                        children=move |code| {
                            let label = language_name(&code).to_string();
                            view! { <option value=code.clone()>{label}</option> }
                        }
                    />
                </select>
            </div>
        </div>
    }
}
