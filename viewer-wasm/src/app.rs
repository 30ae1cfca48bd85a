//! メインアプリケーションコンポーネント

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use signscape_common::{CorpusRecord, FilterOptions, FilterState};

use crate::components::{detail_modal::DetailModal, filter_bar::FilterBar, gallery::Gallery};
use crate::data;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (records, set_records) = signal(Vec::<CorpusRecord>::new());
    let (options, set_options) = signal(FilterOptions::default());
    let (filters, set_filters) = signal(FilterState::new());
    let (current, set_current) = signal(None::<CorpusRecord>);

    // 起動シーケンス: 読み込み → フィルタ候補構築 → 初回描画
    spawn_local(async move {
        match data::fetch_corpus("data.json").await {
            Ok(loaded) => {
                set_options.set(FilterOptions::collect(&loaded));
                set_records.set(loaded);
            }
            Err(err) => {
                web_sys::console::error_2(&"Failed to load data:".into(), &err);
            }
        }
    });

    // 入力変更ごとに全件を再評価する
    let filtered = Memo::new(move |_| filters.get().apply(&records.get()));
    let result_count = move || filtered.get().len();

    let on_search_text = move |value: String| {
        set_filters.update(|f| f.set_search_text(&value));
    };
    let on_search_pictogram = move |value: String| {
        set_filters.update(|f| f.set_search_pictogram(&value));
    };
    let on_language = move |value: String| {
        set_filters.update(|f| f.select_language(&value));
    };

    let on_open = move |record: CorpusRecord| set_current.set(Some(record));
    let on_close = move |_: ()| set_current.set(None);

    // Escapeキーでモーダルを閉じる
    window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && current.get_untracked().is_some() {
            set_current.set(None);
        }
    });

    view! {
        <div class="container">
            <header class="header">
                <h1>"Signscape - 言語景観コーパス"</h1>
            </header>

            <FilterBar
                options=options
                on_search_text=on_search_text
                on_search_pictogram=on_search_pictogram
                on_language=on_language
            />

            <p class="result-count">
                <span>{result_count}</span>
                " 件"
            </p>

            <Gallery records=filtered on_open=on_open />

            {move || {
                current.get().map(|record| {
                    let on_close = on_close.clone();
                    view! { <DetailModal record=record on_close=on_close /> }
                })
            }}
        </div>
    }
}
