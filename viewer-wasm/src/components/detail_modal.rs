//! 詳細モーダルコンポーネント
//!
//! 全signを順番に表示する。先頭が主注釈、以降は副注釈のスタイルになる。

use leptos::prelude::*;
use signscape_common::{language_name, CorpusRecord, Sign};
use wasm_bindgen::JsValue;

#[component]
pub fn DetailModal<F>(record: CorpusRecord, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let close_button = on_close.clone();
    let close_backdrop = on_close.clone();

    let signs = record
        .signs
        .iter()
        .enumerate()
        .map(|(idx, sign)| sign_item(idx, sign))
        .collect_view();

    let date_text = match &record.date {
        Some(iso) => format_date(iso),
        None => "N/A".to_string(),
    };
    let location_text = match &record.location_info {
        Some(info) => info.join(),
        None => "N/A".to_string(),
    };
    let file_text = record
        .original_image
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class="modal active" on:click=move |_| close_backdrop(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| close_button(())>"×"</button>

                <img class="modal-image" src=record.image.clone() alt=record.id.clone() />

                <div class="signs-list">{signs}</div>

                <div class="image-meta">
                    <div class="meta-item">
                        <div class="info-meta">
                            <strong>"撮影日:"</strong>
                            <div>{date_text}</div>
                        </div>
                        <div class="info-meta">
                            <strong>"位置情報:"</strong>
                            <div>{location_text}</div>
                        </div>
                        <div class="info-meta">
                            <strong>"ファイル名:"</strong>
                            <div>{file_text}</div>
                        </div>
                        {record.notes.clone().map(|notes| view! {
                            <div class="info-meta">
                                <strong>"備考:"</strong>
                                <div>{notes}</div>
                            </div>
                        })}
                        {record.link.clone().map(|link| view! {
                            <div class="info-meta">
                                <a href=link.clone() target="_blank" rel="noopener noreferrer">
                                    {link.clone()}
                                </a>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn sign_item(idx: usize, sign: &Sign) -> impl IntoView {
    let heading = format!("Sign {}", idx + 1);
    let languages = sign
        .language
        .iter()
        .map(|code| {
            let label = language_name(code).to_string();
            view! { <span class="language-tag">{label}</span> }
        })
        .collect_view();
    let pictograms = (!sign.pictograms.is_empty()).then(|| {
        let tags = sign
            .pictograms
            .iter()
            .cloned()
            .map(|p| view! { <span class="pictogram-tag">{p}</span> })
            .collect_view();
        view! {
            <div class="pictogram-block">
                <strong>"ピクトグラム:"</strong>
                <div class="pictogram-tags">{tags}</div>
            </div>
        }
    });

    view! {
        <div class="sign-item" class:secondary={idx > 0}>
            <h3>{heading}</h3>
            <div class="sign-text">{sign.text.clone()}</div>
            <div class="sign-meta">
                <div class="meta-line">
                    <strong>"言語:"</strong>
                    <div class="language-tags">{languages}</div>
                </div>
            </div>
            {pictograms}
        </div>
    }
}

/// ISO文字列をビューアロケールの日付表記にする
fn format_date(iso: &str) -> String {
    js_sys::Date::new(&JsValue::from_str(iso))
        .to_locale_date_string("ja-JP", &JsValue::UNDEFINED)
        .into()
}
