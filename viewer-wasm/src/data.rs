//! コーパスデータの取得

use signscape_common::CorpusRecord;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// data.json を取得してレコード配列に変換する
pub async fn fetch_corpus(url: &str) -> Result<Vec<CorpusRecord>, JsValue> {
    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("fetch error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let records: Vec<CorpusRecord> = serde_wasm_bindgen::from_value(json)?;
    Ok(records)
}
