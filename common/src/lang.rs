//! 言語コードから表示名へのマッピング

/// 言語コードの表示名を返す（未登録コードはそのまま返す）
pub fn language_name(code: &str) -> &str {
    match code {
        "zh" => "中文",
        "zh-Hans" => "简体中文",
        "zh-Hant" => "繁體中文",
        "ja" => "日本語",
        "en" => "English",
        "vi" => "Tiếng Việt",
        "ko" => "한국어",
        "de" => "Deutsch",
        "pt" => "Português",
        "ru" => "Русский",
        "_multi" => "多言語",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name_mapped() {
        assert_eq!(language_name("ja"), "日本語");
        assert_eq!(language_name("zh-Hant"), "繁體中文");
        assert_eq!(language_name("_multi"), "多言語");
    }

    #[test]
    fn test_language_name_fallback() {
        // 未登録コードは生のまま表示する
        assert_eq!(language_name("fr"), "fr");
        assert_eq!(language_name(""), "");
    }
}
