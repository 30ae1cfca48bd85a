//! コーパスの絞り込みロジック
//!
//! 述語は3種（テキスト・ピクトグラム・言語）。レコードは
//! 「有効な各述語を、いずれかのsignが満たす」場合に通過する
//! （述語間はAND、sign間はOR）。

use std::collections::{BTreeSet, HashSet};

use crate::types::CorpusRecord;

/// フィルタ状態（検索語は小文字で保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub search_pictogram: String,
    pub languages: HashSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// テキスト検索語を設定する
    pub fn set_search_text(&mut self, raw: &str) {
        self.search_text = raw.to_lowercase();
    }

    /// ピクトグラム検索語を設定する
    pub fn set_search_pictogram(&mut self, raw: &str) {
        self.search_pictogram = raw.to_lowercase();
    }

    /// 言語を選択する（単一選択、空文字列で解除）
    pub fn select_language(&mut self, code: &str) {
        self.languages.clear();
        if !code.is_empty() {
            self.languages.insert(code.to_string());
        }
    }

    /// レコードが有効な述語を全て満たすか
    pub fn matches(&self, record: &CorpusRecord) -> bool {
        if !self.search_text.is_empty() {
            let hit = record
                .signs
                .iter()
                .any(|sign| sign.text.to_lowercase().contains(&self.search_text));
            if !hit {
                return false;
            }
        }

        if !self.search_pictogram.is_empty() {
            let hit = record.signs.iter().any(|sign| {
                sign.pictograms
                    .iter()
                    .any(|p| p.to_lowercase().contains(&self.search_pictogram))
            });
            if !hit {
                return false;
            }
        }

        if !self.languages.is_empty() {
            let hit = record
                .signs
                .iter()
                .any(|sign| sign.language.iter().any(|lang| self.languages.contains(lang)));
            if !hit {
                return false;
            }
        }

        true
    }

    /// 全レコードを走査して通過分を返す（入力変更ごとに全再計算）
    pub fn apply(&self, data: &[CorpusRecord]) -> Vec<CorpusRecord> {
        data.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// データセット走査で得たフィルタ候補
///
/// formsは収集のみで、対応するUIコントロールは出していない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub languages: Vec<String>,
    pub forms: Vec<String>,
}

impl FilterOptions {
    /// 全レコードの全signから異なり値を集める（辞書順）
    pub fn collect(data: &[CorpusRecord]) -> Self {
        let mut languages = BTreeSet::new();
        let mut forms = BTreeSet::new();

        for record in data {
            for sign in &record.signs {
                for lang in &sign.language {
                    languages.insert(lang.clone());
                }
                for form in &sign.form {
                    forms.insert(form.clone());
                }
            }
        }

        Self {
            languages: languages.into_iter().collect(),
            forms: forms.into_iter().collect(),
        }
    }
}

/// カード用プレビュー: 各signのtext先頭2行を改行で連結する
pub fn preview_text(record: &CorpusRecord) -> String {
    record
        .signs
        .iter()
        .map(|sign| sign.text.lines().take(2).collect::<Vec<_>>().join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sign;

    fn sign(text: &str, language: &[&str], pictograms: &[&str]) -> Sign {
        Sign {
            text: text.to_string(),
            language: language.iter().map(|s| s.to_string()).collect(),
            pictograms: pictograms.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn record(id: &str, signs: Vec<Sign>) -> CorpusRecord {
        CorpusRecord {
            id: id.to_string(),
            image: format!("images/{id}.jpg"),
            signs,
            ..Default::default()
        }
    }

    fn dataset() -> Vec<CorpusRecord> {
        vec![
            record("r1", vec![sign("Hello\nWorld\nExtra", &["en"], &[])]),
            record("r2", vec![sign("出口\nExit", &["ja", "en"], &["arrow"])]),
            record(
                "r3",
                vec![
                    sign("停车场", &["zh"], &["car"]),
                    sign("Parking", &["en"], &["Car Park"]),
                ],
            ),
        ]
    }

    #[test]
    fn test_empty_filters_pass_everything() {
        let filters = FilterState::new();
        let result = filters.apply(&dataset());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_text_search_case_insensitive_across_lines() {
        let mut filters = FilterState::new();
        filters.set_search_text("wor");
        let result = filters.apply(&dataset());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r1");
    }

    #[test]
    fn test_text_search_matches_any_sign() {
        // 述語はsign間でOR: 2つ目のsignだけが一致しても通過する
        let mut filters = FilterState::new();
        filters.set_search_text("parking");
        let result = filters.apply(&dataset());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r3");
    }

    #[test]
    fn test_pictogram_search_substring() {
        let mut filters = FilterState::new();
        filters.set_search_pictogram("car");
        let ids: Vec<_> = filters.apply(&dataset()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["r3"]);
    }

    #[test]
    fn test_pictogram_absent_cannot_match() {
        // pictogramsが無いsignはその述語を満たせないだけでエラーにはならない
        let mut filters = FilterState::new();
        filters.set_search_pictogram("arrow");
        let ids: Vec<_> = filters.apply(&dataset()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["r2"]);
    }

    #[test]
    fn test_language_filter_intersects() {
        let mut filters = FilterState::new();
        filters.select_language("zh");
        let ids: Vec<_> = filters.apply(&dataset()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["r3"]);
    }

    #[test]
    fn test_select_language_replaces_previous() {
        let mut filters = FilterState::new();
        filters.select_language("zh");
        filters.select_language("ja");
        assert_eq!(filters.languages.len(), 1);
        assert!(filters.languages.contains("ja"));

        filters.select_language("");
        assert!(filters.languages.is_empty());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let mut filters = FilterState::new();
        filters.set_search_text("车");
        filters.select_language("ko");
        assert!(filters.apply(&dataset()).is_empty());

        filters.select_language("zh");
        let result = filters.apply(&dataset());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r3");
    }

    #[test]
    fn test_predicates_may_be_satisfied_by_different_signs() {
        // 述語ごとに独立してsignを探す: テキストは1つ目、言語は2つ目で成立
        let mut filters = FilterState::new();
        filters.set_search_text("停");
        filters.select_language("en");
        let result = filters.apply(&dataset());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r3");
    }

    #[test]
    fn test_collect_options_sorted_and_deduped() {
        let options = FilterOptions::collect(&dataset());
        assert_eq!(options.languages, vec!["en", "ja", "zh"]);
        assert!(options.forms.is_empty());
    }

    #[test]
    fn test_collect_options_gathers_forms() {
        let mut data = dataset();
        data[0].signs[0].form = vec!["vertical".to_string(), "banner".to_string()];
        let options = FilterOptions::collect(&data);
        assert_eq!(options.forms, vec!["banner", "vertical"]);
    }

    #[test]
    fn test_preview_takes_first_two_lines() {
        let r = record("p1", vec![sign("a\nb\nc", &[], &[])]);
        assert_eq!(preview_text(&r), "a\nb");
    }

    #[test]
    fn test_preview_joins_all_signs() {
        let r = record(
            "p2",
            vec![sign("一行目\n二行目\n三行目", &[], &[]), sign("short", &[], &[])],
        );
        assert_eq!(preview_text(&r), "一行目\n二行目\nshort");
    }
}
