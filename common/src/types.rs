//! コーパスレコードの型定義
//!
//! ビューアとテストで共有される型:
//! - CorpusRecord: 画像1枚と注釈をまとめた単位
//! - Sign: 看板上の1注釈（多言語併記は複数Signになる）
//! - LocationInfo: 撮影地情報

use serde::{Deserialize, Serialize};

/// 撮影地情報（全フィールド任意）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocationInfo {
    pub country: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
}

impl LocationInfo {
    /// 存在するフィールドだけを ", " で連結する
    pub fn join(&self) -> String {
        [&self.country, &self.province, &self.city, &self.district]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 看板上の1注釈
///
/// 任意フィールドは空Vecをデフォルトにして、呼び出し側の
/// 存在チェック分岐をなくす。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sign {
    pub text: String,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub pictograms: Vec<String>,
    /// データには存在するがUIコントロールは未公開
    #[serde(default)]
    pub form: Vec<String>,
}

/// コーパスレコード（読み取り専用、signsは1件以上）
///
/// 先頭のsignが「主注釈」、以降は「副注釈」。表示上の区別のみ。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CorpusRecord {
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub original_image: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub location_info: Option<LocationInfo>,
    pub signs: Vec<Sign>,
}

impl CorpusRecord {
    /// 全signの言語コードを初出順・重複なしで返す
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for sign in &self.signs {
            for lang in &sign.language {
                if !seen.contains(&lang.as_str()) {
                    seen.push(lang.as_str());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_record_deserialize() {
        let json = r#"{
            "id": "IMG_0001",
            "image": "images/IMG_0001.jpg",
            "date": "2024-05-12T09:30:00+09:00",
            "original_image": "IMG_0001.HEIC",
            "notes": "駅前の案内板",
            "link": "https://example.com/IMG_0001",
            "location_info": {"country": "日本", "city": "京都市"},
            "signs": [
                {"text": "出口\nExit", "language": ["ja", "en"], "pictograms": ["arrow"]}
            ]
        }"#;

        let record: CorpusRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, "IMG_0001");
        assert_eq!(record.signs.len(), 1);
        assert_eq!(record.signs[0].language, vec!["ja", "en"]);
        assert_eq!(record.signs[0].pictograms, vec!["arrow"]);
        assert_eq!(record.notes.as_deref(), Some("駅前の案内板"));
    }

    #[test]
    fn test_corpus_record_deserialize_missing_fields() {
        // 必須フィールドのみでデシリアライズできることを確認
        let json = r#"{
            "id": "IMG_0002",
            "image": "images/IMG_0002.jpg",
            "signs": [{"text": "立入禁止"}]
        }"#;

        let record: CorpusRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.date, None);
        assert_eq!(record.original_image, None);
        assert_eq!(record.notes, None);
        assert_eq!(record.link, None);
        assert!(record.location_info.is_none());
        assert!(record.signs[0].language.is_empty()); // デフォルト値
        assert!(record.signs[0].pictograms.is_empty()); // デフォルト値
        assert!(record.signs[0].form.is_empty()); // デフォルト値
    }

    #[test]
    fn test_location_info_join_skips_absent() {
        let location = LocationInfo {
            country: Some("日本".to_string()),
            province: None,
            city: Some("京都市".to_string()),
            district: None,
        };
        assert_eq!(location.join(), "日本, 京都市");
    }

    #[test]
    fn test_location_info_join_empty() {
        assert_eq!(LocationInfo::default().join(), "");
    }

    #[test]
    fn test_languages_dedup_in_first_seen_order() {
        let record = CorpusRecord {
            signs: vec![
                Sign {
                    text: "停车场".to_string(),
                    language: vec!["zh".to_string(), "en".to_string()],
                    ..Default::default()
                },
                Sign {
                    text: "Parking".to_string(),
                    language: vec!["en".to_string(), "ja".to_string()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(record.languages(), vec!["zh", "en", "ja"]);
    }

    #[test]
    fn test_corpus_record_roundtrip() {
        let original = CorpusRecord {
            id: "IMG_0003".to_string(),
            image: "images/IMG_0003.jpg".to_string(),
            date: Some("2024-01-01T00:00:00Z".to_string()),
            signs: vec![Sign {
                text: "ようこそ".to_string(),
                language: vec!["ja".to_string()],
                form: vec!["vertical".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: CorpusRecord = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(original, restored);
    }
}
