//! 拠点レコードの型定義
//!
//! 1スレッド = 1拠点。スレッドのタイトルとURLを初期値として生成し、
//! wiki投稿ごとの正規化パスで上書き・追記していく。

use serde::{Deserialize, Serialize};

/// 座標未設定を表す生テキストの初期値
pub const UNSET_RAW_COORDINATE: &str = "0";

/// 1スレッド分の拠点情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    /// 拠点名（スレッドタイトル）
    pub name: String,

    /// スレッドの正規URL
    #[serde(rename = "forumURL", alias = "forumUrl")]
    pub forum_url: String,

    /// 投稿者が入力した緯度（`,` → `.` 置換済み）
    #[serde(default = "unset_raw")]
    pub raw_latitude: String,

    /// 投稿者が入力した経度（`,` → `.` 置換済み）
    #[serde(default = "unset_raw")]
    pub raw_longitude: String,

    /// 緯度（10進度）。0は未設定
    #[serde(default)]
    pub latitude: f64,

    /// 経度（10進度）。0は未設定
    #[serde(default)]
    pub longitude: f64,

    #[serde(default)]
    pub website: String,

    /// 住所（`<br>` 由来の改行を含みうる）
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// 設備・工作機械
    #[serde(default, alias = "machines")]
    pub equipment: Vec<String>,
}

fn unset_raw() -> String {
    UNSET_RAW_COORDINATE.to_string()
}

impl SiteRecord {
    /// スレッドのタイトルとURLで初期化したレコードを作る
    pub fn new(name: impl Into<String>, forum_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forum_url: forum_url.into(),
            ..Default::default()
        }
    }

    /// 緯度・経度がどちらも設定済みか
    ///
    /// 0は「未設定」の番兵値なので、片方でも0なら地図には出さない。
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

impl Default for SiteRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            forum_url: String::new(),
            raw_latitude: unset_raw(),
            raw_longitude: unset_raw(),
            latitude: 0.0,
            longitude: 0.0,
            website: String::new(),
            address: String::new(),
            tags: Vec::new(),
            equipment: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_record_default() {
        let record = SiteRecord::default();
        assert_eq!(record.raw_latitude, "0");
        assert_eq!(record.raw_longitude, "0");
        assert_eq!(record.latitude, 0.0);
        assert_eq!(record.longitude, 0.0);
        assert!(record.tags.is_empty());
        assert!(record.equipment.is_empty());
    }

    #[test]
    fn test_site_record_new_seeds_title_and_url() {
        let record = SiteRecord::new("La Fabrique", "https://forum.example.org/t/42");
        assert_eq!(record.name, "La Fabrique");
        assert_eq!(record.forum_url, "https://forum.example.org/t/42");
        assert_eq!(record.raw_latitude, "0");
        assert!(!record.has_coordinates());
    }

    #[test]
    fn test_has_coordinates_requires_both() {
        let mut record = SiteRecord::default();
        record.latitude = 43.13;
        assert!(!record.has_coordinates());
        record.longitude = 5.936;
        assert!(record.has_coordinates());
    }

    #[test]
    fn test_site_record_serialize() {
        let record = SiteRecord {
            name: "Atelier".to_string(),
            forum_url: "https://forum.example.org/t/7".to_string(),
            equipment: vec!["Imprimante 3D".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"forumURL\":\"https://forum.example.org/t/7\""));
        assert!(json.contains("\"rawLatitude\":\"0\""));
        assert!(json.contains("\"equipment\":[\"Imprimante 3D\"]"));
    }

    #[test]
    fn test_site_record_deserialize_missing_fields() {
        let json = r#"{"name": "Atelier", "forumURL": "https://forum.example.org/t/7", "machines": ["Laser"]}"#;

        let record: SiteRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "Atelier");
        assert_eq!(record.raw_longitude, "0");
        assert_eq!(record.equipment, vec!["Laser".to_string()]);
    }
}
