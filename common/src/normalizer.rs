//! 抽出した定義リストを拠点レコードへ反映する
//!
//! - 緯度・経度: 生テキストを保持しつつ10進度へ変換（失敗時は0）
//! - Site / Adresse: そのまま上書き
//! - Tags / Machines: 分割して追記

use crate::coordinate::parse_coordinate;
use crate::extractor::Definitions;
use crate::types::SiteRecord;

pub const LATITUDE_KEY: &str = "Latitude";
pub const LONGITUDE_KEY: &str = "Longitude";
pub const WEBSITE_KEY: &str = "Site";
pub const ADDRESS_KEYS: &[&str] = &["Address", "Adresse"];
pub const TAGS_KEY: &str = "Tags";
pub const MACHINES_KEY: &str = "Machines";

/// 定義リストをレコードへマージする
///
/// スカラー項目は上書き、`tags`/`equipment` は追記。
/// 未知のキーは無視する。座標の変換失敗はレコードを0に戻すだけで、エラーにはしない。
pub fn normalize<'a>(fields: &Definitions, record: &'a mut SiteRecord) -> &'a mut SiteRecord {
    if let Some(value) = fields.get(LATITUDE_KEY) {
        let (raw, parsed) = normalize_coordinate(LATITUDE_KEY, value, &record.forum_url);
        record.raw_latitude = raw;
        record.latitude = parsed;
    }

    if let Some(value) = fields.get(LONGITUDE_KEY) {
        let (raw, parsed) = normalize_coordinate(LONGITUDE_KEY, value, &record.forum_url);
        record.raw_longitude = raw;
        record.longitude = parsed;
    }

    if let Some(value) = fields.get(WEBSITE_KEY) {
        record.website = value.clone();
    }

    // 両方ある場合は仏語表記（後勝ち）
    for key in ADDRESS_KEYS {
        if let Some(value) = fields.get(*key) {
            record.address = value.clone();
        }
    }

    if let Some(value) = fields.get(TAGS_KEY) {
        record.tags.extend(split_tags(value));
    }

    if let Some(value) = fields.get(MACHINES_KEY) {
        record.equipment.extend(split_machines(value));
    }

    record
}

/// 座標の生テキストと変換結果を返す（変換失敗時は0）
fn normalize_coordinate(key: &str, value: &str, forum_url: &str) -> (String, f64) {
    let raw = value.replace(',', ".");
    match parse_coordinate(&raw) {
        Ok(parsed) => (raw, parsed),
        Err(e) => {
            tracing::warn!(field = key, raw = %raw, forum_url, "Cannot convert coordinate: {}", e);
            (raw, 0.0)
        }
    }
}

/// タグ列を分割する
///
/// 空白またはカンマ区切り。先頭の `#` を1つだけ取り除く。
pub fn split_tags(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| token.strip_prefix('#').unwrap_or(token).trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// 設備列を分割する（カンマまたは `/` 区切り）
pub fn split_machines(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(|c: char| c == ',' || c == '/')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
