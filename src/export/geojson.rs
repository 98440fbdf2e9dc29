//! GeoJSON出力
//!
//! 座標が設定済みのレコードだけを Point Feature にする。
//! properties にはタグごとの真偽値（小文字化したタグ名）も入れる。

use crate::error::Result;
use forum_locations_common::SiteRecord;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::io::Write;

lazy_static::lazy_static! {
    static ref NEWLINE_RE: Regex = Regex::new(r"\r?\n").expect("valid newline pattern");
}

/// 住所の改行を `", "` に置き換える
pub fn flatten_address(address: &str) -> String {
    NEWLINE_RE.replace_all(address, ", ").into_owned()
}

/// レコードを Feature に変換（座標未設定なら None）
pub fn feature(record: &SiteRecord) -> Option<Value> {
    if !record.has_coordinates() {
        tracing::info!(name = %record.name, forum_url = %record.forum_url, "Coordinates not set. Skipping.");
        return None;
    }

    let mut properties = Map::new();
    properties.insert("name".into(), json!(record.name));
    properties.insert("forum".into(), json!(record.forum_url));
    properties.insert("site".into(), json!(record.website));
    properties.insert("tags".into(), json!(record.tags));
    properties.insert("machines".into(), json!(record.equipment));
    properties.insert("adresse".into(), json!(flatten_address(&record.address)));
    for tag in &record.tags {
        properties.insert(tag.to_lowercase(), Value::Bool(true));
    }

    Some(json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [record.longitude, record.latitude],
        },
        "properties": properties,
    }))
}

/// FeatureCollection を組み立てる（レコードの順序を保つ）
pub fn feature_collection(records: &[SiteRecord]) -> Value {
    let features: Vec<Value> = records.iter().filter_map(feature).collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// インデント付きで書き出す
pub fn write_geojson<W: Write>(records: &[SiteRecord], w: &mut W) -> Result<()> {
    let collection = feature_collection(records);
    serde_json::to_writer_pretty(&mut *w, &collection)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
