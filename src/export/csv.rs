//! CSV出力
//!
//! 列: name, rawLatitude, rawLongitude, website, forumURL

use forum_locations_common::SiteRecord;
use std::io::{self, Write};

pub const CSV_HEADER: [&str; 5] = ["name", "latitude", "longitude", "website", "forum"];

const SEPARATOR: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// 1行を書き込む（必要な場合のみクォート）
pub fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", SEPARATOR)?;
        } else {
            first = false;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// レコードを行に変換
pub fn record_row(record: &SiteRecord) -> [&str; 5] {
    [
        record.name.as_str(),
        record.raw_latitude.as_str(),
        record.raw_longitude.as_str(),
        record.website.as_str(),
        record.forum_url.as_str(),
    ]
}

/// 全レコードをCSVで書き出す（座標未設定のレコードも含む）
pub fn write_csv<W: Write>(records: &[SiteRecord], w: &mut W, header: bool) -> io::Result<()> {
    if header {
        write_row(w, &CSV_HEADER)?;
    }
    for record in records {
        write_row(w, &record_row(record))?;
    }
    w.flush()
}
