pub mod csv;
pub mod geojson;

use crate::cli::OutputFormat;
use crate::error::Result;
use forum_locations_common::SiteRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 出力先を開く（省略時は標準出力）
pub fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

/// 指定形式でレコードを書き出す
pub fn export_records<W: Write>(
    records: &[SiteRecord],
    format: &OutputFormat,
    w: &mut W,
    csv_header: bool,
) -> Result<()> {
    match format {
        OutputFormat::Csv => csv::write_csv(records, w, csv_header)?,
        OutputFormat::Geojson => geojson::write_geojson(records, w)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, records)?;
            writeln!(w)?;
            w.flush()?;
        }
    }
    Ok(())
}

/// ファイルまたは標準出力へ書き出す
pub fn export_to(
    records: &[SiteRecord],
    format: &OutputFormat,
    output: Option<&Path>,
    csv_header: bool,
) -> Result<()> {
    let mut writer = open_output(output)?;
    export_records(records, format, &mut writer, csv_header)?;
    if let Some(path) = output {
        eprintln!("✔ {}出力: {}", format, path.display());
    }
    Ok(())
}
