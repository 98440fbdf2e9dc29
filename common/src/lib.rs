//! Forum Locations Common Library
//!
//! フォーラム投稿（wiki）に埋め込まれた定義リストから拠点情報を抽出・正規化する。
//! I/Oを持たない純粋な処理のみをCLIと共有する。

pub mod types;
pub mod error;
pub mod extractor;
pub mod coordinate;
pub mod normalizer;

pub use types::SiteRecord;
pub use error::{Error, Result};
pub use extractor::{extract, DefinitionScanner, Definitions, MarkupEvent, ScanState};
pub use coordinate::parse_coordinate;
pub use normalizer::normalize;
