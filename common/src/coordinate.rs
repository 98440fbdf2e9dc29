//! 座標テキストの10進度変換
//!
//! 対応表記:
//! - 10進: `43.130`, `-1.5`（`,` → `.` の置換は呼び出し側で済ませる）
//! - 度分秒: `50°44'41.9"N`, `3°13'15.8"W`（`S`/`W`/`O` で負号）

use crate::error::{Error, Result};

const DEGREE_MARK: char = '°';
const MINUTE_MARK: char = '\'';
const SECOND_MARK: char = '"';

/// 負号になる半球記号（`O` は仏語の Ouest）
const NEGATIVE_HEMISPHERES: &[&str] = &["S", "W", "O"];

/// 座標テキストを10進度に変換する
///
/// # Errors
/// 10進数としても度分秒としても解釈できない場合は `Error::Coordinate`
///
/// # Examples
/// ```
/// use forum_locations_common::parse_coordinate;
///
/// assert_eq!(parse_coordinate("43.130").unwrap(), 43.130);
/// assert!((parse_coordinate("3°13'15.8\"W").unwrap() + 3.221056).abs() < 1e-6);
/// assert!(parse_coordinate("TBD").is_err());
/// ```
pub fn parse_coordinate(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.contains(DEGREE_MARK) {
        parse_dms(text)
    } else {
        parse_decimal(text)
    }
}

fn parse_decimal(text: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| Error::Coordinate(format!("'{}' is not a decimal coordinate", text)))?;
    if !value.is_finite() {
        return Err(Error::Coordinate(format!("'{}' is not a finite number", text)));
    }
    Ok(value)
}

/// 度分秒表記を変換する
///
/// 度・分・秒の3トークンが必須。4つ目（半球記号）は数値として解釈しない。
fn parse_dms(text: &str) -> Result<f64> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == DEGREE_MARK || c == MINUTE_MARK || c == SECOND_MARK)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() < 3 {
        return Err(Error::Coordinate(format!(
            "'{}' needs degrees, minutes and seconds",
            text
        )));
    }

    let component = |index: usize| -> Result<f64> {
        tokens[index].parse::<f64>().map_err(|_| {
            Error::Coordinate(format!("'{}' in '{}' is not a number", tokens[index], text))
        })
    };

    let degrees = component(0)?;
    let minutes = component(1)?;
    let seconds = component(2)?;
    let value = degrees + minutes / 60.0 + seconds / 3600.0;

    match tokens.get(3) {
        Some(hemisphere) if NEGATIVE_HEMISPHERES.contains(hemisphere) => Ok(-value),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_coordinate("43.130").unwrap(), 43.130);
        assert_eq!(parse_coordinate("5.936").unwrap(), 5.936);
        assert_eq!(parse_coordinate("-1.5536").unwrap(), -1.5536);
        assert_eq!(parse_coordinate(" 2.35 ").unwrap(), 2.35);
    }

    #[test]
    fn test_parse_decimal_after_comma_replacement() {
        let raw = "5,936".replace(',', ".");
        assert_eq!(parse_coordinate(&raw).unwrap(), 5.936);
    }

    #[test]
    fn test_parse_decimal_with_comma_fails() {
        assert!(parse_coordinate("5,936").is_err());
    }

    #[test]
    fn test_parse_dms_north() {
        assert_close(parse_coordinate("50°44'41.9\"N").unwrap(), 50.744972);
    }

    #[test]
    fn test_parse_dms_south() {
        assert_close(parse_coordinate("50°44'41.9\"S").unwrap(), -50.744972);
    }

    #[test]
    fn test_parse_dms_east_and_west() {
        assert_close(parse_coordinate("3°13'15.8\"E").unwrap(), 3.221056);
        assert_close(parse_coordinate("3°13'15.8\"W").unwrap(), -3.221056);
    }

    #[test]
    fn test_parse_dms_ouest() {
        assert_close(parse_coordinate("3°13'15.8\"O").unwrap(), -3.221056);
    }

    #[test]
    fn test_parse_dms_without_hemisphere_is_positive() {
        assert_close(parse_coordinate("50°44'41.9\"").unwrap(), 50.744972);
    }

    #[test]
    fn test_parse_dms_with_spaces() {
        assert_close(parse_coordinate(" 50° 44' 41.9\" N").unwrap(), 50.744972);
        assert_close(parse_coordinate("50° 44' 41.9\" S").unwrap(), -50.744972);
    }

    #[test]
    fn test_parse_dms_lowercase_hemisphere_keeps_sign() {
        assert_close(parse_coordinate("50°44'41.9\"s").unwrap(), 50.744972);
    }

    #[test]
    fn test_parse_dms_too_few_tokens() {
        assert!(parse_coordinate("50°44'").is_err());
        assert!(parse_coordinate("50.7449°N").is_err());
    }

    #[test]
    fn test_parse_dms_non_numeric_component() {
        assert!(parse_coordinate("50°xx'41.9\"N").is_err());
        assert!(parse_coordinate("N50°44'41.9\"").is_err());
    }

    #[test]
    fn test_parse_not_a_coordinate() {
        assert!(parse_coordinate("TBD").is_err());
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("NaN").is_err());
        assert!(parse_coordinate("inf").is_err());
    }

    #[test]
    fn test_parse_error_is_coordinate_variant() {
        let err = parse_coordinate("TBD").unwrap_err();
        assert!(matches!(err, Error::Coordinate(_)));
        assert!(err.to_string().contains("TBD"));
    }
}
