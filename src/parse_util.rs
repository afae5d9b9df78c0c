use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Expected two values separated by '{sep}', but got \"{got}\"")]
    MissingSeparator { sep: char, got: String },

    #[error("Failed to convert \"{str}\"")]
    ParseError { str: String },
}

/// Split `s` at the first `sep` into its two trimmed halves.
pub fn split_pair(sep: char, s: &str) -> Result<(&str, &str), ConvertError> {
    let Some((a, b)) = s.split_once(sep) else {
        return Err(ConvertError::MissingSeparator {
            sep,
            got: s.to_string(),
        });
    };

    Ok((a.trim(), b.trim()))
}

/// Converts `&str` to `T` if `T: FromStr`.
///
/// Only a plain base-10 integer converts; `1.5`, `1e3` and `three` do not.
pub fn convert<T: FromStr>(s: &str) -> Result<T, ConvertError> {
    let Ok(res) = s.parse::<T>() else {
        return Err(ConvertError::ParseError { str: s.to_string() });
    };

    Ok(res)
}

/// Convert both halves of a `sep` separated pair.
pub fn convert_pair<T: FromStr>(sep: char, s: &str) -> Result<(T, T), ConvertError> {
    let (a, b) = split_pair(sep, s)?;

    Ok((convert(a)?, convert(b)?))
}
