//! Text encodings for input and output files

use crate::error::CliError;
use anyhow::Result;
use encoding_rs::{Encoding, UTF_8};
use std::env;

/// Locale variables, highest priority first
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// Encoding of the current locale
///
/// Used when no encoding is configured. Falls back to UTF-8.
pub fn locale_encoding() -> &'static Encoding {
    let locale = LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty());
    encoding_for_locale(locale.as_deref())
}

/// Encoding named by the codeset of a POSIX locale such as
/// `de_DE.ISO-8859-1@euro`
pub fn encoding_for_locale(locale: Option<&str>) -> &'static Encoding {
    let Some((_, rest)) = locale.and_then(|locale| locale.split_once('.')) else {
        return UTF_8;
    };
    let codeset = rest.split('@').next().unwrap_or(rest);

    match Encoding::for_label(codeset.as_bytes()) {
        Some(encoding) if encoding.output_encoding() == encoding => encoding,
        _ => {
            log::warn!("Locale codeset '{codeset}' is not usable, defaulting to UTF-8");
            UTF_8
        }
    }
}

/// Input encoding for `label`, or the locale encoding when none is given
pub fn input_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        Some(label) => resolve_encoding(label),
        None => Ok(locale_encoding()),
    }
}

/// Output encoding for `label`, or the locale encoding when none is given
pub fn output_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        Some(label) => resolve_output_encoding(label),
        None => Ok(locale_encoding()),
    }
}

/// Look up an encoding by WHATWG label, e.g. `utf-8`, `latin1`, `shift_jis`
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CliError::UnknownEncoding(label.to_string()).into())
}

/// Look up an encoding that can also be written
///
/// Some encodings (UTF-16, replacement) are decode-only in the encoding
/// standard and would silently turn into UTF-8 on output.
pub fn resolve_output_encoding(label: &str) -> Result<&'static Encoding> {
    let encoding = resolve_encoding(label)?;
    if encoding.output_encoding() != encoding {
        return Err(CliError::UnknownEncoding(format!(
            "{label} (cannot be used for output)"
        ))
        .into());
    }
    Ok(encoding)
}

/// Strictly decode `bytes`, honouring a byte order mark if present
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (encoding, bom_length) = Encoding::for_bom(bytes).unwrap_or((encoding, 0));
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_length..])
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            CliError::EncodingError(format!("input is not valid {}", encoding.name())).into()
        })
}

/// Strictly encode `text`; unmappable characters are an error
pub fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>> {
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(CliError::EncodingError(format!(
            "output contains characters that cannot be encoded as {}",
            encoding.name()
        ))
        .into());
    }
    Ok(bytes.into_owned())
}
