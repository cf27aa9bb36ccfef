//! Probability-vector parsing with zero-allocation float parsing.
//!
//! Accepts `0.1, 0.3,0.2 ,0.4`.  Unicode minus (U+2212) is folded to `-` so
//! pasted values parse; whether a negative weight makes sense is left to the
//! sampler.

use thiserror::Error;

/// A weight list entry that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("weight {position}: invalid value '{text}'")]
pub struct WeightParseError {
    /// 1-based position in the list.
    pub position: usize,
    pub text: String,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

fn normalize_unicode_minus(text: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\u{2212}' {
            buf.push(b'-');
        } else {
            let mut tmp = [0u8; 4];
            buf.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
        }
    }
    buf
}

#[inline]
fn parse_weight(bytes: &[u8], position: usize) -> Result<f64, WeightParseError> {
    let bad = || WeightParseError {
        position,
        text: String::from_utf8_lossy(bytes).into_owned(),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Parse a comma-separated probability vector.
///
/// An empty or all-blank string yields an empty vector; the sampler reports
/// that as an empty distribution.
pub fn parse_weights(text: &str) -> Result<Vec<f64>, WeightParseError> {
    let buf = normalize_unicode_minus(text);
    if trim(&buf).is_empty() {
        return Ok(Vec::new());
    }
    buf.split(|&b| b == b',')
        .enumerate()
        .map(|(i, field)| parse_weight(trim(field), i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_vector() {
        assert_eq!(
            parse_weights("0.1,0.3,0.2,0.4").unwrap(),
            vec![0.1, 0.3, 0.2, 0.4]
        );
    }

    #[test]
    fn tolerates_whitespace() {
        assert_eq!(parse_weights("  0.5 ,\t0.5  ").unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn blank_is_empty() {
        assert!(parse_weights("").unwrap().is_empty());
        assert!(parse_weights("   ").unwrap().is_empty());
    }

    #[test]
    fn unicode_minus_is_folded() {
        assert_eq!(parse_weights("\u{2212}0.25,1.25").unwrap(), vec![-0.25, 1.25]);
    }

    #[test]
    fn reports_position_of_bad_entry() {
        let err = parse_weights("0.1,abc,0.9").unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.text, "abc");
        assert_eq!(err.to_string(), "weight 2: invalid value 'abc'");
    }

    #[test]
    fn rejects_empty_field_and_non_finite() {
        assert_eq!(parse_weights("0.5,,0.5").unwrap_err().position, 2);
        assert_eq!(parse_weights("0.5,inf").unwrap_err().position, 2);
        assert_eq!(parse_weights("NaN").unwrap_err().position, 1);
    }
}
