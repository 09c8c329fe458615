//! Version parsing and ordering.
//!
//! Versions are split on `.` into segments:
//! - Numeric segments compare as numbers; one too large for `u64`
//!   saturates to `u64::MAX`, so it still orders above every smaller number
//! - Any other segment is folded into a number by summing its character
//!   codes, so legacy or malformed versions stay orderable instead of failing
//! - Shorter versions are padded with zero segments, so `1.0` == `1.0.0`
//!   and `1.0` < `1.0.1`

use std::cmp::Ordering;
use std::fmt;

/// A parsed version with comparable numeric segments.
#[derive(Debug, Clone)]
pub struct Version {
    pub original: String,
    segments: Vec<u64>,
}

impl Version {
    pub fn parse(version: &str) -> Self {
        Self {
            original: version.to_string(),
            segments: parse_segments(version),
        }
    }

    /// The numeric segments this version orders by.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

/// Compare two version strings using [`Version`] ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        for i in 0..max_len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            let ord = a.cmp(&b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

fn parse_segments(version: &str) -> Vec<u64> {
    version.split('.').map(classify).collect()
}

fn classify(token: &str) -> u64 {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse::<u64>().unwrap_or(u64::MAX);
    }
    token.chars().map(|c| c as u64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments() {
        assert_eq!(Version::parse("1.10.3").segments(), &[1, 10, 3]);
    }

    #[test]
    fn text_segment_sums_char_codes() {
        // 'r' = 114, 'c' = 99
        assert_eq!(Version::parse("1.rc").segments(), &[1, 213]);
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(Version::parse("1.10") > Version::parse("1.9"));
    }

    #[test]
    fn oversized_numeric_segment_saturates() {
        assert_eq!(Version::parse("18446744073709551616").segments(), &[u64::MAX]);
        assert!(Version::parse("1.18446744073709551616") > Version::parse("1.2000"));
    }

    #[test]
    fn display_keeps_original() {
        assert_eq!(Version::parse("2.0-beta").to_string(), "2.0-beta");
    }
}
