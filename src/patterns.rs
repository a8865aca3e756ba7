// Copyright 2026 Carprompt Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Compiled patterns and the small text helpers the extractors share.

use std::ops::Range;

use regex::Regex;

/// Declares a lazily compiled, process-wide regex accessor.
///
/// Every pattern is a literal checked by the unit tests below, so a compile
/// failure is a programming error rather than an input error.
macro_rules! static_regex {
    ($(#[$meta:meta])* $vis:vis fn $name:ident() = $pattern:expr;) => {
        $(#[$meta])*
        $vis fn $name() -> &'static ::regex::Regex {
            static RE: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            RE.get_or_init(|| ::regex::Regex::new(&$pattern).expect("static pattern compiles"))
        }
    };
}

pub(crate) use static_regex;

/// A money amount: optional currency, digits with thousands separators,
/// optional decimals and a `k` suffix.
pub const MONEY: &str = r"[$€]?\s*[0-9]+[0-9,]*(?:\.[0-9]+)?k?";

/// A year in 1900..=2099.
pub const YEAR: &str = r"(?:19|20)[0-9]{2}";

/// Replaces `span` with a single space.
pub fn erase(text: &str, span: Range<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..span.start]);
    out.push(' ');
    out.push_str(&text[span.end..]);
    out
}

/// Replaces every match of `re` with a single space.
pub fn erase_all(text: &str, re: &Regex) -> String {
    re.replace_all(text, " ").into_owned()
}

pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive whole-word matcher for a literal phrase.
pub fn word_regex(phrase: &str) -> Option<Regex> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).ok()
}

pub fn parse_int(token: &str) -> Option<i64> {
    parse_float(token).map(|v| v.trunc() as i64)
}

pub fn parse_float(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses tokens like `$25,000`, `20k` or `€ 31.5k` into whole currency units.
pub fn parse_money(token: &str) -> Option<i64> {
    let cleaned: String = token
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | ',') && !c.is_whitespace())
        .collect();
    let (digits, thousands) = match cleaned.strip_suffix('k') {
        Some(rest) => (rest, true),
        None => (cleaned.as_str(), false),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let base = parse_float(digits)?;
    if base < 0.0 {
        return None;
    }
    let value = if thousands { base * 1000.0 } else { base };
    Some(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_money_tokens() {
        assert_eq!(parse_money("20k"), Some(20_000));
        assert_eq!(parse_money("$25,000"), Some(25_000));
        assert_eq!(parse_money("€ 31.5K"), Some(31_500));
        assert_eq!(parse_money("1999.6"), Some(2_000));
        assert_eq!(parse_money("k"), None);
        assert_eq!(parse_money("1.2.3"), None);
        assert_eq!(parse_money("twenty"), None);
    }

    #[test]
    fn parse_numbers_reject_non_finite() {
        assert_eq!(parse_int("305"), Some(305));
        assert_eq!(parse_float("6.5"), Some(6.5));
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn erase_replaces_span_with_space() {
        assert_eq!(erase("under 25k, diesel", 0..9), " , diesel");
        assert_eq!(normalize_spaces("  a   b \t c "), "a b c");
    }

    #[test]
    fn word_regex_respects_boundaries() {
        let re = word_regex("GM").unwrap();
        assert!(re.is_match("a gm truck"));
        assert!(!re.is_match("gmc sierra"));
        let re = word_regex("Mercedes-Benz").unwrap();
        assert!(re.is_match("mercedes-benz c300"));
        assert!(word_regex("  ").is_none());
    }

    #[test]
    fn money_pattern_matches_currency_forms() {
        let re = Regex::new(&format!("^{MONEY}$")).unwrap();
        for token in ["25k", "$25,000", "€ 30000", "12.5k"] {
            assert!(re.is_match(token), "{token}");
        }
    }
}
