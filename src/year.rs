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

use crate::model::Fact;
use crate::patterns::YEAR;
use crate::patterns::static_regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearRange {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

static_regex! {
    pub(crate) fn around_re() = format!(r"\b(?:around|about)\s+({YEAR})\b");
}
static_regex! {
    pub(crate) fn span_re() = format!(r"\b({YEAR})\s*[-–]\s*({YEAR})\b");
}
static_regex! {
    pub(crate) fn since_re() = format!(r"\b(?:since|after|from)\s+({YEAR})\b");
}
static_regex! {
    pub(crate) fn before_re() = format!(r"\b(?:before|until)\s+({YEAR})\b");
}
static_regex! {
    pub(crate) fn bare_re() = format!(r"\b({YEAR})\b");
}

/// Recognises one year constraint. The pattern families are tried in a fixed
/// order and the first hit ends the search.
pub fn extract_years(text: &str) -> Option<Fact<YearRange>> {
    let t = text.to_lowercase();

    if let Some(y) = capture_year(around_re(), &t, 1) {
        return Some(Fact::new(
            YearRange {
                min_year: Some(y - 2),
                max_year: Some(y + 2),
            },
            format!("Around {y} (±2 years)"),
        ));
    }

    if let Some(caps) = span_re().captures(&t) {
        let a = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok());
        let b = caps.get(2).and_then(|m| m.as_str().parse::<i32>().ok());
        if let (Some(a), Some(b)) = (a, b) {
            let (lo, hi) = (a.min(b), a.max(b));
            return Some(Fact::new(
                YearRange {
                    min_year: Some(lo),
                    max_year: Some(hi),
                },
                format!("Years {lo}–{hi}"),
            ));
        }
    }

    if let Some(y) = capture_year(since_re(), &t, 1) {
        return Some(Fact::new(
            YearRange {
                min_year: Some(y),
                max_year: None,
            },
            format!("Year ≥ {y}"),
        ));
    }

    if let Some(y) = capture_year(before_re(), &t, 1) {
        return Some(Fact::new(
            YearRange {
                min_year: None,
                max_year: Some(y),
            },
            format!("Year ≤ {y}"),
        ));
    }

    capture_year(bare_re(), &t, 1).map(|y| {
        Fact::new(
            YearRange {
                min_year: Some(y),
                max_year: Some(y),
            },
            format!("Year = {y}"),
        )
    })
}

fn capture_year(re: &regex::Regex, text: &str, group: usize) -> Option<i32> {
    re.captures(text)?.get(group)?.as_str().parse().ok()
}
