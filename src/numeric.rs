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

//! Numeric constraints: price, horsepower, MPG, 0-100 time, top speed, torque
//! and cylinder count.
//!
//! Extraction runs over a working copy of the prompt. Every accepted match is
//! erased from the copy before the next pattern runs, so a number is
//! attributed to at most one filter.

use regex::Captures;
use regex::Regex;

use crate::model::ParsedFilters;
use crate::patterns::MONEY;
use crate::patterns::erase;
use crate::patterns::normalize_spaces;
use crate::patterns::parse_float;
use crate::patterns::parse_int;
use crate::patterns::parse_money;
use crate::patterns::static_regex;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericFilters {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub cylinders: Option<i64>,
    pub min_horsepower: Option<i64>,
    pub max_horsepower: Option<i64>,
    pub min_combined_mpg: Option<f64>,
    pub max_combined_mpg: Option<f64>,
    pub max_acceleration_0_100: Option<f64>,
    pub min_vitesse_max: Option<i64>,
    pub max_vitesse_max: Option<i64>,
    pub min_torque_nm: Option<i64>,
    pub max_torque_nm: Option<i64>,
}

impl NumericFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copies every numeric bound into `filters`.
    pub fn apply_to(self, filters: &mut ParsedFilters) {
        filters.min_price = self.min_price;
        filters.max_price = self.max_price;
        filters.cylinders = self.cylinders;
        filters.min_horsepower = self.min_horsepower;
        filters.max_horsepower = self.max_horsepower;
        filters.min_combined_mpg = self.min_combined_mpg;
        filters.max_combined_mpg = self.max_combined_mpg;
        filters.max_acceleration_0_100 = self.max_acceleration_0_100;
        filters.min_vitesse_max = self.min_vitesse_max;
        filters.max_vitesse_max = self.max_vitesse_max;
        filters.min_torque_nm = self.min_torque_nm;
        filters.max_torque_nm = self.max_torque_nm;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericOutcome {
    pub filters: NumericFilters,
    pub notes: Vec<String>,
    /// Working copy after every accepted match was erased.
    pub residual: String,
}

static_regex! {
    fn price_range_re() = format!(
        r"(?i)\b(?:price\s*)?(?:between|from)\s*({MONEY})\s*(?:and|to)\s*({MONEY})\b"
    );
}
static_regex! {
    fn price_max_re() = format!(r"(?i)\b(?:price\s*)?(?:under|below|less\s+than|max)\s*({MONEY})\b");
}
static_regex! {
    fn price_min_re() = format!(r"(?i)\b(?:price\s*)?(?:over|above|more\s+than|min)\s*({MONEY})\b");
}
static_regex! {
    fn hp_range_re() =
        r"(?i)\b(?:between|from)\s*([0-9]{2,4})\s*(?:and|to)\s*([0-9]{2,4})\s*(?:hp|horsepower)\b";
}
static_regex! {
    fn hp_min_re() =
        r"(?i)\b(?:at\s*least|min|over|above|more\s+than)\s*([0-9]{2,4})\s*(?:hp|horsepower)\b";
}
static_regex! {
    fn hp_max_re() =
        r"(?i)\b(?:at\s*most|max|under|below|less\s+than)\s*([0-9]{2,4})\s*(?:hp|horsepower)\b";
}
static_regex! {
    fn mpg_min_re() =
        r"(?i)\b(?:at\s*least|min|over|above|more\s+than)\s*([0-9]{2,3}(?:\.[0-9]+)?)\s*mpg\b";
}
static_regex! {
    fn accel_max_re() = r"(?i)\b(?:0\s*[-–]?\s*100|0\s*to\s*100)\s*(?:under|below|less\s+than|max)\s*([0-9]+(?:\.[0-9]+)?)\s*(?:s|sec|secs|seconds)\b";
}
static_regex! {
    fn top_speed_min_re() =
        r"(?i)\b(?:top\s*speed|vitesse|max\s*speed)\s*(?:over|above|more\s+than|min|at\s*least)\s*([0-9]{2,3})\b";
}
static_regex! {
    fn torque_min_re() =
        r"(?i)\btorque\s*(?:over|above|more\s+than|min|at\s*least)\s*([0-9]{2,4})\s*(?:nm)?\b";
}
static_regex! {
    fn cylinders_re() = r"(?i)\b([0-9]{1,2})\s*-?\s*(?:cyl|cylinders?)\b";
}
static_regex! {
    fn vee_cylinders_re() = r"(?i)\bv-?(4|6|8|10|12|16)\b";
}
static_regex! {
    /// A unit right after an amount means it is not a price.
    fn unit_after_re() =
        r"(?i)^\s*(?:hp|bhp|horsepower|ps|mpg|nm|cyl|cylinders?|s|sec|secs|seconds|km/?h|kph|mph)\b";
}

/// Runs every numeric pattern in priority order over a working copy of
/// `text`.
pub fn extract_numeric(text: &str) -> NumericOutcome {
    let mut work = Working::new(text);
    let mut filters = NumericFilters::default();
    let mut notes = Vec::new();

    if let Some((a, b)) = work.take(price_range_re(), true, |c| {
        Some((parse_money(c.get(1)?.as_str())?, parse_money(c.get(2)?.as_str())?))
    }) {
        let (lo, hi) = (a.min(b), a.max(b));
        filters.min_price = Some(lo);
        filters.max_price = Some(hi);
        notes.push(format!("Price: {lo}–{hi}"));
    }

    if let Some(v) = work.take(price_max_re(), true, |c| parse_money(c.get(1)?.as_str()))
        && fits_above(filters.min_price, v)
    {
        filters.max_price = Some(v);
        notes.push(format!("Price ≤ {v}"));
    }

    if let Some(v) = work.take(price_min_re(), true, |c| parse_money(c.get(1)?.as_str()))
        && fits_below(filters.max_price, v)
    {
        filters.min_price = Some(v);
        notes.push(format!("Price ≥ {v}"));
    }

    if let Some((a, b)) = work.take(hp_range_re(), false, |c| {
        Some((parse_int(c.get(1)?.as_str())?, parse_int(c.get(2)?.as_str())?))
    }) {
        let (lo, hi) = (a.min(b), a.max(b));
        filters.min_horsepower = Some(lo);
        filters.max_horsepower = Some(hi);
        notes.push(format!("Horsepower: {lo}–{hi} hp"));
    }

    if let Some(v) = work.take(hp_min_re(), false, |c| parse_int(c.get(1)?.as_str()))
        && fits_below(filters.max_horsepower, v)
    {
        filters.min_horsepower = Some(v);
        notes.push(format!("Horsepower ≥ {v} hp"));
    }

    if let Some(v) = work.take(hp_max_re(), false, |c| parse_int(c.get(1)?.as_str()))
        && fits_above(filters.min_horsepower, v)
    {
        filters.max_horsepower = Some(v);
        notes.push(format!("Horsepower ≤ {v} hp"));
    }

    if let Some(v) = work.take(mpg_min_re(), false, |c| parse_float(c.get(1)?.as_str())) {
        filters.min_combined_mpg = Some(v);
        notes.push(format!("Combined MPG ≥ {v}"));
    }

    if let Some(v) = work.take(accel_max_re(), false, |c| parse_float(c.get(1)?.as_str())) {
        filters.max_acceleration_0_100 = Some(v);
        notes.push(format!("0–100 ≤ {v}s"));
    }

    if let Some(v) = work.take(top_speed_min_re(), false, |c| parse_int(c.get(1)?.as_str())) {
        filters.min_vitesse_max = Some(v);
        notes.push(format!("Top speed ≥ {v}"));
    }

    if let Some(v) = work.take(torque_min_re(), false, |c| parse_int(c.get(1)?.as_str())) {
        filters.min_torque_nm = Some(v);
        notes.push(format!("Torque ≥ {v} Nm"));
    }

    let cylinders = work
        .take(cylinders_re(), false, parse_cylinders)
        .or_else(|| work.take(vee_cylinders_re(), false, parse_cylinders));
    if let Some(v) = cylinders {
        filters.cylinders = Some(v);
        notes.push(format!("Cylinders = {v}"));
    }

    NumericOutcome {
        filters,
        notes,
        residual: normalize_spaces(&work.text),
    }
}

/// A lower bound is kept only if it does not exceed the upper bound already
/// recorded; the earlier bound wins.
fn fits_below(max: Option<i64>, min: i64) -> bool {
    let fits = max.is_none_or(|max| min <= max);
    if !fits {
        tracing::trace!(min, ?max, "lower bound above upper bound, dropped");
    }
    fits
}

fn fits_above(min: Option<i64>, max: i64) -> bool {
    let fits = min.is_none_or(|min| min <= max);
    if !fits {
        tracing::trace!(?min, max, "upper bound below lower bound, dropped");
    }
    fits
}

fn parse_cylinders(caps: &Captures<'_>) -> Option<i64> {
    parse_int(caps.get(1)?.as_str()).filter(|v| *v > 0)
}

/// Non-price patterns that run after the price patterns. A price candidate
/// overlapping one of their matches belongs to that metric.
const METRIC_PATTERNS: [fn() -> &'static Regex; 7] = [
    hp_range_re,
    hp_min_re,
    hp_max_re,
    mpg_min_re,
    accel_max_re,
    top_speed_min_re,
    torque_min_re,
];

struct Working {
    text: String,
}

impl Working {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Finds the first match of `re` that parses, erases it and returns the
    /// parsed value. Price patterns pass `money = true` so amounts another
    /// metric pattern will take ("torque over 400", "over 300 hp") are left
    /// alone.
    fn take<T>(
        &mut self,
        re: &Regex,
        money: bool,
        parse: impl Fn(&Captures<'_>) -> Option<T>,
    ) -> Option<T> {
        let mut hit = None;
        for caps in re.captures_iter(&self.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if money && self.tied_to_metric(whole.start(), whole.end()) {
                tracing::trace!(candidate = whole.as_str(), "amount belongs to another metric");
                continue;
            }
            if let Some(value) = parse(&caps) {
                hit = Some((whole.range(), value));
                break;
            }
        }
        let (span, value) = hit?;
        self.text = erase(&self.text, span);
        Some(value)
    }

    fn tied_to_metric(&self, start: usize, end: usize) -> bool {
        if unit_after_re().is_match(&self.text[end..]) {
            return true;
        }
        METRIC_PATTERNS.iter().any(|pattern| {
            pattern()
                .find_iter(&self.text)
                .any(|m| m.start() < end && start < m.end())
        })
    }
}
