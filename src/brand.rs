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

//! Brand matching against the caller's catalog, and model inference from
//! whatever the other extractors leave behind.

use crate::model::Fact;
use crate::patterns::YEAR;
use crate::patterns::erase_all;
use crate::patterns::normalize_spaces;
use crate::patterns::static_regex;
use crate::patterns::word_regex;

const MAX_MODEL_CHARS: usize = 40;
const MAX_MODEL_TOKENS: usize = 3;

const STOP_TOKENS: &[&str] = &[
    "and", "or", "with", "without", "for", "a", "an", "the", "in", "on", "of",
];

static_regex! {
    fn year_phrase_re() = format!(
        r"(?i)\b(?:around|about|since|after|from|before|until)\s+{YEAR}\b"
    );
}
static_regex! {
    fn year_span_re() = format!(r"\b{YEAR}\s*[-–]\s*{YEAR}\b");
}
static_regex! {
    fn bare_year_re() = format!(r"\b{YEAR}\b");
}
static_regex! {
    fn preference_re() = concat!(
        r"(?i)\b(?:horsepower|hp|bhp|power|powerful|strong|mpg|efficient|efficiency|economy|",
        r"economical|fuel|fast|quick|acceleration|0\s*[-–]?\s*100|top\s*speed|max\s*speed|",
        r"vitesse|speed|newest|latest|recent|cheap|cheapest|budget|affordable|expensive|premium|",
        r"luxury|price|torque|nm|manual|automatic|auto|cvt|transmission|gearbox|awd|4wd|fwd|rwd|",
        r"(?:all|four|front|rear)\s*wheel\s*drive|diesel|hybrid|electric|ev|gasoline|petrol|gas|",
        r"good|great|best|high|low|lowest|highest|cylinders?|cyl|cars?|vehicles?)\b"
    );
}
static_regex! {
    fn body_class_re() = concat!(
        r"(?i)\b(?:suv|crossover|sedan|saloon|hatchback|coupe|wagon|estate|convertible|",
        r"cabriolet|pickup|truck|van|minivan)s?\b"
    );
}
static_regex! {
    fn time_unit_re() = r"(?i)\b[0-9]+(?:\.[0-9]+)?\s*(?:s|sec|secs|seconds)\b";
}
static_regex! {
    fn vee_re() = r"(?i)\bv-?(?:4|6|8|10|12|16)\b";
}
static_regex! {
    fn comparator_re() = concat!(
        r"(?i)\b(?:under|below|less\s+than|over|above|more\s+than|between|from|to|min|max|",
        r"at\s*least|at\s*most|around|about|since|after|before|until)\b"
    );
}
static_regex! {
    /// Standalone amounts only, so "CX-5" keeps its digit.
    fn number_re() = r"(?i)(?:^|\s)(?:[$€]\s*)?[0-9][0-9,]*(?:\.[0-9]+)?k?\b";
}
static_regex! {
    fn punctuation_re() = r"[^\p{L}\p{N}\s-]";
}

/// Known brands, empty names dropped, longest first. Ties keep catalog order.
fn by_length_desc(known_brands: &[String]) -> Vec<&str> {
    let mut brands: Vec<&str> = known_brands
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    brands.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    brands
}

/// Returns the longest catalog brand that appears as a whole word in `text`.
pub fn match_brand(text: &str, known_brands: &[String]) -> Option<Fact<String>> {
    by_length_desc(known_brands)
        .into_iter()
        .find(|brand| word_regex(brand).is_some_and(|re| re.is_match(text)))
        .map(|brand| Fact::new(brand.to_string(), format!("Brand: {brand}")))
}

/// Guesses a model name from what remains once every recognised phrase,
/// number and brand is erased from `text`.
pub fn infer_model(
    text: &str,
    brand: Option<&str>,
    known_brands: &[String],
) -> Option<Fact<String>> {
    let mut t = text.to_string();
    for re in [
        year_phrase_re(),
        year_span_re(),
        bare_year_re(),
        preference_re(),
        body_class_re(),
        time_unit_re(),
        vee_re(),
        comparator_re(),
        number_re(),
    ] {
        t = erase_all(&t, re);
    }

    for name in by_length_desc(known_brands).into_iter().chain(brand) {
        if let Some(re) = word_regex(name) {
            t = erase_all(&t, &re);
        }
    }

    t = erase_all(&t, punctuation_re());

    let tokens: Vec<&str> = t
        .split_whitespace()
        .filter(|tok| !STOP_TOKENS.iter().any(|s| s.eq_ignore_ascii_case(tok)))
        .filter(|tok| tok.chars().any(char::is_alphabetic))
        .collect();
    if tokens.is_empty() {
        return None;
    }

    let phrase = normalize_spaces(&tokens.join(" "));
    let model = if phrase.chars().count() <= MAX_MODEL_CHARS {
        phrase
    } else {
        tokens[..MAX_MODEL_TOKENS.min(tokens.len())].join(" ")
    };
    let note = format!("Model: {model}");
    Some(Fact::new(model, note))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brands(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn model(text: &str, known: &[&str]) -> Option<String> {
        let known = brands(known);
        let brand = match_brand(text, &known).map(|f| f.value);
        infer_model(text, brand.as_deref(), &known).map(|f| f.value)
    }

    #[test]
    fn longest_brand_wins() {
        let known = brands(&["Rover", "Land Rover"]);
        let fact = match_brand("Land Rover Discovery", &known).unwrap();
        assert_eq!(fact.value, "Land Rover");
        assert_eq!(fact.note, "Brand: Land Rover");
    }

    #[test]
    fn brand_is_case_insensitive_whole_word() {
        let known = brands(&["BMW", "GM", "Audi"]);
        assert_eq!(match_brand("bmw x5", &known).unwrap().value, "BMW");
        assert!(match_brand("GMC Sierra", &known).is_none());
        assert!(match_brand("anything", &[]).is_none());
        assert!(match_brand("blank", &brands(&["", "  "])).is_none());
    }

    #[test]
    fn model_is_residual_phrase() {
        assert_eq!(
            model("BMW X5 around 2018, diesel", &["BMW", "Audi"]),
            Some("X5".to_string())
        );
        assert_eq!(
            model("Land Rover Discovery", &["Land Rover", "Rover"]),
            Some("Discovery".to_string())
        );
        assert_eq!(
            model("Audi A4 avant with quattro", &["Audi"]),
            Some("A4 avant quattro".to_string())
        );
    }

    #[test]
    fn model_strips_every_known_brand() {
        assert_eq!(model("BMW or Audi", &["BMW", "Audi"]), None);
    }

    #[test]
    fn model_ignores_preferences_and_numbers() {
        assert_eq!(
            model("BMW around 2018, strong horsepower, good mpg", &["BMW", "Audi"]),
            None
        );
        assert_eq!(model("under 25k, automatic, diesel", &[]), None);
        assert_eq!(model("fast suv", &[]), None);
        assert_eq!(model("2016-2020", &[]), None);
        assert_eq!(model("V8, torque over 400", &[]), None);
        assert_eq!(model("0-100 under 6.5 sec", &[]), None);
    }

    #[test]
    fn long_leftover_keeps_three_tokens() {
        let text = "something really rather unusual and extraordinarily verbose here";
        let fact = infer_model(text, None, &[]).unwrap();
        assert_eq!(fact.value, "something really rather");
        assert_eq!(fact.note, "Model: something really rather");
    }

    #[test]
    fn hyphenated_models_survive() {
        assert_eq!(
            model("Mazda CX-5 awd", &["Mazda"]),
            Some("CX-5".to_string())
        );
    }
}
