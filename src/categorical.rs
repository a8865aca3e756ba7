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

//! Keyword scans over a closed set of values: fuel, gearbox, drivetrain and
//! body style.

use regex::Regex;

use crate::model::DriveType;
use crate::model::Fact;
use crate::model::FuelType;
use crate::model::Transmission;
use crate::patterns::static_regex;

/// Body styles in match priority order.
pub const BODY_KEYWORDS: &[&str] = &[
    "suv",
    "sedan",
    "hatchback",
    "coupe",
    "wagon",
    "convertible",
    "cabriolet",
    "pickup",
    "truck",
    "van",
    "minivan",
];

static_regex! {
    fn gasoline_re() = r"gasoline|petrol|\bgas\b";
}
static_regex! {
    fn manual_re() = r"\bmanual\b";
}
static_regex! {
    fn cvt_re() = r"\bcvt\b";
}
static_regex! {
    fn automatic_re() = r"\bautomatic\b|\bauto\b";
}
static_regex! {
    fn awd_re() = r"\bawd\b|\ball\s*wheel\s*drive\b";
}
static_regex! {
    fn four_wd_re() = r"\b4wd\b|\bfour\s*wheel\s*drive\b";
}
static_regex! {
    fn fwd_re() = r"\bfwd\b|\bfront\s*wheel\s*drive\b";
}
static_regex! {
    fn rwd_re() = r"\brwd\b|\brear\s*wheel\s*drive\b";
}

fn first_hit<T: Copy>(text: &str, table: &[(&Regex, T)]) -> Option<T> {
    table
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, value)| *value)
}

pub fn extract_fuel(text: &str) -> Option<Fact<FuelType>> {
    let t = text.to_lowercase();
    let fuel = if t.contains("diesel") {
        FuelType::Diesel
    } else if t.contains("electric") || t.contains("ev") {
        FuelType::Electric
    } else if t.contains("hybrid") {
        FuelType::Hybrid
    } else if gasoline_re().is_match(&t) {
        FuelType::Gasoline
    } else {
        return None;
    };
    Some(Fact::new(fuel, format!("Fuel: {fuel}")))
}

pub fn extract_transmission(text: &str) -> Option<Fact<Transmission>> {
    let t = text.to_lowercase();
    let table = [
        (manual_re(), Transmission::Manual),
        (cvt_re(), Transmission::Cvt),
        (automatic_re(), Transmission::Automatic),
    ];
    first_hit(&t, &table).map(|v| Fact::new(v, format!("Transmission: {v}")))
}

pub fn extract_drive(text: &str) -> Option<Fact<DriveType>> {
    let t = text.to_lowercase();
    let table = [
        (awd_re(), DriveType::Awd),
        (four_wd_re(), DriveType::FourWd),
        (fwd_re(), DriveType::Fwd),
        (rwd_re(), DriveType::Rwd),
    ];
    first_hit(&t, &table).map(|v| Fact::new(v, format!("Drive: {v}")))
}

/// Picks the first body keyword in list order (not text order). Keywords
/// are plain substrings, so "minivan" resolves to `van`.
pub fn extract_body(text: &str) -> Option<Fact<String>> {
    let t = text.to_lowercase();
    BODY_KEYWORDS
        .iter()
        .find(|k| t.contains(*k))
        .map(|k| Fact::new(k.to_string(), format!("Class/body keyword: {k}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuel(text: &str) -> Option<FuelType> {
        extract_fuel(text).map(|f| f.value)
    }

    #[test]
    fn fuel_aliases() {
        assert_eq!(fuel("Diesel wagon"), Some(FuelType::Diesel));
        assert_eq!(fuel("cheap EV"), Some(FuelType::Electric));
        assert_eq!(fuel("fully electric"), Some(FuelType::Electric));
        assert_eq!(fuel("plug-in hybrid"), Some(FuelType::Hybrid));
        assert_eq!(fuel("petrol hatch"), Some(FuelType::Gasoline));
        assert_eq!(fuel("gas guzzler"), Some(FuelType::Gasoline));
        assert_eq!(extract_fuel("diesel").unwrap().note, "Fuel: Diesel");
    }

    #[test]
    fn ev_is_a_substring_and_gas_a_whole_word() {
        assert_eq!(fuel("Chevrolet Volt"), Some(FuelType::Electric));
        assert_eq!(fuel("vegas trip"), None);
        assert_eq!(fuel("gas or nothing"), Some(FuelType::Gasoline));
    }

    #[test]
    fn fuel_priority_is_declaration_order() {
        assert_eq!(fuel("hybrid or diesel"), Some(FuelType::Diesel));
        assert_eq!(fuel("electric hybrid"), Some(FuelType::Electric));
    }

    #[test]
    fn transmission_aliases() {
        let t = |s| extract_transmission(s).map(|f| f.value);
        assert_eq!(t("6-speed manual"), Some(Transmission::Manual));
        assert_eq!(t("CVT please"), Some(Transmission::Cvt));
        assert_eq!(t("auto gearbox"), Some(Transmission::Automatic));
        assert_eq!(t("automatic or manual"), Some(Transmission::Manual));
        assert_eq!(t("autobahn cruiser"), None);
        assert_eq!(
            extract_transmission("automatic").unwrap().note,
            "Transmission: Automatic"
        );
    }

    #[test]
    fn drive_priority() {
        let d = |s| extract_drive(s).map(|f| f.value);
        assert_eq!(d("all wheel drive"), Some(DriveType::Awd));
        assert_eq!(d("allwheel drive"), Some(DriveType::Awd));
        assert_eq!(d("four wheel drive pickup"), Some(DriveType::FourWd));
        assert_eq!(d("RWD or AWD"), Some(DriveType::Awd));
        assert_eq!(d("front wheel drive"), Some(DriveType::Fwd));
        assert_eq!(d("rear wheel drive"), Some(DriveType::Rwd));
        assert_eq!(extract_drive("4wd").unwrap().note, "Drive: 4WD");
        assert_eq!(d("sedan"), None);
    }

    #[test]
    fn body_keyword_list_order() {
        let b = |s| extract_body(s).map(|f| f.value);
        assert_eq!(b("fast SUV"), Some("suv".to_string()));
        assert_eq!(b("coupe or sedan"), Some("sedan".to_string()));
        assert_eq!(b("family minivan"), Some("van".to_string()));
        assert_eq!(b("two trucks"), Some("truck".to_string()));
        assert_eq!(b("caravan"), Some("van".to_string()));
        assert_eq!(b("red roadster"), None);
        assert_eq!(
            extract_body("suv").unwrap().note,
            "Class/body keyword: suv"
        );
    }
}
