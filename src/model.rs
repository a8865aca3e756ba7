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

//! Shared domain types produced by the interpreter and consumed by callers.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    Electric,
    Hybrid,
    Gasoline,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
            FuelType::Gasoline => "Gasoline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    #[serde(rename = "CVT")]
    Cvt,
    Automatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Cvt => "CVT",
            Transmission::Automatic => "Automatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveType {
    #[serde(rename = "AWD")]
    Awd,
    #[serde(rename = "4WD")]
    FourWd,
    #[serde(rename = "FWD")]
    Fwd,
    #[serde(rename = "RWD")]
    Rwd,
}

impl DriveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveType::Awd => "AWD",
            DriveType::FourWd => "4WD",
            DriveType::Fwd => "FWD",
            DriveType::Rwd => "RWD",
        }
    }
}

/// Metric the downstream listing endpoint orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Horsepower,
    CombinedMpg,
    #[serde(rename = "acceleration_0_100")]
    Acceleration0100,
    VitesseMax,
    Year,
    Price,
    TorqueNm,
    Id,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Horsepower => "horsepower",
            SortKey::CombinedMpg => "combined_mpg",
            SortKey::Acceleration0100 => "acceleration_0_100",
            SortKey::VitesseMax => "vitesse_max",
            SortKey::Year => "year",
            SortKey::Price => "price",
            SortKey::TorqueNm => "torque_nm",
            SortKey::Id => "id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

macro_rules! wire_enum_text {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                [$($ty::$variant),+]
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| anyhow::anyhow!("unknown {} {s:?}", stringify!($ty)))
            }
        }
    };
}

wire_enum_text!(FuelType { Diesel, Electric, Hybrid, Gasoline });
wire_enum_text!(Transmission { Manual, Cvt, Automatic });
wire_enum_text!(DriveType { Awd, FourWd, Fwd, Rwd });
wire_enum_text!(SortKey {
    Horsepower,
    CombinedMpg,
    Acceleration0100,
    VitesseMax,
    Year,
    Price,
    TorqueNm,
    Id,
});
wire_enum_text!(SortOrder { Asc, Desc });

/// One recognised value and the note explaining it to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact<T> {
    pub value: T,
    pub note: String,
}

impl<T> Fact<T> {
    pub fn new(value: T, note: impl Into<String>) -> Self {
        Self {
            value,
            note: note.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl SortCriterion {
    pub fn new(sort_by: SortKey, order: SortOrder) -> Self {
        Self { sort_by, order }
    }
}

impl Default for SortCriterion {
    fn default() -> Self {
        Self::new(SortKey::Year, SortOrder::Desc)
    }
}

/// Structured filter record. Absent fields stay `None` here and are left out
/// of the JSON view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFilters {
    pub q: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub drive_type: Option<DriveType>,
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

impl ParsedFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Present fields in the listing endpoint's key order.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        let mut out = Vec::new();
        let mut text = |key: &'static str, v: &Option<String>| {
            if let Some(v) = v.as_deref().filter(|v| !v.is_empty()) {
                out.push((key, json!(v)));
            }
        };
        text("q", &self.q);
        text("brand", &self.brand);
        text("model", &self.model);

        push(&mut out, "min_year", self.min_year);
        push(&mut out, "max_year", self.max_year);
        push(&mut out, "min_price", self.min_price);
        push(&mut out, "max_price", self.max_price);
        push(&mut out, "fuel_type", self.fuel_type.map(|v| v.as_str()));
        push(&mut out, "transmission", self.transmission.map(|v| v.as_str()));
        push(&mut out, "drive_type", self.drive_type.map(|v| v.as_str()));
        push(&mut out, "cylinders", self.cylinders);
        push(&mut out, "min_horsepower", self.min_horsepower);
        push(&mut out, "max_horsepower", self.max_horsepower);
        push(&mut out, "min_combined_mpg", self.min_combined_mpg.map(number));
        push(&mut out, "max_combined_mpg", self.max_combined_mpg.map(number));
        push(
            &mut out,
            "max_acceleration_0_100",
            self.max_acceleration_0_100.map(number),
        );
        push(&mut out, "min_vitesse_max", self.min_vitesse_max);
        push(&mut out, "max_vitesse_max", self.max_vitesse_max);
        push(&mut out, "min_torque_nm", self.min_torque_nm);
        push(&mut out, "max_torque_nm", self.max_torque_nm);
        out
    }
}

/// Whole floats become integers, so `40.0` is sent as `40`.
fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        json!(v as i64)
    } else {
        json!(v)
    }
}

fn push<T: Serialize>(out: &mut Vec<(&'static str, Value)>, key: &'static str, v: Option<T>) {
    if let Some(v) = v {
        out.push((key, json!(v)));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretationResult {
    pub filters: ParsedFilters,
    pub sort: SortCriterion,
    pub interpreted: Vec<String>,
    pub json: Map<String, Value>,
}

impl InterpretationResult {
    pub fn new(filters: ParsedFilters, sort: SortCriterion, interpreted: Vec<String>) -> Self {
        let mut json = Map::new();
        for (key, value) in filters.fields() {
            json.insert(key.to_string(), value);
        }
        json.insert("sort_by".to_string(), json!(sort.sort_by.as_str()));
        json.insert("order".to_string(), json!(sort.order.as_str()));
        Self {
            filters,
            sort,
            interpreted,
            json,
        }
    }

    /// Whether any filter was recognised; the sort note alone does not count.
    pub fn recognized_any(&self) -> bool {
        !self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_wire_names() {
        assert_eq!(
            serde_json::to_value(SortKey::Acceleration0100).unwrap(),
            json!("acceleration_0_100")
        );
        assert_eq!(
            serde_json::to_value(SortKey::CombinedMpg).unwrap(),
            json!("combined_mpg")
        );
        assert_eq!("VITESSE_MAX".parse::<SortKey>().unwrap(), SortKey::VitesseMax);
        assert!("speed".parse::<SortKey>().is_err());
    }

    #[test]
    fn categorical_wire_names() {
        assert_eq!(serde_json::to_value(DriveType::FourWd).unwrap(), json!("4WD"));
        assert_eq!(serde_json::to_value(Transmission::Cvt).unwrap(), json!("CVT"));
        assert_eq!("cvt".parse::<Transmission>().unwrap(), Transmission::Cvt);
        assert_eq!(FuelType::Gasoline.to_string(), "Gasoline");
    }

    #[test]
    fn json_view_omits_absent_fields() {
        let filters = ParsedFilters {
            brand: Some("BMW".to_string()),
            min_year: Some(2016),
            ..Default::default()
        };
        let result = InterpretationResult::new(filters, SortCriterion::default(), Vec::new());
        let keys: Vec<&str> = result.json.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["brand", "min_year", "sort_by", "order"]);
        assert!(result.recognized_any());
    }

    #[test]
    fn whole_floats_are_written_as_integers() {
        let filters = ParsedFilters {
            min_combined_mpg: Some(40.0),
            max_acceleration_0_100: Some(6.5),
            ..Default::default()
        };
        let result = InterpretationResult::new(filters, SortCriterion::default(), Vec::new());
        assert_eq!(
            serde_json::to_string(&result.json).unwrap(),
            r#"{"min_combined_mpg":40,"max_acceleration_0_100":6.5,"sort_by":"year","order":"desc"}"#
        );
    }

    #[test]
    fn default_result_is_unconstrained() {
        let result =
            InterpretationResult::new(ParsedFilters::default(), SortCriterion::default(), vec![]);
        assert!(!result.recognized_any());
        assert_eq!(result.json.len(), 2);
        assert_eq!(result.json["sort_by"], json!("year"));
        assert_eq!(result.json["order"], json!("desc"));
    }
}
