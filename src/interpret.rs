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

use tracing::debug;

use crate::brand::infer_model;
use crate::brand::match_brand;
use crate::categorical::extract_body;
use crate::categorical::extract_drive;
use crate::categorical::extract_fuel;
use crate::categorical::extract_transmission;
use crate::model::Fact;
use crate::model::InterpretationResult;
use crate::model::ParsedFilters;
use crate::numeric::extract_numeric;
use crate::sort::choose_sort;
use crate::year::extract_years;

/// Interprets a free-text prompt into filters, a sort and explanation notes.
///
/// Extractors run in a fixed order and their notes are kept in that order:
/// fuel, transmission, drive, numeric bounds, years, brand, model, body
/// keyword, sort. Only the numeric stage consumes text as it goes; every
/// other stage reads the trimmed prompt.
pub fn interpret(prompt: &str, known_brands: &[String]) -> InterpretationResult {
    let text = prompt.trim();
    let mut filters = ParsedFilters::default();
    let mut notes = Vec::new();

    filters.fuel_type = record(extract_fuel(text), &mut notes);
    filters.transmission = record(extract_transmission(text), &mut notes);
    filters.drive_type = record(extract_drive(text), &mut notes);

    let numeric = extract_numeric(text);
    debug!(residual = %numeric.residual, facts = numeric.notes.len(), "numeric filters");
    notes.extend(numeric.notes);
    numeric.filters.apply_to(&mut filters);

    if let Some(years) = record(extract_years(text), &mut notes) {
        filters.min_year = years.min_year;
        filters.max_year = years.max_year;
    }

    filters.brand = record(match_brand(text, known_brands), &mut notes);
    filters.model = record(
        infer_model(text, filters.brand.as_deref(), known_brands),
        &mut notes,
    );
    filters.q = record(extract_body(text), &mut notes);

    let (sort, sort_notes) = choose_sort(text);
    notes.extend(sort_notes);

    debug!(
        sort_by = %sort.sort_by,
        order = %sort.order,
        notes = notes.len(),
        "prompt interpreted"
    );
    InterpretationResult::new(filters, sort, notes)
}

fn record<T>(fact: Option<Fact<T>>, notes: &mut Vec<String>) -> Option<T> {
    let fact = fact?;
    debug!(note = %fact.note, "recognized");
    notes.push(fact.note);
    Some(fact.value)
}
