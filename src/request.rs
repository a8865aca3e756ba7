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

//! Query parameters for the car-listing endpoint, built from an
//! interpretation.

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::model::InterpretationResult;
use crate::model::ParsedFilters;
use crate::model::SortCriterion;
use crate::model::SortKey;
use crate::model::SortOrder;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub filters: ParsedFilters,
    pub sort: SortCriterion,
    pub page: u32,
    pub per_page: u32,
}

impl ListingRequest {
    pub fn from_result(result: &InterpretationResult) -> Self {
        Self {
            filters: result.filters.clone(),
            sort: result.sort,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_sort(mut self, sort_by: Option<SortKey>, order: Option<SortOrder>) -> Self {
        if let Some(sort_by) = sort_by {
            self.sort.sort_by = sort_by;
        }
        if let Some(order) = order {
            self.sort.order = order;
        }
        self
    }

    /// Zero values fall back to the defaults.
    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self.per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };
        self
    }

    /// Key/value pairs in the endpoint's parameter order, absent filters
    /// omitted.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .fields()
            .into_iter()
            .map(|(key, value)| (key.to_string(), param_text(&value)))
            .collect();
        pairs.push(("sort_by".to_string(), self.sort.sort_by.to_string()));
        pairs.push(("order".to_string(), self.sort.order.to_string()));
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("per_page".to_string(), self.per_page.to_string()));
        pairs
    }

    /// Flat request body: present filters, sort and paging.
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        for (key, value) in self.filters.fields() {
            body.insert(key.to_string(), value);
        }
        body.insert("sort_by".to_string(), json!(self.sort.sort_by.as_str()));
        body.insert("order".to_string(), json!(self.sort.order.as_str()));
        body.insert("page".to_string(), json!(self.page));
        body.insert("per_page".to_string(), json!(self.per_page));
        Value::Object(body)
    }
}

fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
