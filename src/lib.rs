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

//! Deterministic interpreter for free-text car search prompts.
//!
//! [`interpret`] turns a prompt such as `"BMW around 2018, strong
//! horsepower"` into structured listing filters, a sort criterion and a
//! list of human-readable notes. No network or model calls are made; the
//! same prompt and brand catalog always produce the same result.

pub mod brand;
pub mod categorical;
pub mod config;
pub mod interpret;
pub mod model;
pub mod numeric;
pub mod output;
pub mod patterns;
pub mod request;
pub mod sort;
pub mod year;

pub use interpret::interpret;
pub use model::InterpretationResult;
pub use model::ParsedFilters;
pub use model::SortCriterion;
pub use request::ListingRequest;
