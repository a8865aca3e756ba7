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

use regex::Regex;

use crate::model::SortCriterion;
use crate::model::SortKey;
use crate::model::SortOrder;
use crate::patterns::static_regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Horsepower,
    Mpg,
    Fast,
    TopSpeed,
    Newest,
    Cheap,
    Expensive,
    Torque,
}

impl Intent {
    /// Priority order; the first intent present decides the sort.
    const ALL: [Intent; 8] = [
        Intent::Horsepower,
        Intent::Mpg,
        Intent::Fast,
        Intent::TopSpeed,
        Intent::Newest,
        Intent::Cheap,
        Intent::Expensive,
        Intent::Torque,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Intent::Horsepower => horsepower_re(),
            Intent::Mpg => mpg_re(),
            Intent::Fast => fast_re(),
            Intent::TopSpeed => top_speed_re(),
            Intent::Newest => newest_re(),
            Intent::Cheap => cheap_re(),
            Intent::Expensive => expensive_re(),
            Intent::Torque => torque_re(),
        }
    }

    fn criterion(self) -> SortCriterion {
        let (key, order) = match self {
            Intent::Horsepower => (SortKey::Horsepower, SortOrder::Desc),
            Intent::Mpg => (SortKey::CombinedMpg, SortOrder::Desc),
            Intent::Fast => (SortKey::Acceleration0100, SortOrder::Asc),
            Intent::TopSpeed => (SortKey::VitesseMax, SortOrder::Desc),
            Intent::Newest => (SortKey::Year, SortOrder::Desc),
            Intent::Cheap => (SortKey::Price, SortOrder::Asc),
            Intent::Expensive => (SortKey::Price, SortOrder::Desc),
            Intent::Torque => (SortKey::TorqueNm, SortOrder::Desc),
        };
        SortCriterion::new(key, order)
    }
}

static_regex! {
    fn horsepower_re() = r"horsepower|\bhp\b|power";
}
static_regex! {
    fn mpg_re() = r"mpg|fuel efficiency|efficient|economy";
}
static_regex! {
    fn fast_re() = r"fast|quick|0\s*[-–]\s*100|0\s*to\s*100|acceleration";
}
static_regex! {
    fn top_speed_re() = r"top speed|vitesse|max speed";
}
static_regex! {
    fn newest_re() = r"newest|latest|recent";
}
static_regex! {
    fn cheap_re() = r"cheap|budget|affordable|low price|lowest price";
}
static_regex! {
    fn expensive_re() = r"expensive|premium|luxury|high price";
}
static_regex! {
    fn torque_re() = r"torque";
}

/// Human label for a sort, e.g. `Sort by top speed (desc)`.
pub fn sort_note(sort: SortCriterion) -> String {
    let label = match sort.sort_by {
        SortKey::Horsepower => "horsepower",
        SortKey::CombinedMpg => "combined MPG",
        SortKey::Acceleration0100 => "acceleration 0–100",
        SortKey::VitesseMax => "top speed",
        SortKey::Year => "year",
        SortKey::Price => "price",
        SortKey::TorqueNm => "torque",
        SortKey::Id => "id",
    };
    format!("Sort by {label} ({})", sort.order)
}

/// Chooses the sort from the whole prompt and returns it with its notes.
pub fn choose_sort(text: &str) -> (SortCriterion, Vec<String>) {
    let t = text.to_lowercase();
    let Some(intent) = Intent::ALL.into_iter().find(|i| i.pattern().is_match(&t)) else {
        let sort = SortCriterion::default();
        return (sort, vec![sort_note(sort)]);
    };

    let sort = intent.criterion();
    let mut notes = vec![sort_note(sort)];
    if intent == Intent::Horsepower && Intent::Mpg.pattern().is_match(&t) {
        notes.push("Note: also mentioned MPG (secondary)".to_string());
    }
    (sort, notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_of(text: &str) -> (&'static str, &'static str) {
        let (sort, _) = choose_sort(text);
        (sort.sort_by.as_str(), sort.order.as_str())
    }

    #[test]
    fn defaults_to_newest_first() {
        let (sort, notes) = choose_sort("");
        assert_eq!(sort, SortCriterion::default());
        assert_eq!(notes, vec!["Sort by year (desc)"]);
    }

    #[test]
    fn horsepower_beats_mpg_with_secondary_note() {
        let (sort, notes) = choose_sort("strong horsepower, good MPG");
        assert_eq!(sort.sort_by, SortKey::Horsepower);
        assert_eq!(
            notes,
            vec![
                "Sort by horsepower (desc)",
                "Note: also mentioned MPG (secondary)"
            ]
        );
    }

    #[test]
    fn intent_priority() {
        assert_eq!(sort_of("efficient commuter"), ("combined_mpg", "desc"));
        assert_eq!(sort_of("fast suv"), ("acceleration_0_100", "asc"));
        assert_eq!(sort_of("best 0-100 time"), ("acceleration_0_100", "asc"));
        assert_eq!(sort_of("highest top speed"), ("vitesse_max", "desc"));
        assert_eq!(sort_of("latest models"), ("year", "desc"));
        assert_eq!(sort_of("cheap and fast"), ("acceleration_0_100", "asc"));
        assert_eq!(sort_of("affordable family car"), ("price", "asc"));
        assert_eq!(sort_of("luxury sedan"), ("price", "desc"));
        assert_eq!(sort_of("V8, torque over 400"), ("torque_nm", "desc"));
    }

    #[test]
    fn only_winner_note_is_recorded() {
        let (_, notes) = choose_sort("cheap but fast");
        assert_eq!(notes, vec!["Sort by acceleration 0–100 (asc)"]);
    }

    #[test]
    fn notes_for_each_key() {
        let (_, notes) = choose_sort("top speed");
        assert_eq!(notes, vec!["Sort by top speed (desc)"]);
        let (_, notes) = choose_sort("economy");
        assert_eq!(notes, vec!["Sort by combined MPG (desc)"]);
        let (_, notes) = choose_sort("premium");
        assert_eq!(notes, vec!["Sort by price (desc)"]);
        let (_, notes) = choose_sort("torque");
        assert_eq!(notes, vec!["Sort by torque (desc)"]);
    }
}
