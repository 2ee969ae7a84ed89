use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::title_case;
use crate::pokeapi::RawEncounterRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedLocation {
    pub location_name: String,
    pub min_level: u8,
    pub max_level: u8,
    pub method: String,
}

impl FormattedLocation {
    fn absorb(&mut self, row: &EncounterRow) {
        self.min_level = self.min_level.min(row.min_level);
        self.max_level = self.max_level.max(row.max_level);
        // Substring containment, not set membership: "walk" is swallowed
        // once "walking" is recorded. Clients rely on the exact strings.
        if !self.method.contains(row.method.as_str()) {
            self.method.push_str(", ");
            self.method.push_str(&row.method);
        }
    }
}

/// Body of `GET /pokemon/{name}/locations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationsPayload {
    pub versions: BTreeMap<String, Vec<FormattedLocation>>,
}

/// One encounter detail with its location and version attached.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EncounterRow {
    version: String,
    location: String,
    min_level: u8,
    max_level: u8,
    method: String,
}

fn flatten(raw: &[RawEncounterRecord]) -> Vec<EncounterRow> {
    let mut rows = Vec::new();

    for record in raw {
        let location = title_case(&record.location_area.name);
        for version in &record.version_details {
            for encounter in &version.encounter_details {
                rows.push(EncounterRow {
                    version: version.version.name.clone(),
                    location: location.clone(),
                    min_level: encounter.min_level,
                    max_level: encounter.max_level,
                    method: encounter.method.name.clone(),
                });
            }
        }
    }

    rows
}

/// Groups encounters by game version with one entry per location.
///
/// Repeated (version, location) pairs widen the level range and append
/// methods not yet contained in the merged method string. Entries keep the
/// order in which their location was first seen for that version.
pub fn group_locations_by_version(
    raw: &[RawEncounterRecord],
) -> BTreeMap<String, Vec<FormattedLocation>> {
    let mut grouped: BTreeMap<String, Vec<FormattedLocation>> = BTreeMap::new();
    // (version, location) -> index into grouped[version]
    let mut slots: HashMap<(String, String), usize> = HashMap::new();

    for row in flatten(raw) {
        let entries = grouped.entry(row.version.clone()).or_default();

        match slots.entry((row.version.clone(), row.location.clone())) {
            Entry::Occupied(slot) => entries[*slot.get()].absorb(&row),
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(FormattedLocation {
                    location_name: row.location,
                    min_level: row.min_level,
                    max_level: row.max_level,
                    method: row.method,
                });
            }
        }
    }

    grouped
}
