use std::collections::BTreeMap;

use serde::Serialize;

use super::title_case;
use crate::pokeapi::RawMoveRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMove {
    pub name: String,
    pub level: u8,
    pub learn_method: String,
}

/// Body of `GET /pokemon/{name}/moves`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovesPayload {
    pub versions: BTreeMap<String, Vec<FormattedMove>>,
}

/// Emits one entry per (move, version detail) pair, keyed by version group.
///
/// Lists keep upstream order. Duplicate move/version pairs are kept as they
/// come.
pub fn group_moves_by_version(raw: &[RawMoveRecord]) -> BTreeMap<String, Vec<FormattedMove>> {
    let mut grouped: BTreeMap<String, Vec<FormattedMove>> = BTreeMap::new();

    for record in raw {
        if record.version_group_details.is_empty() {
            continue;
        }

        let name = title_case(&record.move_.name);
        for detail in &record.version_group_details {
            grouped
                .entry(detail.version_group.name.clone())
                .or_default()
                .push(FormattedMove {
                    name: name.clone(),
                    level: detail.level_learned_at,
                    learn_method: detail.move_learn_method.name.clone(),
                });
        }
    }

    grouped
}
