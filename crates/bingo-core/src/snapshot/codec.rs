use crate::catalogue::{Boss, Category, Minigame, Skill};
use crate::errors::{ExError, ExErrorKind};
use crate::model::Snapshot;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Parse raw snapshot bytes into a typed [`Snapshot`].
///
/// # Errors
///
/// - `InvalidSnapshot`: bytes are not UTF-8, not JSON, the root or a
///   category is not an object, or a metric value is not an integer
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<Snapshot, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        invalid(format!("snapshot is not valid UTF-8: {}", e))
    })?;

    let raw: Value = serde_json::from_str(text)
        .map_err(|e| invalid(format!("snapshot is not valid JSON: {}", e)))?;

    parse_snapshot_value(&raw)
}

/// Parse an already-decoded JSON value into a typed [`Snapshot`].
///
/// Unknown categories and subcategories are skipped and logged at `warn`.
///
/// # Errors
///
/// Same as [`parse_snapshot_bytes`], minus the decoding failures.
pub fn parse_snapshot_value(raw: &Value) -> Result<Snapshot, ExError> {
    let root = raw
        .as_object()
        .ok_or_else(|| invalid("snapshot JSON root must be an object"))?;

    let mut snapshot = Snapshot::new();
    for (category_key, table) in root {
        let Some(category) = Category::from_key(category_key) else {
            tracing::warn!(
                category = category_key.as_str(),
                "ignoring category not in catalogue"
            );
            continue;
        };
        let table = table.as_object().ok_or_else(|| {
            invalid(format!("category `{}` must be an object", category_key))
        })?;

        match category {
            Category::Skills => parse_table(category, table, Skill::from_key, &mut snapshot.skills)?,
            Category::Minigames => {
                parse_table(category, table, Minigame::from_key, &mut snapshot.minigames)?
            }
            Category::Bosses => parse_table(category, table, Boss::from_key, &mut snapshot.bosses)?,
        }
    }

    Ok(snapshot)
}

/// Serialize a snapshot back to its pretty-printed wire form.
///
/// # Errors
///
/// - `Serialization`: serde_json failed to encode the snapshot
pub fn snapshot_to_json(snapshot: &Snapshot) -> Result<Vec<u8>, ExError> {
    serde_json::to_vec_pretty(snapshot).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("snapshot_to_json")
            .with_message(format!("failed to serialize snapshot: {}", e))
    })
}

fn parse_table<K, L>(
    category: Category,
    table: &Map<String, Value>,
    lookup: fn(&str) -> Option<K>,
    out: &mut BTreeMap<K, L>,
) -> Result<(), ExError>
where
    K: Ord,
    L: DeserializeOwned,
{
    for (key, line) in table {
        let Some(subcategory) = lookup(key) else {
            tracing::warn!(
                category = category.key(),
                subcategory = key.as_str(),
                "ignoring subcategory not in catalogue"
            );
            continue;
        };
        let line = L::deserialize(line).map_err(|e| {
            invalid(format!("{}.{}: {}", category.key(), key, e))
        })?;
        out.insert(subcategory, line);
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidSnapshot)
        .with_op("parse_snapshot")
        .with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Metric, Subcategory};
    use crate::model::Stat;
    use serde_json::json;

    #[test]
    fn test_parses_all_three_categories() {
        let raw = json!({
            "skills": { "attack": { "rank": 10, "level": 99, "xp": 13034431 } },
            "minigames": { "lms": { "rank": -1, "score": -1 } },
            "bosses": { "zulrah": { "rank": 12, "kills": 500 } }
        });

        let snapshot = parse_snapshot_value(&raw).unwrap();
        assert_eq!(
            snapshot.metric(Subcategory::Skill(Skill::Attack), Metric::Xp),
            Some(Stat::Tracked(13034431))
        );
        assert_eq!(
            snapshot.metric(Subcategory::Minigame(Minigame::LastManStanding), Metric::Score),
            Some(Stat::Untracked)
        );
        assert_eq!(
            snapshot.metric(Subcategory::Boss(Boss::Zulrah), Metric::Kills),
            Some(Stat::Tracked(500))
        );
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let raw = json!({
            "skills": { "sailing": { "rank": 1, "level": 2, "xp": 3 } },
            "activities": { "anything": 1 },
            "bosses": { "zulrah": { "rank": 1, "kills": 2 } }
        });

        let snapshot = parse_snapshot_value(&raw).unwrap();
        assert!(snapshot.skills.is_empty());
        assert_eq!(snapshot.bosses.len(), 1);
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = parse_snapshot_bytes(b"[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = parse_snapshot_bytes(b"{ not json").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
        assert!(err.message().contains("not valid JSON"));
    }

    #[test]
    fn test_non_integer_metric_rejected() {
        let raw = json!({ "bosses": { "zulrah": { "rank": 1, "kills": "many" } } });
        let err = parse_snapshot_value(&raw).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
        assert!(err.message().contains("bosses.zulrah"));
    }

    #[test]
    fn test_json_output_restores_sentinel() {
        let raw = json!({ "bosses": { "artio": { "rank": -1, "kills": -1 } } });
        let snapshot = parse_snapshot_value(&raw).unwrap();
        let bytes = snapshot_to_json(&snapshot).unwrap();
        let back: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back["bosses"]["artio"]["kills"], json!(-1));
        assert_eq!(back["skills"], json!({}));
    }
}
