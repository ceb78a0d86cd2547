//! Dataset loader.
//!
//! Fetches the character document once at startup and normalizes it into a
//! [`Collection`]. Accepted shapes are a bare list or `{"characters": [...]}`.

use serde_json::Value;

use crate::error::{GalleryError, GalleryResult};
use crate::source::AssetSource;
use crate::types::{Character, Collection};

/// Fetch and parse the dataset.
///
/// Fails with [`GalleryError::Load`] when the request does not succeed or the
/// payload is not JSON.
pub async fn load(source: &AssetSource, dataset_path: &str) -> GalleryResult<Collection> {
    let response = source
        .fetch(dataset_path)
        .await
        .map_err(|e| GalleryError::Load(e.to_string()))?;

    if !response.is_success() {
        return Err(GalleryError::Load(format!(
            "{} returned status {}",
            dataset_path, response.status
        )));
    }

    let collection = parse_collection(&response.body)?;
    tracing::info!("Loaded {} characters from {}", collection.len(), dataset_path);
    Ok(collection)
}

/// Parse a dataset document.
pub fn parse_collection(bytes: &[u8]) -> GalleryResult<Collection> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| GalleryError::Load(format!("malformed dataset: {}", e)))?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("characters") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                tracing::warn!("Dataset field `characters` is not a list; using an empty collection");
                Vec::new()
            }
            None => {
                tracing::warn!("Dataset has no `characters` field; using an empty collection");
                Vec::new()
            }
        },
        _ => {
            tracing::warn!("Dataset is neither a list nor an object; using an empty collection");
            Vec::new()
        }
    };

    Ok(normalize(items))
}

fn normalize(items: Vec<Value>) -> Collection {
    let mut characters = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Character>(item) {
            Ok(mut character) => {
                if character.id.is_empty() {
                    character.id = format!("missing-{}", index);
                    tracing::warn!(
                        "Character at index {} ({}) has no usable id; assigned {}",
                        index,
                        character.display_name(),
                        character.id
                    );
                }
                characters.push(character);
            }
            Err(e) => {
                tracing::warn!("Skipping malformed character at index {}: {}", index, e);
            }
        }
    }

    Collection::new(characters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FetchResponse;

    #[test]
    fn accepts_bare_list() {
        let c = parse_collection(br#"[{"id":"1","name":"Aela"}]"#).unwrap();
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn accepts_characters_field() {
        let c = parse_collection(br#"{"characters":[{"id":"1"},{"id":"2"}]}"#).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn wrong_shape_yields_empty() {
        assert!(parse_collection(br#"{"characters":"x"}"#).unwrap().is_empty());
        assert!(parse_collection(br#"{"people":[]}"#).unwrap().is_empty());
        assert!(parse_collection(br#"42"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_load_error() {
        let err = parse_collection(b"{not json").unwrap_err();
        assert!(matches!(err, GalleryError::Load(_)));
    }

    #[test]
    fn missing_ids_get_stable_placeholders() {
        let c = parse_collection(br#"[{"name":"A"},{"id":"b"},{"name":"C"}]"#).unwrap();
        let ids: Vec<&str> = c.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["missing-0", "b", "missing-2"]);
    }

    #[test]
    fn non_object_records_are_skipped() {
        let c = parse_collection(br#"[42,{"id":"2"},"x",null]"#).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.first().map(|c| c.id.as_str()), Some("2"));
    }

    #[test]
    fn numeric_ids_and_string_rarity_load() {
        let c = parse_collection(br#"[{"id":1,"name":"Aela"},{"id":2,"name":"Bron","rarity":"5"}]"#).unwrap();
        let ids: Vec<&str> = c.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(c.get("2").and_then(|c| c.rarity), Some(5));
    }

    #[test]
    fn mistyped_fields_keep_the_record() {
        let c = parse_collection(br#"[{"id":"1","name":"Aela","rarity":300},{"id":null,"name":"Bron","path":7}]"#)
            .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get("1").and_then(|c| c.rarity), None);
        let bron = c.get("missing-1").unwrap();
        assert_eq!(bron.display_name(), "Bron");
        assert_eq!(bron.path.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn non_success_status_is_load_error() {
        let source = AssetSource::fixtures([(
            "data/characters.json".to_string(),
            FetchResponse::with_status(500),
        )]);
        let err = load(&source, "data/characters.json").await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
