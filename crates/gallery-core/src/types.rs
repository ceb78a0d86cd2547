//! Core types for the Character Gallery

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown for records without a name
pub const UNKNOWN_NAME: &str = "Unknown Character";

/// Downloadable and displayable resources attached to a character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assets {
    #[serde(deserialize_with = "lenient_text")]
    pub splash_image: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub model_download: Option<String>,
}

/// Attribution metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    #[serde(deserialize_with = "lenient_text")]
    pub voice_actor: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub upload_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub uploader: Option<String>,
}

/// An item bundled with a character's archive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inclusion {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

/// One character record as supplied by the dataset.
///
/// Every field is optional in the source document and scalar fields accept
/// either strings or numbers. A field of any other type reads as absent
/// instead of rejecting the record. Records without a usable `id` are
/// assigned a placeholder by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub path: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub element: Option<String>,
    #[serde(deserialize_with = "lenient_rarity")]
    pub rarity: Option<u8>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub model_info: Option<String>,
    #[serde(deserialize_with = "lenient_object")]
    pub assets: Assets,
    #[serde(deserialize_with = "lenient_object")]
    pub meta: Meta,
    #[serde(deserialize_with = "lenient_list")]
    pub inclusions: Vec<Inclusion>,
}

impl Character {
    /// Display name, or the "Unknown Character" placeholder
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Splash image locator, falling back to `images/characters/<id>.webp`
    pub fn splash_locator(&self) -> String {
        self.assets
            .splash_image
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("images/characters/{}.webp", self.id))
    }

    /// Archive locator, falling back to `models/<id>.zip`
    pub fn archive_locator(&self) -> String {
        self.assets
            .model_download
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default_archive_locator(&self.id))
    }
}

/// Default archive path for an id
pub fn default_archive_locator(id: &str) -> String {
    format!("models/{}.zip", id)
}

/// String or number as text; anything else is absent.
fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(serde_json::Value::deserialize(deserializer)?))
}

/// Unusable ids (null, objects, blank strings) read as empty.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = scalar_text(serde_json::Value::deserialize(deserializer)?).unwrap_or_default();
    Ok(if id.trim().is_empty() { String::new() } else { id })
}

/// Nested object; a value of any other shape reads as empty.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Integer or numeric string in `0..=255`; anything else is absent.
fn lenient_rarity<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match &value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(number.and_then(|n| u8::try_from(n).ok()))
}

/// Accepts anything for a list field; non-lists and bad items become empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Inclusion>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Immutable, cheaply clonable character collection.
///
/// Built once by the loader; nothing is added, edited or removed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection(Arc<Vec<Character>>);

impl Collection {
    pub fn new(characters: Vec<Character>) -> Self {
        Self(Arc::new(characters))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.0
    }

    pub fn first(&self) -> Option<&Character> {
        self.0.first()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.0.iter().find(|c| c.id == id)
    }

    /// First record whose name equals `name`
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.0.iter().find(|c| c.name.as_deref() == Some(name))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": "7",
            "name": "Aela",
            "modelInfo": "PMX 2.1",
            "assets": {"splashImage": "a.png", "modelDownload": "a.zip"},
            "meta": {"voiceActor": "V", "uploadDate": "2024-01-01", "uploader": "U"},
            "inclusions": [{"name": "Bow", "description": "Longbow"}]
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.model_info.as_deref(), Some("PMX 2.1"));
        assert_eq!(c.assets.model_download.as_deref(), Some("a.zip"));
        assert_eq!(c.meta.voice_actor.as_deref(), Some("V"));
        assert_eq!(c.inclusions.len(), 1);
        assert_eq!(c.inclusions[0].name, "Bow");
    }

    #[test]
    fn non_list_inclusions_become_empty() {
        let c: Character = serde_json::from_str(r#"{"id":"1","inclusions":"nope"}"#).unwrap();
        assert!(c.inclusions.is_empty());
    }

    #[test]
    fn numeric_scalars_are_accepted() {
        let c: Character =
            serde_json::from_str(r#"{"id":7,"name":1001,"rarity":"5","meta":{"uploadDate":20240101}}"#)
                .unwrap();
        assert_eq!(c.id, "7");
        assert_eq!(c.name.as_deref(), Some("1001"));
        assert_eq!(c.rarity, Some(5));
        assert_eq!(c.meta.upload_date.as_deref(), Some("20240101"));
    }

    #[test]
    fn unusable_fields_read_as_absent() {
        let c: Character = serde_json::from_str(
            r#"{"id":{"x":1},"name":["A"],"element":true,"rarity":300,"description":null}"#,
        )
        .unwrap();
        assert_eq!(c.id, "");
        assert_eq!(c.name, None);
        assert_eq!(c.element, None);
        assert_eq!(c.rarity, None);
        assert_eq!(c.description, None);

        for rarity in [r#""five""#, "-1", "2.5", r#""256""#] {
            let json = format!(r#"{{"id":"1","rarity":{}}}"#, rarity);
            let c: Character = serde_json::from_str(&json).unwrap();
            assert_eq!(c.rarity, None, "rarity {}", rarity);
        }
    }

    #[test]
    fn misshapen_nested_objects_read_as_empty() {
        let c: Character =
            serde_json::from_str(r#"{"id":"3","assets":"models/3.zip","meta":[1,2]}"#).unwrap();
        assert_eq!(c.assets, Assets::default());
        assert_eq!(c.meta, Meta::default());
        assert_eq!(c.archive_locator(), "models/3.zip");

        let c: Character =
            serde_json::from_str(r#"{"id":"4","assets":{"splashImage":9,"modelDownload":false}}"#)
                .unwrap();
        assert_eq!(c.assets.splash_image.as_deref(), Some("9"));
        assert_eq!(c.assets.model_download, None);
    }

    #[test]
    fn blank_id_reads_as_empty() {
        let c: Character = serde_json::from_str(r#"{"id":"   ","name":"Aela"}"#).unwrap();
        assert!(c.id.is_empty());
    }

    #[test]
    fn fallbacks_derive_from_id() {
        let c = Character {
            id: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(c.display_name(), UNKNOWN_NAME);
        assert_eq!(c.splash_locator(), "images/characters/42.webp");
        assert_eq!(c.archive_locator(), "models/42.zip");
    }

    #[test]
    fn collection_lookup() {
        let collection = Collection::new(vec![
            Character {
                id: "1".into(),
                name: Some("Aela".into()),
                ..Default::default()
            },
            Character {
                id: "2".into(),
                name: Some("Bron".into()),
                ..Default::default()
            },
        ]);
        assert_eq!(collection.get("2").and_then(|c| c.name.as_deref()), Some("Bron"));
        assert!(collection.get("3").is_none());
        assert_eq!(collection.find_by_name("Aela").map(|c| c.id.as_str()), Some("1"));
    }
}
