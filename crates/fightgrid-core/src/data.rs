//! JSON asset contracts
//!
//! The loader owns files and bundles; these types only parse what it hands over.

use crate::{FighterId, GridResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// Raw fight log: each fighter's opponents in recorded order, rematches included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FightRecord {
    fights: BTreeMap<FighterId, Vec<FighterId>>,
}

impl FightRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `{ "id": ["opponent", ...] }` asset
    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> GridResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Replace the opponent list of `id`
    pub fn insert(&mut self, id: impl Into<FighterId>, opponents: Vec<FighterId>) {
        self.fights.insert(id.into(), opponents);
    }

    /// Log one bout on both fighters' records
    pub fn add_fight(&mut self, a: &str, b: &str) {
        self.fights.entry(a.to_string()).or_default().push(b.to_string());
        self.fights.entry(b.to_string()).or_default().push(a.to_string());
    }

    pub fn opponents(&self, id: &str) -> Option<&[FighterId]> {
        self.fights.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.fights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FighterId, &Vec<FighterId>)> {
        self.fights.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FightRecord
where
    K: Into<FighterId>,
    V: IntoIterator,
    V::Item: Into<FighterId>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fights: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

/// Fighter id to display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FighterDirectory {
    names: BTreeMap<FighterId, String>,
}

impl FighterDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> GridResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn insert(&mut self, id: impl Into<FighterId>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name if known, the raw id otherwise
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.name_of(id).unwrap_or(id)
    }

    /// First id whose display name matches, ignoring case and outer whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&FighterId> {
        let wanted = name.trim().to_lowercase();
        self.names
            .iter()
            .find(|(_, n)| n.to_lowercase() == wanted)
            .map(|(id, _)| id)
    }

    /// Ids with a display name, in id order
    pub fn ids(&self) -> impl Iterator<Item = &FighterId> {
        self.names.keys()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<FighterId>, V: Into<String>> FromIterator<(K, V)> for FighterDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// One entry of the portrait asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portrait {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "PicURL")]
    pub pic_url: String,
}

/// Portrait URLs keyed by display name.
///
/// The asset carries no fighter ids, so lookups go through the directory's
/// display name. Renamed fighters lose their portrait.
#[derive(Debug, Clone, Default)]
pub struct PortraitIndex {
    by_name: HashMap<String, String>,
}

impl PortraitIndex {
    pub fn from_portraits(portraits: Vec<Portrait>) -> Self {
        let mut by_name = HashMap::with_capacity(portraits.len());
        for p in portraits {
            // first entry wins on duplicate names
            by_name.entry(p.name).or_insert(p.pic_url);
        }
        Self { by_name }
    }

    pub fn from_json(json: &str) -> GridResult<Self> {
        let portraits: Vec<Portrait> = serde_json::from_str(json)?;
        Ok(Self::from_portraits(portraits))
    }

    pub fn url_for_name(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn url_for(&self, id: &str, directory: &FighterDirectory) -> Option<&str> {
        directory.name_of(id).and_then(|name| self.url_for_name(name))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn test_parse_fight_record() {
        let record = FightRecord::from_json(r#"{"a": ["b", "b", "c"], "b": ["a", "a"]}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.opponents("a").unwrap(), ["b", "b", "c"]);
        assert!(record.opponents("c").is_none());
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = FightRecord::from_json(r#"{"a": "b"}"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidData(_)));
    }

    #[test]
    fn test_add_fight_is_two_sided() {
        let mut record = FightRecord::new();
        record.add_fight("a", "b");
        record.add_fight("a", "b");
        assert_eq!(record.opponents("a").unwrap(), ["b", "b"]);
        assert_eq!(record.opponents("b").unwrap(), ["a", "a"]);
    }

    #[test]
    fn test_directory_lookup() {
        let dir = FighterDirectory::from_json(r#"{"1": "Anderson Silva", "2": "Chael Sonnen"}"#).unwrap();
        assert_eq!(dir.name_of("1"), Some("Anderson Silva"));
        assert_eq!(dir.label("3"), "3");
        assert_eq!(dir.find_by_name("  chael sonnen "), Some(&"2".to_string()));
        assert_eq!(dir.find_by_name("Chael"), None);
    }

    #[test]
    fn test_portraits_join_through_display_name() {
        let dir: FighterDirectory = [("1", "Anderson Silva")].into_iter().collect();
        let index = PortraitIndex::from_json(
            r#"[{"Name": "Anderson Silva", "PicURL": "https://img/1.png"},
                {"Name": "Anderson Silva", "PicURL": "https://img/dup.png"}]"#,
        )
        .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.url_for("1", &dir), Some("https://img/1.png"));
        assert_eq!(index.url_for("2", &dir), None);
    }
}
