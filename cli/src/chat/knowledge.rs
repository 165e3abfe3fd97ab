//! # Knowledge Store
//!
//! File: cli/src/chat/knowledge.rs
//!
//! ## Overview
//!
//! The knowledge base is a flat list of learned records, each pairing a
//! subject (usually the exact sentence the user typed) with the answer the
//! user taught and an optional follow-up question. It is persisted as:
//!
//! ```json
//! {
//!     "aprendizado": [
//!         { "assunto": "hi", "resposta": "Hello!", "pergunta_followup": null }
//!     ]
//! }
//! ```
//!
//! Loading never fails: a missing file is an empty base, and an unreadable
//! or malformed one is logged and treated as empty. Entries inside
//! `aprendizado` that are not records are skipped with a warning and are
//! gone from the file after the next save; unknown keys, both top-level and
//! per record, survive. Saving happens after
//! every change and a failed write is logged while the in-memory base stays
//! authoritative for the rest of the session.
//!
//! Lookup is a plain substring scan in list order. A short subject can match
//! unrelated input; that is accepted behaviour.
//!
use crate::common::fs::io;
use crate::core::error::{HollowError, Result};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Top-level key of the knowledge file.
const RECORDS_KEY: &str = "aprendizado";

/// One learned fact. Fields this program does not know are kept in `extra`
/// and written back as they were.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeRecord {
    #[serde(rename = "assunto", default)]
    pub subject: String,
    #[serde(rename = "resposta", default)]
    pub response: String,
    #[serde(rename = "pergunta_followup", default)]
    pub follow_up: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KnowledgeRecord {
    pub fn new(subject: &str, response: &str, follow_up: Option<String>) -> Self {
        Self {
            subject: subject.to_string(),
            response: response.to_string(),
            follow_up,
            extra: Map::new(),
        }
    }
}

/// The ordered record list plus any other top-level keys found in the file,
/// which are written back untouched.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct KnowledgeBase {
    #[serde(rename = "aprendizado")]
    records: Vec<KnowledgeRecord>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Subjects compare trimmed and lowercased.
fn normalize_subject(subject: &str) -> String {
    subject.trim().to_lowercase()
}

impl KnowledgeBase {
    pub fn records(&self) -> &[KnowledgeRecord] {
        &self.records
    }

    /// First record, in list order, whose non-empty subject occurs inside `input`.
    pub fn find_match(&self, input: &str) -> Option<&KnowledgeRecord> {
        let input_lower = input.to_lowercase();
        let input_lower = input_lower.trim();
        self.records.iter().find(|record| {
            let subject = normalize_subject(&record.subject);
            !subject.is_empty() && input_lower.contains(subject.as_str())
        })
    }

    /// Drops every record with the same normalized subject, then appends `record`.
    pub fn upsert(&mut self, record: KnowledgeRecord) {
        let key = normalize_subject(&record.subject);
        self.records
            .retain(|existing| normalize_subject(&existing.subject) != key);
        self.records.push(record);
    }

    /// Parses the knowledge file format.
    ///
    /// Fails when the text is not JSON or `aprendizado` is missing or not a
    /// list. Individual entries that are not records are skipped with a
    /// warning.
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let root: Value = serde_json::from_str(text).map_err(|e| {
            anyhow!(HollowError::KnowledgeFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        let Value::Object(mut object) = root else {
            return Err(anyhow!(HollowError::KnowledgeFile {
                path: path.to_path_buf(),
                reason: "top level is not an object".to_string(),
            }));
        };
        let Some(Value::Array(items)) = object.remove(RECORDS_KEY) else {
            return Err(anyhow!(HollowError::KnowledgeFile {
                path: path.to_path_buf(),
                reason: format!("missing '{}' list", RECORDS_KEY),
            }));
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<KnowledgeRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    "Skipping entry {} of '{}' in {}: {}",
                    index,
                    RECORDS_KEY,
                    path.display(),
                    e
                ),
            }
        }
        Ok(Self {
            records,
            extra: object,
        })
    }

    /// Pretty-printed JSON with four-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize knowledge base")?;
        String::from_utf8(buffer).context("Serialized knowledge base is not UTF-8")
    }
}

/// A knowledge base bound to its backing file.
#[derive(Debug)]
pub struct KnowledgeStore {
    path: PathBuf,
    base: KnowledgeBase,
}

impl KnowledgeStore {
    /// Loads the base from `path`, falling back to an empty one.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base = if !path.exists() {
            debug!(
                "Knowledge file {} not found, starting empty.",
                path.display()
            );
            KnowledgeBase::default()
        } else {
            match io::read_file_to_string(&path)
                .and_then(|text| KnowledgeBase::from_json(&text, &path))
            {
                Ok(base) => {
                    info!(
                        "Loaded {} learned records from {}",
                        base.records().len(),
                        path.display()
                    );
                    base
                }
                Err(e) => {
                    warn!(
                        "Could not read '{}', starting with an empty memory: {:#}",
                        path.display(),
                        e
                    );
                    KnowledgeBase::default()
                }
            }
        };
        Self { path, base }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base(&self) -> &KnowledgeBase {
        &self.base
    }

    pub fn find_match(&self, input: &str) -> Option<&KnowledgeRecord> {
        self.base.find_match(input)
    }

    /// Writes the whole base to disk, returning any failure.
    pub fn try_save(&self) -> Result<()> {
        let json = self.base.to_json()?;
        io::write_string_to_file(&self.path, &json)
    }

    /// Writes the whole base to disk; failures are logged and swallowed.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            warn!("Could not save '{}': {:#}", self.path.display(), e);
        }
    }

    /// Replaces any record with the same subject, appends the new one and saves.
    pub fn teach(
        &mut self,
        subject: &str,
        response: &str,
        follow_up: Option<String>,
    ) {
        let record = KnowledgeRecord::new(subject, response, follow_up);
        debug!("Learned: {:?}", record);
        self.base.upsert(record);
        self.save();
    }

    /// Same replace-on-write behaviour as `teach`.
    pub fn correct(
        &mut self,
        subject: &str,
        new_response: &str,
        new_follow_up: Option<String>,
    ) {
        self.teach(subject, new_response, new_follow_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn base_of(pairs: &[(&str, &str)]) -> KnowledgeBase {
        KnowledgeBase {
            records: pairs
                .iter()
                .map(|(subject, response)| KnowledgeRecord::new(subject, response, None))
                .collect(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_find_match_none() {
        let base = base_of(&[("turtles", "They are slow.")]);
        assert!(base.find_match("tell me about cars").is_none());
    }

    #[test]
    fn test_find_match_first_in_list_wins() {
        let base = base_of(&[("hello", "first"), ("hello there", "second")]);
        let record = base.find_match("  HELLO THERE friend ").unwrap();
        assert_eq!(record.response, "first");
    }

    #[test]
    fn test_find_match_ignores_blank_subject() {
        let base = base_of(&[("   ", "blank"), ("cats", "meow")]);
        assert_eq!(base.find_match("I like cats").unwrap().response, "meow");
        assert!(base.find_match("dogs").is_none());
    }

    #[test]
    fn test_find_match_normalizes_subject() {
        let base = base_of(&[("  How Are You ", "Fine")]);
        assert_eq!(base.find_match("so, how are you?").unwrap().response, "Fine");
    }

    #[test]
    fn test_teach_twice_keeps_latest() {
        let dir = tempdir().unwrap();
        let mut store = KnowledgeStore::load(dir.path().join("memoria.json"));
        store.teach("Hi there", "Hello!", Some("How are you?".into()));
        store.teach("  hi THERE ", "Hey!", None);

        let records = store.base().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "  hi THERE ");
        assert_eq!(records[0].response, "Hey!");
        assert_eq!(records[0].follow_up, None);
    }

    #[test]
    fn test_correct_replaces_record() {
        let dir = tempdir().unwrap();
        let mut store = KnowledgeStore::load(dir.path().join("memoria.json"));
        store.teach("sky", "green", None);
        store.teach("grass", "green", None);
        store.correct("SKY", "blue", Some("Do you like clouds?".into()));

        let records = store.base().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "grass");
        assert_eq!(records[1].response, "blue");
    }

    #[test]
    fn test_teach_persists_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        let mut store = KnowledgeStore::load(&path);
        store.teach("ping", "pong", None);

        let reloaded = KnowledgeStore::load(&path);
        assert_eq!(reloaded.base().records(), store.base().records());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = KnowledgeStore::load(dir.path().join("absent.json"));
        assert!(store.base().records().is_empty());
    }

    #[test]
    fn test_load_invalid_shapes_are_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        for content in [
            "not json at all",
            "[1, 2, 3]",
            r#"{"other": []}"#,
            r#"{"aprendizado": "nope"}"#,
            r#"{"aprendizado": {"assunto": "x"}}"#,
        ] {
            fs::write(&path, content).unwrap();
            let store = KnowledgeStore::load(&path);
            assert!(store.base().records().is_empty(), "expected empty for {}", content);
        }
    }

    #[test]
    fn test_load_skips_bad_entries_and_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        fs::write(
            &path,
            r#"{"aprendizado": [42, {"assunto": "oi"}, {"assunto": "a", "resposta": "b", "pergunta_followup": "c?"}]}"#,
        )
        .unwrap();

        let store = KnowledgeStore::load(&path);
        let records = store.base().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], KnowledgeRecord::new("oi", "", None));
        assert_eq!(records[1].follow_up.as_deref(), Some("c?"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        let mut store = KnowledgeStore::load(&path);
        store.teach("café", "Gosto muito!", Some("Com açúcar?".into()));
        store.teach("tea", "Earl grey.", None);

        let reloaded = KnowledgeStore::load(&path);
        assert_eq!(store.base().records(), reloaded.base().records());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"aprendizado\""));
        assert!(raw.contains("\"pergunta_followup\": null"));
        assert!(raw.contains("café"));
        assert!(raw.contains("\n    \"aprendizado\""));
    }

    #[test]
    fn test_extra_top_level_keys_survive_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        fs::write(&path, r#"{"versao": 2, "aprendizado": []}"#).unwrap();

        let mut store = KnowledgeStore::load(&path);
        store.teach("x", "y", None);

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["versao"], 2);
        assert_eq!(raw["aprendizado"][0]["assunto"], "x");
    }

    #[test]
    fn test_unknown_record_fields_survive_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memoria.json");
        fs::write(
            &path,
            r#"{"aprendizado": [{"assunto": "sky", "resposta": "blue", "fonte": "user", "peso": 3}]}"#,
        )
        .unwrap();

        let mut store = KnowledgeStore::load(&path);
        assert_eq!(store.base().records()[0].extra["fonte"], "user");
        store.teach("grass", "green", None);

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["aprendizado"][0]["assunto"], "sky");
        assert_eq!(raw["aprendizado"][0]["fonte"], "user");
        assert_eq!(raw["aprendizado"][0]["peso"], 3);
        assert!(raw["aprendizado"][1].get("fonte").is_none());
    }

    #[test]
    fn test_failed_save_keeps_memory() {
        let dir = tempdir().unwrap();
        // The target path is a directory, so the write fails.
        let path = dir.path().join("memoria.json");
        fs::create_dir(&path).unwrap();

        let mut store = KnowledgeStore {
            path: path.clone(),
            base: KnowledgeBase::default(),
        };
        assert!(store.try_save().is_err());
        store.teach("still", "here", None);
        assert_eq!(store.find_match("still").unwrap().response, "here");
    }
}
