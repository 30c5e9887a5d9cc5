//! The persisted manifest (`package.json`) as seen before and after a merge.
//!
//! Every field of an existing manifest is classified into a [`Slot`]:
//! missing, explicitly `null`, one of its legal shapes, or something else.
//! Shapes are recognised by explicit matching on the JSON value, never by
//! probing for properties after the fact.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

pub const MANIFEST_FILE: &str = "package.json";

/// Version given to a project that had no manifest at all.
pub const INITIAL_VERSION: &str = "0.0.0";

const NAME: &str = "name";
const VERSION: &str = "version";
const DESCRIPTION: &str = "description";
const HOMEPAGE: &str = "homepage";
const REPOSITORY: &str = "repository";
const AUTHOR: &str = "author";
const FILES: &str = "files";
const KEYWORDS: &str = "keywords";

/// State of one manifest field.
///
/// `Absent` and `Null` are different: an explicit `null` is a value the user
/// wrote and some fields preserve it.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Absent,
    Null,
    Present(T),
    /// A value outside every legal shape, kept verbatim.
    Unrecognized(Value),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Slot<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Self::Absent => Slot::Absent,
            Self::Null => Slot::Null,
            Self::Present(value) => Slot::Present(f(value)),
            Self::Unrecognized(raw) => Slot::Unrecognized(raw),
        }
    }
}

// ── Person / author ──────────────────────────────────────────────────────────

/// Structured author record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    /// Sub-fields written as `null`; they stay `null` unless a value fills them.
    pub null_keys: BTreeSet<&'static str>,
}

impl Person {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.url.is_none()
    }

    /// Parse npm's `"Name <email> (url)"` shorthand. Every part is optional.
    pub fn parse_shorthand(text: &str) -> Self {
        let cut = text.find(['<', '(']).unwrap_or(text.len());
        let name = text[..cut].trim();

        Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            email: between(text, '<', '>'),
            url: between(text, '(', ')'),
            null_keys: BTreeSet::new(),
        }
    }

    /// Per sub-field: keep `self`'s value, else take `fallback`'s.
    pub fn or(self, fallback: &Person) -> Person {
        Person {
            name: self.name.or_else(|| fallback.name.clone()),
            email: self.email.or_else(|| fallback.email.clone()),
            url: self.url.or_else(|| fallback.url.clone()),
            null_keys: self.null_keys,
        }
    }
}

fn between(text: &str, open: char, close: char) -> Option<String> {
    let start = text.find(open)? + open.len_utf8();
    let len = text[start..].find(close)?;
    let inner = text[start..start + len].trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

/// The two legal shapes of `author`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorField {
    Shorthand(String),
    Structured(Person),
}

impl AuthorField {
    pub fn normalize(self) -> Person {
        match self {
            Self::Shorthand(text) => Person::parse_shorthand(&text),
            Self::Structured(person) => person,
        }
    }
}

// ── Repository ───────────────────────────────────────────────────────────────

/// Structured repository record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    pub kind: Option<String>,
    pub url: String,
    pub directory: Option<String>,
    pub null_keys: BTreeSet<&'static str>,
}

impl Repository {
    pub fn git(url: impl Into<String>) -> Self {
        Self {
            kind: Some("git".into()),
            url: url.into(),
            directory: None,
            null_keys: BTreeSet::new(),
        }
    }
}

/// The two legal shapes of `repository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryField {
    Shorthand(String),
    Structured(Repository),
}

impl RepositoryField {
    pub fn normalize(self) -> Repository {
        match self {
            Self::Shorthand(url) => Repository::git(url),
            Self::Structured(repo) => repo,
        }
    }
}

// ── ExistingManifest ─────────────────────────────────────────────────────────

/// Manifest found in the target before the run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExistingManifest {
    pub name: Slot<String>,
    pub version: Slot<String>,
    pub description: Slot<String>,
    pub homepage: Slot<String>,
    pub repository: Slot<RepositoryField>,
    pub author: Slot<AuthorField>,
    pub files: Slot<Vec<String>>,
    pub keywords: Slot<Vec<String>>,
    /// Keys this crate never interprets, in document order.
    pub extra: Map<String, Value>,
}

impl ExistingManifest {
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::MalformedManifest {
                reason: e.to_string(),
            })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let Value::Object(object) = value else {
            return Err(DomainError::MalformedManifest {
                reason: "top-level value must be a JSON object".into(),
            });
        };

        let mut manifest = Self::default();
        for (key, value) in object {
            match key.as_str() {
                NAME => manifest.name = classify(value, as_string),
                VERSION => manifest.version = classify(value, as_version),
                DESCRIPTION => manifest.description = classify(value, as_string),
                HOMEPAGE => manifest.homepage = classify(value, as_string),
                REPOSITORY => manifest.repository = classify(value, as_repository),
                AUTHOR => manifest.author = classify(value, as_author),
                FILES => manifest.files = classify(value, as_string_list),
                KEYWORDS => manifest.keywords = classify(value, as_string_list),
                _ => {
                    manifest.extra.insert(key, value);
                }
            }
        }
        Ok(manifest)
    }
}

fn classify<T>(value: Value, recognize: impl FnOnce(&Value) -> Option<T>) -> Slot<T> {
    if value.is_null() {
        return Slot::Null;
    }
    match recognize(&value) {
        Some(shape) => Slot::Present(shape),
        None => Slot::Unrecognized(value),
    }
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn as_version(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    semver::Version::parse(text).ok()?;
    Some(text.to_string())
}

fn as_string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// String or null sub-field; anything else disqualifies the record.
fn optional_string(value: &Value) -> Result<Option<String>, ()> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(()),
    }
}

fn as_author(value: &Value) -> Option<AuthorField> {
    match value {
        Value::String(text) => Some(AuthorField::Shorthand(text.clone())),
        Value::Object(record) => {
            let mut person = Person::default();
            for (key, sub) in record {
                let sub = optional_string(sub).ok()?;
                let (key, slot) = match key.as_str() {
                    "name" => ("name", &mut person.name),
                    "email" => ("email", &mut person.email),
                    "url" => ("url", &mut person.url),
                    _ => return None,
                };
                if sub.is_none() {
                    person.null_keys.insert(key);
                }
                *slot = sub;
            }
            Some(AuthorField::Structured(person))
        }
        _ => None,
    }
}

fn as_repository(value: &Value) -> Option<RepositoryField> {
    match value {
        Value::String(url) => Some(RepositoryField::Shorthand(url.clone())),
        Value::Object(record) => {
            let mut kind = None;
            let mut url = None;
            let mut directory = None;
            let mut null_keys = BTreeSet::new();
            for (key, sub) in record {
                let sub = optional_string(sub).ok()?;
                let (key, slot) = match key.as_str() {
                    "type" => ("type", &mut kind),
                    "url" => ("url", &mut url),
                    "directory" => ("directory", &mut directory),
                    _ => return None,
                };
                if sub.is_none() {
                    null_keys.insert(key);
                }
                *slot = sub;
            }
            Some(RepositoryField::Structured(Repository {
                kind,
                url: url?,
                directory,
                null_keys,
            }))
        }
        _ => None,
    }
}

// ── ResolvedManifest ─────────────────────────────────────────────────────────

/// The manifest to persist.
///
/// `Absent` fields are omitted from the document, `Null` fields are written
/// as `null`. `Unrecognized` only appears when an unknown shape had no
/// replacement and is written back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedManifest {
    pub name: String,
    pub version: Slot<String>,
    pub description: Slot<String>,
    pub homepage: Slot<String>,
    pub repository: Slot<Repository>,
    pub author: Slot<Person>,
    pub files: Slot<Vec<String>>,
    pub keywords: Slot<Vec<String>>,
    pub extra: Map<String, Value>,
}

impl ResolvedManifest {
    /// JSON document with the managed keys first, then pass-through keys.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(NAME.into(), Value::String(self.name.clone()));
        put(&mut object, VERSION, &self.version);
        put(&mut object, DESCRIPTION, &self.description);
        put(&mut object, HOMEPAGE, &self.homepage);
        put(&mut object, REPOSITORY, &self.repository);
        put(&mut object, AUTHOR, &self.author);
        put(&mut object, FILES, &self.files);
        put(&mut object, KEYWORDS, &self.keywords);
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

fn put<T: ToJson>(object: &mut Map<String, Value>, key: &str, slot: &Slot<T>) {
    let value = match slot {
        Slot::Absent => return,
        Slot::Null => Value::Null,
        Slot::Present(value) => value.to_json(),
        Slot::Unrecognized(raw) => raw.clone(),
    };
    object.insert(key.into(), value);
}

trait ToJson {
    fn to_json(&self) -> Value;
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToJson for Vec<String> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().cloned().map(Value::String).collect())
    }
}

impl ToJson for Person {
    fn to_json(&self) -> Value {
        let mut record = Map::new();
        insert_opt(&mut record, "name", &self.name, &self.null_keys);
        insert_opt(&mut record, "email", &self.email, &self.null_keys);
        insert_opt(&mut record, "url", &self.url, &self.null_keys);
        Value::Object(record)
    }
}

impl ToJson for Repository {
    fn to_json(&self) -> Value {
        let mut record = Map::new();
        insert_opt(&mut record, "type", &self.kind, &self.null_keys);
        record.insert("url".into(), Value::String(self.url.clone()));
        insert_opt(&mut record, "directory", &self.directory, &self.null_keys);
        Value::Object(record)
    }
}

fn insert_opt(
    record: &mut Map<String, Value>,
    key: &'static str,
    value: &Option<String>,
    null_keys: &BTreeSet<&'static str>,
) {
    match value {
        Some(value) => {
            record.insert(key.into(), Value::String(value.clone()));
        }
        None if null_keys.contains(key) => {
            record.insert(key.into(), Value::Null);
        }
        None => {}
    }
}
