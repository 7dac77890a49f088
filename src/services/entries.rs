//! Admin content entries as stored by the worker.
//!
//! The worker owns these rows; this module only types them for the admin
//! page and validates what we forward.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::i18n::Locale;

/// Publication state of an admin entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Draft,
    Published,
}

impl EntryStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    App,
    Note,
    About,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::App, EntryKind::Note, EntryKind::About];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Note => "note",
            Self::About => "about",
        }
    }
}

/// A worker row. Fields the admin page does not render stay in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: i64,
    pub entry_id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub locale: Locale,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    pub status: EntryStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Optional list filters forwarded to the worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub locale: Option<Locale>,
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    /// Build from raw query values. Empty or unknown values mean "no filter".
    #[must_use]
    pub fn from_raw(locale: Option<&str>, status: Option<&str>) -> Self {
        Self { locale: locale.and_then(Locale::parse), status: status.and_then(EntryStatus::parse) }
    }

    /// Query pairs in the order the worker expects.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(locale) = self.locale {
            pairs.push(("locale", locale.as_str()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        pairs
    }
}

/// Fields posted by the admin editor form. `id` is empty when creating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorForm {
    pub id: String,
    pub entry_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub locale: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub status: String,
}

impl EditorForm {
    /// Worker row being edited, or `None` for a new entry.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        let id = self.id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// JSON body to send to the worker.
    ///
    /// # Errors
    ///
    /// Returns a short message naming the first missing or invalid field.
    pub fn to_body(&self) -> Result<Value, &'static str> {
        let entry_id = self.entry_id.trim();
        if !is_valid_id(entry_id) {
            return Err("entry_id must be a short slug");
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err("title is required");
        }

        let body = json!({
            "entry_id": entry_id,
            "type": self.kind,
            "locale": self.locale,
            "title": title,
            "description": self.description.trim(),
            "date": self.date.trim(),
            "status": self.status,
        });
        validate_entry_body(&body)?;
        Ok(body)
    }
}

impl From<&ContentEntry> for EditorForm {
    fn from(entry: &ContentEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            entry_id: entry.entry_id.clone(),
            kind: entry.kind.as_str().to_owned(),
            locale: entry.locale.as_str().to_owned(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            date: entry.date.clone(),
            status: entry.status.as_str().to_owned(),
        }
    }
}

/// Decode a worker list response. Anything but an array of rows is empty.
#[must_use]
pub fn entries_from_json(body: &Value) -> Vec<ContentEntry> {
    let Some(items) = body.as_array() else {
        tracing::warn!("worker returned non-array entry list");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<ContentEntry>(item.clone()) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed entry row");
                None
            }
        })
        .collect()
}

/// Check the enumerated fields of a create/update body before forwarding.
///
/// # Errors
///
/// Returns a short message naming the first invalid field.
pub fn validate_entry_body(body: &Value) -> Result<(), &'static str> {
    let Some(obj) = body.as_object() else {
        return Err("body must be a JSON object");
    };

    if let Some(status) = obj.get("status") {
        if status.as_str().and_then(EntryStatus::parse).is_none() {
            return Err("status must be draft or published");
        }
    }
    if let Some(locale) = obj.get("locale") {
        if locale.as_str().and_then(Locale::parse).is_none() {
            return Err("locale must be ja or en");
        }
    }
    if let Some(kind) = obj.get("type") {
        if serde_json::from_value::<EntryKind>(kind.clone()).is_err() {
            return Err("type must be app, note or about");
        }
    }
    Ok(())
}

/// Worker ids are interpolated into upstream URLs, so keep them plain.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 64 && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
#[path = "entries_test.rs"]
mod tests;
