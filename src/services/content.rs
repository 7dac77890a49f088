//! File-system content loader for apps and notes.
//!
//! ARCHITECTURE
//! ============
//! Content lives under a single root directory:
//!
//! ```text
//! <root>/apps/<locale>/<id>.json
//! <root>/notes/<locale>/<slug>.md   (YAML front-matter + Markdown body)
//! ```
//!
//! Loads are best-effort. A missing directory, unreadable file, or malformed
//! document is logged and skipped so one bad file never takes a page down.
//! Callers see an empty list or `None` and render "not found".

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::i18n::Locale;

/// Number of notes shown in "latest" lists unless a caller asks otherwise.
pub const DEFAULT_LATEST_LIMIT: usize = 3;
/// Maximum number of featured apps on the home page.
pub const FEATURED_LIMIT: usize = 3;

const UNTITLED: &str = "Untitled";

/// Errors produced while reading a single content file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid app json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLinks {
    #[serde(rename = "appStore", default, skip_serializing_if = "Option::is_none")]
    pub app_store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

impl AppLinks {
    /// Present links as `(label, url)` pairs in display order.
    #[must_use]
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        [("App Store", &self.app_store), ("GitHub", &self.github), ("Website", &self.web)]
            .into_iter()
            .filter_map(|(label, url)| url.as_deref().map(|url| (label, url)))
            .collect()
    }
}

/// A published application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: AppLinks,
    pub date: String,
    #[serde(default)]
    pub featured: bool,
}

/// A development note. `content` is only loaded for single-note reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Raw front-matter fields. Values stay untyped so `title: 2024` or
/// `tags: rust` still load; they are coerced to strings afterwards.
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    title: Option<serde_yaml::Value>,
    date: Option<serde_yaml::Value>,
    excerpt: Option<serde_yaml::Value>,
    tags: Option<serde_yaml::Value>,
}

// =============================================================================
// STORE
// =============================================================================

/// Read-only view over the content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All apps for `locale`, newest first.
    pub async fn get_apps(&self, locale: &str) -> Vec<App> {
        let Some(locale) = Locale::parse(locale) else {
            return Vec::new();
        };
        let dir = self.root.join("apps").join(locale.as_str());

        let mut apps = Vec::new();
        for path in list_files(&dir, "json").await {
            match read_app(&path).await {
                Ok(app) => apps.push(app),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping app file"),
            }
        }

        sort_newest_first(&mut apps, |app| app.date.as_str());
        apps
    }

    /// Up to [`FEATURED_LIMIT`] featured apps, newest first.
    pub async fn get_featured_apps(&self, locale: &str) -> Vec<App> {
        self.get_apps(locale)
            .await
            .into_iter()
            .filter(|app| app.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// All notes for `locale` without bodies, newest first.
    pub async fn get_notes(&self, locale: &str) -> Vec<Note> {
        let Some(locale) = Locale::parse(locale) else {
            return Vec::new();
        };
        let dir = self.root.join("notes").join(locale.as_str());

        let mut notes = Vec::new();
        for path in list_files(&dir, "md").await {
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
                continue;
            };
            match read_note(&path, slug, false).await {
                Ok(note) => notes.push(note),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping note file"),
            }
        }

        sort_newest_first(&mut notes, |note| note.date.as_str());
        notes
    }

    pub async fn get_latest_notes(&self, locale: &str, limit: usize) -> Vec<Note> {
        let mut notes = self.get_notes(locale).await;
        notes.truncate(limit);
        notes
    }

    pub async fn get_app_by_id(&self, locale: &str, id: &str) -> Option<App> {
        let locale = Locale::parse(locale)?;
        if !is_safe_name(id) {
            return None;
        }
        let path = self.root.join("apps").join(locale.as_str()).join(format!("{id}.json"));

        match read_app(&path).await {
            Ok(app) => Some(app),
            Err(ContentError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load app");
                None
            }
        }
    }

    /// A single note including its Markdown body.
    pub async fn get_note_by_slug(&self, locale: &str, slug: &str) -> Option<Note> {
        let locale = Locale::parse(locale)?;
        if !is_safe_name(slug) {
            return None;
        }
        let path = self.root.join("notes").join(locale.as_str()).join(format!("{slug}.md"));

        match read_note(&path, slug.to_owned(), true).await {
            Ok(note) => Some(note),
            Err(ContentError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load note");
                None
            }
        }
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Reject identifiers that could escape the locale directory.
pub(crate) fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
        && !name.contains("..")
}

pub(crate) fn parse_app(raw: &str) -> Result<App, ContentError> {
    Ok(serde_json::from_str(raw)?)
}

/// Split a leading `---` YAML block from the Markdown body.
///
/// Returns `(None, raw)` when the file has no complete front-matter block.
pub(crate) fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(first_line_end) = raw.find('\n') else {
        return (None, raw);
    };
    if raw[..first_line_end].trim_end() != "---" {
        return (None, raw);
    }

    let rest = &raw[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }
    (None, raw)
}

pub(crate) fn parse_note(slug: String, raw: &str, with_body: bool) -> Result<Note, ContentError> {
    let (yaml, body) = split_front_matter(raw);
    let meta = match yaml {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<Option<FrontMatter>>(yaml)?.unwrap_or_default(),
        _ => FrontMatter::default(),
    };

    Ok(Note {
        slug,
        title: meta
            .title
            .as_ref()
            .map(yaml_scalar_to_string)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_owned()),
        date: meta.date.as_ref().map(yaml_scalar_to_string).unwrap_or_default(),
        excerpt: meta.excerpt.as_ref().map(yaml_scalar_to_string).unwrap_or_default(),
        tags: meta.tags.as_ref().map(yaml_tags).unwrap_or_default(),
        content: with_body.then(|| body.to_owned()),
    })
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// A tag list, or a single scalar treated as a one-item list.
fn yaml_tags(value: &serde_yaml::Value) -> Vec<String> {
    let tags = match value {
        serde_yaml::Value::Sequence(items) => items.iter().map(yaml_scalar_to_string).collect(),
        scalar => vec![yaml_scalar_to_string(scalar)],
    };
    tags.into_iter().filter(|tag| !tag.is_empty()).collect()
}

/// Parse the date formats used in content files.
///
/// Accepts `YYYY-MM-DD`, `YYYY.MM.DD`, `YYYY/MM/DD` and RFC 3339 timestamps.
pub(crate) fn parse_content_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }

    let formats = [
        format_description!("[year]-[month]-[day]"),
        format_description!("[year].[month].[day]"),
        format_description!("[year]/[month]/[day]"),
    ];
    formats
        .into_iter()
        .find_map(|fmt| Date::parse(raw, fmt).ok())
        .map(|date| date.midnight().assume_utc())
}

/// Stable sort, newest first. Entries with unparseable dates go last.
pub(crate) fn sort_newest_first<T>(items: &mut [T], date: impl Fn(&T) -> &str) {
    items.sort_by_cached_key(|item| Reverse(parse_content_date(date(item))));
}

// =============================================================================
// I/O
// =============================================================================

/// Files in `dir` with extension `ext`, sorted by name. Missing dirs are empty.
async fn list_files(dir: &Path, ext: &str) -> Vec<PathBuf> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read content dir");
            }
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some(ext) {
                    files.push(path);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to list content dir");
                break;
            }
        }
    }
    files.sort();
    files
}

async fn read_app(path: &Path) -> Result<App, ContentError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_app(&raw)
}

async fn read_note(path: &Path, slug: String, with_body: bool) -> Result<Note, ContentError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_note(slug, &raw, with_body)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
