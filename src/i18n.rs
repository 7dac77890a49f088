//! Locales and translated UI strings.
//!
//! DESIGN
//! ======
//! Every public page lives under a `/<locale>` path prefix. Switching
//! language rewrites that prefix, so locale state is carried by the URL and
//! never stored server-side. Message catalogs are embedded at compile time.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ja" => Some(Self::Ja),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Parse `raw`, falling back to the default locale when unsupported.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }

    /// Short label shown on the language toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ja => "JA",
            Self::En => "EN",
        }
    }

    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::Ja => &JA,
            Self::En => &EN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the supported language with the highest `q` weight from an
/// `Accept-Language` header. Ties keep header order; `q=0` excludes a tag.
#[must_use]
pub fn preferred_locale(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::default();
    };

    let mut best: Option<(Locale, f32)> = None;
    for part in header.split(',') {
        let mut fields = part.split(';');
        let tag = fields.next().unwrap_or_default().trim().to_ascii_lowercase();
        let Some(locale) = Locale::parse(tag.split('-').next().unwrap_or_default()) else {
            continue;
        };
        let weight = fields
            .filter_map(|param| {
                let param = param.trim();
                param.strip_prefix("q=").or_else(|| param.strip_prefix("Q="))
            })
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if weight > 0.0 && best.is_none_or(|(_, top)| weight > top) {
            best = Some((locale, weight));
        }
    }

    best.map(|(locale, _)| locale).unwrap_or_default()
}

/// Rewrite the leading locale segment of `path` from `from` to `to`.
///
/// Paths that do not start with `/<from>` get `/<to>` prepended.
#[must_use]
pub fn switch_locale_path(path: &str, from: Locale, to: Locale) -> String {
    let prefix = format!("/{from}");
    if let Some(rest) = path.strip_prefix(&prefix) {
        if rest.is_empty() || rest.starts_with('/') {
            return format!("/{to}{rest}");
        }
    }

    if path == "/" || path.is_empty() {
        format!("/{to}")
    } else if path.starts_with('/') {
        format!("/{to}{path}")
    } else {
        format!("/{to}/{path}")
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct Messages {
    pub nav: NavMessages,
    pub home: HomeMessages,
    pub apps: SectionMessages,
    pub notes: SectionMessages,
    pub modal: ModalMessages,
    pub admin: AdminMessages,
    pub not_found: NotFoundMessages,
}

#[derive(Debug, Deserialize)]
pub struct NavMessages {
    pub home: String,
    pub apps: String,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct HomeMessages {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub featured: String,
    pub latest: String,
}

#[derive(Debug, Deserialize)]
pub struct SectionMessages {
    pub title: String,
    pub description: String,
    pub back: String,
    pub empty: String,
}

#[derive(Debug, Deserialize)]
pub struct ModalMessages {
    pub close: String,
    pub view_app: String,
    pub read_note: String,
    pub tech: String,
    pub open_detail: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminMessages {
    pub title: String,
    pub all_locales: String,
    pub all_statuses: String,
    pub draft: String,
    pub published: String,
    pub filter: String,
    pub edit: String,
    pub delete: String,
    pub empty: String,
    pub delete_failed: String,
    pub create: String,
    pub create_title: String,
    pub edit_title: String,
    pub save: String,
    pub cancel: String,
    pub save_failed: String,
    pub load_failed: String,
    pub field_entry_id: String,
    pub field_type: String,
    pub field_locale: String,
    pub field_title: String,
    pub field_description: String,
    pub field_date: String,
    pub field_status: String,
}

#[derive(Debug, Deserialize)]
pub struct NotFoundMessages {
    pub title: String,
    pub back_home: String,
}

static JA: LazyLock<Messages> = LazyLock::new(|| load_catalog(include_str!("../messages/ja.json")));
static EN: LazyLock<Messages> = LazyLock::new(|| load_catalog(include_str!("../messages/en.json")));

fn load_catalog(raw: &str) -> Messages {
    serde_json::from_str(raw).expect("embedded message catalog must match Messages")
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
