//! Translation of label tokens.
//!
//! Labels pass their month names (and, for day buckets, the day number)
//! through a [`Localizer`]. [`Translations`] holds one resource bundle per
//! locale: a flat JSON object mapping source strings to translated strings,
//! the same shape as a `lang/<locale>.json` file.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Result, TrendError};

/// Directory name under the XDG config home holding `<locale>.json` bundles.
const LANG_DIR: &str = "lang";

/// Translates a single string, returning it unchanged when no translation
/// exists.
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Localizer that leaves every string untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Localizer for Untranslated {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// One translation bundle: source string to translated string.
pub type Bundle = HashMap<String, String>;

/// Locale-keyed translation bundles with an active and a fallback locale.
///
/// ```rust
/// use jalali_trend_core::locale::{Localizer, Translations};
///
/// let translations = Translations::builtin().with_locale("en");
/// assert_eq!(translations.translate("مهر"), "Mehr");
/// assert_eq!(translations.translate("unknown"), "unknown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translations {
    bundles: HashMap<String, Bundle>,
    locale: String,
    fallback: Option<String>,
}

impl Translations {
    /// Creates an empty set of bundles with the given active locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            bundles: HashMap::new(),
            locale: locale.into(),
            fallback: None,
        }
    }

    /// Bundles shipped with the library (`en`: transliterated month names).
    /// The active locale is `fa`, for which no translation is needed.
    ///
    /// # Panics
    ///
    /// Panics if the bundled `en.json` is not a JSON object of strings.
    pub fn builtin() -> Self {
        let en: Bundle = serde_json::from_str(include_str!("../assets/lang/en.json"))
            .expect("bundled en.json is a JSON object of strings");
        Self::new("fa").with_bundle("en", en)
    }

    /// Loads bundles from the default directory
    /// `$XDG_CONFIG_HOME/jalali-trend/lang`, on top of the builtin ones.
    pub fn from_default_dir() -> Result<Self> {
        let translations = Self::builtin();
        match Self::default_dir() {
            Some(dir) => translations.load_dir(dir),
            None => Ok(translations),
        }
    }

    /// Returns the default bundle directory if it exists.
    pub fn default_dir() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("jalali-trend").find_config_file(LANG_DIR)
    }

    /// Adds or replaces the bundle for a locale.
    pub fn with_bundle(mut self, locale: impl Into<String>, bundle: Bundle) -> Self {
        self.bundles
            .entry(locale.into())
            .or_default()
            .extend(bundle);
        self
    }

    /// Sets the active locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the locale consulted when the active one has no entry.
    pub fn with_fallback(mut self, locale: impl Into<String>) -> Self {
        self.fallback = Some(locale.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locales with a loaded bundle, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Loads `<locale>.json` from a file path.
    pub fn load_file(self, locale: impl Into<String>, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TrendError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let bundle: Bundle = serde_json::from_str(&content)?;
        Ok(self.with_bundle(locale, bundle))
    }

    /// Loads every `*.json` file of a directory, keyed by file stem.
    pub fn load_dir(mut self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| TrendError::FileSystem {
            path: dir.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| TrendError::FileSystem {
                    path: dir.to_path_buf(),
                    source: e,
                })?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            debug!("Loading translations for '{locale}' from {}", path.display());
            self = self.load_file(locale.to_string(), &path)?;
        }
        Ok(self)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&String> {
        self.bundles.get(locale).and_then(|bundle| bundle.get(key))
    }
}

impl Localizer for Translations {
    fn translate(&self, key: &str) -> String {
        self.lookup(&self.locale, key)
            .or_else(|| {
                self.fallback
                    .as_deref()
                    .and_then(|fallback| self.lookup(fallback, key))
            })
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
