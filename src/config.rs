//! Reader preference storage
//!
//! Two preferences are remembered: the selected theme and the accent
//! color. They live in key-value stores layered by lifetime, a session
//! tier first and a persistent file second. The persistent tier is a
//! TOML table at ~/.rtdocs.toml (or %USERPROFILE%\.rtdocs.toml on
//! Windows).
//!
//! Example:
//! ```text
//! rt-docs-theme = "dark"
//! rt-docs-accent = "#FF69B4"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::palette::{AccentPalette, Color, ThemeMode, DEFAULT_ACCENT};

/// Key of the selected theme id
pub const THEME_KEY: &str = "rt-docs-theme";

/// Key of the selected accent color
pub const ACCENT_KEY: &str = "rt-docs-accent";

/// A key-value store for preference strings
pub trait PreferenceStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store that lives as long as the process (session tier)
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of the preference file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(rename = "rt-docs-theme", default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    #[serde(rename = "rt-docs-accent", default, skip_serializing_if = "Option::is_none")]
    accent: Option<String>,
    /// Any other string keys, kept as found
    #[serde(flatten)]
    other: BTreeMap<String, String>,
}

impl PreferenceFile {
    fn get(&self, key: &str) -> Option<&String> {
        match key {
            THEME_KEY => self.theme.as_ref(),
            ACCENT_KEY => self.accent.as_ref(),
            _ => self.other.get(key),
        }
    }

    fn insert(&mut self, key: &str, value: &str) {
        let value = value.to_string();
        match key {
            THEME_KEY => self.theme = Some(value),
            ACCENT_KEY => self.accent = Some(value),
            _ => {
                self.other.insert(key.to_string(), value);
            }
        }
    }
}

/// Store backed by a TOML file (persistent tier)
///
/// Every `set` rewrites the file. A value only changes in memory once
/// it has been written.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: PreferenceFile,
    /// The file existed but could not be read or parsed
    unreadable: bool,
}

impl FileStore {
    /// Get the default preference file path
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".rtdocs.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".rtdocs.toml"))
        }
    }

    /// Open the store at `path`
    ///
    /// A missing, unreadable or malformed file yields an empty store;
    /// the file is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut unreadable = false;
        let file = if path.exists() {
            match Self::read(&path) {
                Ok(file) => {
                    tracing::debug!("Loaded preferences from {}", path.display());
                    file
                }
                Err(e) => {
                    tracing::warn!("Ignoring preferences at {}: {}", path.display(), e);
                    unreadable = true;
                    PreferenceFile::default()
                }
            }
        } else {
            tracing::debug!("No preference file at {}, using defaults", path.display());
            PreferenceFile::default()
        };
        Self {
            path,
            file,
            unreadable,
        }
    }

    fn read(path: &Path) -> Result<PreferenceFile> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn write(&self, file: &PreferenceFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string(file)?;
        fs::write(&self.path, contents)?;
        tracing::info!("Saved preferences to {}", self.path.display());
        Ok(())
    }

    /// Path this store writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.file.clone();
        next.insert(key, value);

        if self.unreadable {
            tracing::warn!(
                "Replacing unreadable preference file at {}",
                self.path.display()
            );
        }
        self.write(&next)?;

        self.file = next;
        self.unreadable = false;
        Ok(())
    }
}

/// Theme and accent selected by the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub theme: ThemeMode,
    /// Accent as a hex string, always a valid color
    pub accent: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl Preferences {
    /// Load preferences, each key from the first store that has it
    ///
    /// Invalid stored values are ignored in favor of the defaults.
    pub fn load(stores: &[&dyn PreferenceStore]) -> Self {
        let mut prefs = Preferences::default();
        let lookup = |key: &str| stores.iter().find_map(|store| store.get(key));

        if let Some(value) = lookup(THEME_KEY) {
            match value.parse::<ThemeMode>() {
                Ok(theme) => prefs.theme = theme,
                Err(e) => tracing::warn!("Ignoring stored theme: {}", e),
            }
        }

        if let Some(value) = lookup(ACCENT_KEY) {
            match Color::parse(&value) {
                Ok(_) => prefs.accent = value,
                Err(e) => tracing::warn!("Ignoring stored accent: {}", e),
            }
        }

        prefs
    }

    /// Record a theme selection
    pub fn select_theme(&mut self, store: &mut dyn PreferenceStore, theme: ThemeMode) -> Result<()> {
        store.set(THEME_KEY, theme.id())?;
        self.theme = theme;
        Ok(())
    }

    /// Record an accent selection
    ///
    /// Malformed colors are rejected before anything is written.
    pub fn select_accent(&mut self, store: &mut dyn PreferenceStore, accent: &str) -> Result<()> {
        Color::parse(accent)?;
        store.set(ACCENT_KEY, accent)?;
        self.accent = accent.to_string();
        Ok(())
    }

    /// Derive the accent palette for the current selection
    pub fn palette(&self, prefers_dark: bool) -> Result<AccentPalette> {
        AccentPalette::derive(&self.accent, self.theme.is_dark(prefers_dark))
    }
}
