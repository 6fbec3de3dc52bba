//! Fixture catalog types and JSON parsing.
//!
//! The catalog holds the fixed reference lists used as random-sampling
//! pools: names, sites, countries, leagues, and message texts. A built-in
//! catalog covers the common case; custom catalogs can be supplied as JSON.
//! Every constructor guarantees that no pool is empty, so sampling from a
//! catalog cannot hit the empty-pool precondition.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

/// Built-in display name pool.
const BUILTIN_NAMES: &[&str] = &[
    "Astrid Vane",
    "Bruno Keller",
    "Carmen Silva",
    "Dmitri Volkov",
    "Elena Marsh",
    "Felix Okafor",
    "Greta Lindqvist",
    "Hugo Reyes",
    "Imogen Clarke",
    "Jonas Berg",
];

/// Built-in site pool.
const BUILTIN_SITES: &[&str] = &[
    "alpha.example.com",
    "beta.example.net",
    "gamma.example.org",
    "delta.example.io",
    "epsilon.example.dev",
    "zeta.example.app",
];

/// Built-in country pool.
const BUILTIN_COUNTRIES: &[&str] = &[
    "Argentina",
    "Brazil",
    "Canada",
    "Denmark",
    "Estonia",
    "Finland",
    "Germany",
    "Hungary",
    "Iceland",
    "Japan",
];

/// Built-in league pool.
const BUILTIN_LEAGUES: &[&str] = &["Bronze", "Silver", "Gold", "Platinum", "Diamond"];

/// Built-in message text pool. Mixed lengths so previews exercise both
/// sides of the truncation threshold.
const BUILTIN_MESSAGES: &[&str] = &[
    "gg",
    "Well played, rematch?",
    "That opening was wild",
    "See you in the finals",
    "Nice save at the end there",
    "Lag ruined that whole round",
    "Anyone up for a quick match tonight?",
    "Congrats on the promotion to Gold",
    "Report filed for unsportsmanlike chat",
    "Top of the leaderboard again",
];

/// The fixed reference lists used as random-sampling pools.
///
/// # Example
///
/// ```
/// use mock_feed::FixtureCatalog;
///
/// let catalog = FixtureCatalog::builtin();
/// assert!(!catalog.names().is_empty());
/// assert!(!catalog.messages().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCatalog {
    names: Vec<String>,
    sites: Vec<String>,
    countries: Vec<String>,
    leagues: Vec<String>,
    messages: Vec<String>,
}

impl FixtureCatalog {
    /// Returns the built-in catalog with the fixed reference lists.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            names: owned(BUILTIN_NAMES),
            sites: owned(BUILTIN_SITES),
            countries: owned(BUILTIN_COUNTRIES),
            leagues: owned(BUILTIN_LEAGUES),
            messages: owned(BUILTIN_MESSAGES),
        }
    }

    /// Builds a catalog from caller-supplied pools.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyPool`] naming the first pool that has
    /// no entries.
    pub fn new(
        names: Vec<String>,
        sites: Vec<String>,
        countries: Vec<String>,
        leagues: Vec<String>,
        messages: Vec<String>,
    ) -> Result<Self, CatalogError> {
        require_non_empty("names", &names)?;
        require_non_empty("sites", &sites)?;
        require_non_empty("countries", &countries)?;
        require_non_empty("leagues", &leagues)?;
        require_non_empty("messages", &messages)?;

        Ok(Self {
            names,
            sites,
            countries,
            leagues,
            messages,
        })
    }

    /// Parses a catalog from a JSON string.
    ///
    /// The expected shape is an object with five string arrays: `names`,
    /// `sites`, `countries`, `leagues`, and `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the JSON is malformed, a field is
    /// missing, or any pool is empty.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(|e| CatalogError::Parse {
            message: e.to_string(),
        })?;

        Self::new(raw.names, raw.sites, raw.countries, raw.leagues, raw.messages)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Returns the display name pool.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the site pool.
    #[must_use]
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Returns the country pool.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Returns the league pool.
    #[must_use]
    pub fn leagues(&self) -> &[String] {
        &self.leagues
    }

    /// Returns the message text pool.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|entry| (*entry).to_owned()).collect()
}

fn require_non_empty(pool: &'static str, entries: &[String]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::EmptyPool { pool });
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    names: Vec<String>,
    sites: Vec<String>,
    countries: Vec<String>,
    leagues: Vec<String>,
    messages: Vec<String>,
}
