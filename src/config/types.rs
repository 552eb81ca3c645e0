// Configuration type definitions

use serde::Deserialize;

use crate::navigation::MatchMode;
use crate::navigation::shell::Mark;
use crate::suggestions::{Suggestion, SuggestionCatalog};

/// One `[[suggestions]]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionEntry {
    pub text: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<SuggestionEntry> for Suggestion {
    fn from(entry: SuggestionEntry) -> Self {
        match entry.value {
            Some(value) => Suggestion::new(entry.text, value),
            None => Suggestion::from_text(entry.text),
        }
    }
}

/// Navigation configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_root_match")]
    pub root_match: MatchMode,
    #[serde(default = "default_nested_match")]
    pub nested_match: MatchMode,
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

fn default_root_match() -> MatchMode {
    MatchMode::Exact
}

fn default_nested_match() -> MatchMode {
    MatchMode::Prefix
}

fn default_start_route() -> String {
    "/".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            root_match: default_root_match(),
            nested_match: default_nested_match(),
            start_route: default_start_route(),
        }
    }
}

/// Header marks configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_brand_mark")]
    pub brand_mark: String,
    #[serde(default = "default_brand_alt")]
    pub brand_alt: String,
    #[serde(default = "default_partner_mark")]
    pub partner_mark: String,
    #[serde(default = "default_partner_alt")]
    pub partner_alt: String,
}

fn default_brand_mark() -> String {
    "Telkomsigma".to_string()
}

fn default_brand_alt() -> String {
    "Telkomsigma Logo".to_string()
}

fn default_partner_mark() -> String {
    "Azure OpenAI".to_string()
}

fn default_partner_alt() -> String {
    "Azure Logo".to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        BrandingConfig {
            brand_mark: default_brand_mark(),
            brand_alt: default_brand_alt(),
            partner_mark: default_partner_mark(),
            partner_alt: default_partner_alt(),
        }
    }
}

impl BrandingConfig {
    pub fn brand(&self) -> Mark {
        Mark::new(&self.brand_mark, &self.brand_alt)
    }

    pub fn partner(&self) -> Mark {
        Mark::new(&self.partner_mark, &self.partner_alt)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    /// `None` keeps the built-in catalog; an empty list means no suggestions
    #[serde(default)]
    pub suggestions: Option<Vec<SuggestionEntry>>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

impl Config {
    pub fn catalog(&self) -> SuggestionCatalog {
        match &self.suggestions {
            Some(entries) => {
                SuggestionCatalog::new(entries.iter().cloned().map(Suggestion::from).collect())
            }
            None => SuggestionCatalog::builtin(),
        }
    }
}
