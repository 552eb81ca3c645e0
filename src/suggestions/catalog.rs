use std::ops::Index;

/// A preset prompt: what the user sees, and what gets submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    display_text: String,
    value: String,
}

impl Suggestion {
    pub fn new(display_text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            value: value.into(),
        }
    }

    /// Suggestion whose value is its display text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            display_text: text,
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Built-in prompts, in display order
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Tampilkan informasi PT. Pertamina",
    "Tampilkan alamat PT. Pertamina",
    "Tampilkan visi dan misi PT. Pertamina",
];

/// Immutable, ordered list of suggestions
///
/// Built once at start-up and shared read-only with every list that shows
/// it. Order is the order suggestions appear on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCatalog {
    entries: Vec<Suggestion>,
}

impl SuggestionCatalog {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_SUGGESTIONS
                .iter()
                .map(|text| Suggestion::from_text(*text))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.entries.iter()
    }
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Index<usize> for SuggestionCatalog {
    type Output = Suggestion;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a SuggestionCatalog {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
