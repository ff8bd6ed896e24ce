use crate::core::models::color::Color;
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// Ordered mapping from element symbol to display color.
///
/// Entries keep their first-seen order and each symbol appears at most once.
/// Lookups are linear, which is adequate for the handful of distinct elements
/// found in a molecule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorRegistry {
    entries: Vec<(String, Color)>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|(s, _)| s == symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, color)| *color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(s, c)| (s.as_str(), *c))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    /// Adds `symbol` with `color` unless the symbol is already registered.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert(&mut self, symbol: &str, color: Color) -> bool {
        if self.contains(symbol) {
            return false;
        }
        self.entries.push((symbol.to_string(), color));
        true
    }

    /// Returns the color registered for `symbol`, drawing and registering a new
    /// random one on first sight.
    ///
    /// Repeated calls with the same symbol return the same color and leave the
    /// registry unchanged.
    pub fn assign_or_reuse<R: Rng + ?Sized>(&mut self, symbol: &str, rng: &mut R) -> Color {
        if let Some(color) = self.get(symbol) {
            return color;
        }
        let color = Color::random(rng);
        trace!("Assigned new color {} to element '{}'.", color, symbol);
        self.entries.push((symbol.to_string(), color));
        color
    }

    /// Copies entries from other registries into this one.
    ///
    /// Candidates are visited in order. An entry is copied only when its symbol
    /// is in that candidate's allowed set and is not yet present here, so the
    /// first candidate offering a symbol wins and existing entries are never
    /// overwritten. Source registries are not modified.
    ///
    /// # Return
    ///
    /// Returns the number of entries copied.
    pub fn import_from<'a, I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = (&'a ColorRegistry, &'a HashSet<String>)>,
    {
        let mut imported = 0;
        for (registry, allowed) in candidates {
            for (symbol, color) in registry.iter() {
                if allowed.contains(symbol) && self.insert(symbol, color) {
                    imported += 1;
                }
            }
        }
        imported
    }
}
