//! Alias index - case-insensitive lookup from alias, name or symbol to unit

use std::collections::BTreeMap;
use unitext_core::{Error, Result};
use crate::{Unit, UnitSystem};
use crate::suggest::closest;

/// Immutable lookup table built once from a set of unit systems
#[derive(Debug, Clone)]
pub struct UnitIndex {
    units: Vec<Unit>,
    /// lowercase key -> position in `units`; sorted so suggestions are deterministic
    aliases: BTreeMap<String, usize>,
}

impl UnitIndex {
    /// Build the index. Systems and units are visited in order and the last
    /// write for a key wins.
    pub fn new(systems: Vec<UnitSystem>) -> Self {
        let mut units = Vec::new();
        let mut aliases = BTreeMap::new();

        for system in systems {
            for unit in system.units {
                let pos = units.len();
                for alias in &unit.aliases {
                    aliases.insert(alias.to_lowercase(), pos);
                }
                aliases.insert(unit.name.to_lowercase(), pos);
                aliases.insert(unit.symbol.to_lowercase(), pos);
                units.push(unit);
            }
        }

        UnitIndex { units, aliases }
    }

    /// Index over the full seed catalog
    pub fn standard() -> Self {
        Self::new(crate::catalog())
    }

    /// Look up a unit by alias, name or symbol, ignoring case
    pub fn get(&self, token: &str) -> Option<&Unit> {
        self.aliases
            .get(&token.to_lowercase())
            .map(|&pos| &self.units[pos])
    }

    /// Resolve a token, failing with a suggestion-bearing error on a miss
    pub fn resolve(&self, token: &str) -> Result<&Unit> {
        self.get(token)
            .ok_or_else(|| Error::unknown_unit(token, self.suggest(token)))
    }

    /// Closest indexed alias to an unknown token, if close enough
    pub fn suggest(&self, token: &str) -> Option<String> {
        let token = token.to_lowercase();
        closest(&token, self.aliases.keys().map(String::as_str)).map(str::to_string)
    }

    /// Every unit in the index, in catalog order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Number of indexed keys
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for UnitIndex {
    fn default() -> Self {
        Self::standard()
    }
}
