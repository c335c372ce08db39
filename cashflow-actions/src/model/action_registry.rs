//! ``cashflow-actions/src/model/action_registry.rs``
//! ============================================================================
//! # `ActionRegistry`: Immutable Table of Action Identifiers
//!
//! Built once per process from [`ActionType::ALL`]. Forward lookups go through
//! an [`EnumMap`] and never fail; reverse lookups (token to identifier) go
//! through an `FxHashMap` and reject anything that is not an exact match.

use enum_map::EnumMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::{
    controller::actions::{ActionType, Category, Phase},
    error::AppError,
};

static GLOBAL: Lazy<ActionRegistry> = Lazy::new(ActionRegistry::new);

/// One row of the exported contract table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub category: Category,
    pub phase: Phase,
}

impl From<ActionType> for RegistryEntry {
    fn from(kind: ActionType) -> Self {
        Self {
            name: kind.as_str(),
            category: kind.category(),
            phase: kind.phase(),
        }
    }
}

impl fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.category, self.phase)
    }
}

#[derive(Debug)]
pub struct ActionRegistry {
    values: EnumMap<ActionType, &'static str>,
    index: FxHashMap<&'static str, ActionType>,
    by_category: EnumMap<Category, Vec<ActionType>>,
    /// `(kind, owner)` pairs where `kind` reused a token `owner` already held
    collisions: Vec<(ActionType, ActionType)>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::from_entries(ActionType::ALL.map(|kind| (kind, kind.as_str())))
    }

    /// Process-wide registry, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ActionType, &'static str)>,
    {
        let mut values: EnumMap<ActionType, &'static str> = EnumMap::default();
        let mut index: FxHashMap<&'static str, ActionType> = FxHashMap::default();
        let mut by_category: EnumMap<Category, Vec<ActionType>> = EnumMap::default();
        let mut collisions: Vec<(ActionType, ActionType)> = Vec::new();

        for (kind, value) in entries {
            values[kind] = value;
            let owner = *index.entry(value).or_insert(kind);
            if owner != kind {
                collisions.push((kind, owner));
            }
            by_category[kind.category()].push(kind);
        }

        debug!(
            identifiers = index.len(),
            categories = by_category.values().filter(|kinds| !kinds.is_empty()).count(),
            "Action registry built"
        );

        Self {
            values,
            index,
            by_category,
            collisions,
        }
    }

    /// Token for `kind`. Same `&'static str` on every call.
    #[must_use]
    pub fn value(&self, kind: ActionType) -> &'static str {
        self.values[kind]
    }

    /// Resolve a token received from elsewhere. Matching is exact.
    pub fn resolve(&self, value: &str) -> Result<ActionType, AppError> {
        self.index.get(value).copied().ok_or_else(|| {
            warn!(token = value, "Rejected unknown action type");
            AppError::UnknownActionType(value.to_owned())
        })
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// Identifiers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ActionType> + '_ {
        self.values.iter().map(|(kind, _)| kind)
    }

    #[must_use]
    pub fn in_category(&self, category: Category) -> &[ActionType] {
        &self.by_category[category]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-check that no two identifiers share a token, then that every token
    /// equals its identifier's name.
    pub fn verify(&self) -> Result<(), AppError> {
        if let Some(&(kind, owner)) = self.collisions.first() {
            return Err(AppError::registry_invariant(
                kind.as_str(),
                format!("token {:?} already taken by {owner:?}", self.values[kind]),
            ));
        }

        for (kind, &value) in &self.values {
            let name = kind.as_str();

            if value != name {
                return Err(AppError::registry_invariant(
                    name,
                    format!("token {value:?} differs from identifier name"),
                ));
            }

            // The serde form is what actually goes over the wire.
            let wire = serde_json::to_value(kind)?;
            if wire.as_str() != Some(value) {
                return Err(AppError::registry_invariant(
                    name,
                    format!("serialized as {wire} instead of {value:?}"),
                ));
            }
        }

        if self.index.len() != self.len() {
            return Err(AppError::registry_invariant(
                "registry",
                format!("{} distinct tokens for {} identifiers", self.index.len(), self.len()),
            ));
        }

        let grouped: usize = self.by_category.values().map(Vec::len).sum();
        if grouped != self.len() {
            return Err(AppError::registry_invariant(
                "registry",
                format!("{grouped} grouped identifiers for {} declared", self.len()),
            ));
        }

        debug!(identifiers = self.len(), "Action registry verified");
        Ok(())
    }

    /// Contract table in declaration order, ready to export.
    #[must_use]
    pub fn to_table(&self) -> Vec<RegistryEntry> {
        self.iter().map(RegistryEntry::from).collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
