//! In-memory container model.
//!
//! Keeps definitions in registration order so tagged-service discovery is
//! deterministic, and resolves aliases the way the runtime container does.

use std::collections::{HashMap, HashSet};

use super::{ContainerModel, Definition, TaggedService};
use crate::error::ResolutionError;

#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    /// Map of service id -> definition
    definitions: HashMap<String, Definition>,
    /// Service ids in registration order
    order: Vec<String>,
    /// Map of alias -> aliased id
    aliases: HashMap<String, String>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a definition. A replaced definition keeps its
    /// original position in registration order.
    pub fn set_definition(&mut self, id: impl Into<String>, definition: Definition) {
        let id = id.into();
        self.aliases.remove(&id);

        if self.definitions.insert(id.clone(), definition).is_some() {
            tracing::trace!(id = %id, "Replaced service definition");
        } else {
            self.order.push(id);
        }
    }

    /// Builder-style variant of [`set_definition`](Self::set_definition).
    pub fn register(mut self, id: impl Into<String>, definition: Definition) -> Self {
        self.set_definition(id, definition);
        self
    }

    /// Point `alias` at `target`. A definition registered under `alias` is dropped.
    pub fn set_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        let alias = alias.into();
        if self.definitions.remove(&alias).is_some() {
            self.order.retain(|id| id != &alias);
            tracing::trace!(id = %alias, "Replaced service definition with alias");
        }
        self.aliases.insert(alias, target.into());
    }

    pub fn has_alias(&self, id: &str) -> bool {
        self.aliases.contains_key(id)
    }

    /// Direct lookup without alias resolution.
    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.get(id)
    }

    /// Lookup that follows aliases.
    pub fn find_definition(&self, id: &str) -> Result<&Definition, ResolutionError> {
        let resolved = self.resolve_id(id)?;
        self.definitions
            .get(resolved)
            .ok_or_else(|| ResolutionError::NotFound { id: id.to_string() })
    }

    pub fn definition_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Follow the alias chain starting at `id` to a concrete service id.
    fn resolve_id<'a>(&'a self, id: &'a str) -> Result<&'a str, ResolutionError> {
        let mut current = id;
        let mut seen = HashSet::new();

        while let Some(target) = self.aliases.get(current) {
            if !seen.insert(current) {
                return Err(ResolutionError::CircularAlias { id: id.to_string() });
            }
            current = target.as_str();
        }

        Ok(current)
    }
}

impl ContainerModel for ContainerBuilder {
    type Definition = Definition;

    fn has_definition(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    fn definition_mut(&mut self, id: &str) -> Result<&mut Definition, ResolutionError> {
        self.definitions
            .get_mut(id)
            .ok_or_else(|| ResolutionError::NotFound { id: id.to_string() })
    }

    fn find_definition_mut(&mut self, id: &str) -> Result<&mut Definition, ResolutionError> {
        let resolved = self.resolve_id(id)?.to_string();
        self.definitions
            .get_mut(&resolved)
            .ok_or_else(|| ResolutionError::NotFound { id: id.to_string() })
    }

    fn find_tagged_service_ids(&self, tag: &str) -> Vec<TaggedService> {
        self.order
            .iter()
            .filter_map(|id| {
                let tags = self.definitions.get(id)?.tag_attributes(tag);
                (!tags.is_empty()).then(|| TaggedService {
                    id: id.clone(),
                    tags,
                })
            })
            .collect()
    }
}
