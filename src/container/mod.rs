//! Container model seen by compiler passes.
//!
//! Passes only depend on [`ContainerModel`] and [`DefinitionModel`].
//! [`ContainerBuilder`] is the in-memory implementation used by the build
//! pipeline and by tests.

mod builder;
mod definition;

pub use builder::ContainerBuilder;
pub use definition::{Argument, Definition, MethodCall, Tag, TagAttributes};

use crate::error::ResolutionError;

/// A service id together with the attributes of every occurrence of one tag on it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedService {
    pub id: String,
    /// One attribute map per tag occurrence, in declaration order.
    pub tags: Vec<TagAttributes>,
}

/// Mutable access to service definitions during the build phase.
pub trait ContainerModel {
    type Definition: DefinitionModel;

    fn has_definition(&self, id: &str) -> bool;

    /// The definition registered under exactly `id`, for mutation.
    fn definition_mut(&mut self, id: &str) -> Result<&mut Self::Definition, ResolutionError>;

    /// Like [`definition_mut`](Self::definition_mut), but `id` may be an alias.
    /// Models without aliases can rely on the default.
    fn find_definition_mut(
        &mut self,
        id: &str,
    ) -> Result<&mut Self::Definition, ResolutionError> {
        self.definition_mut(id)
    }

    /// Every service carrying `tag`, in registration order.
    fn find_tagged_service_ids(&self, tag: &str) -> Vec<TaggedService>;
}

/// A buildable service whose construction recipe can be extended.
pub trait DefinitionModel {
    /// Append a call to the recipe. Calls run in the order they were added.
    fn add_method_call(&mut self, method: &str, arguments: Vec<Argument>);
}
