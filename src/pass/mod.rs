//! Compiler passes run over a populated container before it is frozen.

pub mod entry;
mod processors;

pub use entry::{ProcessorEntry, TargetSelector};
pub use processors::AddProcessorsPass;

use crate::container::ContainerModel;
use crate::error::PassError;

/// A single rewrite of the container model. Passes run once per build and
/// abort the build on the first error.
pub trait CompilerPass<C: ContainerModel> {
    fn name(&self) -> &'static str;

    fn process(&self, container: &mut C) -> Result<(), PassError>;
}
