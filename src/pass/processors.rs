//! Registers tagged processors on Monolog loggers and handlers.

use crate::config::{ConfigError, ProcessorPassConfig};
use crate::container::{ContainerModel, DefinitionModel};
use crate::error::PassError;

use super::CompilerPass;
use super::entry::{ProcessorEntry, TargetSelector};

/// Binds every service tagged `monolog.processor` to the logger, channel
/// logger or handler named by its tag.
///
/// Processors are registered in ascending priority. Monolog calls the most
/// recently pushed processor first, so higher priorities run earlier.
#[derive(Debug, Clone, Default)]
pub struct AddProcessorsPass {
    config: ProcessorPassConfig,
}

impl AddProcessorsPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProcessorPassConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessorPassConfig {
        &self.config
    }

    /// Every occurrence of the processor tag, sorted by ascending priority.
    /// Equal priorities keep discovery order.
    pub fn collect_entries<C: ContainerModel>(
        &self,
        container: &C,
    ) -> Result<Vec<ProcessorEntry>, PassError> {
        let mut entries = Vec::new();
        for service in container.find_tagged_service_ids(&self.config.tag) {
            for attributes in &service.tags {
                entries.push(ProcessorEntry::from_tag(
                    &service.id,
                    &self.config.tag,
                    attributes,
                )?);
            }
        }

        // sort_by_key is stable
        entries.sort_by_key(|entry| entry.priority);
        Ok(entries)
    }

    fn target_id(&self, selector: TargetSelector<'_>) -> String {
        match selector {
            TargetSelector::Handler(handler) => self.config.handler_id(handler),
            TargetSelector::Channel(channel) => self.config.channel_logger_id(channel),
            TargetSelector::Prototype => self.config.logger_prototype_id.clone(),
        }
    }

    pub fn process<C: ContainerModel>(&self, container: &mut C) -> Result<(), PassError> {
        if !container.has_definition(&self.config.root_logger_id) {
            tracing::debug!(
                root_logger = %self.config.root_logger_id,
                "Root logger not defined, skipping processor registration"
            );
            return Ok(());
        }

        let entries = self.collect_entries(&*container)?;

        for entry in &entries {
            let selector = entry.target(&self.config.tag)?;
            let target = self.target_id(selector);
            // Handlers may be aliased; loggers are looked up by their exact id.
            let definition = match selector {
                TargetSelector::Handler(_) => container.find_definition_mut(&target)?,
                TargetSelector::Channel(_) | TargetSelector::Prototype => {
                    container.definition_mut(&target)?
                }
            };
            definition.add_method_call(&self.config.registration_method, vec![entry.argument()]);

            tracing::debug!(
                processor = %entry.id,
                target = %target,
                priority = entry.priority,
                method = entry.method.as_deref().unwrap_or("__invoke"),
                "Registered processor"
            );
        }

        tracing::info!(count = entries.len(), "Processors registered");
        Ok(())
    }
}

impl<C: ContainerModel> CompilerPass<C> for AddProcessorsPass {
    fn name(&self) -> &'static str {
        "add_processors"
    }

    fn process(&self, container: &mut C) -> Result<(), PassError> {
        AddProcessorsPass::process(self, container)
    }
}
