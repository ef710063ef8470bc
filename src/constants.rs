//! Service identifiers shared with the runtime Monolog bundle.
//!
//! These must match the runtime container byte for byte.

/// Tag carried by every processor service.
///
/// This is the bundle's namespaced tag, not a bare `processor`. Containers that
/// tag processors as `processor` must set
/// [`ProcessorPassConfig::tag`](crate::config::ProcessorPassConfig::tag),
/// otherwise the pass finds no processors and binds nothing.
pub const PROCESSOR_TAG: &str = "monolog.processor";

/// The root logger. Its presence means logging is configured at all.
pub const ROOT_LOGGER_ID: &str = "monolog.logger";

/// Template from which every channel logger is derived.
pub const LOGGER_PROTOTYPE_ID: &str = "monolog.logger_prototype";

pub const CHANNEL_LOGGER_PREFIX: &str = "monolog.logger.";
pub const HANDLER_PREFIX: &str = "monolog.handler.";

/// Channel name that addresses the root logger instead of `monolog.logger.app`.
pub const ROOT_CHANNEL: &str = "app";

pub const REGISTRATION_METHOD: &str = "pushProcessor";
