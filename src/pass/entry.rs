//! Processor tag occurrences and the target each one binds to.

use serde_json::Value;

use crate::container::{Argument, TagAttributes};
use crate::error::ConfigurationError;

/// One occurrence of the processor tag on a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorEntry {
    pub id: String,
    pub priority: i64,
    pub channel: Option<String>,
    pub handler: Option<String>,
    pub method: Option<String>,
}

/// Where a processor gets registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector<'a> {
    Handler(&'a str),
    Channel(&'a str),
    /// Unscoped processors go on the prototype shared by every channel logger.
    Prototype,
}

impl ProcessorEntry {
    /// Read a tag's attribute map. A missing priority is 0; `""` and `"0"`
    /// count as absent, like PHP's `empty()`.
    pub fn from_tag(
        id: &str,
        tag: &str,
        attributes: &TagAttributes,
    ) -> Result<Self, ConfigurationError> {
        let invalid = |attribute: &str, reason: String| ConfigurationError::InvalidAttribute {
            id: id.to_string(),
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            reason,
        };

        let priority = match attributes.get("priority") {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| invalid("priority", format!("{n} is not an integer")))?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid("priority", format!("'{s}' is not an integer")))?,
            Some(other) => return Err(invalid("priority", format!("unexpected value {other}"))),
        };

        let text = |attribute: &str| -> Result<Option<String>, ConfigurationError> {
            match attributes.get(attribute) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) if s.is_empty() || s == "0" => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(invalid(
                    attribute,
                    format!("expected a string, got {other}"),
                )),
            }
        };

        Ok(Self {
            id: id.to_string(),
            priority,
            channel: text("channel")?,
            handler: text("handler")?,
            method: text("method")?,
        })
    }

    pub fn target(&self, tag: &str) -> Result<TargetSelector<'_>, ConfigurationError> {
        match (self.handler.as_deref(), self.channel.as_deref()) {
            (Some(_), Some(_)) => Err(ConfigurationError::ConflictingTargets {
                id: self.id.clone(),
                tag: tag.to_string(),
            }),
            (Some(handler), None) => Ok(TargetSelector::Handler(handler)),
            (None, Some(channel)) => Ok(TargetSelector::Channel(channel)),
            (None, None) => Ok(TargetSelector::Prototype),
        }
    }

    /// Registration argument: a `(service, method)` pair when a method is
    /// named, otherwise a bare reference invoked through `__invoke`.
    pub fn argument(&self) -> Argument {
        match &self.method {
            Some(method) => Argument::callable(self.id.as_str(), method.as_str()),
            None => Argument::reference(self.id.as_str()),
        }
    }
}
