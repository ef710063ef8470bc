use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DefinitionModel;

/// Attribute mapping of a single tag occurrence.
pub type TagAttributes = BTreeMap<String, serde_json::Value>;

/// Argument passed to a method call in a definition's recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Argument {
    /// Reference to another service, invoked through its default entry point.
    Reference { id: String },
    /// A `(service, method)` pair.
    Callable { service: String, method: String },
}

impl Argument {
    pub fn reference(id: impl Into<String>) -> Self {
        Argument::Reference { id: id.into() }
    }

    pub fn callable(service: impl Into<String>, method: impl Into<String>) -> Self {
        Argument::Callable {
            service: service.into(),
            method: method.into(),
        }
    }

    /// The service this argument points at.
    pub fn service_id(&self) -> &str {
        match self {
            Argument::Reference { id } => id,
            Argument::Callable { service, .. } => service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub attributes: TagAttributes,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: TagAttributes::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Build-time description of a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub class: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub method_calls: Vec<MethodCall>,
}

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn method_calls(&self) -> &[MethodCall] {
        &self.method_calls
    }

    pub fn has_method_call(&self, method: &str) -> bool {
        self.method_calls.iter().any(|call| call.method == method)
    }

    /// Attribute maps of every occurrence of `name`, in declaration order.
    pub fn tag_attributes(&self, name: &str) -> Vec<TagAttributes> {
        self.tags
            .iter()
            .filter(|tag| tag.name == name)
            .map(|tag| tag.attributes.clone())
            .collect()
    }
}

impl DefinitionModel for Definition {
    fn add_method_call(&mut self, method: &str, arguments: Vec<Argument>) {
        self.method_calls.push(MethodCall {
            method: method.to_string(),
            arguments,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_attributes_filters_by_name() {
        let definition = Definition::new()
            .with_tag(Tag::new("monolog.processor").with_attribute("priority", 5))
            .with_tag(Tag::new("kernel.event_listener"))
            .with_tag(Tag::new("monolog.processor").with_attribute("channel", "security"));

        let tags = definition.tag_attributes("monolog.processor");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].get("priority"), Some(&json!(5)));
        assert_eq!(tags[1].get("channel"), Some(&json!("security")));
    }

    #[test]
    fn test_method_calls_keep_insertion_order() {
        let mut definition = Definition::new().with_class("Monolog\\Logger");
        definition.add_method_call("pushHandler", vec![Argument::reference("monolog.handler.main")]);
        definition.add_method_call("pushProcessor", vec![Argument::reference("app.processor")]);

        let methods: Vec<&str> = definition
            .method_calls()
            .iter()
            .map(|call| call.method.as_str())
            .collect();
        assert_eq!(methods, vec!["pushHandler", "pushProcessor"]);
        assert!(definition.has_method_call("pushProcessor"));
        assert!(!definition.has_method_call("setTimezone"));
    }

    #[test]
    fn test_argument_serializes_with_type_tag() {
        let arg = Argument::callable("app.processor.web", "enrich");
        let value = serde_json::to_value(&arg).unwrap();
        assert_eq!(
            value,
            json!({"type": "callable", "service": "app.processor.web", "method": "enrich"})
        );
        assert_eq!(arg.service_id(), "app.processor.web");
    }
}
