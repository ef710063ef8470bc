use thiserror::Error;

/// Invalid processor tag configuration. Always an authoring mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "you cannot specify both the \"handler\" and \"channel\" attributes for the \"{tag}\" tag on service \"{id}\""
    )]
    ConflictingTargets { id: String, tag: String },

    #[error("invalid \"{attribute}\" attribute for the \"{tag}\" tag on service \"{id}\": {reason}")]
    InvalidAttribute {
        id: String,
        tag: String,
        attribute: String,
        reason: String,
    },
}

/// A named definition could not be resolved in the container model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("you have requested a non-existent service \"{id}\"")]
    NotFound { id: String },

    #[error("circular alias detected while resolving \"{id}\"")]
    CircularAlias { id: String },
}

/// Top-level error returned by compiler passes. Every variant is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

impl PassError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, PassError::Configuration(_))
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, PassError::Resolution(_))
    }
}
