use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("App not found: {app_id}")]
    AppNotFound { app_id: Uuid },

    #[error("App version not found: {version_id}")]
    VersionNotFound { version_id: Uuid },

    #[error("Slug '{slug}' is already taken")]
    SlugConflict { slug: String },

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
