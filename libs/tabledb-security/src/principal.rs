use uuid::Uuid;

/// `Principal` identifies who is making a request.
///
/// Built by the authentication layer and handed to the ability resolver as-is.
/// An anonymous caller is represented by the nil subject id, so "no principal"
/// and "empty principal" collapse into the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Principal {
    /// Subject ID of the authenticated user. Nil for anonymous callers.
    subject_id: Uuid,
    /// Subject type classification (e.g., "user", "service").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject_type: Option<String>,
}

impl Principal {
    /// Create a new `Principal` builder
    #[must_use]
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::default()
    }

    /// Create an anonymous `Principal`
    #[must_use]
    pub fn anonymous() -> Self {
        PrincipalBuilder::default().build()
    }

    /// Shorthand for an authenticated user principal.
    #[must_use]
    pub fn user(subject_id: Uuid) -> Self {
        Self::builder()
            .subject_id(subject_id)
            .subject_type("user")
            .build()
    }

    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[must_use]
    pub fn subject_type(&self) -> Option<&str> {
        self.subject_type.as_deref()
    }

    /// Whether this principal carries no identity.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.subject_id.is_nil()
    }
}

#[derive(Default)]
pub struct PrincipalBuilder {
    subject_id: Option<Uuid>,
    subject_type: Option<String>,
}

impl PrincipalBuilder {
    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn subject_type(mut self, subject_type: &str) -> Self {
        self.subject_type = Some(subject_type.to_owned());
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            subject_id: self.subject_id.unwrap_or_default(),
            subject_type: self.subject_type,
        }
    }
}
