//! Options for a client-credentials token request

/// Parameters for a client-credentials exchange
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientCredentialsOptions {
    /// Scopes to request; Battle.net grants none by default for this grant
    pub scopes: Vec<String>,
    /// Additional form parameters sent to the token endpoint
    pub extra: Vec<(String, String)>,
}

impl ClientCredentialsOptions {
    pub fn with_scopes<S: Into<String>>(scopes: impl IntoIterator<Item = S>) -> Self {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
            extra: Vec::new(),
        }
    }
}
