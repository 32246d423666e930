use async_trait::async_trait;

use crate::error::Result;

/// Metadata identifying a secret, without its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDescriptor {
    /// The secret's name, used as the fetch identifier and the CSV key.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Provider-assigned resource identifier, if the listing reports one.
    pub arn: Option<String>,
}

/// A source of secrets that can be listed and read.
#[async_trait]
pub trait SecretStore {
    /// List the descriptors of every secret visible to this store.
    async fn list_secrets(&self) -> Result<Vec<SecretDescriptor>>;

    /// Fetch the current (live) value of a secret by name.
    async fn get_current_value(&self, name: &str) -> Result<String>;
}
