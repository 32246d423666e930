use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::config::{Credentials, Region};
use tracing::warn;

use crate::error::SmexError;
use crate::secrets::store::{SecretDescriptor, SecretStore};

/// Version stage marking the live value of a secret.
const CURRENT_VERSION_STAGE: &str = "AWSCURRENT";

/// Secrets Manager backed store, scoped to one region and one identity.
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from a static access-key/secret-key pair.
    ///
    /// No profile, environment, or role fallback: the given key pair is the
    /// only identity the client will ever present.
    pub async fn connect(region: &str, access_key: &str, secret_key: &str) -> Self {
        let credentials = Credentials::new(access_key, secret_key, None, None, "smex-static");
        let shared_config = aws_config::from_env()
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .load()
            .await;
        Self::new(Client::new(&shared_config))
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    async fn list_secrets(&self) -> Result<Vec<SecretDescriptor>, SmexError> {
        let resp = self
            .client
            .list_secrets()
            .send()
            .await
            .map_err(SmexError::aws)?;

        // Single unpaginated call. Accounts holding more secrets than one
        // page returns are truncated here.
        if resp.next_token().is_some() {
            warn!("listing truncated: secrets beyond the first page will not be exported");
        }

        let mut secrets = Vec::new();
        for entry in resp.secret_list() {
            if let Some(name) = entry.name() {
                secrets.push(SecretDescriptor {
                    name: name.to_string(),
                    description: entry.description().map(str::to_string),
                    arn: entry.arn().map(str::to_string),
                });
            }
        }

        Ok(secrets)
    }

    async fn get_current_value(&self, name: &str) -> Result<String, SmexError> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(name)
            .version_stage(CURRENT_VERSION_STAGE)
            .send()
            .await
            .map_err(SmexError::aws)?;
        let secret_value = resp.secret_string().ok_or(
            "Secret is stored as binary, not a string. Binary secrets are not supported.",
        )?;
        Ok(secret_value.to_string())
    }
}
