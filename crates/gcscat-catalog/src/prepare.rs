//! Credential preparation: moves the service account key into the secret
//! store and checks that it opens the bucket.

use gcscat_object::types::Error as ObjectError;

use crate::TRACING_TARGET_PREPARE;
use crate::config::{GcsConfig, GcsSecrets, MASKED_SECRET, PrepareContext};
use crate::connector::Connector;
use crate::error::{CatalogError, CatalogResult};

/// What happens to the stored credential when a configuration is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialTransition {
    /// A new key was entered: store it and mask the configuration.
    Rotate,
    /// The field was cleared while a key is stored: drop the key.
    Remove,
    /// Nothing changed.
    Keep,
}

impl CredentialTransition {
    /// Decides the transition from the observable state of a save.
    ///
    /// `provided` means the configuration holds a non-empty value other than
    /// the placeholder, `masked` that it holds the placeholder, and
    /// `secret_present` that the secret store already has a key. `provided`
    /// and `masked` are mutually exclusive; both false means the field is
    /// empty.
    pub fn decide(provided: bool, masked: bool, secret_present: bool) -> Self {
        match (provided, masked, secret_present) {
            (true, _, _) => Self::Rotate,
            (false, false, true) => Self::Remove,
            (false, true, _) | (false, false, false) => Self::Keep,
        }
    }

    /// Reads the state of `config` and `secrets`.
    pub fn of(config: &GcsConfig, secrets: &GcsSecrets) -> Self {
        let masked = config.is_masked();
        let provided = !config.service_account.is_empty() && !masked;
        Self::decide(provided, masked, secrets.service_account.is_some())
    }

    /// Applies the transition in place.
    pub fn apply(self, config: &mut GcsConfig, secrets: &mut GcsSecrets) {
        match self {
            Self::Rotate => {
                let key = std::mem::replace(&mut config.service_account, MASKED_SECRET.to_owned());
                secrets.service_account = Some(key);
            }
            Self::Remove => secrets.service_account = None,
            Self::Keep => {}
        }
    }
}

/// Stores the credential and validates access to the bucket.
///
/// Succeeds only when both a key and a bucket name are present after the
/// transition, the key parses, and one listing page can be read.
#[tracing::instrument(
    target = TRACING_TARGET_PREPARE,
    skip_all,
    fields(bucket = %context.catalog_config.bucket_name)
)]
pub async fn prepare<C: Connector>(
    connector: &C,
    mut context: PrepareContext,
) -> CatalogResult<PrepareContext> {
    let transition = CredentialTransition::of(&context.catalog_config, &context.secrets);
    transition.apply(&mut context.catalog_config, &mut context.secrets);

    tracing::debug!(
        target: TRACING_TARGET_PREPARE,
        transition = ?transition,
        "credential transition applied"
    );

    let bucket = context.catalog_config.bucket_name.as_str();
    let credentials = match context.secrets.credentials(bucket) {
        Some(credentials) if !bucket.is_empty() => credentials,
        _ => return Err(CatalogError::MissingConfiguration),
    };

    let check = async {
        credentials.parse_key()?;
        let client = connector.connect(credentials).await?;
        client.verify_reachable().await?;
        Ok::<_, ObjectError>(())
    };

    if let Err(error) = check.await {
        tracing::warn!(
            target: TRACING_TARGET_PREPARE,
            error = %error,
            "bucket validation failed"
        );
        return Err(CatalogError::invalid_credentials(error));
    }

    tracing::info!(target: TRACING_TARGET_PREPARE, "bucket access validated");
    Ok(context)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{MemoryConnector, service_account_json};

    fn context(service_account: &str, secret: Option<&str>) -> PrepareContext {
        PrepareContext {
            catalog_config: GcsConfig::new("bucket", service_account),
            capabilities: Vec::new(),
            secrets: GcsSecrets {
                service_account: secret.map(str::to_owned),
            },
        }
    }

    #[test]
    fn decide_covers_every_state() {
        use CredentialTransition::*;

        assert_eq!(CredentialTransition::decide(true, false, false), Rotate);
        assert_eq!(CredentialTransition::decide(true, false, true), Rotate);
        assert_eq!(CredentialTransition::decide(false, false, true), Remove);
        assert_eq!(CredentialTransition::decide(false, true, true), Keep);
        assert_eq!(CredentialTransition::decide(false, true, false), Keep);
        assert_eq!(CredentialTransition::decide(false, false, false), Keep);
    }

    #[tokio::test]
    async fn masked_config_is_unchanged() {
        let connector = MemoryConnector::new();
        let input = context(MASKED_SECRET, Some(&service_account_json()));

        let once = prepare(&connector, input.clone()).await.unwrap();
        assert_eq!(once, input);

        let twice = prepare(&connector, once).await.unwrap();
        assert_eq!(twice, input);
    }

    #[tokio::test]
    async fn new_key_is_moved_into_secrets() {
        let connector = MemoryConnector::new();
        let key = service_account_json();

        let output = prepare(&connector, context(&key, None)).await.unwrap();
        assert_eq!(output.catalog_config.service_account, MASKED_SECRET);
        assert_eq!(output.secrets.service_account.as_deref(), Some(key.as_str()));
        assert_eq!(connector.connections(), 1);
    }

    #[tokio::test]
    async fn new_key_replaces_stored_key() {
        let connector = MemoryConnector::new();
        let key = service_account_json();

        let output = prepare(&connector, context(&key, Some("previous")))
            .await
            .unwrap();
        assert_eq!(output.secrets.service_account.as_deref(), Some(key.as_str()));
    }

    #[tokio::test]
    async fn cleared_key_is_removed_then_rejected() {
        let connector = MemoryConnector::new();

        let err = prepare(&connector, context("", Some(&service_account_json())))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
        assert_eq!(
            err.to_string(),
            "Service account and bucketName is required for Google Cloud Storage"
        );
        assert_eq!(connector.connections(), 0);
    }

    #[tokio::test]
    async fn missing_bucket_name_is_rejected() {
        let connector = MemoryConnector::new();
        let mut input = context(&service_account_json(), None);
        input.catalog_config.bucket_name.clear();

        let err = prepare(&connector, input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
    }

    #[tokio::test]
    async fn malformed_key_is_rejected_without_connecting() {
        let connector = MemoryConnector::new();

        let err = prepare(&connector, context("{not json", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
        assert_eq!(
            err.to_string(),
            "Invalid bucketName or service account credentials for Google Cloud Storage"
        );
        assert!(err.source().is_some());
        assert_eq!(connector.connections(), 0);
    }

    #[tokio::test]
    async fn unreachable_bucket_is_rejected() {
        let connector = MemoryConnector::failing();

        let err = prepare(&connector, context(&service_account_json(), None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    }

    #[tokio::test]
    async fn capabilities_pass_through() {
        use crate::metadata::Capability;

        let connector = MemoryConnector::new();
        let mut input = context(MASKED_SECRET, Some(&service_account_json()));
        input.capabilities = vec![Capability::Import, Capability::Search];

        let output = prepare(&connector, input.clone()).await.unwrap();
        assert_eq!(output.capabilities, input.capabilities);
    }
}
