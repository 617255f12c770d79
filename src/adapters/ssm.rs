//! AWS Systems Manager Parameter Store adapter.
//!
//! Wraps `aws-sdk-ssm`'s `GetParametersByPath`. Credentials, region
//! resolution and per-request retries are left to the SDK.

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameters_by_path::GetParametersByPathError;
use aws_sdk_ssm::Client;
use tracing::debug;

use crate::domain::models::StoreConfig;
use crate::domain::ports::{Parameter, ParameterPage, ParameterStore, StoreError};

/// Parameter store adapter backed by SSM.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
    with_decryption: bool,
    recursive: bool,
    page_size: Option<i32>,
}

impl SsmParameterStore {
    /// Wrap an already configured SDK client.
    pub fn new(client: Client, config: &StoreConfig) -> Self {
        Self {
            client,
            with_decryption: config.with_decryption,
            recursive: config.recursive,
            page_size: config.page_size,
        }
    }

    /// Build a client from the SDK's default chain plus config overrides.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts));

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        debug!(
            region = ?sdk_config.region(),
            recursive = config.recursive,
            "ssm client configured"
        );

        Self::new(Client::new(&sdk_config), config)
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn list_by_path(
        &self,
        path: &str,
        cursor: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        let output = self
            .client
            .get_parameters_by_path()
            .path(path)
            .recursive(self.recursive)
            .with_decryption(self.with_decryption)
            .set_max_results(self.page_size)
            .set_next_token(cursor.map(str::to_string))
            .send()
            .await
            .map_err(map_sdk_error)?;

        let parameters = output
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some(Parameter::new(name, value)),
                _ => None,
            })
            .collect();

        Ok(ParameterPage {
            parameters,
            next_cursor: output.next_token().map(str::to_string),
        })
    }
}

fn map_sdk_error<R>(err: SdkError<GetParametersByPathError, R>) -> StoreError
where
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    let transport = matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    );
    let invalid_cursor = matches!(
        err.as_service_error(),
        Some(GetParametersByPathError::InvalidNextToken(_))
    );
    classify(err.code(), transport, invalid_cursor, message)
}

/// Pick a [`StoreError`] variant from an AWS error code and failure kind.
fn classify(
    code: Option<&str>,
    transport: bool,
    invalid_cursor: bool,
    message: String,
) -> StoreError {
    match code {
        Some("AccessDeniedException" | "UnrecognizedClientException" | "ExpiredTokenException") => {
            StoreError::AccessDenied(message)
        }
        Some("ThrottlingException") => StoreError::Throttled(message),
        _ if invalid_cursor => StoreError::InvalidCursor(message),
        _ if transport => StoreError::Transport(message),
        _ => StoreError::Service(message),
    }
}
