use aws_config::default_provider::{credentials::DefaultCredentialsChain, region::DefaultRegionChain};
use aws_types::{credentials::ProvideCredentials, SdkConfig};

use crate::error::RuntimeError;

/// Load the AWS configuration for a named profile.
///
/// The credentials are resolved once up front, so a profile that cannot be
/// used fails here instead of on the first API call.
#[tracing::instrument]
pub async fn load_profile_config(profile: &str) -> Result<SdkConfig, RuntimeError> {
    tracing::debug!("loading aws configuration");

    let credentials = DefaultCredentialsChain::builder()
        .profile_name(profile)
        .build()
        .await;

    credentials
        .provide_credentials()
        .await
        .map_err(|source| RuntimeError::Credentials {
            profile: profile.into(),
            source,
        })?;

    let region = DefaultRegionChain::builder().profile_name(profile).build();

    let config = aws_config::from_env()
        .region(region)
        .credentials_provider(credentials)
        .load()
        .await;

    Ok(config)
}
