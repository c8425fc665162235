use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Different errors that the application can raise
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned when the credentials for the selected profile cannot be resolved
    #[error("failed to resolve credentials for profile {profile}")]
    Credentials {
        /// Name of the profile that was requested
        profile: String,
        /// Error returned by the credentials chain
        #[source]
        source: aws_types::credentials::CredentialsError,
    },
    /// Error returned by the Lambda API
    #[error("unexpected lambda error")]
    Lambda(#[from] aws_sdk_lambda::Error),
    /// Error returned by the CloudWatch Logs API
    #[error("unexpected cloudwatch logs error")]
    CloudWatchLogs(#[from] aws_sdk_cloudwatchlogs::Error),
    /// Error returned if the report file cannot be created
    #[error("unable to create report file {}", path.display())]
    ReportFile {
        /// Path of the report file
        path: PathBuf,
        /// Error returned by the CSV writer
        #[source]
        source: csv::Error,
    },
}
