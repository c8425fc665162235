#![deny(missing_docs)]
//! <fullname>Lambda inventory</fullname>
//!
//! Command line tool that lists the Lambda functions in an account,
//! finds when each of them was last invoked by looking at their
//! CloudWatch Logs streams, and writes everything to a CSV report.
use aws_sdk_cloudwatchlogs::Client as CwClient;
use aws_sdk_lambda::Client as LambdaClient;

mod cloudwatch_logs;
pub use cloudwatch_logs::{log_group_name, LastEventSource};

mod error;
pub use error::RuntimeError;

mod function_record;
pub use function_record::{FunctionRecord, COLUMN_TITLES, NOT_FOUND};

mod lambda;
pub use lambda::{list_all, FunctionPage, FunctionPages};

mod last_invoked;
pub use last_invoked::{enrich_all, format_last_invoked, lookup_last_invoked};

/// `profile` includes helpers to load the AWS configuration
pub mod profile;

mod report;
pub use report::{write_records, write_report};

mod settings;
pub use settings::Settings;

#[cfg(test)]
mod test_util;

/// List every function and fill in its last invoke time.
pub async fn collect_records<P, S>(
    pages: &P,
    source: &S,
    max_concurrency: usize,
) -> Result<Vec<FunctionRecord>, RuntimeError>
where
    P: FunctionPages,
    S: LastEventSource,
{
    tracing::info!("getting function details for all lambda functions");
    let mut records = list_all(pages).await?;
    tracing::debug!(length = records.len(), "got all lambda function details");

    tracing::info!("getting last invoke time for all lambda functions");
    enrich_all(source, &mut records, max_concurrency).await;

    Ok(records)
}

/// `run` is the command entry point: it loads the profile,
/// collects the functions and writes the report.
#[tracing::instrument(skip(settings))]
pub async fn run(settings: &Settings) -> Result<(), RuntimeError> {
    let config = profile::load_profile_config(&settings.aws_profile).await?;
    let lambda_client = LambdaClient::new(&config);
    let cw_client = CwClient::new(&config);

    let records = collect_records(&lambda_client, &cw_client, settings.max_concurrency).await?;

    tracing::info!("writing the output to {}", settings.out_name.display());
    let written = write_report(&records, &settings.out_name)?;

    tracing::info!(
        file_name = %settings.out_name.display(),
        functions = records.len(),
        rows = written,
        "all the function details have been written to the output"
    );

    Ok(())
}
