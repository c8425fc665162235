use aws_sdk_cloudwatchlogs::{model::OrderBy, Client, Error};
use std::future::Future;

use crate::error::RuntimeError;

/// Prefix of the log groups Lambda writes function logs to.
pub const LAMBDA_LOG_GROUP_PREFIX: &str = "/aws/lambda/";

/// Name of the log group that belongs to a function.
pub fn log_group_name(function_name: &str) -> String {
    format!("{LAMBDA_LOG_GROUP_PREFIX}{function_name}")
}

/// Source of the most recent event time of a log group.
pub trait LastEventSource {
    /// Milliseconds since epoch of the most recent event in `log_group`.
    /// Returns `None` when the group has no streams or the stream has no events.
    fn last_event_timestamp(
        &self,
        log_group: &str,
    ) -> impl Future<Output = Result<Option<i64>, RuntimeError>> + Send;
}

impl LastEventSource for Client {
    /// Look at the log stream with the most recent event.
    #[tracing::instrument(skip(self))]
    async fn last_event_timestamp(&self, log_group: &str) -> Result<Option<i64>, RuntimeError> {
        let output = self
            .describe_log_streams()
            .log_group_name(log_group)
            .order_by(OrderBy::LastEventTime)
            .descending(true)
            .limit(1)
            .send()
            .await
            .map_err(Error::from)?;

        Ok(output
            .log_streams
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|stream| stream.last_event_timestamp))
    }
}
