use chrono::{Local, TimeZone};
use futures::stream::{self, StreamExt};

use crate::{
    cloudwatch_logs::{log_group_name, LastEventSource},
    function_record::{FunctionRecord, NOT_FOUND},
};

/// Format of the last invoke time, local time with an explicit offset.
const LAST_INVOKED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Render an event timestamp in milliseconds as a local time with seconds precision.
pub fn format_last_invoked(timestamp_millis: i64) -> Option<String> {
    let seconds = timestamp_millis.div_euclid(1000);
    Local
        .timestamp_opt(seconds, 0)
        .single()
        .map(|t| t.format(LAST_INVOKED_FORMAT).to_string())
}

/// Find the last invoke time of a function.
/// Any lookup failure is logged and reported as [`NOT_FOUND`].
pub async fn lookup_last_invoked<S: LastEventSource>(source: &S, function_name: &str) -> String {
    let log_group = log_group_name(function_name);

    let timestamp = match source.last_event_timestamp(&log_group).await {
        Ok(timestamp) => timestamp,
        Err(err) => {
            tracing::debug!(error = ?err, %log_group, "error when describing log streams");
            None
        }
    };

    match timestamp.and_then(format_last_invoked) {
        Some(last_invoked) => {
            tracing::debug!(function_name, %last_invoked, "last invoke time info");
            last_invoked
        }
        None => {
            tracing::debug!(function_name, "cannot find the last invoke time");
            NOT_FOUND.into()
        }
    }
}

/// Fill in `last_invoked` for every record.
///
/// Each lookup owns the one record it writes to, and at most `max_concurrency`
/// lookups are in flight at once (`0` means no limit). Returns once every
/// record has been filled in.
#[tracing::instrument(skip(source, records), fields(count = records.len()))]
pub async fn enrich_all<S: LastEventSource>(
    source: &S,
    records: &mut [FunctionRecord],
    max_concurrency: usize,
) {
    let limit = (max_concurrency > 0).then_some(max_concurrency);

    stream::iter(records.iter_mut())
        .for_each_concurrent(limit, |record| async move {
            let last_invoked = lookup_last_invoked(source, &record.name).await;
            record.last_invoked = Some(last_invoked);
        })
        .await;
}
