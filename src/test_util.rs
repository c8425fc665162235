use aws_sdk_cloudwatchlogs::Credentials;
use aws_types::{region::Region, SdkConfig};
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use crate::{
    cloudwatch_logs::LastEventSource,
    error::RuntimeError,
    function_record::FunctionRecord,
    lambda::{FunctionPage, FunctionPages},
};

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(service: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{service}.us-west-1.amazonaws.com/"))
}

/// In-memory function listing. Page `n` is requested with the marker `page-n`.
pub struct FakeFunctionPages {
    pages: Vec<Vec<String>>,
    last_marker: Option<String>,
    endless_until: Option<usize>,
    calls: AtomicUsize,
}

impl FakeFunctionPages {
    /// Serve `pages` of function names, the last page has no marker.
    pub fn new(pages: Vec<Vec<&str>>) -> FakeFunctionPages {
        FakeFunctionPages {
            pages: pages
                .into_iter()
                .map(|p| p.into_iter().map(String::from).collect())
                .collect(),
            last_marker: None,
            endless_until: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Serve `pages`, the last page returns `last_marker`.
    pub fn with_last_marker(pages: Vec<Vec<&str>>, last_marker: &str) -> FakeFunctionPages {
        FakeFunctionPages {
            last_marker: Some(last_marker.into()),
            ..FakeFunctionPages::new(pages)
        }
    }

    /// Always return a next marker, and fail once `limit` pages have been served.
    pub fn endless(limit: usize) -> FakeFunctionPages {
        FakeFunctionPages {
            endless_until: Some(limit),
            ..FakeFunctionPages::new(vec![])
        }
    }

    /// Number of pages requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn page_names(&self, index: usize) -> Result<(Vec<String>, Option<String>), RuntimeError> {
        let next = format!("page-{}", index + 1);

        if let Some(limit) = self.endless_until {
            if index >= limit {
                return Err(RuntimeError::Lambda(
                    aws_sdk_lambda::Error::ServiceException(
                        aws_sdk_lambda::error::ServiceException::builder()
                            .message("page limit reached")
                            .build(),
                    ),
                ));
            }
            return Ok((vec![format!("fn{index}")], Some(next)));
        }

        let names = self.pages.get(index).cloned().unwrap_or_default();
        if index + 1 < self.pages.len() {
            Ok((names, Some(next)))
        } else {
            Ok((names, self.last_marker.clone()))
        }
    }
}

impl FunctionPages for FakeFunctionPages {
    async fn list_page(&self, marker: Option<String>) -> Result<FunctionPage, RuntimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let index = marker
            .and_then(|m| m.strip_prefix("page-").and_then(|n| n.parse().ok()))
            .unwrap_or(0);
        let (names, next_marker) = self.page_names(index)?;

        Ok(FunctionPage {
            records: names
                .into_iter()
                .map(|name| FunctionRecord {
                    arn: format!("arn:aws:lambda:us-west-1:123456789012:function:{name}"),
                    name,
                    ..Default::default()
                })
                .collect(),
            next_marker,
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
enum FakeOutcome {
    #[default]
    MissingGroup,
    ServiceFailure,
    NoEvents,
    LastEvent(i64),
}

#[derive(Clone, Copy, Debug, Default)]
struct FakeLogGroup {
    outcome: FakeOutcome,
    delay: Duration,
}

/// In-memory log groups. Unknown groups fail like a missing log group.
#[derive(Default)]
pub struct FakeLastEvents {
    log_groups: HashMap<String, FakeLogGroup>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeLastEvents {
    pub fn new() -> FakeLastEvents {
        FakeLastEvents::default()
    }

    pub fn with_timestamp(mut self, log_group: &str, timestamp_millis: i64) -> FakeLastEvents {
        self.group(log_group).outcome = FakeOutcome::LastEvent(timestamp_millis);
        self
    }

    pub fn with_empty(mut self, log_group: &str) -> FakeLastEvents {
        self.group(log_group).outcome = FakeOutcome::NoEvents;
        self
    }

    pub fn with_failure(mut self, log_group: &str) -> FakeLastEvents {
        self.group(log_group).outcome = FakeOutcome::ServiceFailure;
        self
    }

    /// Delay the answer for `log_group`.
    pub fn with_delay(mut self, log_group: &str, delay: Duration) -> FakeLastEvents {
        self.group(log_group).delay = delay;
        self
    }

    /// Number of lookups so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of lookups that were in progress at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn group(&mut self, log_group: &str) -> &mut FakeLogGroup {
        self.log_groups.entry(log_group.to_owned()).or_default()
    }
}

impl LastEventSource for FakeLastEvents {
    async fn last_event_timestamp(&self, log_group: &str) -> Result<Option<i64>, RuntimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        let group = self.log_groups.get(log_group).copied().unwrap_or_default();
        if !group.delay.is_zero() {
            tokio::time::sleep(group.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match group.outcome {
            FakeOutcome::MissingGroup => Err(RuntimeError::CloudWatchLogs(
                aws_sdk_cloudwatchlogs::Error::ResourceNotFoundException(
                    aws_sdk_cloudwatchlogs::error::ResourceNotFoundException::builder()
                        .message("The specified log group does not exist.")
                        .build(),
                ),
            )),
            FakeOutcome::ServiceFailure => Err(RuntimeError::CloudWatchLogs(
                aws_sdk_cloudwatchlogs::Error::ServiceUnavailableException(
                    aws_sdk_cloudwatchlogs::error::ServiceUnavailableException::builder()
                        .message("service unavailable")
                        .build(),
                ),
            )),
            FakeOutcome::NoEvents => Ok(None),
            FakeOutcome::LastEvent(timestamp) => Ok(Some(timestamp)),
        }
    }
}
