use aws_sdk_lambda::{model::FunctionConfiguration, Client, Error};
use std::future::Future;

use crate::{error::RuntimeError, function_record::FunctionRecord};

/// One page of listed functions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionPage {
    /// Functions in this page, in listing order
    pub records: Vec<FunctionRecord>,
    /// Marker to request the next page with, `None` on the last page.
    pub next_marker: Option<String>,
}

/// Source of paginated function listings.
pub trait FunctionPages {
    /// Fetch the page that starts at `marker`, or the first page if `marker` is `None`.
    fn list_page(
        &self,
        marker: Option<String>,
    ) -> impl Future<Output = Result<FunctionPage, RuntimeError>> + Send;
}

impl FunctionPages for Client {
    #[tracing::instrument(skip(self))]
    async fn list_page(&self, marker: Option<String>) -> Result<FunctionPage, RuntimeError> {
        let output = self
            .list_functions()
            .set_marker(marker)
            .send()
            .await
            .map_err(Error::from)?;

        let records = output
            .functions
            .unwrap_or_default()
            .into_iter()
            .map(FunctionRecord::from)
            .collect();

        Ok(FunctionPage {
            records,
            next_marker: output.next_marker,
        })
    }
}

/// List every function, following the pagination marker until the last page.
/// A failed page aborts the listing and nothing is returned.
#[tracing::instrument(skip(pages))]
pub async fn list_all<P: FunctionPages>(pages: &P) -> Result<Vec<FunctionRecord>, RuntimeError> {
    let mut records = Vec::new();
    let mut marker = None;

    loop {
        let page = pages.list_page(marker).await?;
        tracing::debug!(count = page.records.len(), "listed page of functions");
        records.extend(page.records);

        marker = page.next_marker.filter(|m| !m.is_empty());
        if marker.is_none() {
            break;
        }
    }

    Ok(records)
}

impl From<FunctionConfiguration> for FunctionRecord {
    /// Every field is optional in the API response, missing ones become empty strings.
    fn from(value: FunctionConfiguration) -> Self {
        FunctionRecord {
            name: value.function_name.unwrap_or_default(),
            arn: value.function_arn.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            last_modified: value.last_modified.unwrap_or_default(),
            role: value.role.unwrap_or_default(),
            runtime: value
                .runtime
                .map(|r| r.as_str().to_owned())
                .unwrap_or_default(),
            last_invoked: None,
        }
    }
}
