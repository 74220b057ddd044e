//! Cursor pagination over list endpoints
//!
//! A [`Pager`] owns a list request and walks a cursor-paginated endpoint one
//! page at a time. The endpoint is reached through a [`ListOperation`], which
//! issues a single list call and hands back a [`Page`]. The pager takes the
//! next cursor out of each page and writes it into its own copy of the
//! request, so callers never touch the cursor.
//!
//! # Example
//! ```ignore
//! let options = ListPipelineRunsOptions::new(pipeline_id).limit(10);
//!
//! // Page by page
//! let mut pager = client.pipeline_runs_pager(options.clone())?;
//! while pager.has_next() {
//!     let runs = pager.get_next().await?;
//!     println!("{} runs", runs.len());
//! }
//!
//! // Everything at once
//! let all_runs = client.pipeline_runs_pager(options)?.get_all().await?;
//! ```

use async_trait::async_trait;
use futures::stream::{self, Stream};
use log::debug;

use super::api::PipelineRunApi;
use super::models::{PipelineRun, PipelineRunsCollection};
use super::options::ListPipelineRunsOptions;
use crate::error::{ConfigError, Error, Result};

/// A list request that carries a page cursor.
pub trait PageRequest: Clone + Send + Sync {
    /// Cursor of the page this request asks for, `None` for the first page.
    fn start(&self) -> Option<&str>;

    /// Replace the cursor.
    fn set_start(&mut self, start: Option<String>);

    /// Reject filter combinations the endpoint cannot serve.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// One page returned by a list endpoint.
pub trait Page: Send {
    /// Record type held by the page.
    type Item: Send;

    /// Cursor of the following page, `None` on the last page.
    fn next_start(&self) -> Result<Option<String>>;

    /// Take the page's records in server order.
    fn into_items(self) -> Vec<Self::Item>;
}

/// A single call to a cursor-paginated list endpoint.
#[async_trait]
pub trait ListOperation: Send + Sync {
    type Request: PageRequest;
    type Page: Page;

    /// Fetch the page selected by `request`.
    async fn fetch_page(&self, request: &Self::Request) -> Result<Self::Page>;
}

/// Record type produced by a list operation.
pub type PageItem<L> = <<L as ListOperation>::Page as Page>::Item;

/// Iterator over the pages of a list endpoint.
///
/// Each pager owns its request and cursor, so independent pagers over the
/// same client can be driven at the same time.
pub struct Pager<L: ListOperation> {
    list: L,
    request: L::Request,
    has_next: bool,
    pages_fetched: usize,
}

impl<L: ListOperation> Pager<L> {
    /// Create a pager positioned before the first page.
    ///
    /// Fails if `request` already carries a cursor or does not validate.
    pub fn new(list: L, request: L::Request) -> Result<Self> {
        if request.start().is_some() {
            return Err(ConfigError::Invalid(
                "the start cursor is managed by the pager and must not be set".to_string(),
            )
            .into());
        }
        request.validate()?;

        Ok(Self {
            list,
            request,
            has_next: true,
            pages_fetched: 0,
        })
    }

    /// Whether another page is known to exist.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Number of pages fetched successfully so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// The request the next call to [`get_next`](Self::get_next) will issue.
    pub fn request(&self) -> &L::Request {
        &self.request
    }

    /// Fetch the next page and advance the cursor.
    ///
    /// On error the cursor is left where it was, so calling again retries the
    /// same page with the same request.
    pub async fn get_next(&mut self) -> Result<Vec<PageItem<L>>> {
        if !self.has_next {
            return Err(Error::NoMoreResults);
        }

        let page = self.list.fetch_page(&self.request).await?;
        let next_start = page.next_start()?;
        let items = page.into_items();

        self.pages_fetched += 1;
        debug!(
            "Page {} returned {} items (next start: {:?})",
            self.pages_fetched,
            items.len(),
            next_start
        );

        self.has_next = next_start.is_some();
        self.request.set_start(next_start);

        Ok(items)
    }

    /// Fetch every remaining page and concatenate the items in fetch order.
    ///
    /// Stops at the first failing page; items gathered before it are dropped.
    pub async fn get_all(mut self) -> Result<Vec<PageItem<L>>> {
        let mut all_items = Vec::new();

        while self.has_next {
            let items = self.get_next().await?;
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items across {} pages",
            all_items.len(),
            self.pages_fetched
        );
        Ok(all_items)
    }

    /// Turn the pager into a stream of pages.
    ///
    /// The stream ends after the last page, or right after yielding the first
    /// error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<PageItem<L>>>> {
        stream::unfold(Some(self), |state| async move {
            let mut pager = state?;
            if !pager.has_next() {
                return None;
            }

            match pager.get_next().await {
                Ok(items) => Some((Ok(items), Some(pager))),
                Err(err) => Some((Err(err), None)),
            }
        })
    }
}

// ============================================================================
// Pipeline runs binding
// ============================================================================

impl PageRequest for ListPipelineRunsOptions {
    fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }

    fn validate(&self) -> Result<()> {
        ListPipelineRunsOptions::validate(self)
    }
}

impl Page for PipelineRunsCollection {
    type Item = PipelineRun;

    fn next_start(&self) -> Result<Option<String>> {
        PipelineRunsCollection::next_start(self)
    }

    fn into_items(self) -> Vec<PipelineRun> {
        self.pipeline_runs
    }
}

/// List operation bound to the pipeline runs endpoint of a client.
pub struct PipelineRunsList<'a, C: ?Sized> {
    client: &'a C,
}

impl<'a, C: PipelineRunApi + ?Sized> PipelineRunsList<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: PipelineRunApi + ?Sized> ListOperation for PipelineRunsList<'_, C> {
    type Request = ListPipelineRunsOptions;
    type Page = PipelineRunsCollection;

    async fn fetch_page(&self, request: &ListPipelineRunsOptions) -> Result<PipelineRunsCollection> {
        self.client.list_pipeline_runs(request).await
    }
}

/// Pager over the pipeline runs of one pipeline.
pub type PipelineRunsPager<'a, C> = Pager<PipelineRunsList<'a, C>>;

/// Create a pager over the pipeline runs selected by `options`.
pub fn pipeline_runs_pager<C: PipelineRunApi + ?Sized>(
    client: &C,
    options: ListPipelineRunsOptions,
) -> Result<PipelineRunsPager<'_, C>> {
    Pager::new(PipelineRunsList::new(client), options)
}
