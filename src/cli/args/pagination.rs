//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::{ListPipelineRunsOptions, MAX_PAGE_LIMIT};

/// Pagination arguments for cursor-paged list commands.
///
/// Without `--max-pages` every page is fetched.
#[derive(Args, Debug, Default, Clone)]
pub struct PagerArgs {
    /// Items per page (1-100)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_LIMIT as i64))]
    pub limit: Option<u32>,

    /// Number of items to skip before the first page
    #[arg(long)]
    pub offset: Option<u64>,

    /// Stop after this many pages
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: Option<u64>,
}

impl PagerArgs {
    /// Apply page size and offset to list options.
    ///
    /// Falls back to `default_limit` (the configured page size) when no
    /// `--limit` was given. With neither, `limit` stays unset and the
    /// service picks the page size.
    pub fn apply(
        &self,
        mut options: ListPipelineRunsOptions,
        default_limit: Option<u32>,
    ) -> ListPipelineRunsOptions {
        if let Some(limit) = self.limit.or(default_limit) {
            options = options.limit(limit);
        }
        if let Some(offset) = self.offset {
            options = options.offset(offset);
        }
        options
    }

    /// Page cap as `usize`, `None` for unlimited.
    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages.map(|p| usize::try_from(p).unwrap_or(usize::MAX))
    }
}
