use crate::{
    error::PipelineError,
    filter::{DEFAULT_MATCHER_NAME, MatcherRegistry, SharedMatcher},
    obs::{NullObserver, PipelineObserver},
    order::OrderProgram,
    page::{self, Paged},
    params::QueryParams,
    row::Row,
};
use std::sync::Arc;

///
/// DataView
///
/// Final pipeline output: one page of rows plus the post-filter pre-paging
/// total. The total is absent when the paging stage was skipped.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataView<T> {
    pub rows: Vec<T>,
    pub total: Option<usize>,
}

impl<T> DataView<T> {
    const fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: None,
        }
    }
}

///
/// DataPipeline
///
/// Orchestrates filter → notify → sort → notify → page over one input
/// sequence. Owns the matcher registry and the observer; both are scoped to
/// this instance. The pipeline never mutates its input — every stage
/// produces a derived sequence.
///

pub struct DataPipeline<T> {
    registry: MatcherRegistry<T>,
    observer: Arc<dyn PipelineObserver<T> + Send + Sync>,
}

impl<T: Row + Clone + 'static> DataPipeline<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Row + Clone> DataPipeline<T> {
    /// Replace the observer notified after filtering and after sorting.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver<T> + Send + Sync>) -> Self {
        self.observer = observer;
        self
    }

    /// Register a named matcher service.
    pub fn register_matcher(&mut self, name: impl Into<String>, matcher: SharedMatcher<T>) {
        self.registry.register(name, matcher);
    }

    /// Run the full pipeline over one input sequence.
    ///
    /// An absent input short-circuits to an empty view without touching any
    /// stage or firing any notification. A skipped sort stage still fires
    /// the after-sorted notification with the unsorted rows; a skipped
    /// paging stage passes rows through and reports no total.
    pub fn view(
        &self,
        rows: Option<&[T]>,
        params: &QueryParams<T>,
    ) -> Result<DataView<T>, PipelineError> {
        let Some(rows) = rows else {
            return Ok(DataView::empty());
        };

        let mut data = rows.to_vec();

        if params.data_options.apply_filter && params.has_active_filter() {
            let matcher = self.matcher_for(params)?;
            data = matcher.matches(
                &data,
                &params.criteria(),
                params.filter_options.comparator.as_deref(),
            );
        }
        self.observer.after_filtered(params, &data);

        if params.data_options.apply_sort && !params.order.is_empty() {
            data = self.order_program(params).apply(data);
        }
        self.observer.after_sorted(params, &data);

        if params.data_options.apply_paging {
            let paged = page::apply_paging(&data, params.page);
            return Ok(DataView {
                rows: paged.rows,
                total: Some(paged.total),
            });
        }

        Ok(DataView {
            rows: data,
            total: None,
        })
    }

    /// Slice one page out of an already filtered and sorted sequence.
    #[must_use]
    pub fn page(&self, rows: &[T], params: &QueryParams<T>) -> Paged<T> {
        page::apply_paging(rows, params.page)
    }

    /// Resolve the matcher these parameters select: an injected matcher
    /// verbatim, else a registry lookup by name (default name when absent).
    pub fn matcher_for(&self, params: &QueryParams<T>) -> Result<SharedMatcher<T>, PipelineError> {
        if let Some(matcher) = &params.filter_options.matcher {
            return Ok(matcher.clone());
        }

        let name = params
            .filter_options
            .matcher_name
            .as_deref()
            .unwrap_or(DEFAULT_MATCHER_NAME);

        self.registry.resolve(name)
    }

    /// Compile the sort program these parameters describe.
    #[must_use]
    pub fn order_program(&self, params: &QueryParams<T>) -> OrderProgram<T> {
        OrderProgram::compile(&params.order, &params.sort_options)
    }
}

impl<T: Row + Clone + 'static> Default for DataPipeline<T> {
    fn default() -> Self {
        Self {
            registry: MatcherRegistry::default(),
            observer: Arc::new(NullObserver),
        }
    }
}
