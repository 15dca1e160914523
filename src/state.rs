use crate::models::{AnalysisFilter, DataFilter, MonitorFilter, PaginationState};

/// Filter and pagination configuration for the three views. One value of
/// this lives for the whole session and is passed by reference to whichever
/// view needs it, so navigating away and back reproduces the same view. No
/// ambient globals: the caller owns it.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub data_filter: DataFilter,
    pub data_pagination: PaginationState,
    pub analysis_filter: AnalysisFilter,
    pub analysis_pagination: PaginationState,
    pub monitor_filter: MonitorFilter,
    pub monitor_pagination: PaginationState,
}

impl DashboardState {
    pub fn new() -> Self {
        DashboardState::default()
    }

    pub fn set_data_filter(&mut self, filter: DataFilter) {
        self.data_filter = filter;
    }

    pub fn update_analysis_ids(&mut self, ids: Vec<u32>) {
        self.analysis_filter.ids = ids;
    }

    pub fn update_analysis_subjects(&mut self, subjects: Vec<String>) {
        self.analysis_filter.subjects = subjects;
    }

    pub fn reset_analysis_filter(&mut self) {
        self.analysis_filter = AnalysisFilter::default();
    }

    pub fn update_monitor_ids(&mut self, ids: Vec<u32>) {
        self.monitor_filter.ids = ids;
    }

    pub fn update_monitor_names(&mut self, names: String) {
        self.monitor_filter.names = names;
    }

    pub fn update_monitor_passed(&mut self, passed: bool) {
        self.monitor_filter.state.passed = passed;
    }

    pub fn update_monitor_failed(&mut self, failed: bool) {
        self.monitor_filter.state.failed = failed;
    }

    pub fn reset_monitor_filter(&mut self) {
        self.monitor_filter = MonitorFilter::default();
    }

    pub fn update_data_pagination(&mut self, page_size: usize, page_index: usize) {
        self.data_pagination = PaginationState { page_size, page_index };
    }

    pub fn update_analysis_pagination(&mut self, page_size: usize, page_index: usize) {
        self.analysis_pagination = PaginationState { page_size, page_index };
    }

    pub fn update_monitor_pagination(&mut self, page_size: usize, page_index: usize) {
        self.monitor_pagination = PaginationState { page_size, page_index };
    }
}

/// Slice of `items` for the given page. Pages past the end come back empty
/// and a zero page size shows nothing.
pub fn page<'a, T>(items: &'a [T], pagination: &PaginationState) -> &'a [T] {
    let start = pagination.page_index.saturating_mul(pagination.page_size);
    let end = start.saturating_add(pagination.page_size);
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}
