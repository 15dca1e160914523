use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default pass threshold as an average-grade percentage (inclusive).
pub const DEFAULT_PASS_THRESHOLD: f64 = 65.0;
/// Default number of trainees produced by a fresh `generate`.
pub const DEFAULT_TRAINEE_COUNT: usize = 20;
/// Default bounds on generated test results per trainee.
pub const DEFAULT_MIN_RESULTS: usize = 3;
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Default rows per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub date_joined: NaiveDate,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: u32,
    pub trainee_id: u32,
    /// Denormalized for display and name search; absent when a result was
    /// entered manually without a known trainee.
    pub trainee_name: Option<String>,
    pub date: NaiveDate,
    pub grade: f64,
    pub subject: String,
}

/// Derived pass/fail summary for one trainee. Never stored; rebuilt from the
/// raw results whenever they or the threshold change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraineeStatus {
    pub id: u32,
    pub name: String,
    /// Arithmetic mean of grades, rounded to one decimal place.
    pub average: f64,
    pub exams: usize,
    pub passed: bool,
}

/// Per-subject rollup used by the markdown report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub count: usize,
    pub avg_grade: f64,
}

/// One calendar week of test activity, used by the report's trend section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTrend {
    pub week_start: NaiveDate,
    pub result_count: usize,
    pub avg_grade: f64,
    pub trainee_count: usize,
}

/// Inclusive numeric bounds on grade. Presence of the value is what matters,
/// never truthiness of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Inclusive calendar-date bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub after: Option<NaiveDate>,
    pub before: Option<NaiveDate>,
}

/// Structured filter over test results. All fields absent matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFilter {
    /// Substring match against both the result id and the trainee id.
    pub id: Option<String>,
    pub name: Option<String>,
    pub subject: Option<String>,
    pub grade: GradeRange,
    pub date: DateRange,
    /// When set, {id, name, subject} compose with OR instead of AND.
    pub is_general_search: bool,
}

impl DataFilter {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.subject.is_none()
            && self.grade.min.is_none()
            && self.grade.max.is_none()
            && self.date.after.is_none()
            && self.date.before.is_none()
    }
}

/// Chart selection sets. Empty means "nothing selected", not "match all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFilter {
    pub ids: Vec<u32>,
    pub subjects: Vec<String>,
}

/// Pass/fail visibility toggles for the monitor view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassState {
    pub passed: bool,
    pub failed: bool,
}

impl Default for PassState {
    fn default() -> Self {
        PassState {
            passed: true,
            failed: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorFilter {
    pub ids: Vec<u32>,
    pub names: String,
    pub state: PassState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_size: usize,
    pub page_index: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState {
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
        }
    }
}
