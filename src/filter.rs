use crate::models::{DataFilter, MonitorFilter, TestResult, TraineeStatus};

/// Applies a structured filter to an ordered slice of test results and
/// returns the matching subsequence, original order preserved. With no fields
/// set the whole input comes back unchanged. Evaluation is deterministic and
/// never mutates its input.
pub fn apply_data_filter(results: &[TestResult], filter: &DataFilter) -> Vec<TestResult> {
    if filter.is_empty() {
        return results.to_vec();
    }

    let mut matched = if filter.is_general_search {
        general_search(results, filter)
    } else {
        structured_search(results, filter)
    };

    // Grade and date bounds are AND constraints in both modes.
    if let Some(min) = filter.grade.min {
        matched.retain(|r| r.grade >= min);
    }
    if let Some(max) = filter.grade.max {
        matched.retain(|r| r.grade <= max);
    }
    if let Some(after) = filter.date.after {
        matched.retain(|r| r.date >= after);
    }
    if let Some(before) = filter.date.before {
        matched.retain(|r| r.date <= before);
    }

    matched
}

/// OR across the set fields among {id, name, subject}: each field picks its
/// own subset and the subsets are unioned in first-seen order, de-duplicated
/// by result id.
fn general_search(results: &[TestResult], filter: &DataFilter) -> Vec<TestResult> {
    let mut matched: Vec<TestResult> = Vec::new();

    let extend_unique = |candidates: Vec<&TestResult>, matched: &mut Vec<TestResult>| {
        for candidate in candidates {
            if !matched.iter().any(|m| m.id == candidate.id) {
                matched.push(candidate.clone());
            }
        }
    };

    if let Some(id) = &filter.id {
        let subset = results.iter().filter(|r| matches_id(r, id)).collect();
        extend_unique(subset, &mut matched);
    }
    if let Some(name) = &filter.name {
        let subset = results.iter().filter(|r| matches_name(r, name)).collect();
        extend_unique(subset, &mut matched);
    }
    if let Some(subject) = &filter.subject {
        let subset = results.iter().filter(|r| matches_subject(r, subject)).collect();
        extend_unique(subset, &mut matched);
    }

    matched
}

/// AND across the set fields, intersected in id, name, subject order.
fn structured_search(results: &[TestResult], filter: &DataFilter) -> Vec<TestResult> {
    let mut matched: Vec<TestResult> = results.to_vec();
    if let Some(id) = &filter.id {
        matched.retain(|r| matches_id(r, id));
    }
    if let Some(name) = &filter.name {
        matched.retain(|r| matches_name(r, name));
    }
    if let Some(subject) = &filter.subject {
        matched.retain(|r| matches_subject(r, subject));
    }
    matched
}

fn matches_id(result: &TestResult, query: &str) -> bool {
    let query = query.to_lowercase();
    result.id.to_string().contains(&query) || result.trainee_id.to_string().contains(&query)
}

fn matches_name(result: &TestResult, query: &str) -> bool {
    let query = query.to_lowercase();
    result
        .trainee_name
        .as_ref()
        .is_some_and(|name| name.to_lowercase().contains(&query))
}

fn matches_subject(result: &TestResult, query: &str) -> bool {
    result.subject.to_lowercase().contains(&query.to_lowercase())
}

/// Applies the monitor view's visibility filter to derived statuses, in
/// order: id selection, name substring, then the pass/fail toggles. Both
/// toggles off leaves nothing visible.
pub fn apply_monitor_filter(
    statuses: &[TraineeStatus],
    filter: &MonitorFilter,
) -> Vec<TraineeStatus> {
    let mut filtered: Vec<TraineeStatus> = statuses.to_vec();

    if !filter.ids.is_empty() {
        filtered.retain(|s| filter.ids.contains(&s.id));
    }
    if !filter.names.is_empty() {
        let needle = filter.names.to_lowercase();
        filtered.retain(|s| s.name.to_lowercase().contains(&needle));
    }
    if !filter.state.passed {
        filtered.retain(|s| !s.passed);
    }
    if !filter.state.failed {
        filtered.retain(|s| s.passed);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, GradeRange, PassState};
    use crate::query;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn result(id: u32, trainee_id: u32, name: &str, grade: f64, subject: &str) -> TestResult {
        TestResult {
            id,
            trainee_id,
            trainee_name: Some(name.to_string()),
            date: date(2024, 6, 1),
            grade,
            subject: subject.to_string(),
        }
    }

    fn sample_results() -> Vec<TestResult> {
        vec![
            result(1, 1, "Ann Walker", 90.0, "Mathematics"),
            result(2, 2, "Bo Reed", 60.0, "Art History"),
            result(3, 1, "Ann Walker", 72.0, "Physics"),
            result(4, 3, "Cal Reed", 55.0, "Mathematics"),
        ]
    }

    fn status(id: u32, name: &str, average: f64, passed: bool) -> TraineeStatus {
        TraineeStatus {
            id,
            name: name.to_string(),
            average,
            exams: 3,
            passed,
        }
    }

    #[test]
    fn empty_filter_is_identity() {
        let results = sample_results();
        assert_eq!(apply_data_filter(&results, &DataFilter::default()), results);
    }

    #[test]
    fn output_is_an_ordered_subsequence() {
        let results = sample_results();
        let filter = DataFilter {
            subject: Some("math".to_string()),
            ..DataFilter::default()
        };
        let filtered = apply_data_filter(&results, &filter);
        let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let results = sample_results();
        let filter = DataFilter {
            name: Some("reed".to_string()),
            ..DataFilter::default()
        };
        let once = apply_data_filter(&results, &filter);
        let twice = apply_data_filter(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn structured_fields_intersect() {
        let results = sample_results();
        let filter = DataFilter {
            name: Some("reed".to_string()),
            subject: Some("math".to_string()),
            ..DataFilter::default()
        };
        let ids: Vec<u32> = apply_data_filter(&results, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn general_search_unions_field_matches() {
        let results = sample_results();
        // "1" matches ids 1 and 3 by trainee id plus result id 1; no names or
        // subjects contain it.
        let filter = query::parse("1");
        let ids: Vec<u32> = apply_data_filter(&results, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn general_search_equals_union_of_single_field_matches() {
        let results = sample_results();
        let token = "art".to_string();
        let general = DataFilter {
            id: Some(token.clone()),
            name: Some(token.clone()),
            subject: Some(token.clone()),
            is_general_search: true,
            ..DataFilter::default()
        };
        let combined = apply_data_filter(&results, &general);

        let mut expected: Vec<TestResult> = Vec::new();
        for single in [
            DataFilter { id: Some(token.clone()), ..DataFilter::default() },
            DataFilter { name: Some(token.clone()), ..DataFilter::default() },
            DataFilter { subject: Some(token.clone()), ..DataFilter::default() },
        ] {
            for matched in apply_data_filter(&results, &single) {
                if !expected.iter().any(|r| r.id == matched.id) {
                    expected.push(matched);
                }
            }
        }
        assert_eq!(combined, expected);
    }

    #[test]
    fn name_search_skips_results_without_a_trainee_name() {
        let mut results = sample_results();
        results[0].trainee_name = None;
        results[2].trainee_name = None;
        let filter = DataFilter {
            name: Some("ann".to_string()),
            ..DataFilter::default()
        };
        assert!(apply_data_filter(&results, &filter).is_empty());
    }

    #[test]
    fn grade_bounds_are_inclusive() {
        let results = sample_results();
        let filter = DataFilter {
            grade: GradeRange { min: Some(60.0), max: Some(72.0) },
            ..DataFilter::default()
        };
        let ids: Vec<u32> = apply_data_filter(&results, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let mut results = sample_results();
        results[0].date = date(2024, 1, 10);
        results[1].date = date(2024, 2, 20);
        results[2].date = date(2024, 3, 30);
        results[3].date = date(2024, 5, 5);
        let filter = DataFilter {
            date: DateRange {
                after: Some(date(2024, 2, 20)),
                before: Some(date(2024, 3, 30)),
            },
            ..DataFilter::default()
        };
        let ids: Vec<u32> = apply_data_filter(&results, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn grade_bounds_apply_on_top_of_general_search() {
        let results = sample_results();
        let mut filter = query::parse("reed");
        filter.grade.min = Some(56.0);
        let ids: Vec<u32> = apply_data_filter(&results, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn minimum_grade_query_end_to_end() {
        let results = vec![
            result(1, 1, "Ann", 90.0, "Math"),
            result(2, 2, "Bo", 60.0, "Art"),
        ];
        let filter = query::parse(">70");
        let filtered = apply_data_filter(&results, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn monitor_filter_selects_ids_then_names() {
        let statuses = vec![
            status(1, "Ann Walker", 80.0, true),
            status(2, "Bo Reed", 45.0, false),
            status(3, "Cal Reed", 70.0, true),
        ];
        let filter = MonitorFilter {
            ids: vec![2, 3],
            names: "reed".to_string(),
            state: PassState::default(),
        };
        let ids: Vec<u32> = apply_monitor_filter(&statuses, &filter).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn monitor_toggles_hide_passed_or_failed() {
        let statuses = vec![status(1, "Ann", 80.0, true), status(2, "Bo", 45.0, false)];

        let hide_passed = MonitorFilter {
            state: PassState { passed: false, failed: true },
            ..MonitorFilter::default()
        };
        assert_eq!(apply_monitor_filter(&statuses, &hide_passed)[0].id, 2);

        let hide_failed = MonitorFilter {
            state: PassState { passed: true, failed: false },
            ..MonitorFilter::default()
        };
        assert_eq!(apply_monitor_filter(&statuses, &hide_failed)[0].id, 1);
    }

    #[test]
    fn monitor_with_both_toggles_off_is_empty() {
        let statuses = vec![status(1, "Ann", 80.0, true), status(2, "Bo", 45.0, false)];
        let filter = MonitorFilter {
            state: PassState { passed: false, failed: false },
            ..MonitorFilter::default()
        };
        assert!(apply_monitor_filter(&statuses, &filter).is_empty());
    }
}
