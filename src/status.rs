use crate::models::{TestResult, Trainee, TraineeStatus};

/// Derives a pass/fail status per trainee from the raw test results. Pure
/// function of its inputs: callers re-invoke after any mutation or threshold
/// change, nothing is cached. Trainees with no results produce no entry.
///
/// Averages are rounded to one decimal place, half away from zero (the
/// rounding `f64::round` gives). The threshold comparison is inclusive:
/// `average >= threshold` means passed.
pub fn trainee_statuses(
    trainees: &[Trainee],
    results: &[TestResult],
    threshold: f64,
) -> Vec<TraineeStatus> {
    trainees
        .iter()
        .filter_map(|trainee| {
            let grades: Vec<f64> = results
                .iter()
                .filter(|r| r.trainee_id == trainee.id)
                .map(|r| r.grade)
                .collect();
            if grades.is_empty() {
                return None;
            }
            let average = grades.iter().sum::<f64>() / grades.len() as f64;
            Some(TraineeStatus {
                id: trainee.id,
                name: trainee.name.clone(),
                average: round_to_tenth(average),
                exams: grades.len(),
                passed: average >= threshold,
            })
        })
        .collect()
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
