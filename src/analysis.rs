use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{AnalysisFilter, TestResult, Trainee};
use crate::status::round_to_tenth;

/// One plotted grade for the grades-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradePoint {
    pub date: NaiveDate,
    pub grade: f64,
}

/// A per-trainee line series, points in date-ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraineeSeries {
    pub trainee_id: u32,
    pub label: String,
    pub points: Vec<GradePoint>,
}

/// A labeled bar for the averages charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageBar {
    pub label: String,
    pub average: f64,
}

fn trainee_label(trainees: &[Trainee], id: u32) -> String {
    trainees
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| format!("Trainee #{id}"))
}

/// Grade series over time for each selected trainee, in selection order. An
/// empty selection yields no series (the chart renders its placeholder), and
/// a selected trainee with no results yields an empty series.
pub fn grades_over_time(
    trainees: &[Trainee],
    results: &[TestResult],
    filter: &AnalysisFilter,
) -> Vec<TraineeSeries> {
    filter
        .ids
        .iter()
        .map(|&id| {
            let mut points: Vec<GradePoint> = results
                .iter()
                .filter(|r| r.trainee_id == id)
                .map(|r| GradePoint { date: r.date, grade: r.grade })
                .collect();
            points.sort_by_key(|p| p.date);
            TraineeSeries {
                trainee_id: id,
                label: trainee_label(trainees, id),
                points,
            }
        })
        .collect()
}

/// Overall average grade per selected trainee, one decimal place. Trainees
/// without results are skipped rather than shown as zero.
pub fn trainee_averages(
    trainees: &[Trainee],
    results: &[TestResult],
    filter: &AnalysisFilter,
) -> Vec<AverageBar> {
    filter
        .ids
        .iter()
        .filter_map(|&id| {
            let grades: Vec<f64> = results
                .iter()
                .filter(|r| r.trainee_id == id)
                .map(|r| r.grade)
                .collect();
            if grades.is_empty() {
                return None;
            }
            Some(AverageBar {
                label: trainee_label(trainees, id),
                average: round_to_tenth(grades.iter().sum::<f64>() / grades.len() as f64),
            })
        })
        .collect()
}

/// Average grade per selected subject (exact subject match), one decimal
/// place. Subjects with no results are skipped.
pub fn subject_averages(results: &[TestResult], filter: &AnalysisFilter) -> Vec<AverageBar> {
    filter
        .subjects
        .iter()
        .filter_map(|subject| {
            let grades: Vec<f64> = results
                .iter()
                .filter(|r| &r.subject == subject)
                .map(|r| r.grade)
                .collect();
            if grades.is_empty() {
                return None;
            }
            Some(AverageBar {
                label: subject.clone(),
                average: round_to_tenth(grades.iter().sum::<f64>() / grades.len() as f64),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn trainee(id: u32, name: &str) -> Trainee {
        Trainee {
            id,
            name: name.to_string(),
            email: String::new(),
            date_joined: date(1, 1),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            zip: String::new(),
        }
    }

    fn result(id: u32, trainee_id: u32, month: u32, grade: f64, subject: &str) -> TestResult {
        TestResult {
            id,
            trainee_id,
            trainee_name: None,
            date: date(month, 1),
            grade,
            subject: subject.to_string(),
        }
    }

    #[test]
    fn empty_selection_yields_no_series() {
        let trainees = vec![trainee(1, "Ann")];
        let results = vec![result(1, 1, 3, 80.0, "Physics")];
        let filter = AnalysisFilter::default();

        assert!(grades_over_time(&trainees, &results, &filter).is_empty());
        assert!(trainee_averages(&trainees, &results, &filter).is_empty());
        assert!(subject_averages(&results, &filter).is_empty());
    }

    #[test]
    fn series_points_sorted_by_date_ascending() {
        let trainees = vec![trainee(1, "Ann")];
        let results = vec![
            result(1, 1, 5, 70.0, "Physics"),
            result(2, 1, 2, 90.0, "Physics"),
            result(3, 1, 4, 80.0, "Physics"),
        ];
        let filter = AnalysisFilter { ids: vec![1], subjects: vec![] };
        let series = grades_over_time(&trainees, &results, &filter);

        assert_eq!(series.len(), 1);
        let grades: Vec<f64> = series[0].points.iter().map(|p| p.grade).collect();
        assert_eq!(grades, vec![90.0, 80.0, 70.0]);
    }

    #[test]
    fn unknown_trainee_gets_fallback_label() {
        let filter = AnalysisFilter { ids: vec![42], subjects: vec![] };
        let series = grades_over_time(&[], &[], &filter);
        assert_eq!(series[0].label, "Trainee #42");
        assert!(series[0].points.is_empty());
    }

    #[test]
    fn trainee_averages_skip_ids_without_results() {
        let trainees = vec![trainee(1, "Ann"), trainee(2, "Bo")];
        let results = vec![result(1, 1, 3, 70.0, "Physics"), result(2, 1, 4, 81.0, "Physics")];
        let filter = AnalysisFilter { ids: vec![1, 2], subjects: vec![] };

        let bars = trainee_averages(&trainees, &results, &filter);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "Ann");
        assert_eq!(bars[0].average, 75.5);
    }

    #[test]
    fn subject_averages_use_exact_subject_match() {
        let results = vec![
            result(1, 1, 3, 60.0, "Art History"),
            result(2, 2, 4, 80.0, "Art History"),
            result(3, 3, 5, 95.0, "History"),
        ];
        let filter = AnalysisFilter {
            ids: vec![],
            subjects: vec!["Art History".to_string(), "Music Theory".to_string()],
        };

        let bars = subject_averages(&results, &filter);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "Art History");
        assert_eq!(bars[0].average, 70.0);
    }
}
