use std::fmt::Write;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{SubjectSummary, TestResult, Trainee, WeekTrend};
use crate::status;

pub fn summarize_by_subject(results: &[TestResult]) -> Vec<SubjectSummary> {
    let mut map: std::collections::HashMap<String, (usize, f64)> =
        std::collections::HashMap::new();

    for result in results {
        let entry = map.entry(result.subject.clone()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += result.grade;
    }

    let mut summaries: Vec<SubjectSummary> = map
        .into_iter()
        .map(|(subject, (count, total_grade))| SubjectSummary {
            subject,
            count,
            avg_grade: if count == 0 { 0.0 } else { total_grade / count as f64 },
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.subject.cmp(&b.subject)));
    summaries
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Groups results into calendar weeks (Monday start), most recent first.
pub fn weekly_trends(results: &[TestResult]) -> Vec<WeekTrend> {
    let mut map: std::collections::HashMap<NaiveDate, Vec<&TestResult>> =
        std::collections::HashMap::new();

    for result in results {
        map.entry(week_start(result.date)).or_default().push(result);
    }

    let mut trends: Vec<WeekTrend> = map
        .into_iter()
        .map(|(week_start, week_results)| {
            let total: f64 = week_results.iter().map(|r| r.grade).sum();
            let mut trainee_ids: Vec<u32> =
                week_results.iter().map(|r| r.trainee_id).collect();
            trainee_ids.sort_unstable();
            trainee_ids.dedup();
            WeekTrend {
                week_start,
                result_count: week_results.len(),
                avg_grade: total / week_results.len() as f64,
                trainee_count: trainee_ids.len(),
            }
        })
        .collect();

    trends.sort_by(|a, b| b.week_start.cmp(&a.week_start));
    trends
}

pub fn build_report(trainees: &[Trainee], results: &[TestResult], threshold: f64) -> String {
    let statuses = status::trainee_statuses(trainees, results, threshold);
    let summaries = summarize_by_subject(results);
    let trends = weekly_trends(results);

    let mut output = String::new();

    let _ = writeln!(output, "# Trainee Performance Report");
    let _ = writeln!(
        output,
        "Covers {} trainees and {} test results (pass threshold {})",
        trainees.len(),
        results.len(),
        threshold
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Subject Mix");

    if summaries.is_empty() {
        let _ = writeln!(output, "No test results recorded.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(
                output,
                "- {}: {} results (avg grade {:.1})",
                summary.subject, summary.count, summary.avg_grade
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Pass / Fail");

    if statuses.is_empty() {
        let _ = writeln!(output, "No trainees with test results.");
    } else {
        let passed = statuses.iter().filter(|s| s.passed).count();
        let _ = writeln!(output, "{passed} of {} trainees passing.", statuses.len());

        let mut ranked = statuses.clone();
        ranked.sort_by(|a, b| {
            b.average.partial_cmp(&a.average).unwrap_or(std::cmp::Ordering::Equal)
        });
        for entry in ranked.iter().take(10) {
            let _ = writeln!(
                output,
                "- {} (id {}) average {:.1} across {} exams",
                entry.name, entry.id, entry.average, entry.exams
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weekly Trend");

    if trends.is_empty() {
        let _ = writeln!(output, "No test results recorded.");
    } else {
        for trend in trends.iter().take(8) {
            let _ = writeln!(
                output,
                "- week of {}: {} results, avg grade {:.1}, {} trainees",
                trend.week_start, trend.result_count, trend.avg_grade, trend.trainee_count
            );
        }
    }

    let mut recent = results.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Results");

    if recent.is_empty() {
        let _ = writeln!(output, "No test results recorded.");
    } else {
        for result in recent.iter().take(5) {
            let name = result
                .trainee_name
                .clone()
                .unwrap_or_else(|| format!("Trainee #{}", result.trainee_id));
            let _ = writeln!(
                output,
                "- {} scored {} in {} on {}",
                name, result.grade, result.subject, result.date
            );
        }
    }

    output
}
