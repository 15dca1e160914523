use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use trainee_dashboard::models::{
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_RESULTS, DEFAULT_PAGE_SIZE, DEFAULT_PASS_THRESHOLD,
    DEFAULT_TRAINEE_COUNT,
};
use trainee_dashboard::{analysis, filter, io, query, report, state, status};
use trainee_dashboard::{DashboardState, RecordStore};

#[derive(Parser)]
#[command(name = "trainee-dashboard")]
#[command(about = "Query, filter and aggregate trainee test results", long_about = None)]
struct Cli {
    /// Dataset snapshot the commands read and write
    #[arg(long, global = true, default_value = "dashboard-data.json")]
    data: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the dataset with freshly generated trainees and results
    Seed {
        #[arg(long, default_value_t = DEFAULT_TRAINEE_COUNT)]
        trainees: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_RESULTS)]
        min_results: usize,
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },
    /// Append generated trainees, continuing ids from the current maximum
    Add {
        #[arg(long, default_value_t = 10)]
        trainees: usize,
    },
    /// Filter test results with a free-text query (id:, name:, subject:, >N, <N, <date)
    Query {
        text: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Show pass/fail status per trainee
    #[command(group(
        ArgGroup::new("visibility")
            .args(["passed_only", "failed_only"])
            .multiple(false)
    ))]
    Monitor {
        #[arg(long, default_value_t = DEFAULT_PASS_THRESHOLD)]
        threshold: f64,
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,
        #[arg(long)]
        names: Option<String>,
        #[arg(long)]
        passed_only: bool,
        #[arg(long)]
        failed_only: bool,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Emit chart data (JSON) for the selected trainees and subjects
    Analysis {
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,
        #[arg(long, value_delimiter = ',')]
        subjects: Vec<String>,
    },
    /// Import test results from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Export test results to a CSV file
    Export {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Generate a markdown performance report
    Report {
        #[arg(long, default_value_t = DEFAULT_PASS_THRESHOLD)]
        threshold: f64,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { trainees, min_results, max_results } => {
            let mut store = RecordStore::new();
            store.generate(trainees, min_results, max_results);
            io::save_store(&store, &cli.data)?;
            println!(
                "Generated {} trainees and {} test results into {}.",
                store.trainees().len(),
                store.results().len(),
                cli.data.display()
            );
        }
        Commands::Add { trainees } => {
            let mut store = io::load_store_or_default(&cli.data)?;
            store.add_more(trainees, DEFAULT_MIN_RESULTS, DEFAULT_MAX_RESULTS);
            io::save_store(&store, &cli.data)?;
            println!(
                "Added {trainees} trainees ({} total, {} test results).",
                store.trainees().len(),
                store.results().len()
            );
        }
        Commands::Query { text, page_size, page } => {
            let store = io::load_store(&cli.data)?;
            let mut session = DashboardState::new();
            session.set_data_filter(query::parse(&text));
            session.update_data_pagination(page_size, page);

            let matched = filter::apply_data_filter(store.results(), &session.data_filter);
            println!(
                "{} of {} results match (page {}, {} per page):",
                matched.len(),
                store.results().len(),
                page,
                page_size
            );
            for result in state::page(&matched, &session.data_pagination) {
                let name = result.trainee_name.as_deref().unwrap_or("-");
                println!(
                    "- #{} trainee {} ({name}) scored {} in {} on {}",
                    result.id, result.trainee_id, result.grade, result.subject, result.date
                );
            }
            println!("Query restores as: {:?}", query::format(&session.data_filter));
        }
        Commands::Monitor { threshold, ids, names, passed_only, failed_only, page_size, page } => {
            let store = io::load_store(&cli.data)?;
            let mut session = DashboardState::new();
            session.update_monitor_ids(ids);
            if let Some(names) = names {
                session.update_monitor_names(names);
            }
            if passed_only {
                session.update_monitor_failed(false);
            }
            if failed_only {
                session.update_monitor_passed(false);
            }
            session.update_monitor_pagination(page_size, page);

            let statuses = status::trainee_statuses(store.trainees(), store.results(), threshold);
            let matched = filter::apply_monitor_filter(&statuses, &session.monitor_filter);
            let visible = state::page(&matched, &session.monitor_pagination);

            if visible.is_empty() {
                println!("No trainees match the monitor filter.");
                return Ok(());
            }
            for entry in visible {
                println!(
                    "- {} (id {}) average {:.1} across {} exams: {}",
                    entry.name,
                    entry.id,
                    entry.average,
                    entry.exams,
                    if entry.passed { "passed" } else { "failed" }
                );
            }
        }
        Commands::Analysis { ids, subjects } => {
            let store = io::load_store(&cli.data)?;
            let mut session = DashboardState::new();
            session.update_analysis_ids(ids);
            session.update_analysis_subjects(subjects);

            let selection = &session.analysis_filter;
            let payload = serde_json::json!({
                "grades_over_time":
                    analysis::grades_over_time(store.trainees(), store.results(), selection),
                "trainee_averages":
                    analysis::trainee_averages(store.trainees(), store.results(), selection),
                "subject_averages": analysis::subject_averages(store.results(), selection),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Commands::Import { csv } => {
            let mut store = io::load_store_or_default(&cli.data)?;
            let inserted = io::import_results_csv(&mut store, &csv)?;
            io::save_store(&store, &cli.data)?;
            println!("Inserted {inserted} test results from {}.", csv.display());
        }
        Commands::Export { csv } => {
            let store = io::load_store(&cli.data)?;
            let exported = io::export_results_csv(store.results(), &csv)?;
            println!("Exported {exported} test results to {}.", csv.display());
        }
        Commands::Report { threshold, out } => {
            let store = io::load_store(&cli.data)?;
            let report = report::build_report(store.trainees(), store.results(), threshold);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
