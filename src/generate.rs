use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;

use crate::models::{TestResult, Trainee};

/// Canonical subject vocabulary. Also consulted by the query parser to decide
/// whether a general-search token should match against subjects.
pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
    "Literature",
    "History",
    "Geography",
    "Economics",
    "Statistics",
    "Foreign Languages",
    "Art History",
    "Music Theory",
    "Psychology",
    "Philosophy",
];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Susan", "Richard", "Jessica", "Joseph", "Sarah", "Thomas", "Karen",
    "Charles", "Nancy", "Christopher", "Lisa", "Daniel", "Margaret", "Matthew", "Betty",
    "Anthony", "Sandra", "Mark", "Ashley", "Donald", "Dorothy", "Steven", "Kimberly", "Paul",
    "Emily", "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda",
    "Brian", "Melissa", "George", "Deborah", "Timothy", "Stephanie", "Ronald", "Rebecca",
    "Edward", "Laura", "Jason", "Sharon", "Jeffrey", "Cynthia", "Ryan", "Kathleen", "Jacob",
    "Amy", "Gary", "Shirley",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia",
    "Martinez", "Robinson", "Clark", "Rodriguez", "Lewis", "Lee", "Walker", "Hall", "Allen",
    "Young", "Hernandez", "King", "Wright", "Lopez", "Hill", "Scott", "Green", "Adams", "Baker",
    "Gonzalez", "Nelson", "Carter", "Mitchell", "Perez", "Roberts", "Turner", "Phillips",
    "Campbell", "Parker", "Evans", "Edwards", "Collins", "Stewart", "Sanchez", "Morris",
    "Rogers", "Reed", "Cook", "Morgan", "Bell", "Murphy", "Bailey", "Rivera", "Cooper",
    "Richardson", "Cox",
];

const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "San Francisco", "Charlotte", "Indianapolis", "Seattle", "Denver", "Washington", "Boston",
    "El Paso", "Nashville", "Detroit", "Oklahoma City", "Portland", "Las Vegas", "Memphis",
    "Louisville", "Baltimore", "Milwaukee", "Albuquerque", "Tucson", "Fresno", "Sacramento",
    "Long Beach", "Kansas City", "Mesa", "Atlanta", "Colorado Springs", "Raleigh", "Omaha",
    "Miami", "Oakland", "Tulsa", "Minneapolis", "Cleveland", "Wichita", "Arlington",
    "New Orleans",
];

const COUNTRIES: &[&str] = &[
    "United States", "Canada", "United Kingdom", "Australia", "Germany", "France", "Spain",
    "Italy", "Japan", "China", "India", "Brazil", "Mexico", "South Africa", "Russia", "Sweden",
    "Netherlands", "Switzerland", "Denmark", "Norway", "Finland", "Ireland", "New Zealand",
    "Singapore", "South Korea",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "outlook.com", "hotmail.com", "icloud.com", "protonmail.com",
];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Park", "Lake", "Hill",
    "River", "View", "Highland", "Forest", "Sunset", "Spring", "Meadow", "Valley",
];

const STREET_TYPES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Dr", "Ln", "Way", "Pl", "Ct"];

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Uniform random date in `[start, end]`; collapses to `start` when the
/// interval is empty or inverted.
fn random_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}

fn random_email<R: Rng>(rng: &mut R, name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut parts = lowered.split_whitespace();
    let first = parts.next().unwrap_or("trainee");
    let number = rng.gen_range(1..=999);
    let domain = pick(rng, EMAIL_DOMAINS);
    match parts.next() {
        Some(last) => format!("{first}.{last}{number}@{domain}"),
        None => format!("{first}{number}@{domain}"),
    }
}

fn random_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(1..=9999),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_TYPES)
    )
}

/// Generates `count` trainees with ids assigned densely from `start_id`.
/// Joining dates fall between 2020-01-01 and today.
pub fn generate_trainees(count: usize, start_id: u32) -> Vec<Trainee> {
    let mut rng = rand::thread_rng();
    let earliest = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let today = Utc::now().date_naive();

    (0..count)
        .map(|offset| {
            let name = format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES));
            let email = random_email(&mut rng, &name);
            Trainee {
                id: start_id + offset as u32,
                name,
                email,
                date_joined: random_date(&mut rng, earliest, today),
                address: random_address(&mut rng),
                city: pick(&mut rng, CITIES).to_string(),
                country: pick(&mut rng, COUNTRIES).to_string(),
                zip: rng.gen_range(10000..=99999).to_string(),
            }
        })
        .collect()
}

/// Generates between `min_results` and `max_results` test results for each
/// trainee, dated between one week after the trainee joined and today, then
/// sorts the whole batch by date, most recent first. Result ids continue from
/// `start_id`.
pub fn generate_test_results(
    trainees: &[Trainee],
    min_results: usize,
    max_results: usize,
    start_id: u32,
) -> Vec<TestResult> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let (min_results, max_results) = (min_results.min(max_results), min_results.max(max_results));
    let mut next_id = start_id;
    let mut results = Vec::new();

    for trainee in trainees {
        let earliest = trainee.date_joined + Duration::days(7);
        let count = rng.gen_range(min_results..=max_results);
        for _ in 0..count {
            results.push(TestResult {
                id: next_id,
                trainee_id: trainee.id,
                trainee_name: Some(trainee.name.clone()),
                date: random_date(&mut rng, earliest, today),
                grade: rng.gen_range(40..=100) as f64,
                subject: pick(&mut rng, SUBJECTS).to_string(),
            });
            next_id += 1;
        }
    }

    results.sort_by(|a, b| b.date.cmp(&a.date));
    results
}
