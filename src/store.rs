use serde::{Deserialize, Serialize};

use crate::generate::{generate_test_results, generate_trainees};
use crate::models::{TestResult, Trainee};

/// Canonical owner of the trainee and test-result collections. All mutation
/// goes through the methods here so every reader observes a consistent
/// post-mutation view. Operations are total: a missing id on update or delete
/// is a silent no-op, and add performs no uniqueness check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    trainees: Vec<Trainee>,
    results: Vec<TestResult>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Replaces the entire dataset with freshly generated records. Trainee
    /// ids restart from 1.
    pub fn generate(&mut self, count: usize, min_results: usize, max_results: usize) {
        self.trainees = generate_trainees(count, 1);
        self.results = generate_test_results(&self.trainees, min_results, max_results, 1);
    }

    /// Appends `count` generated trainees, continuing ids from the current
    /// maximum, without touching existing records.
    pub fn add_more(&mut self, count: usize, min_results: usize, max_results: usize) {
        let next_trainee_id = self.trainees.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let next_result_id = self.results.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let new_trainees = generate_trainees(count, next_trainee_id);
        let new_results =
            generate_test_results(&new_trainees, min_results, max_results, next_result_id);
        self.trainees.extend(new_trainees);
        self.results.extend(new_results);
    }

    pub fn trainees(&self) -> &[Trainee] {
        &self.trainees
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn trainee_by_id(&self, id: u32) -> Option<&Trainee> {
        self.trainees.iter().find(|t| t.id == id)
    }

    pub fn results_for_trainee(&self, trainee_id: u32) -> Vec<&TestResult> {
        self.results.iter().filter(|r| r.trainee_id == trainee_id).collect()
    }

    pub fn add_trainee(&mut self, trainee: Trainee) {
        self.trainees.push(trainee);
    }

    /// Replace-by-id. Leaves the store untouched when no trainee carries the
    /// incoming id.
    pub fn update_trainee(&mut self, updated: Trainee) {
        if let Some(existing) = self.trainees.iter_mut().find(|t| t.id == updated.id) {
            *existing = updated;
        }
    }

    /// Removes the trainee and cascades to every test result referencing it.
    pub fn delete_trainee(&mut self, id: u32) {
        self.trainees.retain(|t| t.id != id);
        self.results.retain(|r| r.trainee_id != id);
    }

    pub fn add_result(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn update_result(&mut self, updated: TestResult) {
        if let Some(existing) = self.results.iter_mut().find(|r| r.id == updated.id) {
            *existing = updated;
        }
    }

    pub fn delete_result(&mut self, id: u32) {
        self.results.retain(|r| r.id != id);
    }
}
