// Core of the trainee results dashboard: record store, filter state, query
// parsing, filter evaluation and status aggregation. The rendering layer (or
// the CLI in main.rs) consumes these as plain data in, plain data out.

pub mod analysis;
pub mod filter;
pub mod generate;
pub mod io;
pub mod models;
pub mod query;
pub mod report;
pub mod state;
pub mod status;
pub mod store;

pub use state::DashboardState;
pub use store::RecordStore;
