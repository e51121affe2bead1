//! Fixture generation logic: the three format strategies and the dispatcher over them.

mod dispatcher;
pub mod elimination;
mod export;
pub mod groups;
pub mod league;
mod rounds;

pub use dispatcher::FixtureGenerator;
pub use export::{write_schedule_csv, ExportError};
