pub mod raised_bed;
pub mod season;
