pub mod clock;
pub mod schedule;
