pub mod calendar;
pub mod capture;
pub mod log;
pub mod session;
pub mod station;
pub mod workflow;
