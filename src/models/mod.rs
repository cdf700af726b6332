pub mod journal;
pub mod meal;
pub mod participant;
pub mod session;
pub mod summary;
