pub mod initialize;
pub mod journal;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod store;
