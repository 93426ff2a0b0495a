pub mod captain;
pub mod log;
