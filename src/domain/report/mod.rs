pub mod args;
pub mod names;
pub mod planner;
pub mod service;
pub mod source;
pub mod time_span;
