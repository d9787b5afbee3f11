pub mod dms;
pub mod messages;
