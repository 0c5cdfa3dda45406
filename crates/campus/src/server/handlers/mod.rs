pub mod query;
pub mod records;
pub mod speech;
pub mod status;
