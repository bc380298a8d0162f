pub mod record;

pub use record::FailureRecord;
