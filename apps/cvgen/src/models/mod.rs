pub mod builtin;
pub mod links;
pub mod record;
pub mod skills;

pub use record::Record;
