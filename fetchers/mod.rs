pub mod comments;
pub mod records;
