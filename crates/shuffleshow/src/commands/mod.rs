pub mod completion;
pub mod list;
