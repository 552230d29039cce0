pub mod bundle_writer;
pub mod response;
pub mod selector;
pub mod sorter;
