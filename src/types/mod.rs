pub mod entry;
pub mod segment;
pub mod timeline;
pub mod window;
