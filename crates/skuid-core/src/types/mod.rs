//! The metadata categories an archive or local tree is organized by.

mod category;

pub use category::Category;
