// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod summary;

pub use counts::{BaseCount, ReadCount};
pub use summary::Summary;
