// crates/shared-kernel/src/value_objects/mod.rs
pub mod frequency;

pub use frequency::Frequency;
