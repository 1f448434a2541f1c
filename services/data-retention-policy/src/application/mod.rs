//! 应用层

mod resolver;

pub use resolver::{PolicyResolver, variant_from_choice};
