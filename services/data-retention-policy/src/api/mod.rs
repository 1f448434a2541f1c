//! 面向宿主框架的资源接口

mod diagnostics;
mod model;
mod plan;
mod resource;
mod schema;

pub use diagnostics::{Lifecycle, into_diagnostic};
pub use model::{DeleteOlderThanBlock, DontDeleteBlock, PolicyState};
pub use plan::{PlanModification, modify_plan};
pub use resource::{DataRetentionPolicyResource, ReadOutcome};
pub use schema::{AttributeSchema, AttributeType, BlockSchema, SCHEMA_VERSION, Schema};
