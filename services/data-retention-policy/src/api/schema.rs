//! 资源 schema 描述

use serde::Serialize;

pub const SCHEMA_VERSION: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub description: &'static str,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
}

/// 单个嵌套块（`SingleNestedBlock`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: Vec<AttributeSchema>,
    /// 与这些块互斥，且必须恰好出现一个
    pub exactly_one_of: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: &'static str,
    pub version: i64,
    pub attributes: Vec<AttributeSchema>,
    pub blocks: Vec<BlockSchema>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn block(&self, name: &str) -> Option<&BlockSchema> {
        self.blocks.iter().find(|b| b.name == name)
    }
}

fn optional_string(name: &'static str, description: &'static str) -> AttributeSchema {
    AttributeSchema {
        name,
        kind: AttributeType::String,
        description,
        required: false,
        optional: true,
        computed: false,
    }
}

pub(crate) fn data_retention_policy_schema() -> Schema {
    Schema {
        description: "Manages the data retention policy of a single workspace or of an entire organization.",
        version: SCHEMA_VERSION,
        attributes: vec![
            AttributeSchema {
                name: "id",
                kind: AttributeType::String,
                description: "ID of the data retention policy.",
                required: false,
                optional: false,
                computed: true,
            },
            optional_string(
                "organization",
                "Name of the organization. If omitted, organization must be defined in the provider config.",
            ),
            optional_string(
                "workspace_id",
                "ID of the workspace the policy applies to. If omitted, the policy applies to the entire organization.",
            ),
        ],
        blocks: vec![
            BlockSchema {
                name: "delete_older_than",
                description: "Maximum number of days data may exist before it is scheduled for deletion. Cannot be configured together with dont_delete.",
                attributes: vec![AttributeSchema {
                    name: "days",
                    kind: AttributeType::Number,
                    description: "Number of days",
                    required: true,
                    optional: false,
                    computed: false,
                }],
                exactly_one_of: vec!["dont_delete"],
            },
            BlockSchema {
                name: "dont_delete",
                description: "Never delete data. Cannot be configured together with delete_older_than.",
                attributes: Vec::new(),
                exactly_one_of: vec!["delete_older_than"],
            },
        ],
    }
}
