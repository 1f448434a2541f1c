//! 通用工具函数

use uuid::Uuid;

/// 远端数据保留策略 ID 前缀
pub const POLICY_ID_PREFIX: &str = "drp-";

/// 生成新的策略 ID（`drp-` + 16 位随机字符）
pub fn new_policy_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("{}{}", POLICY_ID_PREFIX, &raw[..16])
}
