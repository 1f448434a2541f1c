//! retention-telemetry - 可观测性库

use metrics::counter;
use retention_config::TelemetryConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 远端调用计数指标名
pub const REMOTE_CALLS_TOTAL: &str = "data_retention_policy_remote_calls_total";

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // 宿主进程可能已经装好了 subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// 初始化 JSON 格式的 tracing
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// 按配置选择日志格式
pub fn init_from_config(config: &TelemetryConfig) {
    if config.json {
        init_tracing_json(&config.log_level);
    } else {
        init_tracing(&config.log_level);
    }
}

/// 记录一次远端调用
pub fn record_remote_call(operation: &'static str, scope_kind: &'static str, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("scope", scope_kind.to_string()),
        ("success", success.to_string()),
    ];

    counter!(REMOTE_CALLS_TOTAL, &labels).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_from_config(&TelemetryConfig::default());
        init_tracing_json("debug");
        tracing::info!("telemetry initialized twice without panicking");
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        record_remote_call("read_policy_choice", "organization", true);
        record_remote_call("set_dont_delete", "workspace", false);
    }
}
