use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::Instant;

// 0 = 未初始化, 1 = 已初始化
static PERF_INIT: AtomicU8 = AtomicU8::new(0);
static PERF_ENABLED: AtomicBool = AtomicBool::new(false);

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 性能统计开关
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭（可通过环境变量开启）
/// - `RESOURCE_BIOECONOMICS_PERF=1` 强制开启
pub fn perf_enabled() -> bool {
    if PERF_INIT.load(Ordering::Acquire) == 0 {
        let enabled = match std::env::var("RESOURCE_BIOECONOMICS_PERF") {
            Ok(v) => is_true(&v),
            Err(_) => cfg!(debug_assertions),
        };
        PERF_ENABLED.store(enabled, Ordering::Relaxed);
        PERF_INIT.store(1, Ordering::Release);
    }
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 性能统计 Guard：记录阶段耗时
///
/// 使用方式：
/// ```ignore
/// let _perf = resource_bioeconomics::perf::PerfGuard::new("analysis_run");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    enabled: bool,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            enabled: perf_enabled(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            "done"
        );
    }
}
