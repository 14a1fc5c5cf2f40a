//! 固定间隔的重试

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

/// 重试策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最多调用次数（包含第一次）
    pub max_attempts: usize,
    /// 两次调用之间的等待时间
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(5000),
        }
    }
}

/// 按策略重复调用 `action`，直到成功或次数用尽
///
/// 次数用尽时原样返回最后一次的错误，不做包装
pub async fn retry<T, E, F, Fut>(policy: RetryPolicy, mut action: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match action().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                warn!(
                    "第 {}/{} 次尝试失败: {}，{:?} 后重试... 剩余 {} 次",
                    attempt,
                    max_attempts,
                    e,
                    policy.delay,
                    max_attempts - attempt
                );
                sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
