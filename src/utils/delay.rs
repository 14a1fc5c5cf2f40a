//! 模拟人工操作的随机等待

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

/// 随机等待的范围（毫秒）
pub const HUMAN_DELAY_MS: Range<u64> = 1000..4000;

/// 生成 1~4 秒之间的随机等待时间
pub fn human_delay() -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(HUMAN_DELAY_MS))
}
