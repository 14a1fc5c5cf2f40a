//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::config::Config;
use crate::models::ProblemRef;
use crate::solution::NormalizedCode;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 LeetCode 每日一题自动提交 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "🖥️ 浏览器模式: {}",
        if config.headless { "无头" } else { "有界面" }
    );
    info!("{}", "=".repeat(60));
}

/// 记录每日一题信息
pub fn log_problem(problem: &ProblemRef) {
    info!("✓ 获取到每日一题: {} - {}", problem.title, problem.problem_url());
}

/// 打印截取出的题解代码
pub fn log_extracted_code(code: &NormalizedCode) {
    info!("{}", "=".repeat(33));
    info!("截取到的 C++ 题解代码:");
    info!("{}", "=".repeat(33));
    for line in code.as_str().lines() {
        info!("{}", line);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
