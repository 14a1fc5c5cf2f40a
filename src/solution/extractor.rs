//! 代码块截取器
//!
//! 从起始标记开始逐字符扫描，维护花括号深度计数，
//! 找到深度回到 0 的位置后再寻找紧随其后的语句终止符。
//!
//! 注意：扫描是纯词法的，不识别字符串或字符字面量，
//! 字面量中未转义的花括号会打乱深度计数。

use std::fmt;

use tracing::debug;

use crate::error::ExtractError;

/// 默认的解题类起始标记
pub const SOLUTION_MARKER: &str = "class Solution";

/// 类声明结尾的语句终止符
pub const STATEMENT_TERMINATOR: char = ';';

/// 截取出的代码块
///
/// 从起始标记到终止符（包含）的子串，已去除首尾空白
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock(String);

impl ExtractedBlock {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtractedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 截取 `start_marker` 第一次出现处开始的完整代码块
///
/// # 参数
/// - `text`: 原始源文件内容
/// - `start_marker`: 起始标记（如 `class Solution`）
///
/// # 返回
/// 返回从标记开始、到终止符为止的代码块
///
/// # 错误
/// - 找不到起始标记：`ExtractError::NotFound`
/// - 扫描到文件末尾深度仍未归零：`ExtractError::Unbalanced`
/// - 右花括号之后没有紧跟终止符：`ExtractError::MissingTerminator`
pub fn extract(text: &str, start_marker: &str) -> Result<ExtractedBlock, ExtractError> {
    let start = text.find(start_marker).ok_or_else(|| ExtractError::NotFound {
        marker: start_marker.to_string(),
    })?;
    debug!("起始标记位于偏移 {}", start);

    let body_end = find_body_end(text, start)?;
    let terminator = find_terminator(text, body_end)?;

    let block = text[start..=terminator].trim().to_string();
    debug!("截取代码块: {}..={} ({} 字节)", start, terminator, block.len());

    Ok(ExtractedBlock(block))
}

/// 返回深度回到 0 时右花括号的字节偏移
fn find_body_end(text: &str, start: usize) -> Result<usize, ExtractError> {
    let mut depth: i64 = 0;
    let mut opened = false;

    // 花括号都是 ASCII，按字节扫描得到的偏移一定落在字符边界上
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => {
                depth += 1;
                opened = true;
            }
            b'}' => {
                depth -= 1;
                if opened && depth == 0 {
                    return Ok(start + offset);
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::Unbalanced { depth })
}

/// 右花括号之后只允许出现空白，然后必须是终止符
fn find_terminator(text: &str, body_end: usize) -> Result<usize, ExtractError> {
    let rest = &text[body_end + 1..];
    match rest.char_indices().find(|(_, c)| !c.is_whitespace()) {
        Some((offset, c)) if c == STATEMENT_TERMINATOR => Ok(body_end + 1 + offset),
        _ => Err(ExtractError::MissingTerminator {
            terminator: STATEMENT_TERMINATOR,
        }),
    }
}
