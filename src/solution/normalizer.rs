//! 注释与空行清理

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// 清理后的代码，可直接粘贴到编辑器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCode(String);

impl NormalizedCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?mR)//.*$").expect("行注释正则无效"))
}

fn block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*[\s\S]*?\*/").expect("块注释正则无效"))
}

fn blank_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*[\r\n]").expect("空行正则无效"))
}

/// 删除行注释、块注释和空行，并去除首尾空白
///
/// 空行清理必须放在两种注释清理之后，注释删除后才会留下空行。
/// 输入全是注释时返回空代码，由调用方决定是否视为失败。
pub fn normalize(code: &str) -> NormalizedCode {
    let without_line = line_comment().replace_all(code, "");
    let without_block = block_comment().replace_all(&without_line, "");
    let compact = blank_line().replace_all(&without_block, "");

    NormalizedCode(compact.trim().to_string())
}
