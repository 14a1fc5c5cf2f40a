//! 题解代码处理模块
//!
//! 从原始源文件中截取第一个完整的解题类，并清理注释和空行
//!
//! - `extractor` - 基于花括号配平的代码块截取
//! - `normalizer` - 注释与空行清理

pub mod extractor;
pub mod normalizer;

pub use extractor::{extract, ExtractedBlock, SOLUTION_MARKER, STATEMENT_TERMINATOR};
pub use normalizer::{normalize, NormalizedCode};
