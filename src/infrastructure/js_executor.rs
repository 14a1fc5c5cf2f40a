//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"执行 JS"的能力

use std::time::Duration;

use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 eval() 能力
/// - 不认识题目和题解
/// - 不处理提交流程
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于导航、点击等操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    ///
    /// 脚本必须返回一个值，返回 undefined 会被当作错误
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 等待元素出现，超时返回错误
    ///
    /// 由页面内的 MutationObserver 通知，不在 Rust 侧轮询
    pub async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        debug!("等待元素 {} (超时 {:?})", selector, timeout);
        let script = wait_for_selector_script(selector)?;

        let found: bool = tokio::time::timeout(timeout, self.eval_as::<bool>(script))
            .await
            .map_err(|_| anyhow::anyhow!("等待元素 {} 超时 ({:?})", selector, timeout))?
            .with_context(|| format!("等待元素 {} 的脚本执行失败", selector))?;

        if !found {
            anyhow::bail!("元素 {} 未出现", selector);
        }
        Ok(())
    }

    /// 当前页面地址
    pub async fn current_url(&self) -> Result<Option<String>> {
        Ok(self.page.url().await?)
    }
}

/// 构造等待元素出现的脚本，元素出现后 Promise 以 true 兑现
pub fn wait_for_selector_script(selector: &str) -> Result<String> {
    let selector_json = serde_json::to_string(selector)?;
    Ok(format!(
        r#"
        new Promise((resolve) => {{
            const selector = {};
            if (document.querySelector(selector)) {{
                resolve(true);
                return;
            }}
            const observer = new MutationObserver(() => {{
                if (document.querySelector(selector)) {{
                    observer.disconnect();
                    resolve(true);
                }}
            }});
            observer.observe(document.documentElement, {{ childList: true, subtree: true }});
        }})
        "#,
        selector_json
    ))
}
