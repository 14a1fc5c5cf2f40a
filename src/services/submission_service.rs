//! 提交服务 - 业务能力层
//!
//! 驱动浏览器把代码写入 LeetCode 编辑器并点击提交。
//! 浏览器在本服务内启动，无论成功失败都会在返回前关闭。

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::JsExecutor;
use crate::solution::NormalizedCode;
use crate::utils::{human_delay, retry, RetryPolicy};

/// 编辑器容器
pub const EDITOR_SELECTOR: &str = ".monaco-editor";
/// 提交按钮
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"[data-e2e-locator="console-submit-button"]"#;
/// 被重定向到登录页时地址中会出现的片段
const LOGIN_URL_MARKER: &str = "accounts";

fn problem_url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https://leetcode\.com/.*$").expect("题目地址正则无效"))
}

/// 提交服务
///
/// 职责：
/// - 独占一次运行中唯一的浏览器、上下文和页面
/// - 注入代码并点击提交
/// - 保证浏览器在每条退出路径上都被关闭
pub struct SubmissionService {
    config: Config,
    editor_retry: RetryPolicy,
}

impl SubmissionService {
    /// 创建新的提交服务
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            editor_retry: RetryPolicy::default(),
        }
    }

    /// 提交代码
    ///
    /// # 参数
    /// - `code`: 清理后的题解代码
    /// - `problem_url`: 题目页面地址
    pub async fn submit(&self, code: &NormalizedCode, problem_url: &str) -> AppResult<()> {
        info!("📤 正在提交代码到 LeetCode...");
        validate_problem_url(problem_url)?;

        let (browser, page, handler_task) = browser::launch_browser(&self.config).await?;
        let executor = JsExecutor::new(page);

        let result = self.drive(&executor, code, problem_url).await;
        if let Err(e) = &result {
            error!("❌ 提交代码到 LeetCode 失败: {:#}", e);
            log_page_diagnostics(&executor).await;
        }

        browser::close_browser(browser, handler_task).await;

        result.map_err(|e| match e.downcast::<AppError>() {
            Ok(app_error) => app_error,
            Err(other) => AppError::submission(&other),
        })
    }

    /// 导航、等待编辑器、注入代码并点击提交
    async fn drive(&self, executor: &JsExecutor, code: &NormalizedCode, problem_url: &str) -> Result<()> {
        info!("正在打开: {}", problem_url);
        executor
            .page()
            .goto(problem_url)
            .await
            .with_context(|| format!("导航到 {} 失败", problem_url))?;
        info!("✓ 页面打开成功");

        let current_url = executor.current_url().await?.unwrap_or_default();
        debug!("当前页面地址: {}", current_url);
        if current_url.contains(LOGIN_URL_MARKER) {
            warn!("被重定向到登录页，请检查会话 Cookie");
            return Err(AppError::InvalidSession {
                reason: "会话 Cookie 无效或已过期（被重定向到登录页）".to_string(),
            }
            .into());
        }

        let editor_timeout = Duration::from_secs(self.config.editor_timeout_secs);
        retry(self.editor_retry, move || async move {
            info!("等待编辑器加载...");
            executor.wait_for_selector(EDITOR_SELECTOR, editor_timeout).await?;
            info!("✓ 编辑器加载完成");
            Ok::<(), anyhow::Error>(())
        })
        .await?;

        executor
            .eval("window.scrollTo(0, document.body.scrollHeight); true")
            .await
            .context("滚动页面失败")?;

        // 注入前后使用同一个随机间隔
        let delay = human_delay();
        debug!("随机等待 {:?}", delay);
        sleep(delay).await;

        let injected: bool = executor
            .eval_as::<bool>(build_inject_script(code)?)
            .await
            .context("注入代码失败")?;
        if !injected {
            anyhow::bail!("页面中没有可用的编辑器模型");
        }
        info!("✓ 代码已写入编辑器");

        sleep(delay).await;

        info!("点击提交按钮...");
        executor
            .page()
            .find_element(SUBMIT_BUTTON_SELECTOR)
            .await
            .context("找不到提交按钮")?
            .click()
            .await
            .context("点击提交按钮失败")?;

        sleep(Duration::from_secs(self.config.submit_settle_secs)).await;
        info!("✅ 代码提交成功");

        Ok(())
    }
}

/// 校验题目地址必须在 leetcode.com 下
pub fn validate_problem_url(url: &str) -> AppResult<()> {
    if problem_url_pattern().is_match(url) {
        Ok(())
    } else {
        Err(AppError::Submission {
            message: format!("无效的 LeetCode 地址: {}", url),
        })
    }
}

/// 构造把代码写入第一个编辑器模型的脚本，返回是否写入成功
pub fn build_inject_script(code: &NormalizedCode) -> Result<String> {
    let code_json = serde_json::to_string(code.as_str())?;
    Ok(format!(
        r#"
        (() => {{
            if (typeof monaco === "undefined") {{
                return false;
            }}
            const models = monaco.editor.getModels();
            if (!models.length) {{
                return false;
            }}
            models[0].setValue({});
            return true;
        }})()
        "#,
        code_json
    ))
}

/// 失败时记录页面状态，便于排查
async fn log_page_diagnostics(executor: &JsExecutor) {
    match executor.current_url().await {
        Ok(url) => warn!("失败时页面地址: {}", url.unwrap_or_default()),
        Err(e) => warn!("无法获取页面地址: {}", e),
    }
    if let Ok(Some(title)) = executor.page().get_title().await {
        warn!("失败时页面标题: {}", title);
    }
}
