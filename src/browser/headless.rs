use std::path::Path;

use chromiumoxide::cdp::browser_protocol::network::CookieParam;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::clients::leetcode_client::SESSION_COOKIE_NAME;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::problem::LEETCODE_BASE_URL;

/// 固定的桌面版 Chrome User-Agent
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Cookie 所属域名
const COOKIE_DOMAIN: &str = "leetcode.com";

/// 浏览器启动参数
fn launch_args() -> Vec<String> {
    vec![
        "--no-sandbox".to_string(),
        "--disable-setuid-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-accelerated-2d-canvas".to_string(),
        "--no-first-run".to_string(),
        "--no-zygote".to_string(),
        "--disable-gpu".to_string(),
        // 隐藏自动化特征
        "--disable-blink-features=AutomationControlled".to_string(),
        format!("--user-agent={}", BROWSER_USER_AGENT),
    ]
}

/// 启动浏览器，创建唯一的页面并写入会话 Cookie
///
/// # 返回
/// 返回 (浏览器, 页面, 事件处理任务)，由调用方负责通过 `close_browser` 释放
pub async fn launch_browser(config: &Config) -> AppResult<(Browser, Page, JoinHandle<()>)> {
    info!("🚀 启动浏览器...");

    let mut builder = BrowserConfig::builder().args(launch_args());
    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };
    if let Some(executable) = &config.chrome_executable {
        debug!("使用浏览器: {}", executable);
        builder = builder.chrome_executable(Path::new(executable));
    }

    let browser_config = builder.build().map_err(|e| {
        error!("配置浏览器失败: {}", e);
        AppError::browser(format!("配置浏览器失败: {}", e))
    })?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        AppError::from(e)
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = match browser.new_page("about:blank").await {
        Ok(page) => page,
        Err(e) => {
            error!("创建页面失败: {}", e);
            close_browser(browser, handler_task).await;
            return Err(e.into());
        }
    };

    if let Err(e) = set_session_cookie(&page, &config.session_cookie).await {
        error!("写入会话 Cookie 失败: {}", e);
        close_browser(browser, handler_task).await;
        return Err(e);
    }

    Ok((browser, page, handler_task))
}

async fn set_session_cookie(page: &Page, session_cookie: &str) -> AppResult<()> {
    let cookie = CookieParam::builder()
        .name(SESSION_COOKIE_NAME)
        .value(session_cookie)
        // 页面还停在 about:blank，必须显式指定 Cookie 所属地址
        .url(LEETCODE_BASE_URL)
        .domain(COOKIE_DOMAIN)
        .path("/")
        .build()
        .map_err(|e| AppError::browser(format!("构造 Cookie 失败: {}", e)))?;

    page.set_cookie(cookie).await?;
    debug!("已写入 {} Cookie", SESSION_COOKIE_NAME);
    Ok(())
}

/// 关闭浏览器并等待事件任务结束
///
/// 任何一步失败都只记录日志，不向上传播
pub async fn close_browser(mut browser: Browser, handler_task: JoinHandle<()>) {
    if let Err(e) = browser.close().await {
        warn!("关闭浏览器失败: {}", e);
    }
    if let Err(e) = browser.wait().await {
        warn!("等待浏览器进程退出失败: {}", e);
    }
    handler_task.abort();
    info!("🔒 浏览器已关闭");
}
