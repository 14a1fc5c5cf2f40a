use std::process::ExitCode;

use leetcode_daily_submit::utils::logger;
use leetcode_daily_submit::{App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(config.as_ref().map(|c| c.verbose_logging).unwrap_or(false));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 初始化并运行应用
    let app = match App::initialize(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 初始化失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    app.run().await.exit_code()
}
