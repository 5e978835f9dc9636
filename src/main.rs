use anyhow::{Context, Result};
use css_quiz::utils::logging;
use css_quiz::{App, Config};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let (config, fallbacks) = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);
    for e in &fallbacks {
        warn!("⚠️ {}，使用默认值", e);
    }

    let content_dir = config.content_dir.clone();
    let app = App::initialize(config)
        .await
        .with_context(|| format!("题库加载失败: {}", content_dir))?;

    app.run().await.context("生成内容报告失败")?;

    Ok(())
}
