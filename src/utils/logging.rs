/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// `RUST_LOG` 优先；否则 `verbose` 为真时默认 debug 级别，为假时默认 info 级别。
/// 重复调用不会报错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `content_dir`: 题库目录
pub fn log_startup(content_dir: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库内容检查");
    info!("📁 题库目录: {}", content_dir);
    info!(
        "🕒 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
///
/// # 参数
/// - `mcqs`: 选择题数量
/// - `papers`: 试卷数量
/// - `solved`: 主观题数量
pub fn log_content_loaded(mcqs: usize, papers: usize, solved: usize) {
    info!("✓ 题库加载完成");
    info!("📋 选择题: {} | 试卷: {} | 主观题: {}", mcqs, papers, solved);
}

/// 生成报告文件头
pub fn report_header() -> String {
    format!(
        "{}\n题库内容报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
