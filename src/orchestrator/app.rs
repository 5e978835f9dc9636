//! 题库内容检查 - 编排层
//!
//! ## 职责
//!
//! 1. **加载题库**：从配置目录一次性加载三个数据集，任何校验失败都整体失败
//! 2. **统计汇总**：总题数、年份、主题分布
//! 3. **试卷核对**：列出每张试卷关联的选择题数量，标出暂未上线的试卷
//! 4. **输出报告**：写入报告文件并打印到日志

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{load_content_dir, ContentStore};
use crate::orchestrator::PaperBrowser;
use crate::services::Catalog;
use crate::utils::logging::{log_content_loaded, log_startup, report_header};
use std::fmt::Write as _;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    store: ContentStore,
}

/// 报告统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportStats {
    pub papers: usize,
    pub papers_available: usize,
    pub papers_pending: usize,
}

impl App {
    /// 初始化应用并加载题库
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config.content_dir);

        info!("\n📁 正在加载题库...");
        let store = load_content_dir(&config.content_dir).await?;

        log_content_loaded(
            store.mcqs().len(),
            store.papers().count(),
            store.solved_questions().len(),
        );

        Ok(Self::with_store(config, store))
    }

    /// 使用已加载的题库构造
    pub fn with_store(config: Config, store: ContentStore) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// 生成报告并写入文件
    pub async fn run(&self) -> AppResult<ReportStats> {
        let (report, stats) = self.build_report();

        tokio::fs::write(&self.config.report_file, &report)
            .await
            .map_err(|e| AppError::file_write_failed(&self.config.report_file, e))?;

        info!("{}", "=".repeat(60));
        info!(
            "✅ 试卷 {} 张，已有选择题 {} 张，暂未上线 {} 张",
            stats.papers, stats.papers_available, stats.papers_pending
        );
        info!("{}", "=".repeat(60));
        info!("\n报告已保存至: {}", self.config.report_file);

        Ok(stats)
    }

    /// 生成报告文本
    pub fn build_report(&self) -> (String, ReportStats) {
        let catalog = Catalog::from_store(&self.store);
        let papers = PaperBrowser::new(&self.store);
        let mut stats = ReportStats::default();
        let mut report = report_header();

        let _ = writeln!(report, "选择题总数: {}", catalog.total_mcqs);
        let _ = writeln!(report, "试卷总数: {}", catalog.total_papers);
        let _ = writeln!(report, "主观题总数: {}", catalog.total_solved);
        let _ = writeln!(
            report,
            "年份: {}",
            catalog
                .years
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let _ = writeln!(report, "\n主题分布:");
        for (topic, count) in &catalog.topic_counts {
            let _ = writeln!(report, "  {:<40} {}", topic, count);
        }

        let _ = writeln!(report, "\n试卷:");
        for group in papers.year_groups() {
            let _ = writeln!(report, "  [{}]", group.year);
            for paper in &group.papers {
                stats.papers += 1;
                let count = papers.mcq_count(paper);
                if count == 0 {
                    stats.papers_pending += 1;
                    warn!("⚠️ 试卷 {} 暂无选择题", paper.id);
                    let _ = writeln!(report, "    {} - 暂未上线", paper.title);
                } else {
                    stats.papers_available += 1;
                    let _ = writeln!(report, "    {} - {} 道选择题", paper.title, count);
                }
            }
        }

        (report, stats)
    }
}
