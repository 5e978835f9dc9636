//! # CSS Quiz
//!
//! 基于静态题库的刷题与真题查阅核心逻辑
//!
//! ## 架构设计
//!
//! 本库按层组织，只向下依赖：
//!
//! ### ① 数据层（Models）
//! - `models/` - 选择题、试卷、主观题记录，以及只读的 `ContentStore`
//! - `loaders` - 一次性加载 JSON / TOML 数据文件，全部成功或整体失败
//!
//! ### ② 业务能力层（Services）
//! - `selection` - 按年份 / 主题 / 难度 / 关键词筛选，测验模式随机抽题
//! - `pagination` - 浏览分页
//! - `paper_service` - 试卷与选择题的关联
//! - `markup` - 解答文本的标记解析和安全输出
//! - `catalog` - 题库统计
//!
//! ### ③ 流程层（Workflow）
//! - `Quiz` - 测验状态机（配置 → 作答 → 完成）
//! - `QuizSession` - 单次测验会话，题目序列开始后固定
//!
//! ### ④ 编排层（Orchestration）
//! - 浏览状态（选择题 / 试卷 / 主观题）和内容检查 `App`
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ContentError};
pub use models::{ContentStore, Dataset, Difficulty, Mcq, Paper, SolvedQuestion};
pub use orchestrator::{App, McqBrowser, PaperBrowser, SolvedBrowser};
pub use services::McqFilters;
pub use workflow::{Quiz, QuizAction, QuizSnapshot, QuizState};
