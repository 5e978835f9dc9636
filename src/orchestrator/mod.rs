//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 题库内容检查
//! - 加载题库、输出统计报告
//!
//! ### `mcq_browser` / `paper_browser` / `solved_browser` - 浏览状态
//! - 只持有筛选条件、页码、展开状态
//! - 从不修改题库，也不接触测验会话
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (App / 浏览状态)
//!     ↓
//! workflow::Quiz (测验状态机)
//!     ↓
//! services (能力层：selection / pagination / paper / markup / catalog)
//!     ↓
//! models (只读题库)
//! ```

pub mod app;
pub mod mcq_browser;
pub mod paper_browser;
pub mod solved_browser;

pub use app::{App, ReportStats};
pub use mcq_browser::McqBrowser;
pub use paper_browser::PaperBrowser;
pub use solved_browser::{RenderedPart, SolvedBrowser};
