//! 徽章引擎
//!
//! 根据用户活动统计快照推导其已获得和进行中的全部成就徽章：
//! - 声明式徽章规则表，统一评估
//! - 进度归一化（当前值 / 目标值 / 百分比）
//! - 计数汇总、按分类分组、"下一个目标"推荐
//!
//! 所有操作都是同步纯函数，不做持久化，可被任意线程并发调用。

pub mod aggregator;
pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod stats;

pub use aggregator::{
    CountsSummary, EvaluationReport, TierCounts, counts_summary, earned_only,
    grouped_by_category, next_goal, report,
};
pub use catalog::catalog;
pub use error::{EngineError, Result};
pub use evaluator::{BadgeEvaluator, evaluate};
pub use models::{BadgeDefinition, Category, EvaluatedBadge, Progress, ProgressView, Tier};
pub use stats::StatsSnapshot;
