//! 徽章评估器
//!
//! 纯函数：统计快照 -> 按表顺序排列的评估结果。
//! 无副作用、无缓存，相同输入总是得到逐项相等的输出。

use std::time::Instant;

use tracing::debug;

use crate::catalog::catalog;
use crate::models::{BadgeDefinition, EvaluatedBadge};
use crate::stats::StatsSnapshot;

/// 徽章评估器
///
/// 持有徽章表的只读引用，本身不含任何可变状态，可以随意复制和跨线程共享。
#[derive(Debug, Clone, Copy)]
pub struct BadgeEvaluator<'a> {
    definitions: &'a [BadgeDefinition],
}

impl Default for BadgeEvaluator<'static> {
    fn default() -> Self {
        Self::new(catalog())
    }
}

impl<'a> BadgeEvaluator<'a> {
    pub fn new(definitions: &'a [BadgeDefinition]) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &'a [BadgeDefinition] {
        self.definitions
    }

    /// 评估单个徽章
    ///
    /// # Panics
    ///
    /// 进度上限不为正数说明徽章表编写有误，直接 panic 而不是跳过。
    pub fn evaluate_one(definition: &BadgeDefinition, stats: &StatsSnapshot) -> EvaluatedBadge {
        let progress = definition.progress_for(stats);
        assert!(
            progress.max > 0,
            "badge `{}` has non-positive progress max {}",
            definition.id,
            progress.max
        );

        EvaluatedBadge {
            definition: *definition,
            earned: progress.is_complete(),
            progress: progress.into(),
        }
    }

    /// 评估全部徽章，输出与徽章表一一对应且顺序一致
    pub fn evaluate(&self, stats: &StatsSnapshot) -> Vec<EvaluatedBadge> {
        let start = Instant::now();

        let badges: Vec<EvaluatedBadge> = self
            .definitions
            .iter()
            .map(|def| Self::evaluate_one(def, stats))
            .collect();

        let elapsed = start.elapsed();
        metrics::counter!("badge_evaluations_total").increment(1);
        metrics::histogram!("badge_evaluation_duration_seconds").record(elapsed.as_secs_f64());

        debug!(
            total = badges.len(),
            earned = badges.iter().filter(|b| b.earned).count(),
            elapsed_us = elapsed.as_micros() as u64,
            "Evaluated badge catalog"
        );

        badges
    }
}

/// 使用全局徽章表评估
pub fn evaluate(stats: &StatsSnapshot) -> Vec<EvaluatedBadge> {
    BadgeEvaluator::default().evaluate(stats)
}
