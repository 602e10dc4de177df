//! 汇总视图
//!
//! 基于评估结果派生的只读视图：已获得列表、计数汇总、按分类分组、下一个目标。
//! 每个视图都有两种形式：基于已评估序列计算，或基于快照重新评估。
//! 所有结果都是每次调用新计算的，不做跨调用缓存。

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::evaluator::BadgeEvaluator;
use crate::models::{Category, EvaluatedBadge, Tier};
use crate::stats::StatsSnapshot;

/// 按等级统计的已获得数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub bronze: usize,
    pub silver: usize,
    pub gold: usize,
    pub diamond: usize,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Bronze => self.bronze,
            Tier::Silver => self.silver,
            Tier::Gold => self.gold,
            Tier::Diamond => self.diamond,
        }
    }

    fn increment(&mut self, tier: Tier) {
        match tier {
            Tier::Bronze => self.bronze += 1,
            Tier::Silver => self.silver += 1,
            Tier::Gold => self.gold += 1,
            Tier::Diamond => self.diamond += 1,
        }
    }
}

/// 计数汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsSummary {
    /// 已获得数量
    pub earned: usize,
    /// 徽章总数，与获得情况无关
    pub total: usize,
    pub by_tier: TierCounts,
    /// 每个分类下已获得的数量，包含数量为 0 的分类
    pub by_category: BTreeMap<Category, usize>,
}

/// 一次评估产出的完整报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub badges: Vec<EvaluatedBadge>,
    pub summary: CountsSummary,
    pub grouped: BTreeMap<Category, Vec<EvaluatedBadge>>,
    pub next_goal: Option<EvaluatedBadge>,
}

impl EvaluationReport {
    /// 基于已评估序列构建报告
    pub fn from_badges(badges: Vec<EvaluatedBadge>) -> Self {
        let summary = summarize(&badges);
        let grouped = group_by_category(&badges);
        let next_goal = pick_next_goal(&badges).cloned();

        Self {
            badges,
            summary,
            grouped,
            next_goal,
        }
    }

    /// 已获得的徽章（保持表顺序）
    pub fn earned(&self) -> Vec<EvaluatedBadge> {
        filter_earned(&self.badges)
    }
}

// ==================== 基于已评估序列 ====================

/// 已获得的徽章，保持表顺序
pub fn filter_earned(badges: &[EvaluatedBadge]) -> Vec<EvaluatedBadge> {
    badges.iter().filter(|b| b.earned).cloned().collect()
}

/// 计数汇总
pub fn summarize(badges: &[EvaluatedBadge]) -> CountsSummary {
    let mut by_tier = TierCounts::default();
    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|&c| (c, 0)).collect();
    let mut earned = 0;

    for badge in badges.iter().filter(|b| b.earned) {
        earned += 1;
        by_tier.increment(badge.tier());
        *by_category.entry(badge.category()).or_default() += 1;
    }

    CountsSummary {
        earned,
        total: badges.len(),
        by_tier,
        by_category,
    }
}

/// 按分类分组，所有分类都会出现（可能为空），组内保持表顺序
pub fn group_by_category(badges: &[EvaluatedBadge]) -> BTreeMap<Category, Vec<EvaluatedBadge>> {
    let mut groups: BTreeMap<Category, Vec<EvaluatedBadge>> =
        Category::ALL.iter().map(|&c| (c, Vec::new())).collect();

    for badge in badges {
        groups.entry(badge.category()).or_default().push(badge.clone());
    }

    groups
}

/// 下一个目标：未获得徽章中完成度最高的一个
///
/// 完成度相同时取表中靠前的一个（`min_by_key` 返回第一个最小元素）。
/// 全部获得时返回 `None`。
pub fn pick_next_goal(badges: &[EvaluatedBadge]) -> Option<&EvaluatedBadge> {
    badges
        .iter()
        .filter(|b| !b.earned)
        .min_by_key(|b| Reverse(b.percentage()))
}

// ==================== 基于快照重新评估 ====================

/// 已获得的徽章
pub fn earned_only(stats: &StatsSnapshot) -> Vec<EvaluatedBadge> {
    BadgeEvaluator::default()
        .evaluate(stats)
        .into_iter()
        .filter(|b| b.earned)
        .collect()
}

/// 计数汇总
pub fn counts_summary(stats: &StatsSnapshot) -> CountsSummary {
    summarize(&BadgeEvaluator::default().evaluate(stats))
}

/// 按分类分组
pub fn grouped_by_category(stats: &StatsSnapshot) -> BTreeMap<Category, Vec<EvaluatedBadge>> {
    group_by_category(&BadgeEvaluator::default().evaluate(stats))
}

/// 下一个目标
pub fn next_goal(stats: &StatsSnapshot) -> Option<EvaluatedBadge> {
    let badges = BadgeEvaluator::default().evaluate(stats);
    pick_next_goal(&badges).cloned()
}

/// 完整报告（只评估一次）
pub fn report(stats: &StatsSnapshot) -> EvaluationReport {
    EvaluationReport::from_badges(BadgeEvaluator::default().evaluate(stats))
}
