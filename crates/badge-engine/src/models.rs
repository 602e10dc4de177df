//! 徽章引擎领域模型

use serde::Serialize;
use std::fmt;

use crate::stats::StatsSnapshot;

/// 徽章等级
///
/// 纯展示用途，不参与任何评估逻辑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Tier {
    /// 按等级从低到高排列
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Diamond];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 徽章分类
///
/// 声明顺序即展示顺序，以分类为键的 BTreeMap 按此顺序遍历
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pins,
    Engagement,
    Voting,
    Verification,
    NgoEvents,
    Suggestions,
    Streak,
    Special,
    Role,
    Leaderboard,
    Milestone,
    Impact,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Pins,
        Category::Engagement,
        Category::Voting,
        Category::Verification,
        Category::NgoEvents,
        Category::Suggestions,
        Category::Streak,
        Category::Special,
        Category::Role,
        Category::Leaderboard,
        Category::Milestone,
        Category::Impact,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pins => "Pins",
            Self::Engagement => "Engagement",
            Self::Voting => "Voting",
            Self::Verification => "Verification",
            Self::NgoEvents => "NGO & Events",
            Self::Suggestions => "Suggestions",
            Self::Streak => "Streak",
            Self::Special => "Special",
            Self::Role => "Role",
            Self::Leaderboard => "Leaderboard",
            Self::Milestone => "Milestone",
            Self::Impact => "Impact",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 进度（当前值 / 目标值）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: i64,
    pub max: i64,
}

impl Progress {
    pub fn new(current: i64, max: i64) -> Self {
        Self { current, max }
    }

    /// 布尔条件的进度：满足为 1/1，否则 0/1
    pub fn flag(done: bool) -> Self {
        Self::new(i64::from(done), 1)
    }

    /// 是否达成
    pub fn is_complete(&self) -> bool {
        self.current >= self.max
    }

    /// 完成百分比，四舍五入后限制在 [0, 100]
    ///
    /// 调用方需保证 `max > 0`；否则返回 0。
    pub fn percentage(&self) -> u8 {
        if self.max <= 0 {
            return 0;
        }
        let ratio = (self.current as f64 / self.max as f64 * 100.0).round();
        ratio.clamp(0.0, 100.0) as u8
    }
}

/// 进度计算函数：纯函数，相同快照总是返回相同结果
pub type ProgressFn = fn(&StatsSnapshot) -> Progress;

/// 徽章定义
///
/// 进程启动时构建，之后只读
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefinition {
    /// 稳定的唯一标识
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub tier: Tier,
    /// 门槛值，仅作说明，以进度函数返回的 max 为准
    pub criteria: i64,
    #[serde(skip)]
    pub progress: ProgressFn,
}

impl BadgeDefinition {
    /// 计算该徽章对给定快照的进度
    pub fn progress_for(&self, stats: &StatsSnapshot) -> Progress {
        (self.progress)(stats)
    }
}

// 进度函数指针不参与比较
impl PartialEq for BadgeDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.icon == other.icon
            && self.category == other.category
            && self.tier == other.tier
            && self.criteria == other.criteria
    }
}

impl Eq for BadgeDefinition {}

/// 评估后的进度视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub current: i64,
    pub max: i64,
    pub percentage: u8,
}

impl From<Progress> for ProgressView {
    fn from(progress: Progress) -> Self {
        Self {
            current: progress.current,
            max: progress.max,
            percentage: progress.percentage(),
        }
    }
}

/// 评估结果
///
/// 每次评估重新生成，不缓存也不持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedBadge {
    #[serde(flatten)]
    pub definition: BadgeDefinition,
    pub earned: bool,
    pub progress: ProgressView,
}

impl EvaluatedBadge {
    pub fn id(&self) -> &'static str {
        self.definition.id
    }

    pub fn category(&self) -> Category {
        self.definition.category
    }

    pub fn tier(&self) -> Tier {
        self.definition.tier
    }

    pub fn percentage(&self) -> u8 {
        self.progress.percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definition() -> BadgeDefinition {
        BadgeDefinition {
            id: "sample",
            name: "Sample",
            description: "Create three pins",
            icon: "📍",
            category: Category::Pins,
            tier: Tier::Bronze,
            criteria: 3,
            progress: |s| Progress::new(s.pins_created, 3),
        }
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(Progress::new(0, 3).percentage(), 0);
        assert_eq!(Progress::new(1, 3).percentage(), 33);
        assert_eq!(Progress::new(2, 3).percentage(), 67);
        assert_eq!(Progress::new(1, 8).percentage(), 13);
        assert_eq!(Progress::new(5, 25).percentage(), 20);
    }

    #[test]
    fn test_percentage_clamped() {
        assert_eq!(Progress::new(1500, 100).percentage(), 100);
        assert_eq!(Progress::new(-4, 10).percentage(), 0);
        assert_eq!(Progress::new(3, 0).percentage(), 0);
    }

    #[test]
    fn test_is_complete() {
        assert!(Progress::new(5, 5).is_complete());
        assert!(Progress::new(6, 5).is_complete());
        assert!(!Progress::new(4, 5).is_complete());
        assert!(Progress::flag(true).is_complete());
        assert!(!Progress::flag(false).is_complete());
    }

    #[test]
    fn test_definition_progress() {
        let def = sample_definition();
        let stats = StatsSnapshot {
            pins_created: 2,
            ..Default::default()
        };
        assert_eq!(def.progress_for(&stats), Progress::new(2, 3));
    }

    #[test]
    fn test_definition_equality_ignores_progress_fn() {
        let a = sample_definition();
        let b = BadgeDefinition {
            progress: |_| Progress::new(0, 3),
            ..a
        };
        assert_eq!(a, b);

        let c = BadgeDefinition { id: "other", ..a };
        assert_ne!(a, c);
    }

    #[test]
    fn test_evaluated_badge_serialization() {
        let badge = EvaluatedBadge {
            definition: sample_definition(),
            earned: false,
            progress: Progress::new(1, 3).into(),
        };

        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["id"], "sample");
        assert_eq!(json["category"], "pins");
        assert_eq!(json["tier"], "bronze");
        assert_eq!(json["earned"], false);
        assert_eq!(json["progress"]["current"], 1);
        assert_eq!(json["progress"]["max"], 3);
        assert_eq!(json["progress"]["percentage"], 33);
        assert!(json.get("progressFn").is_none());
    }

    #[test]
    fn test_category_order_and_names() {
        assert_eq!(Category::ALL.len(), 12);
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Category::NgoEvents.to_string(), "NGO & Events");
        assert_eq!(Tier::Diamond.to_string(), "Diamond");
        assert!(Tier::Bronze < Tier::Diamond);
    }
}
