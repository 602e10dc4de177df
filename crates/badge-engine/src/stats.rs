//! 用户活动统计快照
//!
//! 快照由上游统计服务提供，引擎只读不写。所有字段都是可选的，
//! 缺失时取零值；类型不符的字段按宽松规则转换而不是报错。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// 统计快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    // ---------- 地图标记 ----------
    #[serde(deserialize_with = "lenient_count")]
    pub pins_created: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub pins_resolved: i64,
    /// 是否有标记获得 50+ 赞
    #[serde(alias = "hasPinWith50Upvotes", deserialize_with = "lenient_flag")]
    pub has_popular_pin: bool,

    // ---------- 互动 ----------
    #[serde(deserialize_with = "lenient_count")]
    pub comments_made: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub votes_cast: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub upvotes_received: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub verifications_made: i64,

    // ---------- 组织与活动 ----------
    #[serde(deserialize_with = "lenient_count")]
    pub ngos_created: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub events_created: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub events_attended: i64,

    // ---------- 建议 ----------
    #[serde(deserialize_with = "lenient_count")]
    pub suggestions_made: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub suggestions_implemented: i64,

    // ---------- 连续活跃与账号 ----------
    #[serde(deserialize_with = "lenient_count")]
    pub current_streak: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub longest_streak: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub account_age_days: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_points: i64,
    #[serde(deserialize_with = "lenient_flag")]
    pub email_verified: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub profile_completed: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_early_adopter: bool,

    // ---------- 角色与排行 ----------
    #[serde(deserialize_with = "lenient_text")]
    pub role: Option<String>,
    /// 周榜排名，0 表示未上榜
    #[serde(deserialize_with = "lenient_count")]
    pub weekly_rank: i64,
    /// 月榜排名，0 表示未上榜
    #[serde(deserialize_with = "lenient_count")]
    pub monthly_rank: i64,
}

impl StatsSnapshot {
    /// 从 JSON 字符串解析
    ///
    /// 只有 JSON 语法错误或顶层类型不符时才会失败，字段级别的类型问题一律宽松处理。
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 值解析
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// 角色比较（忽略大小写和首尾空白）
    pub fn has_role(&self, role: &str) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.trim().eq_ignore_ascii_case(role))
    }

    /// 排名是否在前 `limit` 名之内（0 或负数视为未上榜）
    pub fn is_ranked_within(rank: i64, limit: i64) -> bool {
        rank >= 1 && rank <= limit
    }
}

/// 计数字段转换：数字、数字字符串、布尔值取其数值，小数截断，其他一律为 0
fn coerce_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// 布尔字段转换
fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1" || s.eq_ignore_ascii_case("yes")
        }
        _ => false,
    }
}

/// 文本字段转换：只接受非空字符串
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| coerce_count(&v))
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| coerce_flag(&v))
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| coerce_text(&v))
}
