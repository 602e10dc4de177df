//! 徽章引擎错误类型
//!
//! 正常评估是全函数，不返回错误；这里的错误只来自徽章表的编写缺陷和快照解析。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("徽章表为空")]
    EmptyCatalog,

    #[error("徽章 ID 重复: {0}")]
    DuplicateBadgeId(String),

    #[error("徽章缺少展示信息: {badge_id} 字段 {field}")]
    MissingMetadata {
        badge_id: String,
        field: &'static str,
    },

    #[error("徽章进度上限必须为正数: {badge_id} max={max}")]
    NonPositiveMax { badge_id: String, max: i64 },

    #[error("徽章门槛与进度上限不一致: {badge_id} criteria={criteria}, max={max}")]
    CriteriaMismatch {
        badge_id: String,
        criteria: i64,
        max: i64,
    },

    #[error("统计快照解析失败: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

impl EngineError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyCatalog => "EMPTY_CATALOG",
            Self::DuplicateBadgeId(_) => "DUPLICATE_BADGE_ID",
            Self::MissingMetadata { .. } => "MISSING_METADATA",
            Self::NonPositiveMax { .. } => "NON_POSITIVE_MAX",
            Self::CriteriaMismatch { .. } => "CRITERIA_MISMATCH",
            Self::InvalidSnapshot(_) => "INVALID_SNAPSHOT",
        }
    }

    /// 是否为徽章表编写缺陷（应在启动时快速失败）
    pub fn is_authoring_defect(&self) -> bool {
        !matches!(self, Self::InvalidSnapshot(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = EngineError::DuplicateBadgeId("first_step".to_string());
        assert_eq!(err.code(), "DUPLICATE_BADGE_ID");
        assert!(err.is_authoring_defect());
    }

    #[test]
    fn test_snapshot_error_is_not_authoring_defect() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = EngineError::from(json_err);
        assert_eq!(err.code(), "INVALID_SNAPSHOT");
        assert!(!err.is_authoring_defect());
    }
}
