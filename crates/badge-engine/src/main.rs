//! 徽章报告工具
//!
//! 读取一份统计快照（JSON），输出徽章评估结果，供展示层或排查问题使用。

use std::io::Read;

use anyhow::{Context, Result};
use badge_engine::{BadgeEvaluator, EvaluationReport, StatsSnapshot, catalog};
use badge_shared::config::AppConfig;
use badge_shared::error::BadgeError;
use badge_shared::observability;
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::info;

/// 输出视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// 完整报告
    All,
    /// 全部徽章评估结果
    Badges,
    /// 已获得的徽章
    Earned,
    /// 计数汇总
    Summary,
    /// 按分类分组
    Grouped,
    /// 下一个目标
    Next,
}

/// 徽章报告命令行
#[derive(Parser, Debug)]
#[command(name = "badge-report")]
#[command(version, about = "根据统计快照输出徽章评估结果")]
struct Cli {
    /// 统计快照 JSON 文件路径，`-` 表示标准输入
    #[arg(short, long)]
    stats: Option<String>,

    /// 输出视图，默认取配置 report.view
    #[arg(short, long, value_enum)]
    view: Option<View>,

    /// 输出紧凑 JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load("badge-report").unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    observability::init(&obs_config)?;

    // 徽章表有误时直接退出
    badge_engine::catalog::validate(catalog()).context("badge catalog is invalid")?;

    let view = match cli.view {
        Some(view) => view,
        None => View::from_str(&config.report.view, true).map_err(|message| {
            BadgeError::InvalidArgument {
                field: "report.view".to_string(),
                message,
            }
        })?,
    };
    let source = cli
        .stats
        .or_else(|| config.report.stats_path.clone())
        .unwrap_or_else(|| "-".to_string());

    let raw = read_source(&source).with_context(|| format!("failed to read stats from {}", source))?;
    let stats = StatsSnapshot::from_json(&raw).context("failed to parse stats snapshot")?;

    let report = EvaluationReport::from_badges(BadgeEvaluator::default().evaluate(&stats));
    info!(
        source = %source,
        view = ?view,
        earned = report.summary.earned,
        total = report.summary.total,
        next_goal = report.next_goal.as_ref().map(|b| b.id()),
        "Evaluated badges"
    );

    let output = render(&report, view)?;
    let text = if cli.compact || !config.report.pretty {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", text);

    Ok(())
}

fn read_source(source: &str) -> Result<String, BadgeError> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn render(report: &EvaluationReport, view: View) -> Result<Value, BadgeError> {
    let value = match view {
        View::All => serde_json::to_value(report)?,
        View::Badges => serde_json::to_value(&report.badges)?,
        View::Earned => serde_json::to_value(report.earned())?,
        View::Summary => serde_json::to_value(&report.summary)?,
        View::Grouped => serde_json::to_value(&report.grouped)?,
        View::Next => serde_json::to_value(&report.next_goal)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::parse_from(["badge-report", "--stats", "stats.json", "--view", "next", "--compact"]);
        assert_eq!(cli.stats.as_deref(), Some("stats.json"));
        assert_eq!(cli.view, Some(View::Next));
        assert!(cli.compact);
    }

    #[test]
    fn test_view_from_config_string() {
        assert_eq!(View::from_str("Summary", true), Ok(View::Summary));
        assert!(View::from_str("everything", true).is_err());
    }

    #[test]
    fn test_render_views() {
        let stats = StatsSnapshot {
            pins_created: 5,
            ..Default::default()
        };
        let report = EvaluationReport::from_badges(BadgeEvaluator::default().evaluate(&stats));

        let summary = render(&report, View::Summary).unwrap();
        assert_eq!(summary["earned"], 2);

        let next = render(&report, View::Next).unwrap();
        assert_eq!(next["id"], "map_maker");

        let earned = render(&report, View::Earned).unwrap();
        assert_eq!(earned.as_array().unwrap().len(), 2);

        let all = render(&report, View::All).unwrap();
        assert!(all["grouped"]["pins"].is_array());
        assert_eq!(all["badges"].as_array().unwrap().len(), catalog().len());
    }
}
