//! 徽章规则表
//!
//! 固定、有序的徽章定义目录。每条定义是 (id, 展示信息, 纯进度函数) 的记录，
//! 评估逻辑对所有定义一视同仁，新增徽章只需在表中追加一行。
//!
//! 表在首次访问时构建一次，之后只读，可被任意线程无锁并发读取。
//! 表的顺序即评估输出的顺序，也是"下一个目标"平局时的裁决依据。

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{EngineError, Result};
use crate::models::{BadgeDefinition, Category, Progress, ProgressFn, Tier};
use crate::stats::StatsSnapshot;

static CATALOG: LazyLock<Vec<BadgeDefinition>> = LazyLock::new(build_catalog);

/// 全局徽章表
pub fn catalog() -> &'static [BadgeDefinition] {
    &CATALOG
}

/// 按 ID 查找徽章定义
pub fn find(id: &str) -> Option<&'static BadgeDefinition> {
    catalog().iter().find(|def| def.id == id)
}

/// 徽章表编写检查
///
/// 检查项：表非空、ID 唯一、展示信息完整、默认快照下 max 为正且与 criteria 一致。
pub fn validate(definitions: &[BadgeDefinition]) -> Result<()> {
    if definitions.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }

    let probe = StatsSnapshot::default();
    let mut seen = HashSet::with_capacity(definitions.len());

    for def in definitions {
        if !seen.insert(def.id) {
            return Err(EngineError::DuplicateBadgeId(def.id.to_string()));
        }

        let metadata = [
            ("id", def.id),
            ("name", def.name),
            ("description", def.description),
            ("icon", def.icon),
        ];
        if let Some((field, _)) = metadata.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(EngineError::MissingMetadata {
                badge_id: def.id.to_string(),
                field: *field,
            });
        }

        let progress = def.progress_for(&probe);
        if progress.max <= 0 {
            return Err(EngineError::NonPositiveMax {
                badge_id: def.id.to_string(),
                max: progress.max,
            });
        }
        if progress.max != def.criteria {
            return Err(EngineError::CriteriaMismatch {
                badge_id: def.id.to_string(),
                criteria: def.criteria,
                max: progress.max,
            });
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: Category,
    tier: Tier,
    criteria: i64,
    progress: ProgressFn,
) -> BadgeDefinition {
    BadgeDefinition {
        id,
        name,
        description,
        icon,
        category,
        tier,
        criteria,
        progress,
    }
}

#[rustfmt::skip]
fn build_catalog() -> Vec<BadgeDefinition> {
    use Category::*;
    use Tier::*;

    vec![
        // ==================== 地图标记 ====================
        badge("first_step", "First Step", "Drop your first pin on the map", "📍", Pins, Bronze, 1,
            |s| Progress::new(s.pins_created, 1)),
        badge("pin_dropper", "Pin Dropper", "Drop 5 pins on the map", "📌", Pins, Bronze, 5,
            |s| Progress::new(s.pins_created, 5)),
        badge("map_maker", "Map Maker", "Drop 25 pins on the map", "🗺️", Pins, Silver, 25,
            |s| Progress::new(s.pins_created, 25)),
        badge("cartographer", "Cartographer", "Drop 100 pins on the map", "🧭", Pins, Gold, 100,
            |s| Progress::new(s.pins_created, 100)),
        badge("atlas_legend", "Atlas Legend", "Drop 500 pins on the map", "🌍", Pins, Diamond, 500,
            |s| Progress::new(s.pins_created, 500)),

        // ==================== 互动 ====================
        badge("first_words", "First Words", "Post your first comment", "💬", Engagement, Bronze, 1,
            |s| Progress::new(s.comments_made, 1)),
        badge("conversationalist", "Conversationalist", "Post 10 comments", "🗨️", Engagement, Bronze, 10,
            |s| Progress::new(s.comments_made, 10)),
        badge("community_voice", "Community Voice", "Post 50 comments", "📣", Engagement, Silver, 50,
            |s| Progress::new(s.comments_made, 50)),
        badge("discussion_leader", "Discussion Leader", "Post 200 comments", "🎙️", Engagement, Gold, 200,
            |s| Progress::new(s.comments_made, 200)),

        // ==================== 投票 ====================
        badge("first_vote", "First Vote", "Cast your first vote", "🗳️", Voting, Bronze, 1,
            |s| Progress::new(s.votes_cast, 1)),
        badge("civic_voter", "Civic Voter", "Cast 25 votes", "✋", Voting, Silver, 25,
            |s| Progress::new(s.votes_cast, 25)),
        badge("ballot_master", "Ballot Master", "Cast 100 votes", "📊", Voting, Gold, 100,
            |s| Progress::new(s.votes_cast, 100)),
        badge("voice_of_the_people", "Voice of the People", "Cast 500 votes", "🏛️", Voting, Diamond, 500,
            |s| Progress::new(s.votes_cast, 500)),

        // ==================== 核实 ====================
        badge("fact_checker", "Fact Checker", "Verify your first report", "✅", Verification, Bronze, 1,
            |s| Progress::new(s.verifications_made, 1)),
        badge("truth_seeker", "Truth Seeker", "Verify 10 reports", "🔍", Verification, Silver, 10,
            |s| Progress::new(s.verifications_made, 10)),
        badge("verification_expert", "Verification Expert", "Verify 50 reports", "🔬", Verification, Gold, 50,
            |s| Progress::new(s.verifications_made, 50)),
        badge("guardian_of_truth", "Guardian of Truth", "Verify 200 reports", "🛡️", Verification, Diamond, 200,
            |s| Progress::new(s.verifications_made, 200)),

        // ==================== 组织与活动 ====================
        badge("event_organizer", "Event Organizer", "Create your first event", "📅", NgoEvents, Bronze, 1,
            |s| Progress::new(s.events_created, 1)),
        badge("active_participant", "Active Participant", "Attend 5 events", "🙋", NgoEvents, Bronze, 5,
            |s| Progress::new(s.events_attended, 5)),
        badge("ngo_founder", "NGO Founder", "Register an NGO", "🏢", NgoEvents, Silver, 1,
            |s| Progress::new(s.ngos_created, 1)),
        badge("event_planner", "Event Planner", "Create 10 events", "🎪", NgoEvents, Gold, 10,
            |s| Progress::new(s.events_created, 10)),

        // ==================== 建议 ====================
        badge("idea_spark", "Idea Spark", "Submit your first suggestion", "💡", Suggestions, Bronze, 1,
            |s| Progress::new(s.suggestions_made, 1)),
        badge("idea_machine", "Idea Machine", "Submit 10 suggestions", "⚙️", Suggestions, Silver, 10,
            |s| Progress::new(s.suggestions_made, 10)),
        badge("change_maker", "Change Maker", "Have a suggestion implemented", "🛠️", Suggestions, Gold, 1,
            |s| Progress::new(s.suggestions_implemented, 1)),
        badge("visionary", "Visionary", "Have 5 suggestions implemented", "🔭", Suggestions, Diamond, 5,
            |s| Progress::new(s.suggestions_implemented, 5)),

        // ==================== 连续活跃 ====================
        badge("on_a_roll", "On a Roll", "Stay active 3 days in a row", "🔥", Streak, Bronze, 3,
            |s| Progress::new(s.current_streak, 3)),
        badge("week_warrior", "Week Warrior", "Stay active 7 days in a row", "⚡", Streak, Silver, 7,
            |s| Progress::new(s.current_streak, 7)),
        badge("monthly_devotee", "Monthly Devotee", "Stay active 30 days in a row", "🌙", Streak, Gold, 30,
            |s| Progress::new(s.current_streak, 30)),
        badge("unstoppable", "Unstoppable", "Stay active 100 days in a row", "☄️", Streak, Diamond, 100,
            |s| Progress::new(s.current_streak, 100)),

        // ==================== 特殊 ====================
        badge("verified_citizen", "Verified Citizen", "Verify your email address", "📧", Special, Bronze, 1,
            |s| Progress::flag(s.email_verified)),
        badge("profile_pro", "Profile Pro", "Complete your profile", "🪪", Special, Bronze, 1,
            |s| Progress::flag(s.profile_completed)),
        badge("early_adopter", "Early Adopter", "Joined during the launch period", "🌱", Special, Gold, 1,
            |s| Progress::flag(s.is_early_adopter)),
        badge("viral_pin", "Viral Pin", "Have a pin reach 50 upvotes", "🚀", Special, Gold, 1,
            |s| Progress::flag(s.has_popular_pin)),

        // ==================== 角色 ====================
        badge("ngo_partner", "NGO Partner", "Represent a registered NGO", "🤝", Role, Silver, 1,
            |s| Progress::flag(s.has_role("ngo"))),
        badge("community_moderator", "Community Moderator", "Serve as a community moderator", "⚖️", Role, Gold, 1,
            |s| Progress::flag(s.has_role("moderator"))),
        badge("administrator", "Administrator", "Serve as a platform administrator", "👑", Role, Diamond, 1,
            |s| Progress::flag(s.has_role("admin"))),

        // ==================== 排行榜 ====================
        badge("weekly_champion", "Weekly Champion", "Finish first on the weekly leaderboard", "🏆", Leaderboard, Diamond, 1,
            |s| Progress::flag(StatsSnapshot::is_ranked_within(s.weekly_rank, 1))),
        badge("weekly_star", "Weekly Star", "Finish in the top 2 of the weekly leaderboard", "🌟", Leaderboard, Gold, 1,
            |s| Progress::flag(StatsSnapshot::is_ranked_within(s.weekly_rank, 2))),
        badge("weekly_rising", "Rising Star", "Reach the top 10 of the weekly leaderboard", "📈", Leaderboard, Silver, 1,
            |s| Progress::flag(StatsSnapshot::is_ranked_within(s.weekly_rank, 10))),
        badge("monthly_champion", "Monthly Champion", "Finish first on the monthly leaderboard", "🥇", Leaderboard, Diamond, 1,
            |s| Progress::flag(StatsSnapshot::is_ranked_within(s.monthly_rank, 1))),
        badge("monthly_contender", "Monthly Contender", "Reach the top 10 of the monthly leaderboard", "🥈", Leaderboard, Gold, 1,
            |s| Progress::flag(StatsSnapshot::is_ranked_within(s.monthly_rank, 10))),

        // ==================== 里程碑 ====================
        badge("century", "Century", "Earn 100 points", "💯", Milestone, Bronze, 100,
            |s| Progress::new(s.total_points, 100)),
        badge("500_club", "500 Club", "Earn 500 points", "🎖️", Milestone, Silver, 500,
            |s| Progress::new(s.total_points, 500)),
        badge("hall_of_fame", "Hall of Fame", "Earn 1000 points", "🏅", Milestone, Gold, 1000,
            |s| Progress::new(s.total_points, 1000)),
        badge("points_legend", "Points Legend", "Earn 5000 points", "💎", Milestone, Diamond, 5000,
            |s| Progress::new(s.total_points, 5000)),
        badge("one_month_in", "One Month In", "Keep your account for 30 days", "🗓️", Milestone, Bronze, 30,
            |s| Progress::new(s.account_age_days, 30)),
        badge("one_year_strong", "One Year Strong", "Keep your account for a year", "🎂", Milestone, Gold, 365,
            |s| Progress::new(s.account_age_days, 365)),

        // ==================== 影响力 ====================
        badge("problem_solver", "Problem Solver", "Get one of your pins resolved", "🧩", Impact, Bronze, 1,
            |s| Progress::new(s.pins_resolved, 1)),
        badge("neighborhood_hero", "Neighborhood Hero", "Get 10 of your pins resolved", "🏘️", Impact, Silver, 10,
            |s| Progress::new(s.pins_resolved, 10)),
        badge("city_changer", "City Changer", "Get 50 of your pins resolved", "🏙️", Impact, Gold, 50,
            |s| Progress::new(s.pins_resolved, 50)),
        badge("crowd_favorite", "Crowd Favorite", "Receive 100 upvotes", "👍", Impact, Silver, 100,
            |s| Progress::new(s.upvotes_received, 100)),
        badge("peoples_champion", "People's Champion", "Receive 1000 upvotes", "🎉", Impact, Diamond, 1000,
            |s| Progress::new(s.upvotes_received, 1000)),
    ]
}
