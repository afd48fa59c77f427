use std::path::Path;

use chrono::{DateTime, Utc};
use lexis_core::entities::DailyChallenge;
use lexis_core::enums::{ChallengeType, Difficulty};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChallengeCommands;
use crate::commands::shared::read_json;
use crate::output::output;

#[derive(Deserialize)]
#[serde(untagged)]
enum ChallengeFile {
    Many(Vec<DailyChallenge>),
    One(Box<DailyChallenge>),
}

impl ChallengeFile {
    fn into_vec(self) -> Vec<DailyChallenge> {
        match self {
            Self::Many(all) => all,
            Self::One(one) => vec![*one],
        }
    }
}

#[derive(Debug, Serialize)]
struct ChallengeStatus {
    id: String,
    title: String,
    challenge_type: ChallengeType,
    difficulty: Difficulty,
    /// `current/target` with the unit, e.g. `17/40 words`.
    progress: String,
    percent: u8,
    complete: bool,
    expired: bool,
    time_remaining: String,
    xp_reward: u32,
    coin_reward: u32,
}

/// Handle `lexis challenge`.
pub fn handle(action: &ChallengeCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ChallengeCommands::Status { file } => output(&status(file, Utc::now())?, flags.format),
    }
}

fn status(path: &Path, now: DateTime<Utc>) -> anyhow::Result<Vec<ChallengeStatus>> {
    let challenges = read_json::<ChallengeFile>(path)?.into_vec();
    Ok(challenges.iter().map(|c| describe(c, now)).collect())
}

fn describe(challenge: &DailyChallenge, now: DateTime<Utc>) -> ChallengeStatus {
    ChallengeStatus {
        id: challenge.id.clone(),
        title: challenge.title.clone(),
        challenge_type: challenge.challenge_type,
        difficulty: challenge.difficulty,
        progress: format!(
            "{}/{} {}",
            challenge.current_value.max(0),
            challenge.target_value,
            challenge.challenge_type.unit()
        ),
        percent: challenge.progress_percent(),
        complete: challenge.is_complete(),
        expired: challenge.is_expired_at(now),
        time_remaining: challenge.time_remaining_label_at(now),
        xp_reward: challenge.xp_reward,
        coin_reward: challenge.coin_reward,
    }
}
