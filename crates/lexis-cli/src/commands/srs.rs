use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use lexis_srs::{
    Flashcard, IntervalPreview, Rating, ReviewOutcome, checked_ease, interval_label, next_interval,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SrsCommands;
use crate::commands::shared::{read_json, write_json};
use crate::output::output;

#[derive(Debug, Serialize)]
struct NextResponse {
    interval_days: u32,
    ease_factor: f64,
    rating: Rating,
    next_interval_days: u32,
    label: String,
}

#[derive(Debug, Serialize)]
struct ReviewResponse {
    front: String,
    back: String,
    #[serde(flatten)]
    outcome: ReviewOutcome,
    saved: bool,
}

/// Handle `lexis srs`.
pub fn handle(action: &SrsCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SrsCommands::Next {
            interval,
            ease,
            rating,
        } => output(&next(*interval, *ease, *rating)?, flags.format),
        SrsCommands::Preview { interval, ease } => {
            output(&preview(*interval, *ease)?, flags.format)
        }
        SrsCommands::Review {
            card,
            rating,
            write,
        } => output(&review(card, *rating, *write, Utc::now())?, flags.format),
    }
}

fn next(interval: u32, ease: f64, rating: Rating) -> anyhow::Result<NextResponse> {
    let ease = checked_ease(ease)?;
    let next_interval_days = next_interval(interval, ease, rating);
    Ok(NextResponse {
        interval_days: interval,
        ease_factor: ease,
        rating,
        next_interval_days,
        label: interval_label(next_interval_days),
    })
}

fn preview(interval: u32, ease: f64) -> anyhow::Result<[IntervalPreview; 4]> {
    let ease = checked_ease(ease)?;
    Ok(Rating::ALL.map(|rating| {
        let interval_days = next_interval(interval, ease, rating);
        IntervalPreview {
            rating,
            interval_days,
            label: interval_label(interval_days),
        }
    }))
}

fn review(
    path: &Path,
    rating: Rating,
    write: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<ReviewResponse> {
    let mut card: Flashcard = read_json(path)?;
    checked_ease(card.ease_factor)
        .with_context(|| format!("flashcard {} has an invalid ease factor", path.display()))?;

    let outcome = card.review(rating, now);
    tracing::debug!(front = %card.front, %rating, interval = outcome.interval_days, "card reviewed");
    if write {
        write_json(path, &card)?;
    }

    Ok(ReviewResponse {
        front: card.front,
        back: card.back,
        outcome,
        saved: write,
    })
}
