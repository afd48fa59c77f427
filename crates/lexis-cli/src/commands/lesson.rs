use std::path::Path;

use anyhow::{Context, bail};
use lexis_api::ApiClient;
use lexis_config::LexisConfig;
use lexis_core::enums::TaskKind;
use lexis_core::lesson::TaskAnswer;
use lexis_core::responses::{LessonRequest, LessonResponse};
use serde::Serialize;

use crate::cli::subcommands::LessonCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{read_json, write_json};
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TaskSummary {
    index: usize,
    kind: TaskKind,
    prompt: String,
    audio: bool,
}

#[derive(Debug, Serialize)]
struct LessonReport {
    title: String,
    language: String,
    level: String,
    topic: Option<String>,
    estimated_minutes: u32,
    xp_reward: u32,
    task_count: usize,
    tasks: Vec<TaskSummary>,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    task: usize,
    kind: TaskKind,
    correct: bool,
}

/// Handle `lexis lesson`.
pub async fn handle(
    action: &LessonCommands,
    config: &LexisConfig,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let LessonCommands::Generate {
        language,
        level,
        topic,
        count,
        save,
    } = action
    else {
        return handle_offline(action, flags);
    };

    let request = LessonRequest {
        language: language
            .clone()
            .unwrap_or_else(|| config.general.default_language.clone()),
        level: level
            .clone()
            .unwrap_or_else(|| config.general.default_level.clone()),
        topic: topic.clone(),
        task_count: count.unwrap_or(config.general.task_count),
    };
    let lesson = Progress::wrap(
        "Generating lesson...",
        "lesson generation failed",
        client.generate_lesson(&request),
    )
    .await?;

    if let Some(path) = save {
        write_json(path, &lesson)?;
    }
    output(&lesson, flags.format)
}

/// Lesson commands that work on local files only.
pub fn handle_offline(action: &LessonCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LessonCommands::Inspect { file } => {
            let report = inspect(file)?;
            if flags.format == OutputFormat::Table {
                output(&report.tasks, flags.format)
            } else {
                output(&report, flags.format)
            }
        }
        LessonCommands::Check { file, task, answer } => {
            output(&check(file, *task, answer)?, flags.format)
        }
        LessonCommands::Generate { .. } => bail!("lesson generate needs the backend"),
    }
}

fn load_lesson(path: &Path) -> anyhow::Result<LessonResponse> {
    let lesson: LessonResponse = read_json(path)?;
    lesson
        .validate()
        .with_context(|| format!("{} is not a valid lesson", path.display()))?;
    Ok(lesson)
}

fn inspect(path: &Path) -> anyhow::Result<LessonReport> {
    let lesson = load_lesson(path)?;
    let tasks = lesson
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| TaskSummary {
            index,
            kind: task.kind(),
            prompt: task.prompt().into_owned(),
            audio: task.kind().uses_audio(),
        })
        .collect::<Vec<_>>();

    Ok(LessonReport {
        title: lesson.meta.title,
        language: lesson.meta.language,
        level: lesson.meta.level,
        topic: lesson.meta.topic,
        estimated_minutes: lesson.meta.estimated_minutes,
        xp_reward: lesson.meta.xp_reward,
        task_count: tasks.len(),
        tasks,
    })
}

fn check(path: &Path, index: usize, answer: &str) -> anyhow::Result<CheckResponse> {
    let lesson = load_lesson(path)?;
    let task = lesson.task(index)?;
    let answer: TaskAnswer = serde_json::from_str(answer)
        .context("answer must be JSON like {\"kind\":\"choice\",\"value\":1}")?;

    Ok(CheckResponse {
        task: index,
        kind: task.kind(),
        correct: task.check(&answer)?,
    })
}
