//! CLI probe for todoboard.
//!
//! # Responsibility
//! - Verify `todoboard_api`/`todoboard_core` wiring without a browser.
//! - Seed a demonstration board and print one resolved view.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use log::info;
use todoboard_api::{AppSession, ProjectForm, RenderModel, TodoForm, View};

#[derive(Parser, Debug)]
#[command(name = "todoboard", version, about = "Task board core probe")]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, env = "TODOBOARD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "TODOBOARD_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the core version.
    Version,
    /// Seed a sample board and print one view.
    Demo {
        /// today|upcoming|project
        #[arg(long, default_value = "today")]
        view: View,
        /// Reference instant, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD`. Defaults to local time.
        #[arg(long)]
        now: Option<String>,
        /// Print the render model as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Why: logs go to files only; without a directory the probe stays
    // silent instead of guessing a location on the caller's machine.
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(todoboard_core::default_log_level());
        let error = todoboard_api::init_logging(level, log_dir);
        if !error.is_empty() {
            bail!("logging init failed: {error}");
        }
    }

    match cli.command {
        Commands::Version => {
            println!("todoboard_core version={}", todoboard_api::core_version());
        }
        Commands::Demo { view, now, json } => {
            let now = match now.as_deref() {
                Some(raw) => parse_now(raw)?,
                None => Local::now().naive_local(),
            };
            let mut session = seed_demo(now.date())?;
            session.select_view(view);
            let render = session.render(now);
            info!(
                "event=demo_render module=cli status=ok view={} items={}",
                view,
                render.view.items.len()
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&render)?);
            } else {
                print_render(&render);
            }
        }
    }
    Ok(())
}

fn parse_now(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(instant);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("invalid --now `{raw}`; expected YYYY-MM-DDTHH:MM or YYYY-MM-DD"))
}

fn seed_demo(today: NaiveDate) -> Result<AppSession> {
    let mut session = AppSession::new();
    let work = session.submit_project(ProjectForm {
        editing_id: None,
        name: "Work".to_string(),
    });
    let work_id = work.id.ok_or_else(|| anyhow!(work.message))?;
    let inbox_id = session.new_todo_form().project_id;

    let samples = [
        (&inbox_id, "Water the plants", "", 0, "low"),
        (&inbox_id, "Renew passport", "Bring two photos", -3, "high"),
        (&inbox_id, "Call the dentist", "", 2, "medium"),
        (&work_id, "Quarterly report", "Numbers from finance", 0, "high"),
        (&work_id, "Team offsite agenda", "", 7, "medium"),
        (&work_id, "Archive old tickets", "", 12, "low"),
    ];
    for (project_id, title, description, offset, priority) in samples {
        let due = today
            .checked_add_signed(Duration::days(offset))
            .context("demo due date out of range")?;
        let response = session.submit_todo(TodoForm {
            editing_id: None,
            title: title.to_string(),
            description: description.to_string(),
            due_date: due.format("%Y-%m-%d").to_string(),
            priority: priority.to_string(),
            project_id: project_id.clone(),
        });
        if !response.ok {
            bail!("seeding `{title}` failed: {}", response.message);
        }
    }
    Ok(session)
}

fn print_render(render: &RenderModel) {
    println!("{} - {}", render.view.title, render.view.subtitle);
    println!(
        "today={} upcoming={}",
        render.view.counts.today, render.view.counts.upcoming
    );
    if render.view.is_empty() {
        println!("  No tasks here");
    }
    for item in &render.view.items {
        let mark = if item.is_complete { "x" } else { " " };
        let flag = if item.is_overdue {
            " overdue"
        } else if item.is_today {
            " today"
        } else {
            ""
        };
        println!(
            "  [{mark}] {} ({}, {}){flag}",
            item.title, item.due_label, item.priority
        );
    }
    println!("projects:");
    for project in &render.projects {
        let active = if project.is_active { "*" } else { " " };
        println!("  {active} {} ({})", project.name, project.todo_count);
    }
}
