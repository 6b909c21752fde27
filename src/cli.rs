use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use habit_calendar::{
    app::{AppSettings, AppState},
    calendar::CalendarEvent,
    input::{handle_action, UserAction},
};

pub const USAGE: &str = "Usage: habit-calendar [--summary | --agenda [YYYY/MM/DD] | --replay FILE]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Summary,
    AgendaDate(NaiveDate),
    Replay(PathBuf),
    Help,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(std::env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = CliMode::Summary;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--summary" => {
                mode = CliMode::Summary;
            }
            "--agenda" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                        .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?,
                    None => Local::now().date_naive(),
                };
                mode = CliMode::AgendaDate(target_date);
            }
            "--replay" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--replay requires a file argument".to_string())?;
                mode = CliMode::Replay(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(mode)
}

pub fn run_summary(settings: AppSettings) -> anyhow::Result<()> {
    let app = AppState::sample(Local::now().date_naive(), settings)?;
    println!("{}", format_summary(&app));
    Ok(())
}

pub fn run_agenda_mode(date: NaiveDate, settings: AppSettings) -> anyhow::Result<()> {
    let app = AppState::sample(date, settings)?;
    println!("{}", format_agenda_text(&app));
    Ok(())
}

pub fn run_replay(path: &Path, settings: AppSettings) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)?;
    let actions: Vec<UserAction> = serde_json::from_str(&content)?;
    tracing::info!("Replaying {} actions from {}", actions.len(), path.display());

    let mut app = AppState::sample(Local::now().date_naive(), settings)?;
    for (index, action) in actions.into_iter().enumerate() {
        let name = action.name();
        if let Err(e) = handle_action(&mut app, action) {
            eprintln!("Action {} ({}) rejected: {}", index + 1, name, e);
        }
    }

    println!("{}", serde_json::to_string_pretty(&app.snapshot())?);
    Ok(())
}

fn format_summary(app: &AppState) -> String {
    let challenge = app.get_challenge();
    let progress = app.get_progress();
    let mut lines = Vec::new();

    lines.push(format!("{} [{}]", challenge.title(), challenge.category().name()));
    lines.push(format!(
        "Progress: {}% • Streak: {} days",
        progress.percent, progress.completed_count
    ));
    lines.push(String::new());

    for task in challenge.tasks() {
        let mark = if app.challenge_progress().is_completed(task.day) { "x" } else { " " };
        lines.push(format!("[{}] Day {}: {}", mark, task.day, task.description));
    }

    lines.push(String::new());
    lines.push("Comments:".to_string());
    for comment in app.get_comments() {
        lines.push(format!("  {}: {}", comment.author, comment.text));
    }

    lines.join("\n")
}

fn format_agenda_text(app: &AppState) -> String {
    let calendar = app.calendar();
    let dates: BTreeSet<NaiveDate> = calendar.events().iter().map(|event| event.start.date()).collect();

    let mut lines = Vec::new();
    lines.push(format!("Agenda – {}", app.get_challenge().title()));
    lines.push(String::new());

    if dates.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for date in dates {
            for event in calendar.events_on(date) {
                lines.push(format!("- {}", build_agenda_line(event)));
            }
        }
    }

    lines.join("\n")
}

fn build_agenda_line(event: &CalendarEvent) -> String {
    let time_label = if event.start.is_all_day() {
        "All Day".to_string()
    } else {
        event.start.to_date_time().format("%H:%M").to_string()
    };

    format!(
        "{} {:<8} {} ({})",
        event.start.date().format("%a %Y-%m-%d"),
        time_label,
        event.title,
        event.color
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample_app() -> AppState {
        AppState::sample(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), AppSettings::default()).unwrap()
    }

    #[test]
    fn no_arguments_means_summary() {
        assert_eq!(parse_args(args(&[])), Ok(CliMode::Summary));
    }

    #[test]
    fn agenda_with_explicit_date() {
        assert_eq!(
            parse_args(args(&["--agenda", "2024/02/10"])),
            Ok(CliMode::AgendaDate(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()))
        );
    }

    #[test]
    fn agenda_without_date_uses_today() {
        assert_eq!(
            parse_args(args(&["--agenda"])),
            Ok(CliMode::AgendaDate(Local::now().date_naive()))
        );
    }

    #[test]
    fn agenda_rejects_bad_date() {
        assert!(parse_args(args(&["--agenda", "10-02-2024"])).is_err());
    }

    #[test]
    fn replay_requires_path() {
        assert!(parse_args(args(&["--replay"])).is_err());
        assert_eq!(
            parse_args(args(&["--replay", "actions.json"])),
            Ok(CliMode::Replay(PathBuf::from("actions.json")))
        );
    }

    #[test]
    fn unknown_argument_is_error() {
        assert_eq!(
            parse_args(args(&["--sync"])),
            Err("Unknown argument: --sync".to_string())
        );
    }

    #[test]
    fn agenda_lists_every_derived_event() {
        let text = format_agenda_text(&sample_app());

        assert!(text.starts_with("Agenda – 30-Day Weight Loss"));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 7);
        assert!(text.contains("Thu 2024-02-01 All Day  30-Day Weight Loss - Day 1 (#16a34a)"));
    }

    #[test]
    fn agenda_orders_events_by_date_then_time() {
        let mut app = sample_app();
        app.save_edit("weightloss-30d-1", "Evening walk", "2024-02-03T18:00", "#ef4444").unwrap();
        app.create_event_on(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(), "Meal prep").unwrap();

        let text = format_agenda_text(&app);
        let day_three: Vec<&str> = text.lines().filter(|l| l.contains("2024-02-03")).collect();

        assert_eq!(day_three.len(), 3);
        assert!(day_three[0].contains("All Day"));
        assert!(day_three[2].contains("18:00    Evening walk"));
    }

    #[test]
    fn summary_marks_completed_days() {
        let mut app = sample_app();
        app.toggle_day(2).unwrap();

        let text = format_summary(&app);

        assert!(text.contains("Progress: 14% • Streak: 1 days"));
        assert!(text.contains("[x] Day 2:"));
        assert!(text.contains("[ ] Day 1:"));
        assert!(text.contains("Nut: เริ่มวันนี้เลยครับ!"));
    }
}
