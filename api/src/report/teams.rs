use super::format::{result_line, schedule_line};
use super::{Outcome, Printer, Report, resolve_names};
use crate::command::Selection;
use crate::stats::{TeamRecord, team_status};
use crate::{Match, Tournament};

/// Statistics summary per team. Verbose adds the full history and schedule,
/// otherwise only the most recent result follows the summary.
pub fn team_stats(t: &Tournament, selection: &Selection, verbose: bool) -> Report {
    let mut out = Printer::default();
    let teams: Vec<&str> = match selection {
        Selection::All => t.teams.iter().map(String::as_str).collect(),
        Selection::Named(names) => resolve_names(&mut out, names, |n| t.find_team(n)),
    };
    if teams.is_empty() {
        return out.finish(Outcome::NoResults);
    }

    for team in teams {
        if !out.is_empty() {
            out.blank();
        }
        out.lines(summary(t, team));

        let mut played: Vec<&Match> = t.matches_of(team).collect();
        played.sort_by_key(|m| m.index);
        let (history, schedule): (Vec<&Match>, Vec<&Match>) =
            played.into_iter().partition(|m| m.finished);

        if verbose {
            if !history.is_empty() {
                out.blank();
                out.line(format!("{team} Match History:"));
                out.lines(history.iter().map(|m| result_line(m, Some(team))));
            }
            if !schedule.is_empty() {
                out.blank();
                out.line(format!("{team} Match Schedule:"));
                out.lines(schedule.iter().map(|m| schedule_line(m, Some(team))));
            }
        } else if let Some(last) = history.last() {
            out.blank();
            out.line("Most Recent:");
            out.line(result_line(last, Some(team)));
        }
    }
    out.finish(Outcome::Ok)
}

fn summary(t: &Tournament, team: &str) -> Vec<String> {
    let record = TeamRecord::tally(team, &t.matches);
    let status = team_status(t, team)
        .map(|s| s.to_string())
        .unwrap_or_else(|| "not scheduled yet".to_string());
    vec![
        format!("----- Team {team} Statistics -----"),
        String::new(),
        format!("Current Status: {status}"),
        format!("Matches Played: {}", record.played),
        format!("Wins: {}", record.wins),
        format!("Losses: {}", record.losses),
        format!("Draws: {}", record.draws),
        format!("Total Goals: {}", record.goals_for),
        format!("Goal Difference: {}", record.goal_difference),
    ]
}
