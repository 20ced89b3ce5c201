use super::format::{full_detail, goal_lines, result_line, schedule_line};
use super::{Outcome, Printer, Report, resolve_names};
use crate::{Match, Tournament};
use std::cmp::Reverse;

/// Every meeting between two teams, in dataset order.
pub fn head_to_head(t: &Tournament, a: &str, b: &str) -> Report {
    let (Some(a), Some(b)) = (t.find_team(a), t.find_team(b)) else {
        return Printer::default().finish(Outcome::NoResults);
    };
    let found: Vec<&Match> = t.matches.iter().filter(|m| m.has_teams(a, b)).collect();
    if found.is_empty() {
        return Printer::default().finish(Outcome::NoResults);
    }

    let mut out = Printer::default();
    out.line(format!("----- {a} VS {b} Details -----"));
    for (n, m) in found.into_iter().enumerate() {
        out.blank();
        out.line(format!("***** Match {} *****", n + 1));
        out.blank();
        out.lines(full_detail(m));
    }
    out.finish(Outcome::Ok)
}

/// History and schedule for each named team, the team shown first.
pub fn team_matches(t: &Tournament, names: &[String], verbose: bool) -> Report {
    let mut out = Printer::default();
    let teams = resolve_names(&mut out, names, |n| t.find_team(n));
    if teams.is_empty() {
        return out.finish(Outcome::NoResults);
    }

    for team in teams {
        if !out.is_empty() {
            out.blank();
        }
        out.line(format!("----- Team {team} Matches -----"));
        out.blank();

        let (history, schedule): (Vec<&Match>, Vec<&Match>) =
            t.matches_of(team).partition(|m| m.finished);
        if !history.is_empty() {
            out.line("Match History:");
            for m in history {
                out.line(result_line(m, Some(team)));
                if verbose {
                    out.lines(goal_lines(m, Some(team)));
                }
            }
        }

        let schedule: Vec<&Match> = schedule.into_iter().filter(|m| m.is_resolved()).collect();
        if !schedule.is_empty() {
            out.blank();
            out.line("Upcoming Matches:");
            out.lines(schedule.into_iter().map(|m| schedule_line(m, Some(team))));
        }
    }
    out.finish(Outcome::Ok)
}

/// Latest results first, then the schedule soonest first.
pub fn all_matches(t: &Tournament, verbose: bool) -> Report {
    let (mut history, mut schedule): (Vec<&Match>, Vec<&Match>) =
        t.matches.iter().partition(|m| m.finished);
    history.sort_by_key(|m| Reverse(m.index));
    schedule.retain(|m| m.is_resolved());
    schedule.sort_by_key(|m| m.index);

    let mut out = Printer::default();
    if !history.is_empty() {
        out.line("----- All Match History -----");
        out.blank();
        for m in history {
            out.line(result_line(m, None));
            if verbose {
                out.lines(goal_lines(m, None));
                out.blank();
            }
        }
    }
    if !schedule.is_empty() {
        if !out.is_empty() {
            out.blank();
        }
        out.line("----- Scheduled Upcoming Matches -----");
        out.blank();
        out.lines(schedule.into_iter().map(|m| schedule_line(m, None)));
    }
    out.finish(Outcome::Ok)
}
