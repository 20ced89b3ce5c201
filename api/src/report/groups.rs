use super::format::{result_line, schedule_line};
use super::{Outcome, Printer, Report, resolve_names};
use crate::command::Selection;
use crate::stats::standings;
use crate::{Group, Tournament};

const STANDINGS_TITLE: &str = "Team            MP   W   D   L   GF   GD   Pts";

/// Standings table per group, sorted by group id.
pub fn group_standings(t: &Tournament, selection: &Selection, verbose: bool) -> Report {
    let mut out = Printer::default();
    let mut groups: Vec<&Group> = match selection {
        Selection::All => t.groups.iter().collect(),
        Selection::Named(ids) => resolve_names(&mut out, ids, |id| t.find_group(id)),
    };
    if groups.is_empty() {
        return out.finish(Outcome::NoResults);
    }
    groups.sort_by_key(|g| g.id);
    groups.dedup_by_key(|g| g.id);

    for group in groups {
        if !out.is_empty() {
            out.blank();
        }
        out.line(format!("----- Group {} Standings -----", group.id));
        out.blank();
        out.line(STANDINGS_TITLE);
        for row in standings(group) {
            let r = row.record;
            out.line(format!(
                "{:<16}{:>2}   {}   {}   {}   {:>2}  {:>3}   {:>3}",
                row.team,
                r.played,
                r.wins,
                r.draws,
                r.losses,
                r.goals_for,
                r.goal_difference,
                r.points()
            ));
        }

        if verbose {
            out.blank();
            out.line(format!("----- Group {} Matches -----", group.id));
            out.blank();
            let (history, schedule): (Vec<_>, Vec<_>) = group.matches.iter().partition(|m| m.finished);
            if !history.is_empty() {
                out.line("Finished Matches:");
                out.lines(history.into_iter().map(|m| result_line(m, None)));
            }
            if !schedule.is_empty() {
                out.blank();
                out.line("Upcoming Matches:");
                out.lines(schedule.into_iter().map(|m| schedule_line(m, None)));
            }
        }
    }
    out.finish(Outcome::Ok)
}

/// The draw: every group with its four teams.
pub fn structure(t: &Tournament) -> Report {
    let mut out = Printer::default();
    out.banner("All Groups");
    for group in &t.groups {
        out.line(format!("{:=^20}", format!("Group {}", group.id)));
        out.lines(group.teams.iter().map(|team| format!("{team:^20}")));
        out.line(format!("{:=^20}", format!("{} Group", group.id)));
        out.blank();
    }
    out.finish(Outcome::Ok)
}
