use super::format::{result_line, schedule_line};
use super::{Outcome, Printer, Report};
use crate::Tournament;
use crate::bracket::Bracket;
use crate::stats::{placements, top_scorers};
use log::warn;
use std::cmp::Reverse;

pub const NOT_OVER: &str = "Not available until World Cup is over.";

/// How many matches News and Upcoming show.
const HEADLINES: usize = 3;

pub fn bracket(t: &Tournament) -> Report {
    match Bracket::resolve(t) {
        Ok(bracket) => {
            let mut out = Printer::default();
            out.banner("World Cup Bracket");
            out.lines(bracket.render());
            out.finish(Outcome::Ok)
        }
        Err(err) => {
            warn!("cannot draw bracket: {err}");
            Printer::default().notice(&format!("Bracket not available: {err}"))
        }
    }
}

pub fn ranking(t: &Tournament) -> Report {
    let Some(p) = placements(t) else {
        return Printer::default().notice(NOT_OVER);
    };
    let mut out = Printer::default();
    out.banner("Team Rankings");
    out.line(format!("Champion:         {}", p.champion));
    out.line(format!("Runners-up:       {}", p.runner_up));
    out.line(format!("Third Place:      {}", p.third));
    out.line(format!("Fourth Place:     {}", p.fourth));
    out.line(format!("No. 5 - No. 8:    {}", p.fifth_to_eighth.join(", ")));
    out.line(format!("No. 9 - No. 16:   {}", p.ninth_to_sixteenth.join(", ")));
    out.finish(Outcome::Ok)
}

pub fn awards(t: &Tournament) -> Report {
    if !t.is_over() {
        return Printer::default().notice(NOT_OVER);
    }
    if t.awards.is_empty() {
        return Printer::default().notice("No awards recorded");
    }
    let mut out = Printer::default();
    out.banner("World Cup Awards");
    for (category, recipient) in t.awards.iter() {
        out.line(format!("{:30}{recipient}", format!("{category}:")));
    }
    out.finish(Outcome::Ok)
}

pub fn scorers(t: &Tournament) -> Report {
    let table = top_scorers(&t.matches);
    if table.rows.is_empty() {
        return Printer::default().notice("No goals yet");
    }
    let mut out = Printer::default();
    out.banner("Best Scorers");
    out.line(format!("{:>2}   {:^25}      {}", "#", "Name", "Goals"));
    out.line(format!("{:>2}   {:^25}      {}", 0, "Total", table.total));
    for row in &table.rows {
        out.line(format!("{:>2}   {:^25}      {}", row.rank, row.player, row.goals));
    }
    out.finish(Outcome::Ok)
}

/// The latest finished matches.
pub fn news(t: &Tournament) -> Report {
    let mut latest: Vec<_> = t.matches.iter().filter(|m| m.finished).collect();
    if latest.is_empty() {
        return Printer::default().notice("No match history");
    }
    latest.sort_by_key(|m| Reverse(m.index));

    let mut out = Printer::default();
    out.banner("Latest Results");
    out.lines(latest.into_iter().take(HEADLINES).map(|m| result_line(m, None)));
    out.finish(Outcome::Ok)
}

/// The soonest matches whose teams are both known.
pub fn upcoming(t: &Tournament) -> Report {
    let mut next: Vec<_> = t
        .matches
        .iter()
        .filter(|m| !m.finished && m.is_resolved())
        .collect();
    if next.is_empty() {
        return Printer::default().notice("No known schedule");
    }
    next.sort_by_key(|m| m.index);

    let mut out = Printer::default();
    out.banner("Upcoming Matches");
    out.lines(next.into_iter().take(HEADLINES).map(|m| schedule_line(m, None)));
    out.finish(Outcome::Ok)
}
