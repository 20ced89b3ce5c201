//! Line formats shared by the match, team and group reports.

use crate::{GoalKind, Match, MatchKind};

/// Slot order with `first` shown on the left when it plays in `m`.
fn slots(m: &Match, first: Option<&str>) -> [usize; 2] {
    match first {
        Some(team) if m.teams[1] == team => [1, 0],
        _ => [0, 1],
    }
}

/// `France         4 - 2        Croatia`, with shoot-out goals in brackets.
pub fn result_line(m: &Match, first: Option<&str>) -> String {
    let [a, b] = slots(m, first);
    if m.penalty_shootout {
        format!(
            "{:15}{}({}P) - {}({}P){:>15}",
            m.team(a),
            m.score[a],
            m.shootout[a],
            m.score[b],
            m.shootout[b],
            m.team(b)
        )
    } else {
        format!("{:15}{} - {}{:>15}", m.team(a), m.score[a], m.score[b], m.team(b))
    }
}

pub fn schedule_line(m: &Match, first: Option<&str>) -> String {
    let [a, b] = slots(m, first);
    format!("{:15}VS.{:>15}     will be held on {}", m.team(a), m.team(b), m.kickoff)
}

/// One line per goal credited to `only` (or to either team), shoot-out
/// kicks numbered separately.
pub fn goal_lines(m: &Match, only: Option<&str>) -> Vec<String> {
    let mut goals = 0;
    let mut penalties = 0;
    m.goals
        .iter()
        .filter(|g| m.has_team(&g.team))
        .filter(|g| only.is_none_or(|team| g.team == team))
        .map(|g| match g.kind {
            GoalKind::Penalty => {
                penalties += 1;
                format!("Penalty {penalties}:     by {:25}   for {}", g.player, g.team)
            }
            GoalKind::Normal | GoalKind::OwnGoal => {
                goals += 1;
                let tag = if g.kind == GoalKind::OwnGoal { "(OG)    " } else { "        " };
                format!("Goal {goals}:    at {:03}'{tag}by {:25}   for {}", g.minute, g.player, g.team)
            }
        })
        .collect()
}

pub fn heading(m: &Match) -> String {
    match (m.kind, m.group) {
        (MatchKind::GroupStage, Some(group)) => format!("Group {group} Match"),
        (kind, _) => kind.label().to_string(),
    }
}

/// Everything known about one match.
pub fn full_detail(m: &Match) -> Vec<String> {
    let mut lines = vec![heading(m), format!("Stadium:   {}", m.stadium)];
    if m.finished {
        lines.extend([String::new(), "Result:".to_string(), result_line(m, None)]);
        lines.extend([String::new(), "Goals:".to_string()]);
        lines.extend(goal_lines(m, None));
        lines.push(String::new());
        lines.push(format!("Man of the Match:   {}", m.man_of_the_match));
    } else {
        lines.push("Match Schedule:".to_string());
        lines.push(schedule_line(m, None));
    }
    lines
}
