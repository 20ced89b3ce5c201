//! Derived statistics: team records, group tables, the status decision table,
//! scorer rankings and final placements.

use crate::{GoalKind, Group, Match, MatchKind, Tournament};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goal_difference: i32,
}

impl TeamRecord {
    /// Accumulate `team`'s record over the finished matches in `matches`.
    /// Shoot-out goals count for neither goals for nor goal difference.
    pub fn tally<'a>(team: &str, matches: impl IntoIterator<Item = &'a Match>) -> Self {
        let mut record = TeamRecord::default();
        for m in matches.into_iter().filter(|m| m.finished && m.has_team(team)) {
            record.played += 1;
            if m.won_by(team) {
                record.wins += 1;
            } else if m.is_draw() {
                record.draws += 1;
            } else {
                record.losses += 1;
            }
            for goal in m.goals.iter().filter(|g| g.kind != GoalKind::Penalty) {
                if goal.team == team {
                    record.goals_for += 1;
                    record.goal_difference += 1;
                } else {
                    record.goal_difference -= 1;
                }
            }
        }
        record
    }

    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub team: String,
    pub record: TeamRecord,
}

/// One row per team in the group's fixed order.
pub fn standings(group: &Group) -> Vec<StandingRow> {
    group
        .teams
        .iter()
        .map(|team| StandingRow { team: team.clone(), record: TeamRecord::tally(team, &group.matches) })
        .collect()
}

/// Where a team stands, judged from its chronologically last match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamStatus {
    InGroupStage,
    OutInGroupStage,
    AdvancedTo(MatchKind),
    OutIn(MatchKind),
    OutInSemiFinal,
    ThirdPlace,
    FourthPlace,
    AdvancedToFinal,
    Champion,
    RunnerUp,
}

impl TeamStatus {
    pub fn of(team: &str, last: &Match) -> Self {
        use MatchKind::*;

        match (last.kind, last.finished, last.won_by(team)) {
            (GroupStage, false, _) => TeamStatus::InGroupStage,
            (GroupStage, true, _) => TeamStatus::OutInGroupStage,
            (ThirdPlacePlayoff, false, _) => TeamStatus::OutInSemiFinal,
            (ThirdPlacePlayoff, true, true) => TeamStatus::ThirdPlace,
            (ThirdPlacePlayoff, true, false) => TeamStatus::FourthPlace,
            (Final, false, _) => TeamStatus::AdvancedToFinal,
            (Final, true, true) => TeamStatus::Champion,
            (Final, true, false) => TeamStatus::RunnerUp,
            (kind @ (RoundOf16 | RoundOf8 | SemiFinal), false, _) => TeamStatus::AdvancedTo(kind),
            (kind @ (RoundOf16 | RoundOf8 | SemiFinal), true, _) => TeamStatus::OutIn(kind),
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamStatus::InGroupStage => f.write_str("still in the group stage"),
            TeamStatus::OutInGroupStage => f.write_str("disqualified in the group stage"),
            TeamStatus::AdvancedTo(kind) => write!(f, "advanced to the {}", kind.label()),
            TeamStatus::OutIn(kind) => write!(f, "disqualified in the {}", kind.label()),
            TeamStatus::OutInSemiFinal => f.write_str("disqualified in the semifinal"),
            TeamStatus::ThirdPlace => f.write_str("won the third place"),
            TeamStatus::FourthPlace => f.write_str("won the fourth place"),
            TeamStatus::AdvancedToFinal => f.write_str("advanced to the final"),
            TeamStatus::Champion => f.write_str("won the title"),
            TeamStatus::RunnerUp => f.write_str("won the second place"),
        }
    }
}

/// Status from the team's highest-index match, if it has any.
pub fn team_status(tournament: &Tournament, team: &str) -> Option<TeamStatus> {
    tournament
        .matches_of(team)
        .max_by_key(|m| m.index)
        .map(|last| TeamStatus::of(team, last))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerRow {
    pub rank: u32,
    pub player: String,
    pub goals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScorerTable {
    pub total: u32,
    pub rows: Vec<ScorerRow>,
}

/// Dense-ranked scorers. Only normal goals in finished matches count; players
/// level on goals keep the order in which they first scored.
pub fn top_scorers<'a>(matches: impl IntoIterator<Item = &'a Match>) -> ScorerTable {
    let mut tally: Vec<(String, u32)> = Vec::new();
    for goal in matches
        .into_iter()
        .filter(|m| m.finished)
        .flat_map(|m| m.goals.iter())
        .filter(|g| g.kind == GoalKind::Normal)
    {
        match tally.iter_mut().find(|(player, _)| *player == goal.player) {
            Some((_, count)) => *count += 1,
            None => tally.push((goal.player.clone(), 1)),
        }
    }
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    let total = tally.iter().map(|(_, count)| count).sum();
    let mut rows = Vec::with_capacity(tally.len());
    let mut rank = 0;
    let mut previous = None;
    for (player, goals) in tally {
        if previous != Some(goals) {
            rank += 1;
            previous = Some(goals);
        }
        rows.push(ScorerRow { rank, player, goals });
    }

    ScorerTable { total, rows }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placements {
    pub champion: String,
    pub runner_up: String,
    pub third: String,
    pub fourth: String,
    /// Round of 8 losers, dataset order.
    pub fifth_to_eighth: Vec<String>,
    /// Round of 16 losers, dataset order.
    pub ninth_to_sixteenth: Vec<String>,
}

/// Final placements, available once the Final has been played.
pub fn placements(tournament: &Tournament) -> Option<Placements> {
    let last = tournament.final_match().filter(|m| m.finished)?;
    let third = tournament.matches_of_kind(MatchKind::ThirdPlacePlayoff).next();
    let losers = |kind| {
        tournament
            .matches_of_kind(kind)
            .map(|m| m.loser.clone())
            .collect::<Vec<_>>()
    };

    Some(Placements {
        champion: last.winner.clone(),
        runner_up: last.loser.clone(),
        third: third.map(|m| m.winner.clone()).unwrap_or_default(),
        fourth: third.map(|m| m.loser.clone()).unwrap_or_default(),
        fifth_to_eighth: losers(MatchKind::RoundOf8),
        ninth_to_sixteenth: losers(MatchKind::RoundOf16),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;
    use crate::tzone::UserZone;
    use crate::{Goal, MatchRecord};

    fn finished(goals: &[(&str, &str, GoalKind)]) -> Match {
        let record = MatchRecord {
            id: "061418".into(),
            index: 1,
            teams: ["Russia".into(), "Saudi_Arabia".into()],
            finished: true,
            winner: "Russia".into(),
            goals: goals
                .iter()
                .enumerate()
                .map(|(i, (team, player, kind))| Goal {
                    minute: i as u32 + 1,
                    team: team.to_string(),
                    player: player.to_string(),
                    kind: *kind,
                })
                .collect(),
            ..Default::default()
        };
        Match::new(&record, &UserZone::Native)
    }

    #[test]
    fn record_counts_add_up_for_every_team() {
        for data in [fixture::fresh(), fixture::group_stage_done(), fixture::completed()] {
            let t = Tournament::build(&data, &UserZone::Native);
            for team in &t.teams {
                let r = TeamRecord::tally(team, &t.matches);
                assert_eq!(r.wins + r.losses + r.draws, r.played, "{team}");
            }
        }
    }

    #[test]
    fn shootout_goals_do_not_count_towards_goal_difference() {
        let t = Tournament::build(&fixture::completed(), &UserZone::Native);
        let spain = t.find_match(51).unwrap();
        assert!(spain.penalty_shootout);
        let r = TeamRecord::tally("Spain", [spain]);
        assert_eq!((r.played, r.losses, r.goals_for, r.goal_difference), (1, 1, 1, 0));
    }

    #[test]
    fn group_points_match_results() {
        let t = Tournament::build(&fixture::group_stage_done(), &UserZone::Native);
        for group in &t.groups {
            let decided = group.matches.iter().filter(|m| m.finished && !m.is_draw()).count() as u32;
            let drawn = group.matches.iter().filter(|m| m.is_draw()).count() as u32;
            let points: u32 = standings(group).iter().map(|row| row.record.points()).sum();
            assert_eq!(points, 3 * decided + 2 * drawn, "group {}", group.id);
        }
    }

    #[test]
    fn standings_keep_fixed_team_order() {
        let t = Tournament::build(&fixture::group_stage_done(), &UserZone::Native);
        let rows = standings(&t.groups[5]);
        let teams: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Sweden", "Mexico", "South_Korea", "Germany"]);
        assert_eq!(rows[0].record.points(), 9);
        assert_eq!(rows[3].record, TeamRecord {
            played: 3,
            wins: 0,
            draws: 1,
            losses: 2,
            goals_for: 1,
            goal_difference: -2,
        });
    }

    #[test]
    fn status_decision_table() {
        let t = Tournament::build(&fixture::completed(), &UserZone::Native);
        let status = |team| team_status(&t, team).unwrap().to_string();
        assert_eq!(status("Germany"), "disqualified in the group stage");
        assert_eq!(status("Portugal"), "disqualified in the Round of 16");
        assert_eq!(status("Brazil"), "disqualified in the Round of 8");
        assert_eq!(status("Belgium"), "won the third place");
        assert_eq!(status("England"), "won the fourth place");
        assert_eq!(status("France"), "won the title");
        assert_eq!(status("Croatia"), "won the second place");

        let t = Tournament::build(&fixture::fresh(), &UserZone::Native);
        assert_eq!(team_status(&t, "Germany").unwrap().to_string(), "still in the group stage");

        let t = Tournament::build(&fixture::group_stage_done(), &UserZone::Native);
        assert_eq!(team_status(&t, "France").unwrap().to_string(), "advanced to the Round of 16");
    }

    #[test]
    fn status_for_unplayed_final_rounds() {
        let t = Tournament::build(&fixture::semi_finals_done(), &UserZone::Native);
        let status = |team| team_status(&t, team).unwrap().to_string();
        assert_eq!(status("France"), "advanced to the final");
        assert_eq!(status("England"), "disqualified in the semifinal");
    }

    #[test]
    fn scorers_are_densely_ranked() {
        let m = finished(&[
            ("Russia", "Denis Cheryshev", GoalKind::Normal),
            ("Russia", "Artem Dzyuba", GoalKind::Normal),
            ("Russia", "Denis Cheryshev", GoalKind::Normal),
            ("Russia", "Aleksandr Golovin", GoalKind::Normal),
            ("Russia", "Yury Gazinsky", GoalKind::Normal),
            ("Russia", "Yury Gazinsky", GoalKind::Normal),
            ("Saudi_Arabia", "Ahmed Fathy", GoalKind::OwnGoal),
            ("Russia", "Igor Akinfeev", GoalKind::Penalty),
        ]);
        let table = top_scorers([&m]);
        assert_eq!(table.total, 6);
        let ranks: Vec<(&str, u32, u32)> =
            table.rows.iter().map(|r| (r.player.as_str(), r.rank, r.goals)).collect();
        assert_eq!(ranks, vec![
            ("Denis Cheryshev", 1, 2),
            ("Yury Gazinsky", 1, 2),
            ("Artem Dzyuba", 2, 1),
            ("Aleksandr Golovin", 2, 1),
        ]);
    }

    #[test]
    fn dense_rank_never_skips() {
        let t = Tournament::build(&fixture::completed(), &UserZone::Native);
        let table = top_scorers(&t.matches);
        assert!(!table.rows.is_empty());
        assert_eq!(table.rows[0].rank, 1);
        for pair in table.rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.goals >= b.goals);
            if a.goals == b.goals {
                assert_eq!(a.rank, b.rank);
            } else {
                assert_eq!(a.rank + 1, b.rank);
            }
        }
        assert_eq!(table.total, table.rows.iter().map(|r| r.goals).sum::<u32>());
    }

    #[test]
    fn placements_follow_knockout_results() {
        let t = Tournament::build(&fixture::group_stage_done(), &UserZone::Native);
        assert!(placements(&t).is_none());

        let t = Tournament::build(&fixture::completed(), &UserZone::Native);
        let p = placements(&t).unwrap();
        assert_eq!(p.champion, "France");
        assert_eq!(p.runner_up, "Croatia");
        assert_eq!(p.third, "Belgium");
        assert_eq!(p.fourth, "England");
        assert_eq!(p.fifth_to_eighth, vec!["Uruguay", "Brazil", "Russia", "Sweden"]);
        assert_eq!(p.ninth_to_sixteenth, vec![
            "Portugal", "Argentina", "Spain", "Denmark", "Mexico", "Japan", "Switzerland", "Colombia",
        ]);
    }
}
