pub mod bracket;
pub mod command;
pub mod engine;
pub mod loader;
pub mod report;
pub mod stats;
pub mod tzone;
pub mod wire;

#[cfg(test)]
mod fixture;

use crate::command::title_case;
use crate::tzone::{Kickoff, UserZone};
use log::warn;

/// Winner value recorded for a finished match that ended level.
pub const DRAW: &str = "Draw";

/// Shown wherever a team slot is still undetermined.
pub const TBD: &str = "TBD";

// ---------------------------------------------------------------------------
// Validated records, independent of the user zone
// ---------------------------------------------------------------------------

/// Tournament stage. Ordered from earliest to latest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    #[default]
    GroupStage,
    RoundOf16,
    RoundOf8,
    SemiFinal,
    ThirdPlacePlayoff,
    Final,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::GroupStage => "Group Stage",
            MatchKind::RoundOf16 => "Round of 16",
            MatchKind::RoundOf8 => "Round of 8",
            MatchKind::SemiFinal => "Semi-final",
            MatchKind::ThirdPlacePlayoff => "3rd Place Playoff",
            MatchKind::Final => "Final",
        }
    }

    pub fn is_knockout(&self) -> bool {
        !matches!(self, MatchKind::GroupStage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Normal,
    OwnGoal,
    /// Scored in a penalty shoot-out, never part of the regular score.
    Penalty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// Minute in the match, or kick order for shoot-out goals.
    pub minute: u32,
    /// Team credited with the goal (the opponent of the scorer for own goals).
    pub team: String,
    pub player: String,
    pub kind: GoalKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRecord {
    pub id: String,
    pub index: u32,
    pub native_offset: f64,
    pub teams: [String; 2],
    pub kind: MatchKind,
    pub group: Option<char>,
    pub finished: bool,
    pub goals: Vec<Goal>,
    pub winner: String,
    pub stadium: String,
    pub man_of_the_match: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupRecord {
    pub id: char,
    pub teams: [String; 4],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta {
    pub year: u16,
    pub host: String,
}

/// Award categories and their recipients, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Awards(Vec<(String, String)>);

impl Awards {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, r)| (c.as_str(), r.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the loader produced. Kept for the whole session so snapshots can
/// be rebuilt for a different zone.
#[derive(Debug, Clone, Default)]
pub struct TournamentData {
    pub meta: Meta,
    pub matches: Vec<MatchRecord>,
    pub groups: Vec<GroupRecord>,
    pub awards: Awards,
}

// ---------------------------------------------------------------------------
// Snapshot entities: derived fields computed once, never mutated
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub index: u32,
    pub native_offset: f64,
    pub teams: [String; 2],
    pub kind: MatchKind,
    pub group: Option<char>,
    pub finished: bool,
    pub goals: Vec<Goal>,
    pub winner: String,
    pub stadium: String,
    pub man_of_the_match: String,
    /// Regular-time goals per slot.
    pub score: [u32; 2],
    /// Shoot-out goals per slot.
    pub shootout: [u32; 2],
    pub penalty_shootout: bool,
    /// The non-winning team, `Draw`, or empty while unresolved.
    pub loser: String,
    /// Kick-off rendered in the snapshot's zone.
    pub kickoff: String,
}

impl Match {
    pub fn new(record: &MatchRecord, zone: &UserZone) -> Self {
        let mut score = [0; 2];
        let mut shootout = [0; 2];
        let mut penalty_shootout = false;
        let mut loser = String::new();

        if record.finished {
            loser = if record.winner == record.teams[0] {
                record.teams[1].clone()
            } else if record.winner == record.teams[1] {
                record.teams[0].clone()
            } else {
                DRAW.to_string()
            };

            for goal in &record.goals {
                let Some(slot) = record.teams.iter().position(|t| *t == goal.team) else {
                    warn!("match {}: skipping goal for {}, who is not playing", record.index, goal.team);
                    continue;
                };
                if goal.kind == GoalKind::Penalty {
                    penalty_shootout = true;
                    shootout[slot] += 1;
                } else {
                    score[slot] += 1;
                }
            }
        }

        let kickoff = record
            .id
            .parse::<Kickoff>()
            .and_then(|k| tzone::localize(k, record.native_offset, zone))
            .unwrap_or_else(|err| {
                warn!("match {} has no usable kick-off time: {err}", record.index);
                format!("an unknown date ({err})")
            });

        Self {
            id: record.id.clone(),
            index: record.index,
            native_offset: record.native_offset,
            teams: record.teams.clone(),
            kind: record.kind,
            group: record.group,
            finished: record.finished,
            goals: record.goals.clone(),
            winner: record.winner.clone(),
            stadium: record.stadium.clone(),
            man_of_the_match: record.man_of_the_match.clone(),
            score,
            shootout,
            penalty_shootout,
            loser,
            kickoff,
        }
    }

    pub fn has_team(&self, team: &str) -> bool {
        !team.is_empty() && self.teams.iter().any(|t| t == team)
    }

    pub fn has_teams(&self, a: &str, b: &str) -> bool {
        self.has_team(a) && self.has_team(b)
    }

    /// Both slots hold a team.
    pub fn is_resolved(&self) -> bool {
        self.teams.iter().all(|t| !t.is_empty())
    }

    /// Slot name, or `TBD` while undetermined.
    pub fn team(&self, slot: usize) -> &str {
        display_name(&self.teams[slot])
    }

    pub fn is_draw(&self) -> bool {
        self.finished && self.winner == DRAW
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.finished && !team.is_empty() && self.winner == team
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: char,
    pub teams: [String; 4],
    /// Matches owned by this group, in dataset order.
    pub matches: Vec<Match>,
}

impl Group {
    pub fn new(record: &GroupRecord, matches: &[Match]) -> Self {
        Self {
            id: record.id,
            teams: record.teams.clone(),
            matches: matches
                .iter()
                .filter(|m| m.group == Some(record.id))
                .cloned()
                .collect(),
        }
    }
}

/// One immutable view over the dataset, localized for one zone.
#[derive(Debug, Clone)]
pub struct Tournament {
    pub meta: Meta,
    pub zone: UserZone,
    pub matches: Vec<Match>,
    pub groups: Vec<Group>,
    pub awards: Awards,
    /// Participating teams in group order.
    pub teams: Vec<String>,
    pub group_ids: Vec<char>,
}

impl Tournament {
    pub fn build(data: &TournamentData, zone: &UserZone) -> Self {
        let matches: Vec<Match> = data.matches.iter().map(|m| Match::new(m, zone)).collect();
        let groups: Vec<Group> = data.groups.iter().map(|g| Group::new(g, &matches)).collect();
        let teams = groups.iter().flat_map(|g| g.teams.iter().cloned()).collect();
        let group_ids = groups.iter().map(|g| g.id).collect();

        Self {
            meta: data.meta.clone(),
            zone: zone.clone(),
            matches,
            groups,
            awards: data.awards.clone(),
            teams,
            group_ids,
        }
    }

    /// Resolve a typed name to the participating team's canonical spelling.
    pub fn find_team(&self, name: &str) -> Option<&str> {
        let wanted = title_case(name);
        self.teams
            .iter()
            .find(|t| title_case(t) == wanted)
            .map(String::as_str)
    }

    pub fn find_group(&self, id: &str) -> Option<&Group> {
        let mut chars = id.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let c = c.to_ascii_uppercase();
        self.groups.iter().find(|g| g.id == c)
    }

    /// All matches a team appears in, in dataset order.
    pub fn matches_of<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'a Match> + 'a {
        self.matches.iter().filter(move |m| m.has_team(team))
    }

    pub fn matches_of_kind(&self, kind: MatchKind) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.kind == kind)
    }

    pub fn find_match(&self, index: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.index == index)
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.matches_of_kind(MatchKind::Final).next()
    }

    /// The tournament is over once its Final has been played.
    pub fn is_over(&self) -> bool {
        self.final_match().is_some_and(|m| m.finished)
    }
}

pub fn display_name(team: &str) -> &str {
    if team.is_empty() { TBD } else { team }
}
