use crate::tzone::Kickoff;
use crate::wire::{DataFile, WireGoal, WireGroup, WireMatch};
use crate::{
    Awards, DRAW, Goal, GoalKind, GroupRecord, MatchKind, MatchRecord, Meta, TournamentData,
};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid tournament json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("match {index}: expected 2 team slots, found {found}")]
    TeamSlots { index: u32, found: usize },
    #[error("match {index}: id {id:?} is not an MMDDHH timestamp")]
    BadId { index: u32, id: String },
    #[error("match {index}: unknown match type {kind:?}")]
    UnknownMatchType { index: u32, kind: String },
    #[error("match {index}: unknown goal type {kind:?}")]
    UnknownGoalType { index: u32, kind: String },
    #[error("match {index}: goal credited to {team:?}, who is not playing")]
    GoalTeam { index: u32, team: String },
    #[error("match {index}: group stage match without a group")]
    MissingGroup { index: u32 },
    #[error("match {index}: winner {winner:?} is neither team nor a draw")]
    BadWinner { index: u32, winner: String },
    #[error("match index {0} appears more than once")]
    DuplicateIndex(u32),
    #[error("group id {0:?} is not a single letter")]
    BadGroupId(String),
    #[error("group {group}: expected 4 teams, found {found}")]
    GroupSize { group: char, found: usize },
}

pub fn load_from_path(path: impl AsRef<Path>) -> LoadResult<TournamentData> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let data = load_from_str(&content)?;
    info!(
        "loaded {} matches and {} groups from {}",
        data.matches.len(),
        data.groups.len(),
        path.display()
    );
    Ok(data)
}

pub fn load_from_str(json: &str) -> LoadResult<TournamentData> {
    let raw: DataFile = serde_json::from_str(json)?;
    map_data_file(raw)
}

fn map_data_file(raw: DataFile) -> LoadResult<TournamentData> {
    let mut seen = HashSet::new();
    let mut matches = Vec::with_capacity(raw.matches.len());
    for wire in raw.matches {
        if !seen.insert(wire.index) {
            return Err(LoadError::DuplicateIndex(wire.index));
        }
        matches.push(map_match(wire)?);
    }

    let groups = raw.groups.into_iter().map(map_group).collect::<LoadResult<Vec<_>>>()?;

    let awards = raw
        .awards
        .into_iter()
        .map(|(category, recipient)| {
            let recipient = match recipient {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (category, recipient)
        })
        .collect();

    Ok(TournamentData {
        meta: Meta { year: raw.meta.year, host: raw.meta.host },
        matches,
        groups,
        awards: Awards::new(awards),
    })
}

fn map_match(wire: WireMatch) -> LoadResult<MatchRecord> {
    let index = wire.index;

    if wire.id.parse::<Kickoff>().is_err() {
        return Err(LoadError::BadId { index, id: wire.id });
    }

    let teams: [String; 2] = wire
        .teams
        .try_into()
        .map_err(|teams: Vec<String>| LoadError::TeamSlots { index, found: teams.len() })?;

    let kind = parse_match_kind(&wire.kind)
        .ok_or_else(|| LoadError::UnknownMatchType { index, kind: wire.kind.clone() })?;

    let group = wire
        .group
        .as_deref()
        .map(str::trim)
        .and_then(|g| g.chars().next())
        .map(|c| c.to_ascii_uppercase());
    let group = match kind {
        MatchKind::GroupStage => Some(group.ok_or(LoadError::MissingGroup { index })?),
        _ => None,
    };

    let goals = wire
        .goals
        .into_iter()
        .map(|g| map_goal(index, g))
        .collect::<LoadResult<Vec<_>>>()?;
    if let Some(stray) = goals.iter().find(|g| !teams.contains(&g.team)) {
        return Err(LoadError::GoalTeam { index, team: stray.team.clone() });
    }

    let winner = wire.winner.unwrap_or_default();
    if wire.finished && winner != DRAW && !teams.contains(&winner) {
        return Err(LoadError::BadWinner { index, winner });
    }

    Ok(MatchRecord {
        id: wire.id,
        index,
        native_offset: wire.tzone,
        teams,
        kind,
        group,
        finished: wire.finished,
        goals,
        winner,
        stadium: wire.stadium.unwrap_or_default(),
        man_of_the_match: wire.man_of_the_match.unwrap_or_default(),
    })
}

fn map_goal(index: u32, wire: WireGoal) -> LoadResult<Goal> {
    let kind = match wire.kind.trim().to_ascii_uppercase().as_str() {
        "N" => GoalKind::Normal,
        "O" | "OG" => GoalKind::OwnGoal,
        "P" => GoalKind::Penalty,
        _ => return Err(LoadError::UnknownGoalType { index, kind: wire.kind }),
    };
    Ok(Goal { minute: wire.when, team: wire.team, player: wire.player, kind })
}

fn map_group(wire: WireGroup) -> LoadResult<GroupRecord> {
    let mut chars = wire.id.trim().chars();
    let id = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(LoadError::BadGroupId(wire.id)),
    };
    if !wire.matches.is_empty() {
        debug!("group {id} lists {} match ids", wire.matches.len());
    }
    let teams: [String; 4] = wire
        .teams
        .try_into()
        .map_err(|teams: Vec<String>| LoadError::GroupSize { group: id, found: teams.len() })?;
    Ok(GroupRecord { id, teams })
}

fn parse_match_kind(raw: &str) -> Option<MatchKind> {
    let normalized = raw.trim().to_ascii_lowercase().replace(['_', '-'], " ");
    match normalized.as_str() {
        "group" | "group stage" => Some(MatchKind::GroupStage),
        "round of 16" => Some(MatchKind::RoundOf16),
        "round of 8" | "quarter final" | "quarter finals" => Some(MatchKind::RoundOf8),
        "semi final" | "semi finals" | "semifinal" => Some(MatchKind::SemiFinal),
        "3rd place playoff" | "third place playoff" => Some(MatchKind::ThirdPlacePlayoff),
        "final" => Some(MatchKind::Final),
        _ => None,
    }
}
