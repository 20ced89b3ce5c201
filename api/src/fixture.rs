//! A synthetic 32-team tournament for tests, at several points in its life.
//!
//! Group tables are rigged so the first-listed team wins every group match,
//! the second wins the rest, and the last two draw each other. Knockout
//! results follow a fixed script ending with France beating Croatia 4-2.

use crate::bracket::{BRACKET, Feeder, node_for};
use crate::{
    Awards, DRAW, Goal, GoalKind, GroupRecord, MatchKind, MatchRecord, Meta, TournamentData,
};

pub const GROUPS: [(char, [&str; 4]); 8] = [
    ('A', ["Uruguay", "Russia", "Saudi_Arabia", "Egypt"]),
    ('B', ["Spain", "Portugal", "Iran", "Morocco"]),
    ('C', ["France", "Denmark", "Peru", "Australia"]),
    ('D', ["Croatia", "Argentina", "Nigeria", "Iceland"]),
    ('E', ["Brazil", "Switzerland", "Serbia", "Costa_Rica"]),
    ('F', ["Sweden", "Mexico", "South_Korea", "Germany"]),
    ('G', ["Belgium", "England", "Tunisia", "Panama"]),
    ('H', ["Colombia", "Japan", "Senegal", "Poland"]),
];

/// Group match pairings by position in the group, in play order.
const PAIRINGS: [(usize, usize); 6] = [(0, 1), (2, 3), (0, 2), (3, 1), (3, 0), (1, 2)];

const KNOCKOUT_IDS: [(u32, &str); 16] = [
    (49, "063017"), (50, "063021"), (51, "070117"), (52, "070121"),
    (53, "070218"), (54, "070221"), (55, "070317"), (56, "070321"),
    (57, "070617"), (58, "070621"), (59, "070721"), (60, "070718"),
    (61, "071021"), (62, "071121"), (63, "071417"), (64, "071518"),
];

/// (index, regular score, shoot-out score)
type Script = (u32, [u32; 2], Option<[u32; 2]>);

const ROUND_OF_16: [Script; 8] = [
    (49, [2, 1], None),
    (50, [4, 3], None),
    (51, [1, 1], Some([3, 4])),
    (52, [1, 1], Some([3, 2])),
    (53, [2, 0], None),
    (54, [3, 2], None),
    (55, [1, 0], None),
    (56, [1, 1], Some([3, 4])),
];

const QUARTER_AND_SEMI_FINALS: [Script; 6] = [
    (57, [0, 2], None),
    (58, [1, 2], None),
    (59, [2, 2], Some([3, 4])),
    (60, [0, 2], None),
    (61, [1, 0], None),
    (62, [2, 1], None),
];

const FINALS: [Script; 2] = [(63, [2, 0], None), (64, [4, 2], None)];

pub fn striker(team: &str) -> String {
    format!("{team} Striker")
}

/// Groups drawn, nothing played.
pub fn fresh() -> TournamentData {
    let mut matches = Vec::with_capacity(64);
    let mut index = 1;
    for (group, teams) in GROUPS {
        for (a, b) in PAIRINGS {
            matches.push(MatchRecord {
                id: format!("06{:02}{:02}", 14 + (index - 1) / 4, [15, 18, 21, 12][(index as usize - 1) % 4]),
                index,
                native_offset: 3.0,
                teams: [teams[a].to_string(), teams[b].to_string()],
                kind: MatchKind::GroupStage,
                group: Some(group),
                stadium: format!("Stadium {}", (index - 1) % 12 + 1),
                ..Default::default()
            });
            index += 1;
        }
    }
    for (index, id) in KNOCKOUT_IDS {
        let kind = node_for(index).map(|n| n.kind).unwrap_or_default();
        matches.push(MatchRecord {
            id: id.to_string(),
            index,
            native_offset: 3.0,
            kind,
            stadium: "Luzhniki Stadium".to_string(),
            ..Default::default()
        });
    }

    TournamentData {
        meta: Meta { year: 2018, host: "Russia".to_string() },
        matches,
        groups: GROUPS
            .iter()
            .map(|(id, teams)| GroupRecord { id: *id, teams: teams.map(String::from) })
            .collect(),
        awards: Awards::new(vec![
            ("Golden Ball".into(), "Luka Modric".into()),
            ("Golden Boot".into(), "Harry Kane".into()),
            ("Golden Glove".into(), "Thibaut Courtois".into()),
            ("Best Young Player".into(), "Kylian Mbappe".into()),
            ("FIFA Fair Play Trophy".into(), "Spain".into()),
        ]),
    }
}

/// Every group match played, Round of 16 drawn.
pub fn group_stage_done() -> TournamentData {
    let mut data = fresh();
    for m in data.matches.iter_mut().filter(|m| m.kind == MatchKind::GroupStage) {
        let teams = GROUPS.iter().find(|(id, _)| Some(*id) == m.group).map(|(_, t)| t);
        let position = |name: &str| teams.and_then(|t| t.iter().position(|n| *n == name)).unwrap_or(0);
        let (a, b) = (position(&m.teams[0]), position(&m.teams[1]));
        let score = match (a.min(b), a.max(b)) {
            (2, 3) => [1, 1],
            _ if a < b => [1, 0],
            _ => [0, 1],
        };
        finish(m, score, None);
    }
    advance(&mut data);
    data
}

/// Up to and including the semi-finals; playoff and Final drawn.
pub fn semi_finals_done() -> TournamentData {
    let mut data = group_stage_done();
    for script in ROUND_OF_16.iter().chain(&QUARTER_AND_SEMI_FINALS) {
        play(&mut data, *script);
        advance(&mut data);
    }
    data
}

pub fn completed() -> TournamentData {
    let mut data = semi_finals_done();
    for script in FINALS {
        play(&mut data, script);
    }
    data
}

fn play(data: &mut TournamentData, (index, score, shootout): Script) {
    if let Some(m) = data.matches.iter_mut().find(|m| m.index == index) {
        finish(m, score, shootout);
    }
}

fn finish(m: &mut MatchRecord, score: [u32; 2], shootout: Option<[u32; 2]>) {
    m.finished = true;
    m.goals.clear();
    for (slot, goals) in score.into_iter().enumerate() {
        for k in 0..goals {
            m.goals.push(Goal {
                minute: 10 + 20 * k + slot as u32 * 5,
                team: m.teams[slot].clone(),
                player: striker(&m.teams[slot]),
                kind: GoalKind::Normal,
            });
        }
    }
    m.goals.sort_by_key(|g| g.minute);

    let decider = match shootout {
        Some(penalties) => {
            for (slot, goals) in penalties.into_iter().enumerate() {
                for k in 0..goals {
                    m.goals.push(Goal {
                        minute: k * 2 + slot as u32 + 1,
                        team: m.teams[slot].clone(),
                        player: format!("{} Taker {}", m.teams[slot], k + 1),
                        kind: GoalKind::Penalty,
                    });
                }
            }
            penalties
        }
        None => score,
    };

    m.winner = if decider[0] > decider[1] {
        m.teams[0].clone()
    } else if decider[1] > decider[0] {
        m.teams[1].clone()
    } else {
        DRAW.to_string()
    };
    m.man_of_the_match = if m.winner == DRAW { striker(&m.teams[0]) } else { striker(&m.winner) };
}

/// Seat every knockout slot whose feeder has resolved.
fn advance(data: &mut TournamentData) {
    let groups_done = data
        .matches
        .iter()
        .filter(|m| m.kind == MatchKind::GroupStage)
        .all(|m| m.finished);

    for node in &BRACKET {
        let mut seated = [String::new(), String::new()];
        for (slot, feeder) in node.feeders.iter().enumerate() {
            seated[slot] = match *feeder {
                Feeder::Seed(group, position) if groups_done => GROUPS
                    .iter()
                    .find(|(id, _)| *id == group)
                    .map(|(_, teams)| teams[position as usize - 1].to_string())
                    .unwrap_or_default(),
                Feeder::Winner(index) => outcome(data, index, |m| m.winner.clone()),
                Feeder::Loser(index) => outcome(data, index, |m| {
                    if m.winner == m.teams[0] { m.teams[1].clone() } else { m.teams[0].clone() }
                }),
                _ => String::new(),
            };
        }
        if let Some(m) = data.matches.iter_mut().find(|m| m.index == node.index) {
            m.teams = seated;
        }
    }
}

fn outcome(data: &TournamentData, index: u32, pick: impl Fn(&MatchRecord) -> String) -> String {
    data.matches
        .iter()
        .find(|m| m.index == index && m.finished)
        .map(pick)
        .unwrap_or_default()
}
