//! Knockout bracket topology.
//!
//! Matches are stored in play order, which is not bracket order: the Round of
//! 16 match feeding the top of the draw is index 49 but its neighbour in the
//! drawing is 50, then 53 and 54. The mapping is the tournament's official
//! seeding and cannot be derived from team names or groups, so it lives here
//! as a constant table.

use crate::{Match, MatchKind, TBD, Tournament, display_name};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Topology table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feeder {
    /// Group letter and finishing position, `A1` is the winner of group A.
    Seed(char, u8),
    Winner(u32),
    Loser(u32),
}

impl Feeder {
    /// Shown in place of a team until the feeder resolves.
    pub fn placeholder(&self) -> String {
        match self {
            Feeder::Seed(group, position) => format!("{group}{position}"),
            Feeder::Winner(index) => format!("W{index}"),
            Feeder::Loser(index) => format!("L{index}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketNode {
    pub index: u32,
    pub kind: MatchKind,
    pub feeders: [Feeder; 2],
}

const fn node(index: u32, kind: MatchKind, top: Feeder, bottom: Feeder) -> BracketNode {
    BracketNode { index, kind, feeders: [top, bottom] }
}

use Feeder::{Loser, Seed, Winner};
use MatchKind::{Final, RoundOf8, RoundOf16, SemiFinal, ThirdPlacePlayoff};

/// Every knockout match, each round listed top to bottom as drawn.
pub const BRACKET: [BracketNode; 16] = [
    node(49, RoundOf16, Seed('A', 1), Seed('B', 2)),
    node(50, RoundOf16, Seed('C', 1), Seed('D', 2)),
    node(53, RoundOf16, Seed('E', 1), Seed('F', 2)),
    node(54, RoundOf16, Seed('G', 1), Seed('H', 2)),
    node(51, RoundOf16, Seed('B', 1), Seed('A', 2)),
    node(52, RoundOf16, Seed('D', 1), Seed('C', 2)),
    node(55, RoundOf16, Seed('F', 1), Seed('E', 2)),
    node(56, RoundOf16, Seed('H', 1), Seed('G', 2)),
    node(57, RoundOf8, Winner(49), Winner(50)),
    node(58, RoundOf8, Winner(53), Winner(54)),
    node(59, RoundOf8, Winner(51), Winner(52)),
    node(60, RoundOf8, Winner(55), Winner(56)),
    node(61, SemiFinal, Winner(57), Winner(58)),
    node(62, SemiFinal, Winner(59), Winner(60)),
    node(63, ThirdPlacePlayoff, Loser(61), Loser(62)),
    node(64, Final, Winner(61), Winner(62)),
];

pub fn node_for(index: u32) -> Option<&'static BracketNode> {
    BRACKET.iter().find(|n| n.index == index)
}

// ---------------------------------------------------------------------------
// Resolution against a snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("knockout match {0} is missing from the dataset")]
    Missing(u32),
    #[error("match {index} should be a {expected} match")]
    WrongKind { index: u32, expected: &'static str },
}

/// A bracket node paired with its match.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub node: &'static BracketNode,
    pub game: &'a Match,
}

impl<'a> Slot<'a> {
    pub fn team(&self, slot: usize) -> &'a str {
        display_name(&self.game.teams[slot])
    }

    pub fn placeholder(&self, slot: usize) -> String {
        self.node.feeders[slot].placeholder()
    }

    pub fn winner(&self) -> &'a str {
        if self.game.finished && !self.game.winner.is_empty() {
            &self.game.winner
        } else {
            TBD
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bracket<'a> {
    /// Same order as `BRACKET`.
    slots: Vec<Slot<'a>>,
}

impl<'a> Bracket<'a> {
    pub fn resolve(tournament: &'a Tournament) -> Result<Self, BracketError> {
        let slots = BRACKET
            .iter()
            .map(|node| {
                let game = tournament
                    .find_match(node.index)
                    .ok_or(BracketError::Missing(node.index))?;
                if game.kind != node.kind {
                    return Err(BracketError::WrongKind { index: node.index, expected: node.kind.label() });
                }
                Ok(Slot { node, game })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { slots })
    }

    #[cfg(test)]
    fn slot(&self, index: u32) -> Option<&Slot<'a>> {
        self.slots.iter().find(|s| s.node.index == index)
    }

    pub fn round(&self, kind: MatchKind) -> impl Iterator<Item = &Slot<'a>> {
        self.slots.iter().filter(move |s| s.node.kind == kind)
    }

    /// Team names shown in a drawing column.
    /// Depth 0 = Round of 16 entrants, 3 = finalists, 4 = champion.
    fn column(&self, depth: usize) -> Vec<&'a str> {
        let teams_of = |kind| {
            self.round(kind)
                .flat_map(|s| [s.team(0), s.team(1)])
                .collect::<Vec<_>>()
        };
        match depth {
            0 => teams_of(RoundOf16),
            1 => teams_of(RoundOf8),
            2 => teams_of(SemiFinal),
            3 => teams_of(Final),
            _ => self.round(Final).map(|s| s.winner()).collect(),
        }
    }

    /// Text drawing of the bracket followed by the third place playoff.
    pub fn render(&self) -> Vec<String> {
        let mut grid = Canvas::new(BRACKET_HEIGHT, column_x(DEPTHS - 1) + CELL_W);

        let seeds: Vec<String> = self
            .round(RoundOf16)
            .flat_map(|s| [s.placeholder(0), s.placeholder(1)])
            .collect();
        for (i, seed) in seeds.iter().enumerate() {
            grid.put_str(0, center_row(0, i), seed, LABEL_W);
        }

        for depth in 0..DEPTHS {
            let last = depth + 1 == DEPTHS;
            for (i, team) in self.column(depth).into_iter().enumerate() {
                grid.put_cell(column_x(depth), center_row(depth, i), team, !last);
            }
            if last {
                continue;
            }
            for j in 0..GAMES_PER_DEPTH[depth + 1] {
                grid.put_connector(
                    depth,
                    center_row(depth, 2 * j),
                    center_row(depth + 1, j),
                    center_row(depth, 2 * j + 1),
                );
            }
        }

        let mut lines = vec![title_row(&DEPTH_TITLES), String::new()];
        lines.extend(grid.into_lines());

        if let Some(third) = self.round(ThirdPlacePlayoff).next() {
            let mut playoff = Canvas::new(3, column_x(1) + CELL_W);
            playoff.put_cell(column_x(0), 0, third.team(0), true);
            playoff.put_cell(column_x(0), 2, third.team(1), true);
            playoff.put_connector(0, 0, 1, 2);
            playoff.put_cell(column_x(1), 1, third.winner(), false);

            lines.push(String::new());
            lines.push(title_row(&[ThirdPlacePlayoff.label(), "3rd Place"]));
            lines.push(String::new());
            lines.extend(playoff.into_lines());
        }

        lines
    }
}

// ---------------------------------------------------------------------------
// Text layout
// ---------------------------------------------------------------------------

/// Drawing columns: four rounds of teams plus the champion.
const DEPTHS: usize = 5;

/// Rows per bracket slot at each depth: SH[0] = 1; SH[d] = 2 * SH[d-1] + 1.
const SH: [usize; DEPTHS] = [1, 3, 7, 15, 31];

/// Total rows in the drawing.
pub const BRACKET_HEIGHT: usize = SH[DEPTHS - 1];

const GAMES_PER_DEPTH: [usize; DEPTHS] = [16, 8, 4, 2, 1];

const DEPTH_TITLES: [&str; DEPTHS] = ["Round of 16", "Round of 8", "Semi-finals", "Final", "Champion"];

/// Width of one team cell.
const CELL_W: usize = 20;

/// Width of the connector zone between adjacent columns.
const CONNECTOR_WIDTH: usize = 3;

/// Width of the seed label gutter on the left.
const LABEL_W: usize = 3;

/// Row of entry `i` at `depth`: SH[d]/2 + i * (SH[d+1] - SH[d]).
///
/// ```text
///   depth 0: [0, 2, 4, ... 30]  (spacing 2)
///   depth 1: [1, 5, 9, ... 29]  (spacing 4)
///   depth 2: [3, 11, 19, 27]    (spacing 8)
///   depth 3: [7, 23]
///   depth 4: [15]
/// ```
fn center_row(depth: usize, i: usize) -> usize {
    let spacing = if depth + 1 < DEPTHS { SH[depth + 1] - SH[depth] } else { 0 };
    SH[depth] / 2 + i * spacing
}

fn column_x(depth: usize) -> usize {
    LABEL_W + depth * (CELL_W + CONNECTOR_WIDTH)
}

fn title_row(titles: &[&str]) -> String {
    let mut row = " ".repeat(LABEL_W);
    for title in titles {
        row.push_str(&format!("{title:^CELL_W$}"));
        row.push_str(&" ".repeat(CONNECTOR_WIDTH));
    }
    row.trim_end().to_string()
}

struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    fn new(height: usize, width: usize) -> Self {
        Self { rows: vec![vec![' '; width]; height] }
    }

    fn put(&mut self, x: usize, y: usize, ch: char) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = ch;
        }
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str, max: usize) {
        for (dx, ch) in text.chars().take(max).enumerate() {
            self.put(x + dx, y, ch);
        }
    }

    /// Team name, optionally ruled out to the connector zone.
    fn put_cell(&mut self, x: usize, y: usize, name: &str, ruled: bool) {
        let len = name.chars().count().min(CELL_W);
        self.put_str(x, y, name, CELL_W);
        if ruled {
            for dx in len..CELL_W {
                self.put(x + dx, y, '─');
            }
        }
    }

    /// Join two children at `depth` to their parent one column right.
    ///
    /// ```text
    ///  child_top  ─┐
    ///              │
    ///              ├─ parent
    ///              │
    ///  child_bot  ─┘
    /// ```
    fn put_connector(&mut self, depth: usize, r_top: usize, r_mid: usize, r_bot: usize) {
        let col_a = column_x(depth) + CELL_W;
        let col_b = col_a + 1;
        let col_c = col_a + 2;

        self.put(col_a, r_top, '─');
        self.put(col_b, r_top, '┐');
        for row in (r_top + 1)..r_mid {
            self.put(col_b, row, '│');
        }
        self.put(col_b, r_mid, '├');
        self.put(col_c, r_mid, '─');
        for row in (r_mid + 1)..r_bot {
            self.put(col_b, row, '│');
        }
        self.put(col_a, r_bot, '─');
        self.put(col_b, r_bot, '┘');
    }

    fn into_lines(self) -> Vec<String> {
        self.rows
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}
