//! Query engine: owns the loaded dataset and the current snapshot, and routes
//! parsed commands to the report generators.

use crate::command::{Command, Selection};
use crate::report::{self, Report};
use crate::tzone::UserZone;
use crate::{Meta, Tournament, TournamentData};
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct Explorer {
    data: TournamentData,
    snapshot: Tournament,
}

impl Explorer {
    pub fn new(data: TournamentData, zone: UserZone) -> Self {
        let snapshot = Tournament::build(&data, &zone);
        Self { data, snapshot }
    }

    pub fn meta(&self) -> &Meta {
        &self.data.meta
    }

    pub fn zone(&self) -> &UserZone {
        &self.snapshot.zone
    }

    pub fn tournament(&self) -> &Tournament {
        &self.snapshot
    }

    /// Localize a fresh snapshot for `zone` and swap it in.
    pub fn rebuild(&mut self, zone: UserZone) {
        let snapshot = Tournament::build(&self.data, &zone);
        info!("snapshot rebuilt for zone {zone}");
        self.snapshot = snapshot;
    }

    pub fn interpret(&self, raw: &str) -> Report {
        let report = match raw.parse::<Command>() {
            Ok(command) => {
                debug!("{raw:?} parsed as {command:?}");
                self.execute(&command)
            }
            Err(err) => {
                debug!("{raw:?}: {err}");
                Report::unrecognized()
            }
        };
        debug!("{raw:?} finished with outcome {}", report.outcome.code());
        report
    }

    pub fn execute(&self, command: &Command) -> Report {
        let t = &self.snapshot;
        match command {
            Command::HeadToHead { a, b } => report::matches::head_to_head(t, a, b),
            Command::Matches { selection: Selection::All, verbose } => {
                report::matches::all_matches(t, *verbose)
            }
            Command::Matches { selection: Selection::Named(names), verbose } => {
                report::matches::team_matches(t, names, *verbose)
            }
            Command::Teams { selection, verbose } => report::teams::team_stats(t, selection, *verbose),
            Command::Groups { selection, verbose } => {
                report::groups::group_standings(t, selection, *verbose)
            }
            Command::Structure => report::groups::structure(t),
            Command::Bracket => report::tournament::bracket(t),
            Command::Ranking => report::tournament::ranking(t),
            Command::Awards => report::tournament::awards(t),
            Command::Scorers => report::tournament::scorers(t),
            Command::News => report::tournament::news(t),
            Command::Upcoming => report::tournament::upcoming(t),
        }
    }
}
