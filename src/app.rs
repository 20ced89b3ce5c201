use crate::repl::{Action, Console, HELP, PROMPT};
use crate::state::app_settings::AppSettings;
use fwc_api::TournamentData;
use fwc_api::engine::Explorer;
use fwc_api::tzone::UserZone;
use log::info;
use std::io::{self, BufRead, Write};

pub struct App {
    pub settings: AppSettings,
    pub explorer: Explorer,
}

impl App {
    pub fn new(settings: AppSettings, data: TournamentData) -> Self {
        let zone = settings.zone.clone().unwrap_or_default();
        Self { explorer: Explorer::new(data, zone), settings }
    }

    /// Session loop: welcome, zone selection, then commands until `Quit` or
    /// end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        let meta = self.explorer.meta();
        console.say(&format!("\nWelcome to the {} {} World Cup Explorer.", meta.year, meta.host))?;

        match self.settings.zone.clone() {
            Some(zone) => console.say(&format!("\n{zone} is now your time zone."))?,
            None => match console.ask_zone()? {
                Some(zone) => self.change_zone(zone),
                None => return console.farewell(),
            },
        }

        console.say("\nPlease enter a command to browse data.")?;
        console.say("Enter Help for instructions.")?;

        loop {
            let Some(line) = console.read_line(&format!("\n{PROMPT}"))? else {
                return console.farewell();
            };
            match Action::parse(&line) {
                Action::Quit => return console.farewell(),
                Action::Help => console.say(HELP)?,
                Action::ChangeZone => match console.ask_zone()? {
                    Some(zone) => self.change_zone(zone),
                    None => return console.farewell(),
                },
                Action::Query(raw) => {
                    let report = self.explorer.interpret(&raw);
                    console.show(&report)?;
                }
                Action::Empty => {}
            }
        }
    }

    fn change_zone(&mut self, zone: UserZone) {
        if *self.explorer.zone() != zone {
            info!("switching zone from {} to {zone}", self.explorer.zone());
            self.explorer.rebuild(zone);
        }
    }
}
