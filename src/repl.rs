use fwc_api::command::title_case;
use fwc_api::report::{Outcome, Report};
use fwc_api::tzone::UserZone;
use std::io::{self, BufRead, Write};

pub const HELP: &str = include_str!("../assets/command_help.txt");

pub const PROMPT: &str = "$ ";

const FAREWELL: &str = "Thank you for using the explorer, welcome back any time.";

/// What one line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    ChangeZone,
    Query(String),
    Empty,
}

impl Action {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Action::Empty;
        }
        match title_case(line).as_str() {
            "Quit" => Action::Quit,
            "Help" => Action::Help,
            "Tzone" => Action::ChangeZone,
            _ => Action::Query(line.to_string()),
        }
    }
}

/// Line-oriented terminal over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line without its terminator, or `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line is just an
    /// unrecognized command.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Ask until a valid zone is given. `None` when input runs out.
    pub fn ask_zone(&mut self) -> io::Result<Option<UserZone>> {
        loop {
            let Some(answer) = self.read_line("\nPlease enter your time zone (e.g. EDT):\n")? else {
                return Ok(None);
            };
            match UserZone::parse(&answer) {
                Ok(zone) => {
                    self.say(&format!("\n{zone} is now your time zone."))?;
                    return Ok(Some(zone));
                }
                Err(err) => {
                    log::debug!("{err}");
                    self.say("\nInvalid time zone, please try again.")?;
                    self.say("Enter 'Local' to use Host's local time.")?;
                }
            }
        }
    }

    pub fn show(&mut self, report: &Report) -> io::Result<()> {
        if !report.text.is_empty() {
            self.say("")?;
            self.say(&report.text)?;
        }
        match report.outcome {
            Outcome::Ok => Ok(()),
            failed => self.say(&format!("\nError: {failed}")),
        }
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        self.say(&format!("\n{FAREWELL}"))
    }
}
