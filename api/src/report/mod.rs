//! Text reports over one tournament snapshot.
//!
//! Every generator returns a [`Report`]: the outcome of the query plus the
//! lines to show, already joined. Generators never fail; unknown names and
//! empty selections surface through [`Outcome`].

pub mod format;
pub mod groups;
pub mod matches;
pub mod teams;
pub mod tournament;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Unrecognized,
    NoResults,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Ok => 0,
            Outcome::Unrecognized => 1,
            Outcome::NoResults => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok => f.write_str("ok"),
            Outcome::Unrecognized => f.write_str("unrecognized command or invalid syntax"),
            Outcome::NoResults => f.write_str("no results found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub text: String,
}

impl Report {
    pub fn unrecognized() -> Self {
        Self { outcome: Outcome::Unrecognized, text: String::new() }
    }
}

/// Line buffer shared by the generators.
#[derive(Debug, Default)]
pub(crate) struct Printer {
    lines: Vec<String>,
}

impl Printer {
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Framed section title, e.g. `********** Best Scorers **********`.
    pub fn banner(&mut self, title: &str) {
        self.line(format!("********** {title} **********"));
        self.blank();
    }

    /// A single message in place of a report that has nothing to show yet.
    pub fn notice(mut self, message: &str) -> Report {
        self.line(message);
        self.finish(Outcome::Ok)
    }

    pub fn finish(self, outcome: Outcome) -> Report {
        Report { outcome, text: self.lines.join("\n") }
    }
}

/// Resolve every requested name with `lookup`, reporting `"<name> not found"`
/// for misses. Order of the request is kept.
pub(crate) fn resolve_names<'n, T>(
    out: &mut Printer,
    names: &'n [String],
    lookup: impl Fn(&'n str) -> Option<T>,
) -> Vec<T> {
    let mut found = Vec::with_capacity(names.len());
    for name in names {
        match lookup(name) {
            Some(item) => found.push(item),
            None => out.line(format!("{name} not found")),
        }
    }
    found
}
