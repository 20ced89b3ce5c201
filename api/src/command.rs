use std::str::FromStr;
use thiserror::Error;

/// Trailing word that switches a command into detail mode.
const VERBOSE: &str = "Verbose";
const ALL: &str = "All";

/// Which entities a multi-name command covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Title-cased names, de-duplicated, first occurrence kept.
    Named(Vec<String>),
}

impl Selection {
    fn from_words(words: &[String]) -> Self {
        if let [only] = words
            && only == ALL
        {
            return Selection::All;
        }
        let mut names: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            if !names.contains(word) {
                names.push(word.clone());
            }
        }
        Selection::Named(names)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HeadToHead { a: String, b: String },
    Matches { selection: Selection, verbose: bool },
    Teams { selection: Selection, verbose: bool },
    Groups { selection: Selection, verbose: bool },
    Structure,
    Bracket,
    Ranking,
    Awards,
    Scorers,
    News,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized command or invalid syntax")]
pub struct Unrecognized;

impl FromStr for Command {
    type Err = Unrecognized;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut words: Vec<String> = raw.split_whitespace().map(title_case).collect();
        let verbose = words.last().is_some_and(|w| w == VERBOSE);
        if verbose {
            words.pop();
        }

        let Some((head, rest)) = words.split_first() else {
            return Err(Unrecognized);
        };

        let command = match (head.as_str(), rest) {
            ("Match", [vs, a, b]) if vs == "Vs" => Command::HeadToHead { a: a.clone(), b: b.clone() },
            ("Match", [_, ..]) => Command::Matches { selection: Selection::from_words(rest), verbose },
            ("Team", [_, ..]) => Command::Teams { selection: Selection::from_words(rest), verbose },
            ("Group", [_, ..]) => Command::Groups { selection: Selection::from_words(rest), verbose },
            ("Structure", []) => Command::Structure,
            ("Bracket", []) => Command::Bracket,
            ("Ranking", []) => Command::Ranking,
            ("Awards", []) => Command::Awards,
            ("Scorers", []) => Command::Scorers,
            ("News", []) => Command::News,
            ("Upcoming", []) => Command::Upcoming,
            _ => return Err(Unrecognized),
        };
        Ok(command)
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest,
/// so `SOUTH_KOREA` and `south_korea` both become `South_Korea`.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_word = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
