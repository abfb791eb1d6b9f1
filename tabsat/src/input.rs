//! Reading of input files.

use crate::error::{Error, Kind};
use std::path::Path;

/// What to do with every formula.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Mode {
    /// classify formulas
    pub parse: bool,
    /// decide satisfiability of formulas
    pub sat: bool,
}

impl Mode {
    /// Determine the mode from the first line of an input file.
    ///
    /// ~~~
    /// use tabsat::input::Mode;
    /// assert_eq!(Mode::from_line("PARSE SAT"), Mode { parse: true, sat: true });
    /// assert_eq!(Mode::from_line("SAT"), Mode { parse: false, sat: true });
    /// ~~~
    pub fn from_line(line: &str) -> Self {
        Self {
            parse: line.contains("PARSE"),
            sat: line.contains("SAT"),
        }
    }
}

/// Contents of an input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    pub mode: Mode,
    pub formulas: Vec<String>,
}

impl Input {
    pub fn read(path: &Path) -> Result<Self, Error> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn from_text(text: &str) -> Result<Self, Error> {
        let mut lines = text.lines();
        let mode = match lines.next() {
            Some(line) => Mode::from_line(line),
            None => return Err(Error::new(Kind::InputError, "missing mode line".into())),
        };
        let formulas = lines.map(String::from).collect();
        Ok(Self { mode, formulas })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines() {
        let input = Input::from_text("PARSE\np\n(p/\\q)\n").unwrap();
        assert_eq!(input.mode, Mode::from_line("PARSE"));
        assert_eq!(input.formulas, ["p", "(p/\\q)"]);

        let input = Input::from_text("PARSE SAT").unwrap();
        assert!(input.mode.parse && input.mode.sat);
        assert!(input.formulas.is_empty());
    }

    #[test]
    fn empty() {
        let e = Input::from_text("").unwrap_err();
        assert_eq!(e.to_string(), "InputError: missing mode line");
    }
}
