use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Kind {
    OsError,
    InputError,
    /// search statistics could not be serialised
    StatsError,
}

#[derive(Debug)]
pub struct Error(Kind, Box<dyn std::error::Error>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.0, self.1)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(Kind::StatsError, e.into())
    }
}

#[test]
fn kinds() {
    let e = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(e.to_string().starts_with("OsError: "));

    let e = serde_json::from_str::<u8>("x").unwrap_err();
    assert!(Error::from(e).to_string().starts_with("StatsError: "));
}
