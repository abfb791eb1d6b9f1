use clap::Parser;
use std::path::PathBuf;

/// Classify formulas and decide their satisfiability
///
/// The first line of the input file selects what to do with the formulas:
/// it contains "PARSE" to classify them, "SAT" to decide their satisfiability,
/// or both.
/// Every following line holds one formula.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Number of constants available for existential instantiation
    ///
    /// Formulas that need more witnesses than this
    /// are reported to be possibly satisfiable.
    #[arg(long, default_value_t = tab::MAX_CONSTANTS)]
    pub constants: usize,

    /// Write output to given file
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the input file
    #[arg(default_value = "input.txt")]
    pub file: PathBuf,
}

impl Cli {
    pub fn opt(&self) -> tab::Opt {
        tab::Opt {
            constants: self.constants,
        }
    }

    pub fn output(&self, out: impl std::fmt::Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", out),
        }
    }
}
