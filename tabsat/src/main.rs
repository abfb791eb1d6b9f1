use clap::Parser;
use log::info;
use std::fs::File;
use std::io::Write;
use tabsat::input::Input;
use tabsat::{report, Cli, Error};

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = Input::read(&cli.file)?;
    info!("mode: {:?}, formulas: {}", input.mode, input.formulas.len());

    let (lines, stats) = report::process(&input, &cli.opt());
    let out: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    cli.output(out)?;

    if let Some(file) = &cli.stats {
        let mut f = File::create(file)?;
        writeln!(f, "{}", serde_json::to_string(&stats)?)?;
    }
    Ok(())
}
