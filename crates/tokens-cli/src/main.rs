//! Binary entrypoint for the `tokens` resolver.
use clap::Parser;
use tokens_cli::{logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
