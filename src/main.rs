use clap::Parser;
use miette::Result;
use pnm::cli::{Cli, Commands};
use pnm::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::New(args) => pnm::cli::new::run(args, &printer)?,
        Commands::Info(args) => pnm::cli::info::run(args, &printer)?,
        Commands::Convert(args) => pnm::cli::convert::run(args, &printer)?,
        Commands::Transform(args) => pnm::cli::transform::run(args, &printer)?,
        Commands::Draw(args) => pnm::cli::draw::run(args, &printer)?,
        Commands::Completions(args) => pnm::cli::completions::run(args)?,
    }

    Ok(())
}
