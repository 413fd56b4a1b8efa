use clap::Parser;
use miette::Result;
use style_expand::cli::{init_logging, Cli, Commands};
use style_expand::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Expand(args) => style_expand::cli::expand::run(args, &printer)?,
        Commands::Init(args) => style_expand::cli::init::run(args, &printer)?,
        Commands::Schema(args) => style_expand::cli::schema::run(args, &printer)?,
        Commands::Completions(args) => style_expand::cli::completions::run(args)?,
    }

    Ok(())
}
