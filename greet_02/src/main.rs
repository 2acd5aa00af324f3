use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[clap(name = "greet_02", author, version, about = "Print a greeting for NAME, or the world.")]
struct Cli {
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "name to greet")]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    greeter::logging::init();
    let args = Cli::parse();

    tracing::debug!(source = "flag", present = args.name.is_some());

    greeter::greet(&mut io::stdout().lock(), args.name.as_deref())?;

    Ok(())
}
