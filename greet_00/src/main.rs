use std::io;

fn main() -> anyhow::Result<()> {
    greeter::logging::init();
    tracing::debug!(source = "default", "arguments ignored");

    greeter::greet(&mut io::stdout().lock(), None)?;

    Ok(())
}
