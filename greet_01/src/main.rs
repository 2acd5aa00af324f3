use std::env;
use std::ffi::OsString;
use std::io;

/// Picks the name out of the raw argument list (program name first).
///
/// The first token is taken verbatim, `--` and `--help` included; later
/// tokens are ignored. Non-UTF-8 bytes become U+FFFD.
fn name_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().skip(1);
    let name = args.next().map(|arg| arg.to_string_lossy().into_owned());

    let ignored = args.count();
    if ignored > 0 {
        tracing::debug!(ignored, "extra arguments ignored");
    }
    name
}

fn main() -> anyhow::Result<()> {
    greeter::logging::init();
    let name = name_from_args(env::args_os());

    tracing::debug!(source = "positional", present = name.is_some());

    greeter::greet(&mut io::stdout().lock(), name.as_deref())?;

    Ok(())
}
