mod error;
mod logging;
mod query;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use getarg::ArgMap;

use crate::error::Result;
use crate::query::Query;

const USAGE: &str = r#"Usage: argprobe [-OPTION[=VALUE]]...
Resolve this command line and answer typed lookups against it.

Every argument is read as an option (-X, --X, -X=v, -noX, -noX=v);
anything without a leading dash is ignored.

Probe options:
  -help                 This help.
  -version              Print the version.
  -verbose=N            Log level: 0 warn, 1 info, 2 debug, 3 trace.
                        ARGPROBE_LOG or RUST_LOG override it.
  -dump                 Print every option and negation first.
  -query=KIND:NAME[:DEFAULT]
                        Lookup to answer.  Can be repeated.  Without
                        any, lookups are read from stdin, one per line.

Kinds: bool, string, int, all, set, negated.
"#;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("argprobe: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let map = ArgMap::from_env()?;
    logging::init(map.get_int("verbose", 0));
    let args = getarg::global().publish(map);

    if args.get_bool("help", false) {
        print!("{}", USAGE);
        return Ok(());
    }
    if args.get_bool("version", false) {
        println!("argprobe {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.get_bool("dump", false) {
        dump(&args, &mut out)?;
    }

    let inline = args.get_all("query");
    if !inline.is_empty() {
        for q in inline {
            answer(&args, q, &mut out)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        answer(&args, line, &mut out)?;
    }
    Ok(())
}

fn answer(args: &ArgMap, text: &str, out: &mut impl Write) -> Result<()> {
    let query: Query = text.parse()?;
    tracing::debug!(?query, "answering");
    writeln!(out, "{}", query.answer(args))?;
    Ok(())
}

fn dump(args: &ArgMap, out: &mut impl Write) -> Result<()> {
    for (name, values) in args.options() {
        writeln!(out, "option {} = {:?}", name, values)?;
    }
    for (name, values) in args.negations() {
        writeln!(out, "negated {} = {:?}", name, values)?;
    }
    Ok(())
}
