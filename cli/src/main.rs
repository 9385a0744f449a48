mod driver;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hl7_core::{ErrorPolicy, FlattenConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use driver::{InputEncoding, LineDriver};

#[derive(Parser, Debug)]
#[command(
    name = "hl7-to-json",
    about = "Convert HL7 v2 messages, one per line, into newline-delimited JSON."
)]
struct Args {
    /// File of messages, one per line. Defaults to standard input.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Key fields by machine name (`pid_5`) instead of long name (`patient_name`).
    #[arg(long)]
    short_names: bool,

    /// Fail on the first line that is not an HL7 message instead of writing `{}`.
    #[arg(long)]
    strict: bool,

    #[arg(long, value_enum, default_value_t = InputEncoding::Latin1)]
    encoding: InputEncoding,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hl7_to_json=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let driver = LineDriver {
        config: FlattenConfig {
            use_long_names: !args.short_names,
        },
        policy: if args.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::EmptyRecord
        },
        encoding: args.encoding,
    };

    let stdout = io::stdout().lock();
    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            driver.run(BufReader::new(file), stdout)?
        }
        None => driver.run(io::stdin().lock(), stdout)?,
    };

    tracing::info!(
        lines = summary.lines,
        failed = summary.failed,
        "conversion finished"
    );

    Ok(())
}
