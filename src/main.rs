// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use term_marquee::app::{self, Flags, Session};
use term_marquee::logging;

const HELP: &str = "\
TermMarquee: rotates through terms and their descriptions

USAGE:
  term_marquee [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml and terms.json
  --terms <FILE>       Term list to load instead of terms.json
  --seed <N>           Seed for a reproducible shuffle order
  --log-level <LEVEL>  trace, debug, info, warn or error (RUST_LOG wins)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (log_level, log_level_error) = match args.opt_value_from_str::<_, String>("--log-level") {
        Ok(level) => (level, None),
        Err(error) => (None, Some(error)),
    };
    logging::init(log_level.as_deref());
    if let Some(error) = log_level_error {
        tracing::warn!(%error, "ignoring --log-level");
    }

    let flags = Flags {
        config_dir: path_option(&mut args, "--config-dir"),
        terms_path: path_option(&mut args, "--terms"),
        seed: args.opt_value_from_str("--seed").unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring --seed");
            None
        }),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }

    let session = Session::load(&flags);
    tracing::info!(
        terms = session.terms.len(),
        config = ?session.config_path,
        "starting"
    );
    app::run(session)
}

fn path_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<PathBuf> {
    args.opt_value_from_os_str(key, |value| Ok::<_, std::convert::Infallible>(PathBuf::from(value)))
        .unwrap_or_else(|error| {
            tracing::warn!(%error, key, "ignoring option");
            None
        })
}
