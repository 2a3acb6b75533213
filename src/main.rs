// SPDX-License-Identifier: MPL-2.0
use travel_desk::app::{self, Flags};

const HELP: &str = "\
travel-desk: desktop client for the travel booking backend

USAGE:
  travel_desk [OPTIONS] [BOOKING_ID]

OPTIONS:
  --base-url <URL>     Backend base URL (overrides settings.toml)
  --config-dir <DIR>   Directory holding settings.toml
  --log-level <LEVEL>  error, warn, info, debug or trace [default: info]
  -h, --help           Print this help

ARGS:
  BOOKING_ID           Open the details of this booking on startup
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let parsed = (|| -> Result<(Flags, log::LevelFilter), pico_args::Error> {
        let base_url = args.opt_value_from_str("--base-url")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;
        let level = args
            .opt_value_from_str("--log-level")?
            .unwrap_or(log::LevelFilter::Info);
        let booking_id = args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok());
        Ok((
            Flags {
                base_url,
                config_dir,
                booking_id,
            },
            level,
        ))
    })();

    let (flags, level) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(level)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to create logger instance: {err}");
    }

    app::run(flags)
}
