// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::domain::gallery::OrientationPreference;
use env_logger::{Builder, Target};
use log::LevelFilter;

const HELP: &str = "\
Art Space

USAGE:
  art_space [OPTIONS]

OPTIONS:
  -h, --help                  Print this help and exit
  --lang <LOCALE>             Interface language (e.g. en-US, fr)
  --orientation <MODE>        auto, portrait or landscape
  --config-dir <PATH>         Directory holding settings.toml
";

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .filter_module("art_space", LevelFilter::Info)
            .init();
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        orientation: args.opt_value_from_str::<_, OrientationPreference>("--orientation")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_logger();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
