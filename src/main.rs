// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use folio::app::{self, paths, Flags, Screen};
use log::LevelFilter;

/// Builds the logger from `RUST_LOG` when set, else from the crate defaults.
/// Both paths write to stdout.
fn logger_builder(rust_log: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    match rust_log {
        Some(filters) => {
            builder.parse_filters(filters);
        }
        None => {
            builder
                .filter_level(LevelFilter::Warn)
                .filter_module("folio", LevelFilter::Debug);
        }
    }
    builder.target(Target::Stdout);
    builder
}

fn main() -> iced::Result {
    let rust_log = std::env::var("RUST_LOG").ok();
    logger_builder(rust_log.as_deref()).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {}", err);
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {}", err);
            None
        });
    let screen = args.opt_free_from_str::<Screen>().unwrap_or_else(|err| {
        log::warn!("Ignoring screen argument: {}", err);
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unused arguments: {:?}", remaining);
    }

    paths::init_cli_override(config_dir);

    app::run(Flags { lang, screen })
}
