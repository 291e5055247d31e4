// SPDX-License-Identifier: MPL-2.0
use folio_gallery::app::{self, Flags};
use folio_gallery::config::paths;
use folio_gallery::domain::gallery::ViewMode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "folio_gallery=info";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_dir = read_flag::<String>(&mut args, "--config-dir");
    let flags = Flags {
        endpoint: read_flag(&mut args, "--endpoint"),
        context: read_flag(&mut args, "--context"),
        mode: read_flag::<ViewMode>(&mut args, "--mode"),
        demo: args.contains("--demo"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(config_dir);
    tracing::info!(?flags, "starting folio gallery");

    app::run(flags)
}

/// Reads an optional `--key value` flag, logging and skipping malformed values.
fn read_flag<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, %err, "ignoring invalid flag value");
            None
        }
    }
}
