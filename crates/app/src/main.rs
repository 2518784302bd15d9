use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use tokio::runtime::Handle;

use services::{ApiConfig, AppServices, Clock};
use storage::{DisabledTabStorage, SessionStore};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--no-session-store]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", ApiConfig::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}, RUST_LOG", ApiConfig::ENV_VAR);
}

#[derive(Debug)]
struct Args {
    api: ApiConfig,
    session_store: bool,
}

/// Outcome of argument parsing: either run the app or stop after `--help`.
enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
        let mut api = ApiConfig::from_env();
        let mut session_store = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    api = ApiConfig::new(normalize_api_url(value)?);
                }
                "--no-session-store" => session_store = false,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { api, session_store }))
    }
}

fn normalize_api_url(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ArgsError::InvalidApiUrl { raw })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    let store = if args.session_store {
        SessionStore::in_memory()
    } else {
        SessionStore::new(Arc::new(DisabledTabStorage))
    };
    store.clear_legacy();

    info!("using API at {}", args.api.base_url);
    let services = AppServices::new_http(
        &args.api,
        store,
        Clock::default_clock(),
        Handle::current(),
    )?;
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // Dioxus/tao can open an always-on-top window on macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ConcursoIA")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[&str]) -> Result<Parsed, ArgsError> {
        let mut iter = raw.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn api_url_flag_overrides_default() {
        let Parsed::Run(args) = parse(&["--api-url", "https://concurso.example/"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args.api.base_url, "https://concurso.example");
        assert!(args.session_store);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&["--api-url"]),
            Err(ArgsError::MissingValue { flag: "--api-url" })
        ));
        assert!(matches!(
            parse(&["--api-url", "ftp://host"]),
            Err(ArgsError::InvalidApiUrl { .. })
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn help_and_store_switch() {
        assert!(matches!(parse(&["-h"]), Ok(Parsed::Help)));
        let Parsed::Run(args) = parse(&["--no-session-store"]).unwrap() else {
            panic!("expected run");
        };
        assert!(!args.session_store);
    }
}
