use asciify::cli::{self, Args, CliError, Command, Settings};
use asciify::config::{self, Config};
use clap::Parser;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let config = Config::load(Some(config_path.as_path()))?;
    let settings = Settings::resolve(&args, &config)?;
    log::debug!("Effective settings:\n{}", settings);

    match args.command {
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, &settings, &config_path)
        }
        None => cli::convert(&settings),
    }
}
