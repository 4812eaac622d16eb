//! CLI entry point.
//!
//! Parses arguments, installs logging, composes the context via bootstrap and
//! routes each command to its handler. Errors print to stderr and map to an
//! exit code through `CliError`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use yogarate_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_tracing};

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = CliConfig {
        data_dir: cli.data_dir.clone(),
    };
    let ctx = || bootstrap(config.clone());

    match command {
        Commands::Init => handlers::init::execute(&ctx()?),
        Commands::Instructors { search } => {
            handlers::instructors::execute(&ctx()?, search.as_deref())
        }
        Commands::AddInstructor { name } => handlers::add_instructor::execute(&ctx()?, &name),
        Commands::Show { instructor_id } => handlers::show::execute(&ctx()?, &instructor_id),
        Commands::Rate(args) => handlers::rate::execute(&ctx()?, args),
        Commands::History => handlers::history::execute(&ctx()?),
        Commands::Favorite { rating_id } => handlers::favorite::execute(&ctx()?, &rating_id),
        Commands::Favorites => handlers::favorites::execute(&ctx()?),
        // Diagnostic only; never creates the store
        Commands::Paths => handlers::paths::execute(cli.data_dir.as_deref()),
    }
}

fn main() -> ExitCode {
    // Load .env before anything reads YOGARATE_DATA_DIR
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
