use clap::Parser;
use std::io::{self, IsTerminal};
use tripplan::application::{ConfigService, Session};
use tripplan::cli::{format_config, repl, Cli, Commands, ReplOptions};
use tripplan::error::PlannerError;
use tripplan::infrastructure::{init_logging, Config};

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PlannerError> {
    let config_path = Config::locate(cli.config.as_deref());

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let config = Config::load(&config_path)?;
            let mut session = Session::new(config);

            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let options = ReplOptions {
                banner: !cli.quiet,
                prompt: interactive && !cli.quiet,
            };

            repl::run(&mut session, stdin.lock(), &mut io::stdout().lock(), options)
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(config_path);

            if list {
                // List all config
                let config = service.list()?;
                println!("{}", format_config(&config));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: tripplan config [--list | <key> [<value>]]");
                println!("Valid keys: export_file, default_time, default_category");
                Ok(())
            }
        }
    }
}
