use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "interviewer", about = "Adaptive practice interviews")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Run an interview in the terminal
    Practice(commands::practice::PracticeArgs),
    /// Run the interview HTTP server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Practice(args) => commands::practice::run(args).await,
        Commands::Serve(args) => commands::serve::run(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "interviewer",
            "serve",
            "--port",
            "9000",
            "--backend",
            "ollama",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.backend, Some(config::Backend::Ollama));
                assert!(args.host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_practice_requires_domain() {
        assert!(Cli::try_parse_from(["interviewer", "practice"]).is_err());

        let cli = Cli::try_parse_from(["interviewer", "-v", "practice", "-d", "finance"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Practice(ref a) if a.domain == "finance"));
    }
}
