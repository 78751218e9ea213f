use crate::demo::{run_calculate, run_quiz, run_resolve, CalculateArgs, ResolveArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ecofit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EcoFit Carbon Coach",
    about = "Serve the carbon coach API or try its scoring from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Show which product category a piece of free text resolves to
    Resolve(ResolveArgs),
    /// Score a set of quiz answers
    Calculate(CalculateArgs),
    /// Print the footprint quiz questions and options
    Quiz,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Resolve(args) => run_resolve(args),
        Command::Calculate(args) => run_calculate(args),
        Command::Quiz => run_quiz(),
    }
}
