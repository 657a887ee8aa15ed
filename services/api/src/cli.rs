use crate::demo::{run_check, run_demo, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_application::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Form",
    about = "Host, demonstrate, and check the position-aware job application form",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Host the form over HTTP (default command)
    Serve(ServeArgs),
    /// Walk through a scripted session: a rejected submit, fixes, then the summary
    Demo(DemoArgs),
    /// Validate a JSON draft and print its errors or its summary
    Check(CheckArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::Check(args) => run_check(args),
    }
}
