mod api;
mod commands;
mod error;
mod terminal;


use std::io;

use clap::{ArgAction, Args, Parser, Subcommand};
use leadboard::config::{DEFAULT_LEADS_ENDPOINT, DEFAULT_LOGIN_PATH};
use leadboard::net::types::DEFAULT_STATUS;
use leadboard::{ControllerConfig, LeadForm, LeadListController};
use tracing_subscriber::EnvFilter;

use crate::api::ReqwestLeadsApi;
use crate::error::CliError;
use crate::terminal::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "leadboard", about = "List and add leads on a lead management server")]
struct Cli {
    #[arg(long, env = "LEADBOARD_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Value of the server's `session` cookie from a logged-in browser.
    #[arg(long, env = "LEADBOARD_SESSION")]
    session: Option<String>,

    #[arg(long, env = "LEADBOARD_LEADS_ENDPOINT", default_value = DEFAULT_LEADS_ENDPOINT)]
    leads_endpoint: String,

    #[arg(long, env = "LEADBOARD_LOGIN_PATH", default_value = DEFAULT_LOGIN_PATH)]
    login_path: String,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every lead.
    List,
    /// Create a lead, then print the refreshed list.
    Add(AddArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    company: String,

    #[arg(long, default_value = DEFAULT_STATUS)]
    status: String,
}

impl From<AddArgs> for LeadForm {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            company: args.company,
            status: args.status,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ControllerConfig::new(cli.leads_endpoint, cli.login_path)?;
    let api = ReqwestLeadsApi::new(&cli.base_url, cli.session.as_deref(), &config)?;
    tracing::debug!(url = api.url(), "lead endpoint resolved");

    let view = TerminalView::new(io::stdout(), io::stderr(), cli.base_url);
    let controller = LeadListController::new(api, view, config);

    match cli.command {
        Command::List => commands::run_list(&controller).await,
        Command::Add(args) => commands::run_add(&controller, args.into()).await,
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
