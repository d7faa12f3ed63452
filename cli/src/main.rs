//! Terminal front end for the todo tracker.
//!
//! Hosts a `TodoView` over a blocking ureq transport and reads commands
//! from stdin. Logs go to stderr so they do not interleave with the list.

use std::io;

use clap::Parser;
use todo_core::{TodoClient, TodoView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod command;
mod console;
mod session;
mod transport;

use console::Console;
use transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Manage todos on a todo-server")]
struct Args {
    /// Base URL of the todo server
    #[arg(long, env = "TODO_URL", default_value = "http://127.0.0.1:3000")]
    url: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    tracing::debug!(url = %args.url, "starting session");

    let mut view = TodoView::new(TodoClient::new(&args.url), UreqTransport::new());
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    session::run(&mut view, &mut console)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
