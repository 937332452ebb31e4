use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{CatalogClient, CatalogView, DetailView, IdGenerator, LoadState, SortKey};
use shared::domain::ProductId;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod render;

use config::load_settings;
use controller::{
    commands::ShellCommand,
    reducer::{Reply, Session},
};

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Browse a product catalog service")]
struct Cli {
    /// Base URL of the catalog service.
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the product list.
    List {
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Print one product with its comments.
    Show { product_id: i64 },
    /// Browse interactively; changes stay local to the session.
    Shell {
        #[arg(long)]
        sort: Option<SortKey>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let client = CatalogClient::new(&settings.server_url)
        .with_context(|| format!("invalid catalog url '{}'", settings.server_url))?;
    info!(server_url = %client.base_url(), "using catalog service");

    match cli.command {
        Command::List { sort } => {
            let mut view = CatalogView::new(Arc::new(IdGenerator::new()))
                .with_sort_key(sort.unwrap_or(settings.default_sort));
            view.activate(&client).await;
            print!("{}", render::catalog(&view));
            if let LoadState::Failed(reason) = view.load_state() {
                bail!("could not load products: {reason}");
            }
        }
        Command::Show { product_id } => {
            let mut view = DetailView::new(ProductId(product_id), Arc::new(IdGenerator::new()));
            view.activate(&client).await;
            if let LoadState::Failed(reason) = view.load_state() {
                bail!("could not load product {product_id}: {reason}");
            }
            print!("{}", render::detail(&view));
        }
        Command::Shell { sort } => {
            run_shell(Session::new(client, sort.unwrap_or(settings.default_sort))).await?;
        }
    }

    Ok(())
}

async fn run_shell(mut session: Session<CatalogClient>) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(session.start().await.as_bytes()).await?;
    loop {
        let prompt = format!("{}> ", session.route());
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                stdout.write_all(format!("{error}\n").as_bytes()).await?;
                continue;
            }
        };
        match session.apply(command).await {
            Reply::Output(mut text) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                stdout.write_all(text.as_bytes()).await?;
            }
            Reply::Quit => break,
        }
    }
    stdout.flush().await?;
    Ok(())
}
