//! Command-line host for `TodoStore`.
//!
//! Each invocation builds a fresh store, runs one action against the
//! backend and prints what the getters report afterwards.

mod args;

use anyhow::{bail, Result};
use todo_core::{ClientConfig, NewTodo, ReqwestTransport, TodoClient, TodoItem, TodoStore};
use tracing_subscriber::EnvFilter;

use args::{Args, Command};

fn init_tracing_subscriber() {
    let filter = EnvFilter::try_from_env("TODO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn format_item(item: &TodoItem) -> String {
    let id = item.id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let mark = if item.completed { "x" } else { " " };
    format!("{id:>4} [{mark}] {} (user {})", item.title, item.user_id)
}

async fn run(args: Args) -> Result<()> {
    let config = args.config(ClientConfig::from_env()?);
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "using backend");

    let transport = ReqwestTransport::from_config(&config)?;
    let mut store = TodoStore::new(TodoClient::from_config(&config), transport);

    match args.command {
        Command::List => {
            store.fetch_all().await?;
            for item in store.list_all() {
                println!("{}", format_item(item));
            }
        }
        Command::Show { id } => {
            store.fetch_all().await?;
            match store.find_by_id(id) {
                Some(item) => println!("{}", format_item(item)),
                None => bail!("todo {id} not found"),
            }
        }
        Command::Count => {
            store.fetch_all().await?;
            println!("{}", store.count());
        }
        Command::Add {
            title,
            user_id,
            completed,
        } => {
            let created = store
                .create(NewTodo {
                    user_id,
                    title,
                    completed,
                })
                .await?;
            println!("{}", format_item(created));
        }
        Command::Rm { id } => {
            store.fetch_all().await?;
            store.delete(id).await?;
            println!("{} remaining", store.count());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();
    run(Args::parse_from_args(std::env::args_os())).await
}
