use std::ffi::OsString;
use std::time::Duration;

use clap::{Parser, Subcommand};
use todo_core::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Inspect and edit a remote todo list", long_about = None)]
pub struct Args {
    /// Backend base URL. Overrides TODO_API_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds. Overrides TODO_API_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print every todo
    List,
    /// Print a single todo
    Show { id: i64 },
    /// Print the number of todos
    Count,
    /// Create a todo
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value_t = 1)]
        user_id: i64,
        #[arg(short, long)]
        completed: bool,
    },
    /// Delete a todo
    Rm { id: i64 },
}

impl Args {
    pub fn parse_from_args<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(itr)
    }

    /// Apply command-line overrides on top of `base`.
    pub fn config(&self, base: ClientConfig) -> ClientConfig {
        let mut config = base;
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout = Some(Duration::from_millis(ms));
        }
        config
    }
}
