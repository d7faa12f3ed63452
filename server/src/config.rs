use std::net::SocketAddr;

use clap::Parser;

/// Value of `--database-url` that selects the non-persistent store.
pub const MEMORY_DATABASE: &str = "memory";

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server", version, about = "HTTP service for the todo tracker")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TODO_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// SQLite connection URL, or "memory" to keep todos in process memory
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://todos.db")]
    pub database_url: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Backend<'a> {
    Memory,
    Sqlite(&'a str),
}

impl Config {
    pub fn backend(&self) -> Backend<'_> {
        if self.database_url == MEMORY_DATABASE {
            Backend::Memory
        } else {
            Backend::Sqlite(&self.database_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("todo-server").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let config = parse(&["--addr", "0.0.0.0:8080", "--database-url", "sqlite://x.db"]);
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.backend(), Backend::Sqlite("sqlite://x.db"));
    }

    #[test]
    fn memory_selects_in_process_store() {
        let config = parse(&["--database-url", "memory"]);
        assert_eq!(config.backend(), Backend::Memory);
    }

    #[test]
    fn rejects_invalid_address() {
        let result = Config::try_parse_from(["todo-server", "--addr", "nope"]);
        assert!(result.is_err());
    }
}
