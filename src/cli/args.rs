use clap::{Args, Parser, Subcommand};

/// Account ledger service
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Account ledger with credit, debit and balance inquiry over HTTP", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),

    /// Write every account as CSV to stdout
    Export(ExportArgs),
}

/// Options for `serve`
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        env = "LEDGER_BIND",
        default_value = "127.0.0.1:8080"
    )]
    pub bind: String,

    /// SQLite database URL (in-memory store when omitted)
    #[arg(long = "database-url", value_name = "URL", env = "LEDGER_DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Options for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// SQLite database URL to read accounts from
    #[arg(long = "database-url", value_name = "URL", env = "LEDGER_DATABASE_URL")]
    pub database_url: String,
}
