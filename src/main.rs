//! Account Ledger CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run -- serve
//! cargo run -- serve --bind 0.0.0.0:8080 --database-url sqlite://ledger.db
//! cargo run -- export --database-url sqlite://ledger.db > accounts.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (database unreachable, address in use, write failure, etc.)

use account_ledger::cli::{self, Command};
use account_ledger::{http, io, observability, store, AccountService, LedgerError};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    observability::init();

    let args = cli::parse_args();

    if let Err(e) = run(args.command).await {
        tracing::error!(error = %e, "fatal error");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), LedgerError> {
    match command {
        Command::Serve(args) => {
            let store = store::connect(args.database_url.as_deref()).await?;
            let service = Arc::new(AccountService::new(store));
            http::serve(&args.bind, service).await?;
        }
        Command::Export(args) => {
            let store = store::connect(Some(args.database_url.as_str())).await?;
            let accounts = AccountService::new(store).list_accounts().await?;
            let mut output = std::io::stdout();
            io::write_accounts_csv(&accounts, &mut output)?;
        }
    }
    Ok(())
}
