use std::io::{self, IsTerminal};

use clap::Parser;

use stockroom_cli::cli::Cli;
use stockroom_cli::shell::{HELP, Shell};
use stockroom_desktop::{DisplayOptions, InventoryApp};
use stockroom_products::ProductStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockroom_observability::init(&cli.log_config().with_ansi(io::stderr().is_terminal()));

    let store = if cli.empty {
        ProductStore::new()
    } else {
        ProductStore::seeded()
    };
    let app = InventoryApp::new(store, DisplayOptions::with_currency(cli.currency.clone()));
    tracing::info!(products = app.all().len(), "inventory loaded");

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("{HELP}\n");
    }
    let mut stdout = io::stdout().lock();

    Shell::new(app, cli.json).run(stdin.lock(), &mut stdout)
}
