//! Contact command handler.

use std::sync::Arc;

use unicorn_core::{
    ContactAction, Environment, InMemoryUnicornClient, RootAction, RootReducer, RootState, Store,
    Tab, UrlOpener,
};

use crate::cli::{ContactLink, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Terminal stand-in for a browser: prints the link.
struct PrintUrlOpener {
    quiet: bool,
}

impl UrlOpener for PrintUrlOpener {
    fn open(&self, url: &str) {
        output::print_output(url, self.quiet);
    }
}

pub async fn handle(link: ContactLink, global: &GlobalOpts) -> Result<(), CliError> {
    let env = Environment::new(
        Arc::new(InMemoryUnicornClient::new()),
        Arc::new(PrintUrlOpener {
            quiet: global.quiet,
        }),
    );
    let mut store = Store::new(RootState::default(), RootReducer, env);

    store.send(RootAction::Select(Tab::Contact));
    store.send(RootAction::Contact(ContactAction::from(link)));
    store.settle().await;
    Ok(())
}
