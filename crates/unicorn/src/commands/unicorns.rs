//! Unicorn command handlers.
//!
//! Reads and writes go through the same reducer tree the app uses: each
//! handler replays the actions a user would produce and lets the store
//! settle. An alert left behind by a workflow becomes the command's error.
//! A write that succeeded is always reported, even when the reload after it
//! fails.

use tabled::Tabled;
use tracing::debug;

use unicorn_core::{
    AddAction, DetailAction, Environment, ListAction, RootAction, RootReducer, RootState, Store,
    Unicorn, translate,
};

use crate::cli::{FlavourArg, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UnicornRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Flavour")]
    flavour: String,
}

impl From<&Unicorn> for UnicornRow {
    fn from(u: &Unicorn) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            flavour: u.flavour.name().to_owned(),
        }
    }
}

fn detail(u: &Unicorn) -> String {
    format!(
        "ID:       {}\nName:     {}\nFlavour:  {}",
        u.id,
        u.name,
        u.flavour.name()
    )
}

// ── Store helpers ───────────────────────────────────────────────────

fn list(action: ListAction) -> RootAction {
    RootAction::Unicorns(action)
}

/// A store with the unicorn list loaded.
async fn loaded(env: Environment) -> Result<Store<RootReducer>, CliError> {
    let mut store = Store::new(RootState::default(), RootReducer, env);
    store.send(list(ListAction::Fetch));
    store.settle().await;
    reloaded(&store)?;
    Ok(store)
}

/// Fail with the alert the list's last fetch left behind.
fn reloaded(store: &Store<RootReducer>) -> Result<(), CliError> {
    match &store.state().unicorns.alert {
        Some(alert) => Err(alert.into()),
        None => Ok(()),
    }
}

fn snapshot(store: &Store<RootReducer>) -> Vec<Unicorn> {
    store.state().unicorns.unicorns().cloned().collect()
}

fn print_list(store: &Store<RootReducer>, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.output,
        &snapshot(store),
        |u| UnicornRow::from(u),
        |u| u.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Replay the detail workflow for `identifier`, ending with `finish`.
async fn run_detail(
    env: Environment,
    identifier: &str,
    edits: Vec<DetailAction>,
    finish: DetailAction,
) -> Result<(Store<RootReducer>, Unicorn), CliError> {
    let mut store = loaded(env).await?;
    let id = util::resolve_unicorn(&store.state().unicorns, identifier)?;
    let target = store.state().unicorns.items[&id].item.clone();

    store.send(list(ListAction::ShowUnicornDetail(Some(id))));
    store.send(list(ListAction::UnicornDetail(DetailAction::OnAppear)));
    for edit in edits {
        store.send(list(ListAction::UnicornDetail(edit)));
    }
    debug!(%id, action = ?finish, "submitting detail");
    store.send(list(ListAction::UnicornDetail(finish)));
    store.settle().await;

    let selection = store.state().unicorns.selection.as_ref();
    if let Some(alert) = selection.and_then(|s| s.detail.alert.as_ref()) {
        return Err(alert.into());
    }
    Ok((store, target))
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list_all(env: Environment, global: &GlobalOpts) -> Result<(), CliError> {
    let store = loaded(env).await?;
    print_list(&store, global)
}

pub async fn get(env: Environment, identifier: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let store = loaded(env.clone()).await?;
    let id = util::resolve_unicorn(&store.state().unicorns, identifier)?;

    let unicorn = env
        .unicorns
        .get(id)
        .await
        .map_err(|e| CliError::from(&translate(&e)))?
        .ok_or_else(|| CliError::NotFound {
            identifier: identifier.into(),
        })?;

    let out = output::render_single(&global.output, &unicorn, detail, |u| u.id.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn add(
    env: Environment,
    name: String,
    flavour: FlavourArg,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut store = loaded(env).await?;

    let status = format!("Added unicorn '{name}'");
    store.send(list(ListAction::ShowAddUnicorn(true)));
    for action in [
        AddAction::NameChanged(name),
        AddAction::FlavourChanged(flavour.into()),
        AddAction::Save,
    ] {
        store.send(list(ListAction::AddUnicorn(action)));
    }
    store.settle().await;

    let sheet = store.state().unicorns.add.as_ref();
    if let Some(alert) = sheet.and_then(|add| add.alert.as_ref()) {
        return Err(alert.into());
    }

    output::print_status(&status, &global.color, global.quiet);
    reloaded(&store)?;
    print_list(&store, global)
}

pub async fn edit(
    env: Environment,
    identifier: &str,
    name: Option<String>,
    flavour: Option<FlavourArg>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if name.is_none() && flavour.is_none() {
        return Err(CliError::Validation {
            field: "edit".into(),
            reason: "pass --name and/or --flavour".into(),
        });
    }

    let mut edits = Vec::new();
    if let Some(name) = name {
        edits.push(DetailAction::NameChanged(name));
    }
    if let Some(flavour) = flavour {
        edits.push(DetailAction::FlavourChanged(flavour.into()));
    }

    let (store, target) = run_detail(env, identifier, edits, DetailAction::Save).await?;
    output::print_status(
        &format!("Updated unicorn '{}'", target.name),
        &global.color,
        global.quiet,
    );
    reloaded(&store)?;
    print_list(&store, global)
}

pub async fn delete(
    env: Environment,
    identifier: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let (store, target) = run_detail(env, identifier, Vec::new(), DetailAction::Delete).await?;
    output::print_status(
        &format!("Deleted unicorn '{}'", target.name),
        &global.color,
        global.quiet,
    );
    reloaded(&store)?;
    print_list(&store, global)
}
