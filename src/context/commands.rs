//! Context command handlers

use futures::future::try_join;
use indicatif::ProgressBar;
use log::{debug, warn};

use crate::cli::{Cli, Command, DeleteArgs, OutputFormat, RenameArgs, SetNamespaceArgs};
use crate::error::{KubeContextError, Result};
use crate::output::output_contexts;
use crate::remote::{ensure_reachable, ClusterClient, ResourceKind};
use crate::ui::message::{self, highlight};
use crate::ui::{clear_spinner, create_spinner, update_spinner, Prompter};

use super::models::{Kubeconfig, NewContext};
use super::operations::{Deletion, Switch};
use super::resolve::resolve_config_path;
use super::store::ContextStore;
use super::validate;

/// Dispatch the parsed command line
pub async fn run_command(cli: &Cli, prompter: &dyn Prompter) -> Result<()> {
    let store = ContextStore::with_path(resolve_config_path(cli.kubeconfig.as_deref()));

    if cli.command.is_some() && cli.context.is_some() {
        warn!("--context before a subcommand is ignored; pass it after the subcommand");
    }

    match &cli.command {
        None => run_switch(&store, prompter, cli.context.as_deref()),
        Some(Command::Switch(args)) => run_switch(&store, prompter, args.context.as_deref()),
        Some(Command::List(args)) => run_list(&store, args.output),
        Some(Command::Current) => run_current(&store),
        Some(Command::Add) => run_add(&store, prompter),
        Some(Command::Rename(args)) => run_rename(&store, prompter, args),
        Some(Command::Delete(args)) => run_delete(&store, prompter, args),
        Some(Command::SetNamespace(args)) => run_set_namespace(&store, prompter, args).await,
        Some(Command::Info) => run_info(&store).await,
    }
}

/// Let the user pick one of the existing contexts
fn select_context(prompter: &dyn Prompter, config: &Kubeconfig, prompt: &str) -> Result<String> {
    let mut names = config.context_names();
    if names.is_empty() {
        return Err(KubeContextError::NoContexts);
    }
    names.sort();
    prompter.select_one(prompt, &names)
}

/// Name of the current context, failing when none is set
fn require_current(config: &Kubeconfig) -> Result<String> {
    match config.current_context() {
        "" => Err(KubeContextError::NoCurrentContext),
        name => Ok(name.to_string()),
    }
}

/// List all contexts
fn run_list(store: &ContextStore, format: OutputFormat) -> Result<()> {
    let config = store.load_existing()?;

    if config.has_dangling_current_context() {
        message::warning(format!(
            "The current context {} does not exist in the kubeconfig",
            highlight(config.current_context())
        ));
    }

    if format == OutputFormat::Table {
        if config.contexts.is_empty() {
            println!("No contexts configured.");
            println!("\nUse 'kube-context add' to create one.");
            return Ok(());
        }
        println!(
            "You currently have {} context(s) configured:",
            highlight(&config.contexts.len().to_string())
        );
    }

    output_contexts(&config, format)
}

/// Show the current context
fn run_current(store: &ContextStore) -> Result<()> {
    let config = store.load_existing()?;
    let current = require_current(&config)?;

    if !config.has_context(&current) {
        return Err(KubeContextError::not_found(&current, &config.context_names()));
    }

    println!("{}", current);
    Ok(())
}

/// Switch the active context
fn run_switch(store: &ContextStore, prompter: &dyn Prompter, name: Option<&str>) -> Result<()> {
    let mut config = store.load_existing()?;

    let target = match name {
        Some(name) => name.to_string(),
        None => select_context(prompter, &config, "Choose a context:")?,
    };

    match config.switch_context(&target)? {
        Switch::AlreadyActive => {
            message::warning(format!(
                "You were already working on {}, no need to change.",
                highlight(&target)
            ));
        }
        Switch::Switched => {
            store.save(&config)?;
            message::success(format!("Switched to {}!", highlight(&target)));
        }
    }

    Ok(())
}

/// Ask for everything a new context needs
fn prompt_new_context(prompter: &dyn Prompter, config: &Kubeconfig) -> Result<NewContext> {
    let name = prompter.input("Please enter a name for the context:", &|input: &str| {
        validate::new_context_name(config, input)
    })?;
    let server = prompter.input("Please enter the cluster endpoint:", &validate::server_url)?;
    let certificate_authority = prompter.input(
        "Please enter the certificate authority location (leave empty to skip):",
        &validate::optional_file,
    )?;
    let client_certificate = prompter.input(
        "Please enter the client certificate location:",
        &validate::existing_file,
    )?;
    let client_key = prompter.input(
        "Please enter the client key location:",
        &validate::existing_file,
    )?;

    Ok(NewContext {
        name,
        server,
        certificate_authority: non_empty(certificate_authority),
        client_certificate: non_empty(client_certificate),
        client_key: non_empty(client_key),
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Add a context interactively
fn run_add(store: &ContextStore, prompter: &dyn Prompter) -> Result<()> {
    let mut config = store.load_or_empty()?;

    let new_context = prompt_new_context(prompter, &config)?;
    let name = new_context.name.clone();
    debug!("Adding context '{}' for {}", name, new_context.server);

    config.add_context(new_context)?;
    store.save(&config)?;
    message::success(format!("Successfully added context {}!", highlight(&name)));

    Ok(())
}

/// Rename a context
fn run_rename(store: &ContextStore, prompter: &dyn Prompter, args: &RenameArgs) -> Result<()> {
    let mut config = store.load_existing()?;

    let (from, to) = match (&args.from, &args.to) {
        (Some(from), Some(to)) => (from.clone(), to.clone()),
        _ => {
            let from = select_context(prompter, &config, "Choose a context to rename:")?;
            let to = prompter.input("What do you want to name the context?", &|input: &str| {
                validate::new_context_name(&config, input)
            })?;
            (from, to)
        }
    };

    config.rename_context(&from, &to)?;
    message::info(format!(
        "Renaming {} context to {}..",
        highlight(&from),
        highlight(&to)
    ));
    store.save(&config)?;
    message::success(format!(
        "Successfully renamed {} context to {}!",
        highlight(&from),
        highlight(&to)
    ));

    Ok(())
}

/// Delete a context
fn run_delete(store: &ContextStore, prompter: &dyn Prompter, args: &DeleteArgs) -> Result<()> {
    let mut config = store.load_existing()?;

    let target = match &args.context {
        Some(name) => name.clone(),
        None => select_context(prompter, &config, "Choose a context to delete:")?,
    };

    if !config.has_context(&target) {
        return Err(KubeContextError::not_found(&target, &config.context_names()));
    }

    if !args.yes
        && !prompter.confirm(&format!(
            "Delete context '{}' from {}?",
            target,
            store.path().display()
        ))?
    {
        message::info(format!("Keeping context {}.", highlight(&target)));
        return Ok(());
    }

    message::info(format!(
        "Deleting context {} from kubeconfig file..",
        highlight(&target)
    ));
    match config.delete_context(&target)? {
        Deletion::Inactive => {}
        Deletion::ReassignedTo(next) => message::info(format!(
            "You're currently using the context you want to delete, switching you to the {} context..",
            highlight(&next)
        )),
        Deletion::ActiveCleared => message::warning(
            "You deleted the last context, no current context is set anymore.",
        ),
    }
    store.save(&config)?;
    message::success(format!(
        "Successfully deleted context {}!",
        highlight(&target)
    ));

    Ok(())
}

/// Pick a namespace among those the cluster has
fn choose_namespace(
    prompter: &dyn Prompter,
    context: &str,
    mut namespaces: Vec<String>,
    requested: Option<&str>,
) -> Result<String> {
    namespaces.sort();

    match requested {
        Some(namespace) => {
            if namespaces.iter().any(|n| n == namespace) {
                Ok(namespace.to_string())
            } else {
                Err(KubeContextError::NamespaceNotFound {
                    namespace: namespace.to_string(),
                    available: namespaces,
                })
            }
        }
        None => prompter.select_one(
            &format!("Choose a default namespace for the {} context:", context),
            &namespaces,
        ),
    }
}

/// Set a context's default namespace
async fn run_set_namespace(
    store: &ContextStore,
    prompter: &dyn Prompter,
    args: &SetNamespaceArgs,
) -> Result<()> {
    let mut config = store.load_existing()?;

    let target = match &args.context {
        Some(name) => name.clone(),
        None => require_current(&config)?,
    };
    if !config.has_context(&target) {
        return Err(KubeContextError::not_found(&target, &config.context_names()));
    }

    let namespace = match (&args.namespace, args.no_verify) {
        (Some(namespace), true) => namespace.clone(),
        (requested, _) => {
            let server = config.server_for(&target)?.to_string();
            ensure_reachable(&server).await?;

            let client = ClusterClient::connect(store.path(), &target).await?;
            let namespaces = client.list(ResourceKind::Namespaces).await?;
            choose_namespace(prompter, &target, namespaces, requested.as_deref())?
        }
    };

    message::info(format!(
        "Setting the default namespace to {}..",
        highlight(&namespace)
    ));
    config.set_namespace(&target, &namespace)?;
    store.save(&config)?;
    message::success(format!(
        "Successfully set the default namespace for {} to {}!",
        highlight(&target),
        highlight(&namespace)
    ));

    Ok(())
}

async fn fetch_pods_and_namespaces(
    store: &ContextStore,
    context: &str,
    server: &str,
    spinner: &Option<ProgressBar>,
) -> Result<(Vec<String>, Vec<String>)> {
    ensure_reachable(server).await?;
    update_spinner(spinner, "Fetching namespaces and pods...");

    let client = ClusterClient::connect(store.path(), context).await?;
    let (pods, namespaces) = try_join(
        client.list(ResourceKind::Pods),
        client.list(ResourceKind::Namespaces),
    )
    .await?;
    debug!(
        "Context '{}': {} pods, {} namespaces",
        context,
        pods.len(),
        namespaces.len()
    );
    Ok((pods, namespaces))
}

/// Show connectivity and resource counts for the current context
async fn run_info(store: &ContextStore) -> Result<()> {
    let config = store.load_existing()?;
    let current = require_current(&config)?;
    let server = config.server_for(&current)?.to_string();

    let spinner = create_spinner(&format!("Connecting to {}...", server), false);
    let fetched = fetch_pods_and_namespaces(store, &current, &server, &spinner).await;
    clear_spinner(spinner);
    let (pods, namespaces) = fetched?;

    message::info(format!(
        "The {} cluster currently has {} pods spread over {} namespaces!",
        highlight(&current),
        highlight(&pods.len().to_string()),
        highlight(&namespaces.len().to_string())
    ));
    message::info(format!(
        "Connecting to this cluster can be done using the {} API endpoint.",
        highlight(&server)
    ));

    Ok(())
}
