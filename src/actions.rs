use crate::api::types::manageable_inventories;
use crate::api::ControllerApi;
use crate::cli::Action;
use crate::prompt::PromptSelect;
use crate::resolver::{resolve_create_targets, resolve_delete_targets};
use anyhow::{bail, Result};
use log::{debug, error, info};

/// Runs one action over the expanded hostname list.
///
/// Read operations (inventory fetch, membership lookup) are fatal on
/// failure; write operations log the error and leave the rest of the
/// batch running. A batch interrupted part-way (Ctrl-C) leaves already
/// issued creations/removals in place, the loop is not transactional.
pub async fn run(
    action: Action,
    hostnames: &[String],
    requested_inventories: &[String],
    api: &dyn ControllerApi,
    prompt: &dyn PromptSelect,
) -> Result<()> {
    match action {
        Action::Create => create_hosts(hostnames, requested_inventories, api, prompt).await,
        Action::Delete => delete_hosts(hostnames, api, prompt).await,
        Action::Update => bail!("the 'update' action is accepted but not implemented"),
    }
}

async fn create_hosts(
    hostnames: &[String],
    requested_inventories: &[String],
    api: &dyn ControllerApi,
    prompt: &dyn PromptSelect,
) -> Result<()> {
    let inventories = api.list_inventories().await?;
    let known = manageable_inventories(&inventories);

    let targets = resolve_create_targets(requested_inventories, &known, prompt)?;

    info!(
        "creating {} hosts in {} inventories",
        hostnames.len(),
        targets.len()
    );

    for hostname in hostnames {
        for inventory in &targets {
            debug!("creating '{hostname}' in inventory '{}'", inventory.name);
            if let Err(e) = api.create_host(inventory.id, hostname).await {
                error!(
                    "failed to create '{hostname}' in inventory '{}': {e}",
                    inventory.name
                );
            }
        }
    }

    Ok(())
}

async fn delete_hosts(
    hostnames: &[String],
    api: &dyn ControllerApi,
    prompt: &dyn PromptSelect,
) -> Result<()> {
    let inventories = api.list_inventories().await?;
    let known = manageable_inventories(&inventories);

    for hostname in hostnames {
        let memberships = api.list_host_memberships(hostname).await?;
        let targets = resolve_delete_targets(hostname, &memberships, &known, prompt)?;

        for membership in targets {
            debug!(
                "removing '{hostname}' from inventory '{}'",
                membership.inventory_name
            );
            if let Err(e) = api.delete_host(membership.host_id).await {
                error!(
                    "failed to remove '{hostname}' from inventory '{}': {e}",
                    membership.inventory_name
                );
            }
        }
    }

    Ok(())
}
