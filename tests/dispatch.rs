use anyhow::Result;
use async_trait::async_trait;
use awxctl::actions;
use awxctl::api::client::ApiError;
use awxctl::api::types::{HostMembership, InventoryRecord};
use awxctl::api::ControllerApi;
use awxctl::cli::Action;
use awxctl::prompt::PromptSelect;
use awxctl::resolver::ResolveError;
use reqwest::StatusCode;
use std::sync::Mutex;

#[derive(Debug, PartialEq, Eq)]
enum Call {
    Create { inventory_id: u64, hostname: String },
    Delete { host_id: u64 },
}

/// Controller fake that serves canned inventories and memberships and
/// records every write call.
struct FakeApi {
    inventories: Vec<InventoryRecord>,
    memberships: Vec<(String, HostMembership)>,
    calls: Mutex<Vec<Call>>,
    fail_creates: bool,
}

impl FakeApi {
    fn new(inventories: Vec<InventoryRecord>) -> Self {
        FakeApi {
            inventories,
            memberships: Vec::new(),
            calls: Mutex::new(Vec::new()),
            fail_creates: false,
        }
    }

    fn with_membership(mut self, hostname: &str, membership: HostMembership) -> Self {
        self.memberships.push((hostname.to_string(), membership));
        self
    }

    fn failing_creates(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().drain(..).collect()
    }
}

#[async_trait]
impl ControllerApi for FakeApi {
    async fn list_inventories(&self) -> Result<Vec<InventoryRecord>, ApiError> {
        Ok(self.inventories.clone())
    }

    async fn list_host_memberships(
        &self,
        hostname: &str,
    ) -> Result<Vec<HostMembership>, ApiError> {
        Ok(self
            .memberships
            .iter()
            .filter(|(name, _)| name == hostname)
            .map(|(_, membership)| membership.clone())
            .collect())
    }

    async fn create_host(&self, inventory_id: u64, hostname: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(Call::Create {
            inventory_id,
            hostname: hostname.to_string(),
        });
        if self.fail_creates {
            return Err(ApiError::Status {
                status: StatusCode::BAD_REQUEST,
                url: format!("/inventories/{inventory_id}/hosts/"),
            });
        }
        Ok(())
    }

    async fn delete_host(&self, host_id: u64) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(Call::Delete { host_id });
        Ok(())
    }
}

/// Prompt fake returning a fixed selection.
struct FakePrompt {
    selection: Vec<usize>,
    invocations: Mutex<usize>,
}

impl FakePrompt {
    fn selecting(selection: Vec<usize>) -> Self {
        FakePrompt {
            selection,
            invocations: Mutex::new(0),
        }
    }

    fn invocations(&self) -> usize {
        *self.invocations.lock().unwrap()
    }
}

impl PromptSelect for FakePrompt {
    fn select_many(&self, _prompt: &str, _options: &[String]) -> Result<Vec<usize>> {
        *self.invocations.lock().unwrap() += 1;
        Ok(self.selection.clone())
    }
}

fn inventory(id: u64, name: &str, kind: &str) -> InventoryRecord {
    InventoryRecord {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
    }
}

fn membership(host_id: u64, inventory_id: u64, inventory_name: &str) -> HostMembership {
    HostMembership {
        host_id,
        inventory_id,
        inventory_name: inventory_name.to_string(),
    }
}

fn hostnames(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn create_issues_one_call_per_host_inventory_pair() {
    let api = FakeApi::new(vec![
        inventory(1, "Production", ""),
        inventory(2, "Staging", ""),
    ]);
    let prompt = FakePrompt::selecting(vec![]);
    let hosts = hostnames(&["lc01g01", "lc01g02", "lc01g03"]);
    let requested = hostnames(&["Production", "Staging"]);

    actions::run(Action::Create, &hosts, &requested, &api, &prompt)
        .await
        .unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(
        calls[0],
        Call::Create {
            inventory_id: 1,
            hostname: "lc01g01".to_string()
        }
    );
    assert_eq!(
        calls[1],
        Call::Create {
            inventory_id: 2,
            hostname: "lc01g01".to_string()
        }
    );
    assert_eq!(prompt.invocations(), 0);
}

#[tokio::test]
async fn create_with_unknown_inventory_aborts_before_any_call() {
    let api = FakeApi::new(vec![inventory(1, "Production", "")]);
    let prompt = FakePrompt::selecting(vec![]);
    let hosts = hostnames(&["lc01g01"]);
    let requested = hostnames(&["Production", "NoSuchInventory"]);

    let err = actions::run(Action::Create, &hosts, &requested, &api, &prompt)
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ResolveError>(),
        Some(&ResolveError::InvalidInventoryName(
            "NoSuchInventory".to_string()
        ))
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn create_rejects_smart_inventory_as_target() {
    let api = FakeApi::new(vec![
        inventory(1, "Production", ""),
        inventory(9, "All Linux", "smart"),
    ]);
    let prompt = FakePrompt::selecting(vec![]);
    let hosts = hostnames(&["lc01g01"]);
    let requested = hostnames(&["All Linux"]);

    let err = actions::run(Action::Create, &hosts, &requested, &api, &prompt)
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ResolveError>(),
        Some(&ResolveError::InvalidInventoryName("All Linux".to_string()))
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn create_without_inventories_prompts_for_selection() {
    let api = FakeApi::new(vec![
        inventory(1, "Production", ""),
        inventory(2, "Staging", ""),
    ]);
    let prompt = FakePrompt::selecting(vec![1]);
    let hosts = hostnames(&["lc01g01"]);

    actions::run(Action::Create, &hosts, &[], &api, &prompt)
        .await
        .unwrap();

    assert_eq!(prompt.invocations(), 1);
    assert_eq!(
        api.calls(),
        vec![Call::Create {
            inventory_id: 2,
            hostname: "lc01g01".to_string()
        }]
    );
}

#[tokio::test]
async fn create_failures_do_not_abort_the_batch() {
    let api = FakeApi::new(vec![inventory(1, "Production", "")]).failing_creates();
    let prompt = FakePrompt::selecting(vec![]);
    let hosts = hostnames(&["lc01g01", "lc01g02"]);
    let requested = hostnames(&["Production"]);

    actions::run(Action::Create, &hosts, &requested, &api, &prompt)
        .await
        .unwrap();

    // Both creates were attempted despite the first one failing
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn delete_removes_only_selected_manageable_memberships() {
    let api = FakeApi::new(vec![
        inventory(1, "Production", ""),
        inventory(9, "All Linux", "smart"),
    ])
    .with_membership("lc01g01", membership(100, 1, "Production"))
    .with_membership("lc01g01", membership(100, 9, "All Linux"));
    let prompt = FakePrompt::selecting(vec![0]);
    let hosts = hostnames(&["lc01g01"]);

    actions::run(Action::Delete, &hosts, &[], &api, &prompt)
        .await
        .unwrap();

    assert_eq!(api.calls(), vec![Call::Delete { host_id: 100 }]);
}

#[tokio::test]
async fn delete_skips_hosts_without_manageable_memberships() {
    let api = FakeApi::new(vec![inventory(1, "Production", "")])
        .with_membership("lc01g01", membership(100, 9, "All Linux"))
        .with_membership("lc01g02", membership(101, 1, "Production"));
    let prompt = FakePrompt::selecting(vec![0]);
    let hosts = hostnames(&["lc01g01", "lc01g02"]);

    actions::run(Action::Delete, &hosts, &[], &api, &prompt)
        .await
        .unwrap();

    // lc01g01 only belongs to a smart inventory: skipped without a
    // prompt; lc01g02 proceeds normally
    assert_eq!(prompt.invocations(), 1);
    assert_eq!(api.calls(), vec![Call::Delete { host_id: 101 }]);
}

#[tokio::test]
async fn update_is_rejected_as_unimplemented() {
    let api = FakeApi::new(vec![inventory(1, "Production", "")]);
    let prompt = FakePrompt::selecting(vec![]);
    let hosts = hostnames(&["lc01g01"]);

    let err = actions::run(Action::Update, &hosts, &[], &api, &prompt)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not implemented"));
    assert!(api.calls().is_empty());
}
