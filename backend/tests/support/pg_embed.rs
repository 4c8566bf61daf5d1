//! Embedded PostgreSQL bootstrap for persistence integration tests.
//!
//! `pg-embed-setup-unpriv` installs and runs a throwaway cluster. Its
//! default directories live under `/var/tmp`; when `PG_RUNTIME_DIR` or
//! `PG_DATA_DIR` is unset, both are pointed at a unique directory under the
//! cargo target dir for the duration of the bootstrap.
//!
//! Suites that cannot start a cluster fail loudly unless
//! `SKIP_TEST_CLUSTER` is truthy, in which case they log a skip marker.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Attempts after the first when the binary download hiccups.
const MAX_RETRIES: u32 = 3;

/// Delay before the first retry; doubles each time.
const RETRY_DELAY_MS: u64 = 500;

fn target_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("CARGO_TARGET_DIR") {
        return PathBuf::from(dir).join("pg-embed");
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("pg-embed")
}

fn unique_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let base = target_dir().join(format!("island-guide-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient(err: &str) -> bool {
    let lowered = err.to_lowercase();
    [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timed out",
        "timeout",
        "temporarily unavailable",
        "dns error",
    ]
    .iter()
    .any(|pattern| lowered.contains(pattern))
}

/// Start an embedded cluster, retrying transient download failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let needs_override =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env = if needs_override {
        let (runtime_dir, data_dir) = unique_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient(&last_error) {
                    break;
                }
                let delay = Duration::from_millis(RETRY_DELAY_MS << attempt);
                eprintln!("pg-embed: transient error, retrying in {delay:?}: {last_error}");
                std::thread::sleep(delay);
            }
        }
    }
    Err(last_error)
}

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip with a marker when allowed, otherwise fail the test.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
