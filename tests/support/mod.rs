//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// Deployment JSON with one release providing the service jobs.
pub fn deployment_json() -> String {
    json!({
        "deployment_name": "some-name",
        "releases": [{
            "name": "kafka",
            "version": "9.1",
            "jobs": ["kafka_server", "zookeeper_server", "smoke_tests"],
        }],
        "stemcell": {"stemcell_os": "Windows", "stemcell_version": "3.1"},
    })
    .to_string()
}

/// Plan JSON with the given broker and ZooKeeper instance counts.
pub fn plan_json(kafka: u32, zookeeper: u32) -> String {
    json!({
        "instance_groups": [
            {
                "name": "kafka_server",
                "vm_type": "small",
                "persistent_disk_type": "ten",
                "instances": kafka,
                "networks": ["kafka-network"],
                "azs": ["z1"],
            },
            {
                "name": "zookeeper_server",
                "vm_type": "small",
                "instances": zookeeper,
                "networks": ["kafka-network"],
                "azs": ["z1"],
            },
        ],
    })
    .to_string()
}

/// Host map JSON with two brokers and two ZooKeeper nodes.
pub fn hosts_json() -> String {
    json!({
        "kafka_server": ["10.0.0.1", "10.0.0.2"],
        "zookeeper_server": ["10.0.1.1", "10.0.1.2"],
    })
    .to_string()
}

/// Stand-in for a topic executable.
///
/// Appends its arguments to a log file, optionally prints a message on
/// stderr, and exits with the configured code.
pub struct TopicScript {
    _dir: TempDir,
    path: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl TopicScript {
    pub fn succeeding() -> Self {
        Self::new("", 0)
    }

    pub fn failing(stderr: &str) -> Self {
        Self::new(stderr, 1)
    }

    fn new(stderr: &str, exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("topic-command");
        let log = dir.path().join("invocations.log");

        let mut body = format!("#!/bin/sh\necho \"$1 $2\" >> '{}'\n", log.display());
        if !stderr.is_empty() {
            body.push_str(&format!("echo '{stderr}' >&2\n"));
        }
        body.push_str(&format!("exit {exit_code}\n"));

        fs::write(&path, body).expect("write topic script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod topic script");

        Self {
            _dir: dir,
            path,
            log,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One `"<zookeeper hosts> <topic>"` line per invocation.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
