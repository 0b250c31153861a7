//! Shared fixtures for loader tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const GENERIC_EXPERIMENT_JSON: &str = r#"{
  "version": "1.0.0",
  "title": "Moving a file from under our feet is forgivable",
  "description": "Our application should re-create a file that was removed",
  "tags": ["filesystem"],
  "steady-state-hypothesis": {
    "title": "The file must be around first",
    "probes": [
      {
        "type": "probe",
        "name": "file-must-exist",
        "tolerance": true,
        "provider": {"type": "python", "module": "os.path", "func": "exists", "arguments": {"path": "some/file"}}
      }
    ]
  },
  "method": [
    {
      "type": "action",
      "name": "file-be-gone",
      "provider": {"type": "python", "module": "os", "func": "remove", "arguments": {"path": "some/file"}},
      "pauses": {"after": 0.1}
    }
  ]
}"#;

pub const GENERIC_EXPERIMENT_YAML: &str = r#"
version: 1.0.0
title: Moving a file from under our feet is forgivable
description: Our application should re-create a file that was removed
tags:
  - filesystem
steady-state-hypothesis:
  title: The file must be around first
  probes:
    - type: probe
      name: file-must-exist
      tolerance: true
      provider:
        type: python
        module: os.path
        func: exists
        arguments:
          path: some/file
method:
  - type: action
    name: file-be-gone
    provider:
      type: python
      module: os
      func: remove
      arguments:
        path: some/file
    pauses:
      after: 0.1
"#;

pub const UNSAFE_YAML_EXPERIMENT: &str = r#"
title: Hello, world!
description: Say hello
method:
  - type: action
    name: say-hello
    provider:
      type: python
      module: os
      func: system
      arguments: !!python/object/apply:os.system ["echo Hello World"]
"#;

/// Temporary directory holding experiment fixtures.
pub struct Fixtures {
    root: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn generic_json(&self) -> PathBuf {
        self.write("experiment.json", GENERIC_EXPERIMENT_JSON)
    }

    pub fn generic_yaml(&self) -> PathBuf {
        self.write("experiment.yaml", GENERIC_EXPERIMENT_YAML)
    }
}
