//! Shared fixtures for documentation generation tests

#![allow(dead_code)]

use stepdoc::core::{Condition, Container, EnvVar, Param, StepData, StepResource};

/// Step metadata with parameters only
pub const STEP_METADATA: &str = r#"metadata:
  name: testStep
  description: Test description
  longDescription: |
    Long Test description
spec:
  inputs:
    params:
      - name: param0
        type: string
        description: param0 description
        default: val0
        scope:
        - GENERAL
        - PARAMETERS
        mandatory: true
      - name: param1
        type: string
        description: param1 description
        scope:
        - PARAMETERS
      - name: param2
        type: string
        description: param1 description
        scope:
        - PARAMETERS
        mandatory: true
"#;

/// Template using the current placeholder syntax plus the plugin marker
pub const STEP_TEMPLATE: &str = "# ${docGenStepName}\n\n\t## ${docGenDescription}\n\t\n\t## Prerequisites\n\t\n\tnone\n\n\t## ${docJenkinsPluginDependencies}\n\t\n\t## ${docGenParameters}\n\t\n\t## ${docGenConfiguration}\n\t\n\t## Side effects\n\t\n\tnone\n\t\n\t## Exceptions\n\t\n\tnone\n\t\n\t## Example\n\n\tnone\n";

/// Document expected for `STEP_METADATA` rendered into `STEP_TEMPLATE`
pub const EXPECTED_DOCUMENT: &str = "# testStep\n\n\t## Description \n\nLong Test description\n\n\t\n\t## Prerequisites\n\t\n\tnone\n\n\t\n\t\n\t## Parameters\n\n| name | mandatory | default |\n| ---- | --------- | ------- |\n | param0 | No | val0 | \n  | param1 | No | <nil> | \n  | param2 | Yes | <nil> | \n ## Details\n * ` param0 ` :  param0 description \n  * ` param1 ` :  param1 description \n  * ` param2 ` :  param1 description \n \n\t\n\t## We recommend to define values of step parameters via [config.yml file](../configuration.md). \n\nIn following sections of the config.yml the configuration is possible:\n\n| parameter | general | step/stage |\n|-----------|---------|------------|\n | param0 | X |  | \n  | param1 |  |  | \n  | param2 |  |  | \n \n\t\n\t## Side effects\n\t\n\tnone\n\t\n\t## Exceptions\n\t\n\tnone\n\t\n\t## Example\n\n\tnone\n";

pub fn env(name: &str, value: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}

pub fn condition(name: &str, value: &str) -> Vec<Condition> {
    vec![Condition {
        condition_ref: Some("strings-equal".to_string()),
        params: vec![Param {
            name: name.to_string(),
            value: value.to_string(),
        }],
    }]
}

fn stash(name: &str, description: &str) -> StepResource {
    StepResource {
        name: name.to_string(),
        resource_type: "stash".to_string(),
        description: description.to_string(),
    }
}

/// Step with conditioned and unconditioned containers, a sidecar and stashes
pub fn container_step() -> StepData {
    let mut step = StepData::from_yaml(STEP_METADATA).expect("fixture metadata is valid");
    step.spec.inputs.resources = vec![
        stash("resource0", "val0"),
        stash("resource1", "val1"),
        stash("resource2", "val2"),
    ];
    step.spec.containers = vec![
        Container {
            name: "container0".to_string(),
            image: "image".to_string(),
            working_dir: "workingdir".to_string(),
            shell: "shell".to_string(),
            env_vars: vec![env("envar.name0", "envar.value0")],
            ..Default::default()
        },
        Container {
            name: "container1".to_string(),
            image: "image".to_string(),
            working_dir: "workingdir".to_string(),
            env_vars: vec![env("envar.name1", "envar.value1")],
            ..Default::default()
        },
        Container {
            name: "container2a".to_string(),
            command: vec!["command".to_string()],
            image_pull_policy: "pullpolicy".to_string(),
            image: "image".to_string(),
            working_dir: "workingdir".to_string(),
            env_vars: vec![env("envar.name2a", "envar.value2a")],
            conditions: condition("param.name2a", "param.value2a"),
            ..Default::default()
        },
        Container {
            name: "container2b".to_string(),
            image: "image".to_string(),
            working_dir: "workingdir".to_string(),
            env_vars: vec![env("envar.name2b", "envar.value2b")],
            conditions: condition("param.name2b", "param.value2b"),
            ..Default::default()
        },
    ];
    step.spec.sidecars = vec![Container {
        name: "sidecar0".to_string(),
        command: vec!["command".to_string()],
        image_pull_policy: "pullpolicy".to_string(),
        image: "image".to_string(),
        working_dir: "workingdir".to_string(),
        ready_command: "readycommand".to_string(),
        env_vars: vec![env("envar.name3", "envar.value3")],
        conditions: condition("param.name0", "param.value0"),
        ..Default::default()
    }];
    step
}
