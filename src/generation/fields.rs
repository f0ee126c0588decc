//! Flattening of containers, sidecars, resources and parameter values
//! into display strings

use crate::core::condition::Guard;
use crate::core::metadata::{Container, EnvVar, StepResource};
use serde_yaml::Value;

/// Separator between entries of one group
pub const LIST_SEPARATOR: &str = ", ";

/// Separator between the unconditioned group and conditioned variants
pub const VARIANT_SEPARATOR: &str = " <br>";

/// Placeholder for values that are not set
pub const NIL: &str = "<nil>";

/// Render one container field across all container variants.
///
/// Unconditioned values form a comma separated prefix group, each
/// conditioned variant follows as `guard:value`. Empty values are skipped.
pub fn render_guarded<F>(containers: &[Container], value: F) -> String
where
    F: Fn(&Container) -> String,
{
    let mut plain = Vec::new();
    let mut variants = Vec::new();

    for container in containers {
        let rendered = value(container);
        if rendered.is_empty() {
            continue;
        }
        match Guard::of(container).label() {
            None => plain.push(rendered),
            Some(label) => variants.push(format!("{}:{}", label, rendered)),
        }
    }

    join_groups(plain, variants)
}

/// Render container names. Conditioned variants are listed by name only,
/// each terminated by the variant separator.
pub fn render_names(containers: &[Container]) -> String {
    let plain: Vec<&str> = containers
        .iter()
        .filter(|c| !Guard::of(c).is_conditioned())
        .map(|c| c.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    let variants: String = containers
        .iter()
        .filter(|c| Guard::of(c).is_conditioned())
        .filter(|c| !c.name.is_empty())
        .map(|c| format!("{}{}", c.name, VARIANT_SEPARATOR))
        .collect();

    match (plain.is_empty(), variants.is_empty()) {
        (_, true) => plain.join(LIST_SEPARATOR),
        (true, false) => variants,
        (false, false) => format!("{}{}{}", plain.join(LIST_SEPARATOR), VARIANT_SEPARATOR, variants),
    }
}

/// Render environment variables. Unconditioned containers contribute to
/// one flat list; each conditioned variant renders its own bracketed list.
pub fn render_env_vars(containers: &[Container]) -> String {
    let mut plain = Vec::new();
    let mut variants = Vec::new();

    for container in containers {
        if container.env_vars.is_empty() {
            continue;
        }
        match Guard::of(container).label() {
            None => plain.extend(container.env_vars.iter().map(env_pair)),
            Some(label) => variants.push(format!(
                "{}:\\[{}\\]",
                label,
                join_env(&container.env_vars)
            )),
        }
    }

    join_groups(plain, variants)
}

/// `"true"` when any container declares a pull policy
pub fn render_pull_policy(containers: &[Container]) -> Option<String> {
    containers
        .iter()
        .any(|c| !c.image_pull_policy.is_empty())
        .then(|| "true".to_string())
}

/// Render one field across all entries, ignoring guards
pub fn render_plain<F>(containers: &[Container], value: F) -> String
where
    F: Fn(&Container) -> String,
{
    containers
        .iter()
        .map(value)
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Environment variables of all entries, ignoring guards
pub fn render_plain_env_vars(containers: &[Container]) -> String {
    containers
        .iter()
        .flat_map(|c| c.env_vars.iter().map(env_pair))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

pub fn render_command(container: &Container) -> String {
    container.command.join(" ")
}

/// Names of all stash resources
pub fn render_stashes(resources: &[StepResource]) -> String {
    resources
        .iter()
        .filter(|r| r.is_stash())
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Format a parameter value for a table cell; absent values render as `<nil>`
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None => NIL.to_string(),
        Some(value) => format_yaml(value),
    }
}

fn format_yaml(value: &Value) -> String {
    match value {
        Value::Null => NIL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => format!(
            "[{}]",
            items.iter().map(format_yaml).collect::<Vec<_>>().join(" ")
        ),
        Value::Mapping(map) => format!(
            "map[{}]",
            map.iter()
                .map(|(k, v)| format!("{}:{}", format_yaml(k), format_yaml(v)))
                .collect::<Vec<_>>()
                .join(" ")
        ),
        Value::Tagged(tagged) => format_yaml(&tagged.value),
    }
}

/// Whole floats print without a fraction (`1.0` as `1`)
fn format_number(n: &serde_yaml::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn env_pair(env: &EnvVar) -> String {
    format!("{}={}", env.name, env.value)
}

fn join_env(env_vars: &[EnvVar]) -> String {
    env_vars.iter().map(env_pair).collect::<Vec<_>>().join(LIST_SEPARATOR)
}

fn join_groups(plain: Vec<String>, variants: Vec<String>) -> String {
    let mut groups = Vec::with_capacity(variants.len() + 1);
    if !plain.is_empty() {
        groups.push(plain.join(LIST_SEPARATOR));
    }
    groups.extend(variants);
    groups.join(VARIANT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::{Condition, Param};

    fn container(name: &str) -> Container {
        Container {
            name: name.to_string(),
            image: "image".to_string(),
            working_dir: "workingdir".to_string(),
            ..Default::default()
        }
    }

    fn guarded(name: &str, param: &str, value: &str) -> Container {
        Container {
            conditions: vec![Condition {
                condition_ref: Some("strings-equal".to_string()),
                params: vec![Param {
                    name: param.to_string(),
                    value: value.to_string(),
                }],
            }],
            ..container(name)
        }
    }

    fn env(name: &str, value: &str) -> EnvVar {
        EnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_names_with_conditioned_variant() {
        let containers = vec![container("c0"), container("c1"), guarded("c2", "p", "v")];
        assert_eq!(render_names(&containers), "c0, c1 <br>c2 <br>");
    }

    #[test]
    fn test_names_without_variants() {
        let containers = vec![container("c0"), container("c1")];
        assert_eq!(render_names(&containers), "c0, c1");
    }

    #[test]
    fn test_names_only_variants() {
        let containers = vec![guarded("a", "p", "1"), guarded("b", "p", "2")];
        assert_eq!(render_names(&containers), "a <br>b <br>");
    }

    #[test]
    fn test_guarded_values() {
        let containers = vec![
            container("c0"),
            container("c1"),
            guarded("c2a", "param.name2a", "param.value2a"),
            guarded("c2b", "param.name2b", "param.value2b"),
        ];

        assert_eq!(
            render_guarded(&containers, |c| c.image.clone()),
            "image, image <br>param.name2a=param.value2a:image <br>param.name2b=param.value2b:image"
        );
    }

    #[test]
    fn test_guarded_skips_empty_values() {
        let mut shell = container("c0");
        shell.shell = "/bin/bash".to_string();
        let containers = vec![shell, container("c1"), guarded("c2", "p", "v")];

        assert_eq!(render_guarded(&containers, |c| c.shell.clone()), "/bin/bash");
        assert_eq!(render_guarded(&containers, |c| c.ready_command.clone()), "");
    }

    #[test]
    fn test_env_vars() {
        let mut c0 = container("c0");
        c0.env_vars = vec![env("envar.name0", "envar.value0")];
        let mut c1 = container("c1");
        c1.env_vars = vec![env("envar.name1", "envar.value1")];
        let mut c2 = guarded("c2", "param.name2", "param.value2");
        c2.env_vars = vec![env("a", "1"), env("b", "2")];

        assert_eq!(
            render_env_vars(&[c0, c1, c2]),
            "envar.name0=envar.value0, envar.name1=envar.value1 <br>param.name2=param.value2:\\[a=1, b=2\\]"
        );
    }

    #[test]
    fn test_pull_policy() {
        let mut pulled = guarded("c", "p", "v");
        pulled.image_pull_policy = "Always".to_string();

        assert_eq!(render_pull_policy(&[container("a"), pulled]), Some("true".to_string()));
        assert_eq!(render_pull_policy(&[container("a")]), None);
        assert_eq!(render_pull_policy(&[]), None);
    }

    #[test]
    fn test_plain_ignores_guards() {
        let mut sidecar = guarded("sidecar0", "p", "v");
        sidecar.env_vars = vec![env("envar.name3", "envar.value3")];

        assert_eq!(render_plain(&[sidecar.clone()], |c| c.image.clone()), "image");
        assert_eq!(render_plain_env_vars(&[sidecar]), "envar.name3=envar.value3");
    }

    #[test]
    fn test_stashes() {
        let resources = vec![
            StepResource {
                name: "buildDescriptor".to_string(),
                resource_type: "stash".to_string(),
                description: String::new(),
            },
            StepResource {
                name: "commonPipelineEnvironment".to_string(),
                resource_type: "piperEnvironment".to_string(),
                description: String::new(),
            },
            StepResource {
                name: "tests".to_string(),
                resource_type: "stash".to_string(),
                description: String::new(),
            },
        ];

        assert_eq!(render_stashes(&resources), "buildDescriptor, tests");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(None), "<nil>");
        assert_eq!(format_value(Some(&Value::Null)), "<nil>");
        assert_eq!(format_value(Some(&Value::Bool(false))), "false");
        assert_eq!(format_value(Some(&Value::String("val0".into()))), "val0");

        let seq: Value = serde_yaml::from_str("[a, 1, true]").unwrap();
        assert_eq!(format_value(Some(&seq)), "[a 1 true]");

        let whole: Value = serde_yaml::from_str("1.0").unwrap();
        assert_eq!(format_value(Some(&whole)), "1");
        let fraction: Value = serde_yaml::from_str("2.5").unwrap();
        assert_eq!(format_value(Some(&fraction)), "2.5");
        let int: Value = serde_yaml::from_str("42").unwrap();
        assert_eq!(format_value(Some(&int)), "42");

        let map: Value = serde_yaml::from_str("{key: value}").unwrap();
        assert_eq!(format_value(Some(&map)), "map[key:value]");
    }
}
