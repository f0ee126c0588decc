//! Assembly of the documentation context from step metadata

use crate::core::context::{DocKey, DocuContext};
use crate::core::metadata::{Scope, StepData, StepParameter};
use crate::generation::fields::{self, format_value};

/// Build the complete context: default substitutions plus computed sections
pub fn build_context(step: &StepData) -> DocuContext {
    let mut ctx = default_context(step);
    ctx.extend(computed_context(step));
    ctx
}

/// Simple substitutions derived from containers, sidecars and stashes
pub fn default_context(step: &StepData) -> DocuContext {
    let mut ctx = DocuContext::new();
    add_container_content(step, &mut ctx);
    add_sidecar_content(step, &mut ctx);
    add_stash_content(step, &mut ctx);
    ctx
}

/// Step name, description, parameter and configuration sections
pub fn computed_context(step: &StepData) -> DocuContext {
    let mut ctx = DocuContext::new();
    ctx.set(DocKey::DocGenStepName, step.name());
    ctx.set(DocKey::DocGenDescription, description_section(step));
    ctx.set(DocKey::DocGenParameters, parameters_section(step.parameters()));
    ctx.set(DocKey::DocGenConfiguration, configuration_section(step.parameters()));
    ctx
}

pub fn add_container_content(step: &StepData, ctx: &mut DocuContext) {
    let containers = step.containers();
    if containers.is_empty() {
        return;
    }

    ctx.set(DocKey::DockerName, fields::render_names(containers));
    ctx.set(DocKey::DockerImage, fields::render_guarded(containers, |c| c.image.clone()));
    ctx.set(
        DocKey::DockerWorkspace,
        fields::render_guarded(containers, |c| c.working_dir.clone()),
    );
    ctx.set(DocKey::ContainerShell, fields::render_guarded(containers, |c| c.shell.clone()));
    ctx.set(
        DocKey::ContainerCommand,
        fields::render_guarded(containers, fields::render_command),
    );
    ctx.set(DocKey::DockerEnvVars, fields::render_env_vars(containers));
    if let Some(pull) = fields::render_pull_policy(containers) {
        ctx.set(DocKey::DockerPullImage, pull);
    }
}

pub fn add_sidecar_content(step: &StepData, ctx: &mut DocuContext) {
    let sidecars = step.sidecars();
    if sidecars.is_empty() {
        return;
    }

    ctx.set(DocKey::SidecarName, fields::render_plain(sidecars, |c| c.name.clone()));
    ctx.set(DocKey::SidecarImage, fields::render_plain(sidecars, |c| c.image.clone()));
    ctx.set(
        DocKey::SidecarWorkspace,
        fields::render_plain(sidecars, |c| c.working_dir.clone()),
    );
    ctx.set(
        DocKey::SidecarCommand,
        fields::render_plain(sidecars, fields::render_command),
    );
    ctx.set(
        DocKey::SidecarReadyCommand,
        fields::render_plain(sidecars, |c| c.ready_command.clone()),
    );
    ctx.set(DocKey::SidecarEnvVars, fields::render_plain_env_vars(sidecars));
    if let Some(pull) = fields::render_pull_policy(sidecars) {
        ctx.set(DocKey::SidecarPullImage, pull);
    }
}

pub fn add_stash_content(step: &StepData, ctx: &mut DocuContext) {
    let stashes = fields::render_stashes(step.resources());
    if !stashes.is_empty() {
        ctx.set(DocKey::StashContent, stashes);
    }
}

fn description_section(step: &StepData) -> String {
    let text = if step.metadata.long_description.is_empty() {
        &step.metadata.description
    } else {
        &step.metadata.long_description
    };
    format!("Description \n\n{}", text)
}

/// Parameter overview table followed by per-parameter details
pub fn parameters_section(params: &[StepParameter]) -> String {
    let mut section = String::from("Parameters\n\n");
    section.push_str("| name | mandatory | default |\n");
    section.push_str("| ---- | --------- | ------- |\n");
    for param in params {
        section.push_str(&format!(
            " | {} | {} | {} | \n ",
            param.name,
            if param.is_required() { "Yes" } else { "No" },
            format_value(param.default.as_ref())
        ));
    }

    section.push_str("## Details\n");
    for param in params {
        section.push_str(&format!(" * ` {} ` :  {} \n ", param.name, param.description));
    }
    section
}

/// Table showing in which config.yml sections a parameter can be set
pub fn configuration_section(params: &[StepParameter]) -> String {
    let mut section = String::from(
        "We recommend to define values of step parameters via [config.yml file](../configuration.md). \n\n",
    );
    section.push_str("In following sections of the config.yml the configuration is possible:\n\n");
    section.push_str("| parameter | general | step/stage |\n");
    section.push_str("|-----------|---------|------------|\n");
    for param in params {
        let general = param.has_scope(Scope::General);
        let step_stage = param.has_scope(Scope::Steps) || param.has_scope(Scope::Stages);
        section.push_str(&format!(
            " | {} | {} | {} | \n ",
            param.name,
            mark(general),
            mark(step_stage)
        ));
    }
    section
}

fn mark(set: bool) -> &'static str {
    if set {
        "X"
    } else {
        ""
    }
}
