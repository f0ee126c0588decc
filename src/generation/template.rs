//! Template adaptation and `${name}` substitution

use crate::core::context::{DocKey, DocuContext};
use regex::Regex;
use std::sync::OnceLock;

/// Marker for plugin dependencies; the generator has nothing to fill it with
const PLUGIN_DEPENDENCIES: &str = "docJenkinsPluginDependencies";

fn legacy_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let names = DocKey::COMPUTED
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\{{\{{\s*({})\s*\.?\s*\}}\}}", names))
            .expect("legacy placeholder pattern is valid")
    })
}

fn plugin_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?:#+ *)?(?:\$\{{{name}\}}|\{{\{{\s*{name}\s*\.?\s*\}}\}})",
            name = PLUGIN_DEPENDENCIES
        ))
        .expect("plugin marker pattern is valid")
    })
}

/// Normalize a raw template.
///
/// Legacy `{{docGenStepName .}}` style placeholders of the four computed
/// keys become `${docGenStepName}`; the plugin dependency marker is removed
/// together with its heading prefix. Everything else is left untouched.
pub fn adapt_template(raw: &str) -> String {
    let adapted = legacy_placeholder().replace_all(raw, "$${$1}");
    plugin_marker().replace_all(&adapted, "").into_owned()
}

/// Replace every `${key}` whose key is known and set in the context.
///
/// Unknown or unset placeholders are copied verbatim. Inserted values are
/// never scanned again.
pub fn substitute(template: &str, ctx: &DocuContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match name.parse::<DocKey>().ok().and_then(|key| ctx.get(key)) {
            Some(value) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                // keep the opener literal and rescan right after it
                out.push_str("${");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
