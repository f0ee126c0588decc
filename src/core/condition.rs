//! Container guard model

use crate::core::metadata::{Container, Param};

/// Whether a container configuration applies unconditionally or only
/// when its condition parameters match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Unconditioned,
    Conditioned(Vec<Param>),
}

impl Guard {
    /// Derive the guard from a container's declared conditions
    pub fn of(container: &Container) -> Self {
        let params: Vec<Param> = container
            .conditions
            .iter()
            .flat_map(|c| c.params.iter().cloned())
            .collect();

        if params.is_empty() {
            Guard::Unconditioned
        } else {
            Guard::Conditioned(params)
        }
    }

    pub fn is_conditioned(&self) -> bool {
        matches!(self, Guard::Conditioned(_))
    }

    /// Render as `name=value` pairs, or `None` when unconditioned
    pub fn label(&self) -> Option<String> {
        match self {
            Guard::Unconditioned => None,
            Guard::Conditioned(params) => Some(
                params
                    .iter()
                    .map(|p| format!("{}={}", p.name, p.value))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
