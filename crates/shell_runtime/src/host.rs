//! Host service bundle for shell side effects.

use std::rc::Rc;

use platform_host::DocumentEffects;
use platform_host_web::{document_effects, host_strategy_name};

use crate::config::ShellConfig;

#[derive(Clone)]
/// Injected host capabilities used by the shell effect pass.
pub struct ShellHostContext {
    document: Rc<dyn DocumentEffects>,
    host_strategy_name: &'static str,
}

impl Default for ShellHostContext {
    fn default() -> Self {
        Self::for_config(&ShellConfig::default())
    }
}

impl ShellHostContext {
    /// Builds the host bundle for the compile-time selected host strategy.
    pub fn for_config(config: &ShellConfig) -> Self {
        Self {
            document: Rc::new(document_effects(&config.dark_mode_class)),
            host_strategy_name: host_strategy_name(),
        }
    }

    /// Builds a host bundle around an explicit document adapter.
    pub fn with_document(document: Rc<dyn DocumentEffects>) -> Self {
        Self {
            document,
            host_strategy_name: "injected",
        }
    }

    /// Returns the configured document adapter.
    pub fn document(&self) -> Rc<dyn DocumentEffects> {
        self.document.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }
}

#[cfg(test)]
mod tests {
    use platform_host::RecordingDocumentEffects;

    use super::*;

    #[test]
    fn config_host_reports_selected_strategy() {
        let host = ShellHostContext::for_config(&ShellConfig::default());
        assert_eq!(host.host_strategy_name(), host_strategy_name());
    }

    #[test]
    fn injected_document_receives_writes() {
        let document = RecordingDocumentEffects::default();
        let host = ShellHostContext::with_document(Rc::new(document.clone()));
        assert_eq!(host.host_strategy_name(), "injected");

        host.document().set_dark_mode(true).expect("dark");
        assert!(document.dark_mode());
    }
}
