use std::collections::HashMap;

/// Where configuration values are read from on each invocation.
pub trait SettingsSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SettingsSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl SettingsSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
