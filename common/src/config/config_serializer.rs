use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn describe_yaml_error(action: &str, e: &serde_yaml_ng::Error) -> String {
    match e.location() {
        Some(location) => format!(
            "Failed to {} config at line {}, column {}: {}",
            action,
            location.line(),
            location.column(),
            e
        ),
        None => format!("Failed to {} config: {}", action, e),
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| describe_yaml_error("serialize", &e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| describe_yaml_error("parse", &e))
    }
}
