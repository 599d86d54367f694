use anyhow::{Result, bail};

use super::GeneratorConfig;

pub fn validate(cfg: &GeneratorConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.connect_timeout_secs == 0 {
        errors.push("database.connect_timeout_secs must be > 0".to_string());
    }

    if cfg.generate.schema.as_deref().is_some_and(|schema| schema.trim().is_empty()) {
        errors.push("generate.schema must not be empty".to_string());
    }

    if !is_go_identifier(&cfg.generate.package) {
        errors.push(format!(
            "generate.package ('{}') must be a valid Go package name",
            cfg.generate.package
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid generator config:\n- {}", errors.join("\n- "))
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::GeneratorConfig;

    #[test]
    fn default_config_is_valid() {
        validate(&GeneratorConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn collects_every_problem() {
        let mut cfg = GeneratorConfig::default();
        cfg.database.url = " ".to_string();
        cfg.generate.schema = Some(String::new());
        cfg.generate.package = "9model".to_string();

        let message = validate(&cfg).expect_err("config should fail").to_string();

        assert!(message.contains("database.url must not be empty"));
        assert!(message.contains("generate.schema must not be empty"));
        assert!(message.contains("generate.package ('9model')"));
    }
}
