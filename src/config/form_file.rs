use crate::domain::model::FormData;
use crate::pages::CalculatorKind;
use crate::utils::error::{CalcError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Saved calculator inputs.
///
/// ```toml
/// page = "reliability"
///
/// [fields]
/// pl110Q = 2
/// ed038Q = "${ED038_COUNT}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormFile {
    pub page: Option<CalculatorKind>,
    #[serde(default)]
    pub fields: toml::Table,
}

impl FormFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let mut missing = None;
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                if missing.is_none() {
                    missing = Some(var_name.to_string());
                }
                String::new()
            })
        });

        match missing {
            Some(var_name) => Err(CalcError::ConfigError {
                message: format!("environment variable {} is not set", var_name),
            }),
            None => Ok(result.into_owned()),
        }
    }

    /// Field values as the browser would send them: every value is text.
    pub fn form_data(&self) -> Result<FormData> {
        let mut form = FormData::new();
        for (name, value) in &self.fields {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(CalcError::InvalidConfigValueError {
                        field: format!("fields.{}", name),
                        value: other.to_string(),
                        reason: "Field values must be strings, numbers or booleans".to_string(),
                    })
                }
            };
            form.append(name.clone(), text);
        }
        Ok(form)
    }
}
