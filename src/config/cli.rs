use crate::config::form_file::FormFile;
use crate::domain::model::FormData;
use crate::domain::ports::ConfigProvider;
use crate::pages::CalculatorKind;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_path, validate_required_fields, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kpi-calc")]
#[command(about = "Submit an engineering-formula lab calculator and print its results panel")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    #[arg(long, value_enum, help = "Calculator page; may come from --form-file instead")]
    pub page: Option<CalculatorKind>,

    #[arg(
        long = "field",
        value_name = "NAME=VALUE",
        value_parser = parse_field,
        help = "Form input, repeatable; overrides --form-file"
    )]
    pub fields: Vec<(String, String)>,

    #[arg(long, help = "TOML file with saved form inputs")]
    pub form_file: Option<String>,

    #[arg(long, help = "Also write the results panel to this file")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

fn parse_field(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

/// What the CLI will submit once the form file and flags are merged.
#[derive(Debug, Clone)]
pub struct ResolvedForm {
    pub kind: CalculatorKind,
    pub form: FormData,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedForm> {
        let form_file = match &self.form_file {
            Some(path) => Some(FormFile::from_file(path)?),
            None => None,
        };

        let kind = self
            .page
            .or_else(|| form_file.as_ref().and_then(|f| f.page))
            .ok_or_else(|| CalcError::MissingConfigError {
                field: "page".to_string(),
            })?;

        let mut form = match &form_file {
            Some(file) => file.form_data()?,
            None => FormData::new(),
        };
        for (name, value) in &self.fields {
            form.set(name.clone(), value.clone());
        }

        validate_required_fields(&form, kind.required_fields())?;
        tracing::debug!("Resolved {} fields for {:?}", form.len(), kind);

        Ok(ResolvedForm { kind, form })
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
