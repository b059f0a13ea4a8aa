//! `{{ name }}` placeholder templates for Statements of Work.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Values substituted into a SOW template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SowContext {
    pub customer_name: String,
    pub project_name: String,
    pub contractor_name: String,
    pub contractor_poc_name: String,
    pub contractor_poc_email: String,
    pub google_poc_name: String,
    pub google_poc_email: String,
    pub sow_end_date: String,
    pub max_total_cost: String,
    pub special_terms: String,

    /// Additional template variables
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SowContext {
    /// Create a context for a customer project with default terms.
    pub fn new(customer_name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Parse a context from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a context from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a template variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "customer_name" => &self.customer_name,
            "project_name" => &self.project_name,
            "contractor_name" => &self.contractor_name,
            "contractor_poc_name" => &self.contractor_poc_name,
            "contractor_poc_email" => &self.contractor_poc_email,
            "google_poc_name" => &self.google_poc_name,
            "google_poc_email" => &self.google_poc_email,
            "sow_end_date" => &self.sow_end_date,
            "max_total_cost" => &self.max_total_cost,
            "special_terms" => &self.special_terms,
            other => return self.extra.get(other).map(String::as_str),
        };
        Some(value.as_str())
    }
}

impl Default for SowContext {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            project_name: String::new(),
            contractor_name: "Capgemini".to_string(),
            contractor_poc_name: String::new(),
            contractor_poc_email: String::new(),
            google_poc_name: String::new(),
            google_poc_email: String::new(),
            sow_end_date: "December 31, 2025".to_string(),
            max_total_cost: String::new(),
            special_terms: "N/A".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

/// How unknown placeholders are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail with [`Error::MissingVariable`]
    #[default]
    Strict,
    /// Substitute empty text and log a warning
    Lenient,
}

/// A markdown template with `{{ name }}` placeholders.
#[derive(Debug, Clone)]
pub struct SowTemplate {
    source: String,
    placeholder: Regex,
}

impl SowTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            placeholder: Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap(),
        }
    }

    /// Load a template from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// Template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in self.placeholder.captures_iter(&self.source) {
            if !names.iter().any(|n| n == &caps[1]) {
                names.push(caps[1].to_string());
            }
        }
        names
    }

    /// Substitute context values into the template.
    pub fn render(&self, context: &SowContext, mode: ErrorMode) -> Result<String> {
        let mut missing: Vec<String> = Vec::new();
        let rendered = self
            .placeholder
            .replace_all(&self.source, |caps: &Captures| match context.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => {
                    missing.push(caps[1].to_string());
                    String::new()
                }
            })
            .into_owned();

        match (mode, missing.first()) {
            (_, None) => Ok(rendered),
            (ErrorMode::Strict, Some(name)) => Err(Error::MissingVariable(name.clone())),
            (ErrorMode::Lenient, Some(_)) => {
                for name in &missing {
                    log::warn!(
                        "Template variable '{}' has no value, substituting empty text",
                        name
                    );
                }
                Ok(rendered)
            }
        }
    }
}
