// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::lexer::LexMode;
use crate::parser::Parser;
use crate::scope::Scope;
use crate::XxmlError;

mod access;
mod helpers;

/// Knobs for turning settings text into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub lex_mode: LexMode,
}

impl LoadOptions {
    pub fn strict() -> Self {
        LoadOptions { lex_mode: LexMode::Strict }
    }
}

/// A loaded settings document: the parsed root scope plus the text it came from.
///
/// Every load lexes and parses from scratch; nothing is cached between loads.
#[derive(Debug, Clone)]
pub struct XxmlConfig {
    root: Scope,
    raw_content: String, // kept for error reporting
    path: Option<PathBuf>,
}

impl XxmlConfig {
    /// Parse settings from a string with default (lenient) options.
    pub fn from_str(content: &str) -> Result<Self, XxmlError> {
        Self::from_str_with(content, &LoadOptions::default())
    }

    pub fn from_str_with(content: &str, options: &LoadOptions) -> Result<Self, XxmlError> {
        let root = Parser::from_source(content, options.lex_mode)?.parse()?;
        Ok(Self {
            root,
            raw_content: content.to_string(),
            path: None,
        })
    }

    /// Load a settings file.
    ///
    /// # Example
    /// ```ignore
    /// let config = XxmlConfig::from_file("~/.invasion/EngineSettings.xxml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, XxmlError> {
        Self::from_file_with(path, &LoadOptions::default())
    }

    /// Load a settings file. A leading `~/` is expanded to the home directory.
    pub fn from_file_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, XxmlError> {
        let resolved = helpers::expand_home(path.as_ref())?;
        tracing::debug!(path = %resolved.display(), mode = ?options.lex_mode, "loading settings file");

        let content = fs::read_to_string(&resolved).map_err(|e| {
            XxmlError::file_error(
                format!("Failed to read file: {}", e),
                resolved.to_string_lossy().to_string(),
                301,
            )
        })?;

        let mut config = Self::from_str_with(&content, options)?;
        config.path = Some(resolved);
        Ok(config)
    }

    /// Load from `primary`, falling back to `fallback` if the primary cannot be read.
    ///
    /// Only file errors trigger the fallback; a primary that exists but fails to
    /// parse is reported as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, XxmlError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(XxmlError::FileError { message: primary_message, .. }) => {
                tracing::warn!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary settings file unavailable, using fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    XxmlError::FileError { message, .. } => XxmlError::FileError {
                        message: format!(
                            "Failed to load settings from primary path '{}' ({}) or fallback path '{}' ({})",
                            primary.as_ref().display(),
                            primary_message,
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the settings files exists".into()),
                        code: Some(302),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    pub fn root(&self) -> &Scope {
        &self.root
    }

    pub fn into_root(self) -> Scope {
        self.root
    }

    /// The text the tree was parsed from.
    pub fn source(&self) -> &str {
        &self.raw_content
    }

    /// The file the settings were loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
