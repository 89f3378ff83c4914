// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for XXML lexing, parsing and lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum XxmlError {
    /// Raised by the parser on the first grammar violation. Nothing is returned
    /// from a parse that fails this way.
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Strict lexing only.
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Strict lexing only: a string literal ran to end of input.
    UnclosedString {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The path resolved, but to a different kind of value than requested.
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

fn code_suffix(code: &Option<u32>) -> String {
    code.map_or(String::new(), |c| format!(" Code: {}", c))
}

impl fmt::Display for XxmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XxmlError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[XXML] Syntax Error at {}:{}: {}{}{}",
                    line, column, message, hint_suffix(hint), code_suffix(code)
                ),
            XxmlError::UnexpectedCharacter { character, line, column, hint, code } =>
                write!(f, "[XXML] Unexpected character '{}' at {}:{}{}{}",
                    character.escape_debug(), line, column, hint_suffix(hint), code_suffix(code)
                ),
            XxmlError::UnclosedString { line, column, hint, code } =>
                write!(f, "[XXML] Unclosed string starting at {}:{}{}{}",
                    line, column, hint_suffix(hint), code_suffix(code)
                ),
            XxmlError::PathNotFound { path, hint, code } =>
                write!(f, "[XXML] Path '{}' not found{}{}",
                    path, hint_suffix(hint), code_suffix(code)
                ),
            XxmlError::TypeMismatch { path, expected, found, hint, code } =>
                write!(f, "[XXML] Type Error at '{}': expected {}, found {}{}{}",
                    path, expected, found, hint_suffix(hint), code_suffix(code)
                ),
            XxmlError::FileError { message, path, hint, code } =>
                write!(f, "[XXML] File Error '{}': {}{}{}",
                    path, message, hint_suffix(hint), code_suffix(code)
                ),
        }
    }
}

impl std::error::Error for XxmlError {}

impl XxmlError {
    pub(crate) fn path_not_found(path: &str) -> Self {
        XxmlError::PathNotFound {
            path: path.to_string(),
            hint: Some("Check that the path exists in your settings file".into()),
            code: Some(304),
        }
    }

    /// Mismatch raised during conversion, before the caller's path is known.
    /// [`XxmlError::at_path`] fills it in.
    pub(crate) fn mismatch(expected: &str, found: &str, code: u32) -> Self {
        XxmlError::TypeMismatch {
            path: String::new(),
            expected: expected.to_string(),
            found: found.to_string(),
            hint: None,
            code: Some(code),
        }
    }

    pub(crate) fn with_hint(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            XxmlError::SyntaxError { hint, .. }
            | XxmlError::UnexpectedCharacter { hint, .. }
            | XxmlError::UnclosedString { hint, .. }
            | XxmlError::PathNotFound { hint, .. }
            | XxmlError::TypeMismatch { hint, .. }
            | XxmlError::FileError { hint, .. } => *hint = Some(text.into()),
        }
        self
    }

    /// Prefix the path of a type mismatch with the lookup path that produced it.
    /// Array element mismatches already carry `[index]` and keep it as a suffix.
    pub(crate) fn at_path(self, lookup: &str) -> Self {
        match self {
            XxmlError::TypeMismatch { path, expected, found, hint, code } => XxmlError::TypeMismatch {
                path: format!("{}{}", lookup, path),
                expected,
                found,
                hint,
                code,
            },
            other => other,
        }
    }

    pub(crate) fn file_error(message: String, path: String, code: u32) -> Self {
        XxmlError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(code),
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, XxmlError::SyntaxError { .. })
    }

    pub fn is_path_not_found(&self) -> bool {
        matches!(self, XxmlError::PathNotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, XxmlError::TypeMismatch { .. })
    }
}
