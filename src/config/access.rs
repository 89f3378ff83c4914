use super::*;
use crate::scope::FromValue;

impl XxmlConfig {
    /// Check if a settings path exists.
    ///
    /// # Examples
    /// ```no_run
    /// # use xxml_cfg::XxmlConfig;
    /// # let config = XxmlConfig::from_file("EngineSettings.xxml").unwrap();
    /// if config.exists("Invasion_Default.WindowProperties") {
    ///     println!("window properties configured");
    /// }
    /// ```
    pub fn exists(&self, path: &str) -> bool {
        self.root.exists(path)
    }

    /// Get a typed value using dot notation.
    ///
    /// Type mismatches point at the line that declared the key when it can be found.
    ///
    /// # Examples
    /// ```no_run
    /// # use xxml_cfg::{Value, XxmlConfig};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = XxmlConfig::from_file("EngineSettings.xxml")?;
    /// let id: String = config.get("GameID")?;
    /// let dims: Vec<Value> = config.get("Invasion_Default.WindowProperties.Dimensions")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get<T: FromValue>(&self, path: &str) -> Result<T, XxmlError> {
        self.root
            .get(path)
            .map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T: FromValue>(&self, path: &str) -> Result<Option<T>, XxmlError> {
        self.root
            .get_optional(path)
            .map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get a value with a fallback default.
    pub fn get_or<T: FromValue>(&self, path: &str, default: T) -> T {
        self.root.get_or(path, default)
    }

    /// Names inside the namespace or object at `path`; `""` lists the root.
    pub fn keys(&self, path: &str) -> Result<Vec<String>, XxmlError> {
        self.root.keys_at(path)
    }
}

fn enhance_error_with_line_info(e: XxmlError, path: &str, raw_content: &str) -> XxmlError {
    match e {
        XxmlError::TypeMismatch { path: mismatch_path, expected, found, hint, code } => {
            let hint = match helpers::find_declaration_line(path, raw_content) {
                Some((line, snippet)) => Some(match hint {
                    Some(h) => format!("{}\n  → line {}: {}", h, line, snippet),
                    None => format!("line {}: {}", line, snippet),
                }),
                None => hint,
            };
            XxmlError::TypeMismatch { path: mismatch_path, expected, found, hint, code }
        }
        other => other,
    }
}
