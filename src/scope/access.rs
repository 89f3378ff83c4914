use super::*;

impl Scope {
    /// Get a typed value using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use xxml_cfg::{parser, Value};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let root = parser::parse_str("[<Window> <Title = \"Invasion\"> Size = [750, 450] ]")?;
    /// let title: String = root.get("Window.Title")?;
    /// let size: Vec<Value> = root.get("Window.Size")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// [`XxmlError::PathNotFound`] if the path does not resolve, and
    /// [`XxmlError::TypeMismatch`] if it resolves to a different kind of value.
    pub fn get<T: FromValue>(&self, path: &str) -> Result<T, XxmlError> {
        let resolved = self
            .lookup(path)
            .ok_or_else(|| XxmlError::path_not_found(path))?;

        T::from_value(resolved.to_value()).map_err(|e| e.at_path(path))
    }

    /// Like [`Scope::get`], but a missing path is `Ok(None)`. Type mismatches
    /// are still reported.
    pub fn get_optional<T: FromValue>(&self, path: &str) -> Result<Option<T>, XxmlError> {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(XxmlError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T: FromValue>(&self, path: &str, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    /// Names directly inside this scope: namespaces first, then variables.
    pub fn keys(&self) -> Vec<&str> {
        self.namespaces
            .keys()
            .chain(self.variables.keys())
            .map(String::as_str)
            .collect()
    }

    /// Names directly inside the scope at `path`, which may be a namespace or an object.
    /// An empty path lists this scope.
    pub fn keys_at(&self, path: &str) -> Result<Vec<String>, XxmlError> {
        if path.is_empty() {
            return Ok(self.keys().into_iter().map(str::to_string).collect());
        }

        let resolved = self
            .lookup(path)
            .ok_or_else(|| XxmlError::path_not_found(path))?;

        match resolved {
            Resolved::Namespace(scope) | Resolved::Value(Value::Scope(scope)) => {
                Ok(scope.keys().into_iter().map(str::to_string).collect())
            }
            Resolved::Value(other) => Err(XxmlError::mismatch("scope", other.type_name(), 406)
                .with_hint("Only namespaces and objects have keys")
                .at_path(path)),
        }
    }
}
