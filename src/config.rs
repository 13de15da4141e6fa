//! INI-style configuration: `[Section]` headers, `key = value` pairs and `#`
//! comments. Keys before the first section are globals.
use std::collections::HashMap;
use std::fs;
use std::str::FromStr;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FACECAP_CONFIG";
/// Files tried, in order, when the environment variable is unset.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["facecap.conf", "facecap_default.conf"];

#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// Returns a message naming the path if the file cannot be read.
    pub fn load(path: &str) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Error reading file {path}: {e}"))?;
        Ok(Self::parse(&content))
    }

    /// Resolves the config the library runs with: `$FACECAP_CONFIG`, then the
    /// default file names in the working directory, then an empty config.
    #[must_use]
    pub fn discover() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && let Ok(cfg) = Self::load(&path)
        {
            return cfg;
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .find_map(|p| Self::load(p).ok())
            .unwrap_or_else(Self::empty)
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = Some(line[1..line.len() - 1].trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Self { globals, sections }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// Parses `[section] key` (or the global `key`) as `T`, falling back to
    /// `default` when missing or malformed.
    #[must_use]
    pub fn get_parsed_or<T: FromStr>(&self, section: &str, key: &str, default: T) -> T {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Parses a `true`/`false`/`1`/`0`/`yes`/`no`/`on`/`off` flag.
    #[must_use]
    pub fn get_bool_or(&self, section: &str, key: &str, default: bool) -> bool {
        match self
            .get_non_empty(section, key)
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("true" | "1" | "yes" | "on") => true,
            Some("false" | "0" | "no" | "off") => false,
            _ => default,
        }
    }

    /// Parses a comma separated list such as `0, 0, 255`.
    ///
    /// Returns `None` if the key is missing or any element fails to parse.
    #[must_use]
    pub fn get_list<T: FromStr>(&self, section: &str, key: &str) -> Option<Vec<T>> {
        self.get_non_empty(section, key)?
            .split(',')
            .map(|s| s.trim().parse().ok())
            .collect()
    }
}
