use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://longcat-openai-api.onrender.com/v1";
pub const DEFAULT_API_KEY: &str = "pikachu@#25D";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Settings for talking to the model endpoint and writing exports.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub export_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: Some(DEFAULT_API_KEY.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            export_dir: crate::export::default_export_dir(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base = get("GENIFY_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let temperature = match get("GENIFY_TEMPERATURE") {
            Some(raw) => raw.parse::<f32>().unwrap_or_else(|_| {
                tracing::warn!("ignoring invalid GENIFY_TEMPERATURE value {raw:?}");
                DEFAULT_TEMPERATURE
            }),
            None => DEFAULT_TEMPERATURE,
        };

        Self {
            api_base,
            api_key: get("GENIFY_API_KEY").or_else(|| Some(DEFAULT_API_KEY.to_string())),
            temperature,
            export_dir: get("GENIFY_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(crate::export::default_export_dir),
        }
    }

    pub fn models_url(&self) -> String {
        format!("{}/models", self.api_base)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

/// `KEY=value` pairs from an env file. Comments, blank lines and lines
/// without `=` are skipped; one layer of matching quotes is removed.
pub fn parse_env_file(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
