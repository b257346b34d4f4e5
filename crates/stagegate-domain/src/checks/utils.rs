use crate::outcome::Outcome;
use serde::Serialize;
use serde_json::{Map, Value, json};
use stagegate_types::ids;

/// Build the conventional outcome for an issue list.
///
/// `area` is the human label ("Code quality"); `echo` entries are added to details after
/// `issues`.
pub fn issues_outcome(
    name: &str,
    area: &str,
    issues: Vec<String>,
    echo: impl IntoIterator<Item = (&'static str, Value)>,
) -> Outcome {
    let passed = issues.is_empty();
    let message = if passed {
        format!("{area} checks passed")
    } else {
        format!("{area} issues found: {}", issues.join(", "))
    };

    let mut details = Map::new();
    details.insert(ids::DETAIL_ISSUES.to_string(), json!(issues));
    for (key, value) in echo {
        details.insert(key.to_string(), value);
    }

    Outcome::new(name, passed, message, Value::Object(details))
}

/// Serialize a config struct for metadata; falls back to `null`.
pub fn parameters_of<T: Serialize>(config: &T) -> Value {
    serde_json::to_value(config).unwrap_or_default()
}
