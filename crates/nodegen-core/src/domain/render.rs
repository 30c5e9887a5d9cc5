//! `{{VARIABLE}}` substitution for built-in templates.
//!
//! | Variable | Example |
//! |----------|---------|
//! | `PROJECT_NAME` | `generator-apiproxy` |
//! | `PROJECT_NAME_CAMEL` | `generatorApiproxy` |
//!
//! Callers add their own switches with [`RenderContext::with_variable`].

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME_CAMEL".to_string(), to_camel_case(&name));
        vars.insert("PROJECT_NAME".to_string(), name);

        Self { variables: vars }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every known `{{KEY}}`; unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let mut out = words.next().unwrap_or_default();
    out.extend(words.map(|w| capitalize(&w)));
    out
}

/// Lowercase words joined by `-`; used to turn a directory name into a
/// package name.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split on separators (`_`, `-`, `.`, `/`, `@`, whitespace), camelCase
/// transitions and acronym boundaries (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, '_' | '-' | '.' | '/' | '@') || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words
}
