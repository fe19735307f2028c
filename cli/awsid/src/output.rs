//! Output formatting for CLI commands.

use colored::Colorize;
use serde_json::Value;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value lines.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Print a JSON object in the specified format.
///
/// In text format each top-level field becomes one `key: value` line; array
/// values are printed one element per line.
pub fn print_object(data: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_text(data)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Renders a JSON object as aligned `key: value` lines.
pub fn render_text(data: &Value) -> String {
    let Some(map) = data.as_object() else {
        return format!("{}\n", scalar(data));
    };

    let width = map.keys().map(String::len).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in map {
        let label = format!("{:width$}", format!("{}:", key), width = width + 1);
        match value {
            Value::Array(items) => {
                out.push_str(&format!("{}\n", label.bold()));
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("  [{}] {}\n", i, scalar(item)));
                }
            }
            _ => out.push_str(&format!("{} {}\n", label.bold(), scalar(value))),
        }
    }
    out
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "-".dimmed().to_string(),
        Value::String(s) if s.is_empty() => "\"\"".dimmed().to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "OK:".green().bold(), message);
}

/// Print a failure line without aborting.
pub fn print_failure(message: &str) {
    eprintln!("{} {}", "FAIL:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_text_lists_arrays() {
        colored::control::set_override(false);
        let rendered = render_text(&json!({
            "service": "s3",
            "region": null,
            "resource": ["a", ""],
        }));
        assert!(rendered.contains("service:  s3"));
        assert!(rendered.contains("region:   -"));
        assert!(rendered.contains("  [0] a"));
        assert!(rendered.contains("  [1] \"\""));
    }

    #[test]
    fn test_render_text_scalar() {
        colored::control::set_override(false);
        assert_eq!(render_text(&json!("us-east-1")), "us-east-1\n");
    }
}
