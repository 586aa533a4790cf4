use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable report to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => {
            let value = serde_json::to_value(value)?;
            Ok(render_text(&value))
        }
    }
}

/// Print a serializable report in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            entries
                .into_iter()
                .map(|(key, value)| format!("{key}: {}", value_to_cell(value)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Value::Array(items) => {
            if items.is_empty() {
                String::from("(empty)")
            } else {
                items
                    .iter()
                    .map(|item| format!("- {}", value_to_cell(item)))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        scalar => value_to_cell(scalar),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
        missing: Option<u32>,
    }

    fn example() -> Example {
        Example {
            id: "svc",
            value: 5000,
            missing: None,
        }
    }

    #[test]
    fn text_renders_sorted_key_value_lines() {
        let rendered = render(&example(), OutputFormat::Text).unwrap();
        assert_eq!(rendered, "id: svc\nmissing: null\nvalue: 5000");
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&example(), OutputFormat::Json).unwrap();
        assert!(rendered.contains("\n"));
        assert!(rendered.contains("\"value\": 5000"));
    }

    #[test]
    fn raw_is_compact() {
        let rendered = render(&example(), OutputFormat::Raw).unwrap();
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn text_renders_arrays_item_per_line() {
        let rendered = render(&vec!["a", "b"], OutputFormat::Text).unwrap();
        assert_eq!(rendered, "- a\n- b");
    }

    #[test]
    fn text_renders_empty_array_placeholder() {
        let rendered = render(&Vec::<String>::new(), OutputFormat::Text).unwrap();
        assert_eq!(rendered, "(empty)");
    }
}
