//! Rendering lookup results for the terminal

use anyhow::Result;
use plugin_demo::Value;
use plugin_demo_config::{OutputConfig, OutputFormat};
use serde::Serialize;

/// Render a lookup result; `None` is the absence marker
pub fn render(value: Option<&Value>, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(value)),
        _ => render_structured(&value, output),
    }
}

/// Render any serializable listing in a structured format
pub fn render_structured<T: Serialize + ?Sized>(value: &T, output: &OutputConfig) -> Result<String> {
    let rendered = match output.format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
        _ if output.pretty => serde_json::to_string_pretty(value)?,
        _ => serde_json::to_string(value)?,
    };
    Ok(rendered)
}

fn render_text(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "<none>".to_string();
    };

    match value {
        Value::String(s) => s.clone(),
        Value::Map(map) => map
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Timestamp(record) if record.message.is_empty() => record.time.to_rfc3339(),
        Value::Timestamp(record) => format!("{} {}", record.time.to_rfc3339(), record.message),
        Value::File(content) => content.as_text().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use plugin_demo::{EnvironmentMap, FileContent, TimestampRecord};

    use super::*;

    fn output(format: OutputFormat) -> OutputConfig {
        OutputConfig {
            format,
            pretty: false,
        }
    }

    #[test]
    fn test_absence_rendering() {
        assert_eq!(render(None, &output(OutputFormat::Json)).unwrap(), "null");
        assert_eq!(render(None, &output(OutputFormat::Yaml)).unwrap(), "null");
        assert_eq!(render(None, &output(OutputFormat::Text)).unwrap(), "<none>");
    }

    #[test]
    fn test_map_rendering() {
        let mut env = EnvironmentMap::new();
        env.insert("A".to_string(), "1".to_string());
        env.insert("B".to_string(), "x=y".to_string());
        let value = Value::Map(env);

        assert_eq!(
            render(Some(&value), &output(OutputFormat::Json)).unwrap(),
            r#"{"A":"1","B":"x=y"}"#
        );
        assert_eq!(
            render(Some(&value), &output(OutputFormat::Text)).unwrap(),
            "A=1\nB=x=y"
        );
    }

    #[test]
    fn test_timestamp_text_rendering() {
        let record = TimestampRecord::now("Test message");
        let text = render(Some(&Value::Timestamp(record.clone())), &output(OutputFormat::Text)).unwrap();
        assert!(text.ends_with(" Test message"));
        assert!(text.starts_with(&record.time.to_rfc3339()));

        let record = TimestampRecord::unlabeled();
        let text = render(Some(&Value::Timestamp(record.clone())), &output(OutputFormat::Text)).unwrap();
        assert_eq!(text, record.time.to_rfc3339());
    }

    #[test]
    fn test_file_rendering() {
        let value = Value::File(FileContent::new(b"line one\nline two".to_vec()));
        assert_eq!(
            render(Some(&value), &output(OutputFormat::Text)).unwrap(),
            "line one\nline two"
        );
        assert_eq!(
            render(Some(&value), &output(OutputFormat::Json)).unwrap(),
            r#""line one\nline two""#
        );
    }
}
