//! JSON and YAML encoding of raw records.
//!
//! Records are written exactly as received: no derived fields, no NaN
//! sanitizing. `serde_json` writes NaN as `null`; `serde_yaml` writes `.nan`.

use std::io::Write;

use serde::Serialize;

use crate::options::OutputMode;
use crate::Result;

/// Pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let mut buf = serde_json::to_vec_pretty(value)?;
    buf.push(b'\n');
    out.write_all(&buf)?;
    Ok(())
}

pub fn write_yaml<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let buf = serde_yaml::to_string(value)?;
    out.write_all(buf.as_bytes())?;
    Ok(())
}

/// Encode with the given structured mode. `Table` is not a structured mode
/// and writes nothing.
pub fn write_structured<T: Serialize + ?Sized, W: Write>(
    mode: OutputMode,
    value: &T,
    out: &mut W,
) -> Result<()> {
    match mode {
        OutputMode::Json => write_json(value, out),
        OutputMode::Yaml => write_yaml(value, out),
        OutputMode::Table => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ResourceSummary;

    fn render<T: Serialize>(mode: OutputMode, value: &T) -> String {
        let mut out = Vec::new();
        write_structured(mode, value, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_is_pretty_with_trailing_newline() {
        let json = render(OutputMode::Json, &vec![ResourceSummary::new("n1")]);
        assert!(json.starts_with("[\n"));
        assert!(json.ends_with("]\n"));
        assert!(json.contains("\"cpu_percent\": 0.0"));
    }

    #[test]
    fn test_nan_survives_as_native_marker() {
        let summary = ResourceSummary {
            cpu_percent: f64::NAN,
            ..ResourceSummary::new("n1")
        };

        let json = render(OutputMode::Json, &vec![summary.clone()]);
        assert!(json.contains("\"cpu_percent\": null"), "{json}");

        let yaml = render(OutputMode::Yaml, &vec![summary]);
        assert!(yaml.contains("cpu_percent: .nan"), "{yaml}");
    }

    #[test]
    fn test_table_mode_writes_nothing() {
        assert!(render(OutputMode::Table, &vec![ResourceSummary::new("n1")]).is_empty());
    }
}
