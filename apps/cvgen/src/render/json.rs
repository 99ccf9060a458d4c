use serde::Serialize;

use crate::errors::AppError;
use crate::models::Record;
use crate::render::{Format, RenderContext, Renderer, RENDERER_VERSION};

#[derive(Debug, Serialize)]
struct Metadata {
    generated_at: String,
    renderer_version: &'static str,
    format: &'static str,
}

/// The record fields first (declaration order), then `metadata`.
#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    record: &'a Record,
    metadata: Metadata,
}

/// Pretty-printed JSON (2-space indent, non-ASCII kept as-is).
///
/// The only renderer that round-trips: `Record::from_json` on the output
/// yields the original record.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn format(&self) -> Format {
        Format::Json
    }

    fn render(&self, record: &Record, ctx: &RenderContext) -> Result<String, AppError> {
        record.check_required()?;
        let doc = JsonDocument {
            record,
            metadata: Metadata {
                generated_at: ctx.generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                renderer_version: RENDERER_VERSION,
                format: "cvgen-record",
            },
        };
        let mut out = serde_json::to_string_pretty(&doc).map_err(|e| AppError::Render {
            format: Format::Json.name(),
            message: e.to_string(),
        })?;
        out.push('\n');
        Ok(out)
    }
}
