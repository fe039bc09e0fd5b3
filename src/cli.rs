//! Minimal CLI: docgen JSON → (formatted types | props table text)
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use prop_type_fmt::{FormatOptions, FormattedType, FuncDocs, LexicalClassifier, PropTypeDisplay, TypeFormatter};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// format React prop type descriptors (react-docgen JSON) into captions and full types
#[derive(Parser, Debug)]
#[command(name = "prop-type-fmt", version)]
pub struct CommandLineInterface {
    /// log filter, e.g. `debug` or `prop_type_fmt=trace` (RUST_LOG wins when set)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// format bare type descriptors and print `{ name, caption, value }` as JSON
    Format(FormatOut),
    /// render every prop of docgen component documents the way a props table shows them
    Render(RenderOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /components/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct FormatSettings {
    /// JSON options file (`{ "maxCaptionLength": 35 }`)
    #[arg(long)]
    options: Option<PathBuf>,

    /// captions longer than this are elided (overrides the options file)
    #[arg(long)]
    max_caption_length: Option<usize>,
}

#[derive(clap::Parser, Debug)]
struct FormatOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    format_settings: FormatSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct RenderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    format_settings: FormatSettings,

    /// emit JSON rows instead of a text table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// react-docgen component document (only the parts we read).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentDoc {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    props: IndexMap<String, PropDoc>,
}

#[derive(Debug, Deserialize)]
struct PropDoc {
    #[serde(default, rename = "type")]
    type_: Option<Value>,
    #[serde(default)]
    docs: Option<FuncDocs>,
}

#[derive(Debug, Serialize)]
struct RenderedProp {
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<String>,
    prop: String,
    #[serde(flatten)]
    display: PropTypeDisplay,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// `(source label, selected document)` per input file, in input order.
    fn load(&self) -> Result<Vec<(String, Value)>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .map_err(|error| anyhow!("failed to resolve input file paths: {error}"))?;
        let mut documents = Vec::with_capacity(source_paths.len());
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read source file {source_path_str}"))?;
            let json_value = serde_json::from_str::<Value>(&source)
                .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;
            let selected = select(json_value, self.json_pointer.as_deref())
                .with_context(|| format!("in {source_path_str}"))?;
            tracing::debug!(source = %source_path_str, "loaded document");
            documents.push((source_path_str, selected));
        }
        Ok(documents)
    }
}

impl FormatSettings {
    fn options(&self) -> Result<FormatOptions> {
        let base = match self.options.as_ref() {
            Some(path) => FormatOptions::load(path)?,
            None => FormatOptions::default(),
        };
        Ok(base.with_max_caption_length(self.max_caption_length)?)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Format(target) => {
                let options = target.format_settings.options()?;
                let classifier = LexicalClassifier;
                let formatter = TypeFormatter::with_options(&classifier, options);
                let documents = target.input_settings.load()?;

                let formatted: Vec<FormattedType> = documents
                    .par_iter()
                    .map(|(_, document)| format_document(&formatter, document))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .flatten()
                    .collect();
                tracing::debug!(count = formatted.len(), "formatted descriptors");

                let src = serde_json::to_string_pretty(&formatted)?;
                write_output(target.out.as_deref(), &src)
            }
            Command::Render(target) => {
                let options = target.format_settings.options()?;
                let classifier = LexicalClassifier;
                let formatter = TypeFormatter::with_options(&classifier, options);
                let documents = target.input_settings.load()?;

                let rows = documents
                    .into_par_iter()
                    .map(|(source, document)| render_document(&formatter, &source, document))
                    .collect::<Result<Vec<_>>>()?
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>();
                tracing::debug!(count = rows.len(), "rendered props");

                let src = if target.json {
                    serde_json::to_string_pretty(&rows)?
                } else {
                    if target.out.is_some() {
                        colored::control::set_override(false);
                    }
                    text_table(&rows)
                };
                write_output(target.out.as_deref(), &src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// A document is one descriptor or a list of them.
fn format_document(formatter: &TypeFormatter<'_, LexicalClassifier>, document: &Value) -> Vec<FormattedType> {
    let no_docs: Option<FuncDocs> = None;
    match document {
        Value::Array(xs) => xs.iter().map(|x| formatter.format_json(x, &no_docs)).collect(),
        single => vec![formatter.format_json(single, &no_docs)],
    }
}

/// A document is one component or a list of them.
fn render_document(
    formatter: &TypeFormatter<'_, LexicalClassifier>,
    source: &str,
    document: Value,
) -> Result<Vec<RenderedProp>> {
    let components: Vec<ComponentDoc> = match document {
        Value::Array(_) => prop_type_fmt::path_de::from_value_with_path(document),
        single => prop_type_fmt::path_de::from_value_with_path(single).map(|c| vec![c]),
    }
    .map_err(|error| anyhow!("invalid component document {source}: {error}"))?;

    let mut rows = Vec::new();
    for component in components {
        for (prop, doc) in component.props {
            let Some(type_) = doc.type_ else {
                tracing::debug!(%prop, "prop has no type, skipping");
                continue;
            };
            if let Some(display) = formatter.render_json(&type_, &doc.docs) {
                rows.push(RenderedProp { component: component.display_name.clone(), prop, display });
            }
        }
    }
    Ok(rows)
}

fn text_table(rows: &[RenderedProp]) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for row in rows {
        let component = row.component.as_deref();
        if component != current {
            if let Some(name) = component {
                out.push_str(&format!("{}\n", name.bold()));
            }
            current = component;
        }
        out.push_str(&format!("  {}: {}", row.prop, row.display.text.cyan()));
        if let Some(title) = &row.display.title {
            out.push_str(&format!("  {}", format!("[{title}]").dimmed()));
        }
        out.push('\n');
    }
    out
}

fn select(document: Value, json_pointer: Option<&str>) -> Result<Value> {
    let Some(pointer) = json_pointer else {
        return Ok(document);
    };
    match document.pointer(pointer) {
        Some(x) => Ok(x.clone()),
        None => bail!("JSON pointer {pointer} selects nothing"),
    }
}

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            println!("{src}");
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn formatter_render(doc: Value) -> Vec<RenderedProp> {
        let classifier = LexicalClassifier;
        let formatter = TypeFormatter::new(&classifier);
        render_document(&formatter, "test.json", doc).unwrap()
    }

    #[test]
    fn renders_props_in_declaration_order() {
        let rows = formatter_render(json!({
            "displayName": "Button",
            "props": {
                "size": { "type": { "name": "enum", "value": [
                    { "value": "'sm'", "computed": false },
                    { "value": "'lg'", "computed": false }
                ] } },
                "label": { "type": { "name": "string" } },
                "onClick": {
                    "type": { "name": "func" },
                    "docs": { "params": [{ "name": "event", "type": "MouseEvent" }] }
                },
                "children": {}
            }
        }));
        let got: Vec<(&str, &str)> = rows.iter().map(|r| (r.prop.as_str(), r.display.text.as_str())).collect();
        assert_eq!(got, [("size", "'sm' | 'lg'"), ("onClick", "(event: MouseEvent)")]);
        assert_eq!(rows[0].component.as_deref(), Some("Button"));
    }

    #[test]
    fn invalid_component_reports_path() {
        let classifier = LexicalClassifier;
        let formatter = TypeFormatter::new(&classifier);
        let err = render_document(&formatter, "bad.json", json!({ "props": { "x": { "docs": { "params": [{}] } } } }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("props.x.docs.params[0]"), "{err}");
    }

    #[test]
    fn text_table_groups_by_component() {
        colored::control::set_override(false);
        let rows = formatter_render(json!([
            { "displayName": "A", "props": { "when": { "type": { "name": "instanceOf", "value": "Date" } } } },
            { "displayName": "B", "props": { "point": { "type": { "name": "shape", "value": {
                "latitude": { "name": "number" },
                "longitude": { "name": "number" }
            } } } } }
        ]));
        assert_eq!(
            text_table(&rows),
            "A\n  when: Date\nB\n  point: object  [{ latitude: number, longitude: number }]\n"
        );
    }

    #[test]
    fn json_pointer_selection() {
        let doc = json!({ "components": [{ "displayName": "X" }] });
        assert_eq!(select(doc.clone(), Some("/components/0")).unwrap(), json!({ "displayName": "X" }));
        assert!(select(doc, Some("/nope")).is_err());
    }
}
