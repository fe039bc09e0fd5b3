//! Golden fixtures: `fixtures/*.json` → `render_json` → compare.
//!
//! usage: dev-test-runner [FIXTURE_DIR] [NAME_REGEX]
use std::path::PathBuf;

use anyhow::{Context, Result};
use prop_type_fmt::{FuncDocs, LexicalClassifier, PropTypeDisplay, TypeFormatter};
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    descriptor: serde_json::Value,
    #[serde(default)]
    docs: Option<FuncDocs>,
    /// `null` when the kind renders nothing
    expect: Option<Expect>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Expect {
    text: String,
    #[serde(default)]
    title: Option<String>,
}

impl From<PropTypeDisplay> for Expect {
    fn from(d: PropTypeDisplay) -> Self {
        Self { text: d.text, title: d.title }
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures"));
    let filter = args.next().map(|s| Regex::new(&s)).transpose().context("bad name filter")?;

    let pattern = dir.join("*.json");
    let classifier = LexicalClassifier;
    let formatter = TypeFormatter::new(&classifier);

    let (mut passed, mut failed) = (0usize, 0usize);
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        let name = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        if filter.as_ref().is_some_and(|rx| !rx.is_match(&name)) {
            continue;
        }
        let source = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let fixture = prop_type_fmt::path_de::from_str_with_path::<Fixture>(&source)
            .map_err(|error| anyhow::anyhow!("{}: {error}", path.display()))?;

        let got = formatter.render_json(&fixture.descriptor, &fixture.docs).map(Expect::from);
        if got == fixture.expect {
            passed += 1;
            eprintln!("✅ {name}");
        } else {
            failed += 1;
            eprintln!("❌ {name}\n   expected: {:?}\n   got:      {got:?}", fixture.expect);
        }
    }

    eprintln!("—— {passed} passed, {failed} failed ——");
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
