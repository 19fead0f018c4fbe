//! Translation key guards.
//!
//! - every `t!("…")` key used under `src/` exists in the fallback locale;
//! - every shipped locale defines exactly the fallback's message IDs, once each.
//!
//! Fluent parsing here is line based: a message is any line `id = …` whose id
//! uses lowercase letters, digits and hyphens. Comments, terms and attributes
//! are ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "insightboard-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Message IDs with their definition counts.
fn message_ids(src: &str) -> BTreeMap<String, usize> {
    let mut ids = BTreeMap::new();
    for line in src.lines() {
        let line = line.trim_start();
        if line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if is_message_id(id) {
                *ids.entry(id.to_string()).or_insert(0) += 1;
            }
        }
    }
    ids
}

fn read_locale(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"))
}

fn locales() -> Vec<String> {
    let mut found: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    found.sort();
    found
}

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("readable src dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!(` invocations.
fn referenced_keys() -> BTreeSet<String> {
    let mut files = Vec::new();
    rust_files(&crate_root().join("src"), &mut files);

    let mut keys = BTreeSet::new();
    for file in files {
        let content = fs::read_to_string(&file).unwrap_or_default();
        let needle = "t!(\"";
        for (pos, _) in content.match_indices(needle) {
            // Skip `format!(`, `print!(` and friends.
            let preceded_by_ident = content[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if preceded_by_ident {
                continue;
            }
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if is_message_id(key) {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

#[test]
fn shipped_locales_are_present() {
    let found = locales();
    for expected in [FALLBACK, "es-ES", "fr-FR"] {
        assert!(found.iter().any(|l| l == expected), "missing locale {expected}");
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = message_ids(&read_locale(FALLBACK));
    let referenced = referenced_keys();
    assert!(referenced.contains("nav-overview"), "key scan found nothing");

    let missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback.contains_key(*k))
        .cloned()
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn locales_match_fallback_exactly() {
    let fallback = message_ids(&read_locale(FALLBACK));
    let expected: BTreeSet<&String> = fallback.keys().collect();
    let mut problems = Vec::new();

    for locale in locales() {
        let ids = message_ids(&read_locale(&locale));
        for (id, count) in &ids {
            if *count > 1 {
                problems.push(format!("{locale}: `{id}` defined {count} times"));
            }
        }
        let actual: BTreeSet<&String> = ids.keys().collect();
        for id in expected.difference(&actual) {
            problems.push(format!("{locale}: missing `{id}`"));
        }
        for id in actual.difference(&expected) {
            problems.push(format!("{locale}: `{id}` not in {FALLBACK}"));
        }
    }

    assert!(
        problems.is_empty(),
        "translation problems:\n  {}",
        problems.join("\n  ")
    );
}
