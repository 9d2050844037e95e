//! Glob resolution over the local filesystem.

use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use walkdir::WalkDir;

use skuid_core::Result;
use skuid_core::error::InvalidInputError;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Resolve `pattern` to the regular files it matches.
///
/// `*` and `?` never match a path separator; `**` spans directories. The
/// walk starts at the longest literal directory prefix of the pattern and
/// visits entries sorted by file name, so results come out in lexical
/// order within each directory. A base directory that does not exist, or
/// cannot be read, simply yields no matches.
///
/// `{a,b}` is alternation, so a literal brace in a directory name must be
/// passed through [`escape`] first.
pub fn resolve(pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| InvalidInputError::Pattern {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })?
        .compile_matcher();

    let mut base = PathBuf::new();
    let mut rest = Vec::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !text.contains(GLOB_META) {
            base.push(component);
        } else {
            rest.push(text.into_owned());
        }
    }

    if rest.is_empty() {
        return Ok(if base.is_file() { vec![base] } else { Vec::new() });
    }

    let relative = base.as_os_str().is_empty();
    let root = if relative { PathBuf::from(".") } else { base };
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(&root).min_depth(1).sort_by_file_name();
    if !rest.iter().any(|c| c.contains("**")) {
        walker = walker.max_depth(rest.len());
    }

    let matches = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| {
            let path = e.into_path();
            let candidate = if relative {
                path.strip_prefix(".").map(Path::to_path_buf).unwrap_or(path)
            } else {
                path
            };
            matcher.is_match(&candidate).then_some(candidate)
        })
        .collect();

    Ok(matches)
}

/// Quote every glob metacharacter in `literal` so it matches only itself.
pub fn escape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        match c {
            '*' | '?' | '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}
