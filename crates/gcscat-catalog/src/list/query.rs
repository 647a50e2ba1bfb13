//! Name filter for listings.

use globset::{GlobBuilder, GlobMatcher};

/// Substring filter over the immediate children of a folder.
///
/// Mirrors the storage-side match glob `{prefix}*{q}**`: the query may appear
/// anywhere in the child's name, but never in a deeper path segment.
#[derive(Debug, Clone)]
pub struct QueryGlob {
    pattern: String,
    matcher: GlobMatcher,
}

impl QueryGlob {
    /// Builds the filter for children of `prefix` whose name contains `query`.
    pub fn new(prefix: &str, query: &str) -> Result<Self, globset::Error> {
        let (prefix, query) = (escape_glob(prefix), escape_glob(query));

        // Candidates are single segments below `prefix`, so the trailing `**`
        // of the storage glob reduces to `*`.
        let matcher = GlobBuilder::new(&format!("{prefix}*{query}*"))
            .literal_separator(true)
            .backslash_escape(true)
            .build()?
            .compile_matcher();

        Ok(Self {
            pattern: format!("{prefix}*{query}**"),
            matcher,
        })
    }

    /// The match glob as the storage API would receive it.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the object key or folder prefix `name` passes the filter.
    pub fn is_match(&self, name: &str) -> bool {
        self.matcher.is_match(name.trim_end_matches('/'))
    }
}

/// Escapes glob metacharacters so `s` only matches itself.
fn escape_glob(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '*' | '?' | '[' | ']' | '{' | '}' | '!' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
