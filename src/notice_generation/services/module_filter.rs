use crate::shared::Result;
use std::cell::RefCell;

/// Maximum number of excluded module patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single excluded module pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ModuleFilter - decides which sub-modules are skipped during aggregation
///
/// Patterns are matched against the module path relative to the execution
/// root (`libs/util`), using '*' to match zero or more characters.
/// Matching is case-sensitive.
#[derive(Debug, Default)]
pub struct ModuleFilter {
    patterns: Vec<ExcludePattern>,
}

impl ModuleFilter {
    /// Creates a new ModuleFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many excluded module patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Filter that excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Checks whether the module at `module_path` must be skipped
    pub fn is_excluded(&self, module_path: &str) -> bool {
        let module_path = normalize_path(module_path);
        // Evaluate every pattern so unmatched ones can be reported afterwards
        self.patterns
            .iter()
            .fold(false, |excluded, p| p.matches(&module_path) || excluded)
    }

    /// Same check as `is_excluded` without recording which patterns matched
    pub fn would_exclude(&self, module_path: &str) -> bool {
        let module_path = normalize_path(module_path);
        self.patterns
            .iter()
            .any(|p| p.matcher.matches(&module_path))
    }

    /// Returns the patterns that did not match any module path checked so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !*p.matched.borrow())
            .map(|p| p.original.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// One excluded module pattern and whether it matched anything
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: RefCell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let matcher = compile_pattern(&normalize_path(&pattern));

        Ok(Self {
            original: pattern,
            matcher,
            matched: RefCell::new(false),
        })
    }

    fn matches(&self, module_path: &str) -> bool {
        let is_match = self.matcher.matches(module_path);
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "libs/util"
    Exact(String),
    /// "*-tests"
    EndsWith(String),
    /// "libs/*"
    StartsWith(String),
    /// "*legacy*"
    Contains(String),
    /// "libs/*-it": literal parts in order, anchored unless the pattern
    /// starts or ends with '*'
    Multiple {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, module_path: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => module_path == s,
            PatternMatcher::EndsWith(suffix) => module_path.ends_with(suffix),
            PatternMatcher::StartsWith(prefix) => module_path.starts_with(prefix),
            PatternMatcher::Contains(middle) => module_path.contains(middle),
            PatternMatcher::Multiple {
                parts,
                anchored_start,
                anchored_end,
            } => match_parts(module_path, parts, *anchored_start, *anchored_end),
        }
    }
}

fn match_parts(value: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return true,
    };

    let mut remaining = value;
    if anchored_start {
        match remaining.strip_prefix(first.as_str()) {
            Some(after) => remaining = after,
            None => return false,
        }
    } else {
        match remaining.find(first.as_str()) {
            Some(pos) => remaining = &remaining[pos + first.len()..],
            None => return false,
        }
    }

    let (middle, last) = match rest.split_last() {
        Some((last, middle)) => (middle, Some(last)),
        None => (rest, None),
    };

    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    match last {
        Some(last) if anchored_end => {
            remaining.len() >= last.len() && remaining.ends_with(last.as_str())
        }
        Some(last) => remaining.contains(last.as_str()),
        None => !anchored_end || remaining.is_empty(),
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    let path = path.strip_prefix("./").unwrap_or(&path);
    path.trim_end_matches('/').to_string()
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        anyhow::bail!("Excluded module pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Excluded module pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Excluded module pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, slashes, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*' || c == '/') {
        anyhow::bail!(
            "Excluded module pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '\\' | '*')
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let parts: Vec<String> = pattern
        .split('*')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    let anchored_start = !pattern.starts_with('*');
    let anchored_end = !pattern.ends_with('*');

    match (pattern.matches('*').count(), parts.len()) {
        (0, _) => PatternMatcher::Exact(pattern.to_string()),
        (_, 1) if !anchored_start && anchored_end => PatternMatcher::EndsWith(parts[0].clone()),
        (_, 1) if anchored_start && !anchored_end => PatternMatcher::StartsWith(parts[0].clone()),
        (_, 1) if !anchored_start && !anchored_end => PatternMatcher::Contains(parts[0].clone()),
        _ => PatternMatcher::Multiple {
            parts,
            anchored_start,
            anchored_end,
        },
    }
}
