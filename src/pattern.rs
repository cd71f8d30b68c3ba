//! Pattern compilation.
//!
//! A route pattern is a URL template whose `:name` tokens stand for fixed
//! character classes. `compile` translates the tokens left-to-right and
//! anchors the result; everything that is not a recognized token passes
//! through verbatim, which doubles as the escape hatch for literal colons.

use regex::Regex;

/// Recognizes URLs that conform to a compiled route pattern.
pub trait Matcher {
    fn is_match(&self, url: &str) -> bool;
}

/// The default matcher: the pattern translated into an anchored regex.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// The translated regex source, mainly useful for diagnostics.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for RegexMatcher {
    fn is_match(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("pattern does not translate to a valid matcher")]
pub struct PatternError(#[from] regex::Error);

/// Token substitutions, tried in table order at every `:`.
/// `:alphanum` must come before `:alpha` (prefix overlap).
const TOKENS: &[(&str, &str)] = &[
    (":any", "(.*)"),
    (":id", "([0-9]+)"),
    (":alphanum", "([a-zA-Z0-9-]+)"),
    (":alpha", "([a-zA-Z-]+)"),
];

/// Compile a route pattern into a matcher.
///
/// Token names are recognized case-insensitively; the letter classes they
/// expand to accept both cases, while literal pattern text stays
/// case-sensitive. A bare `:` directly before a path separator matches one
/// whole segment. The compiled matcher is fully anchored, tolerating one
/// optional leading and one optional trailing separator: `users/:id`
/// accepts `users/15`, `/users/15` and `users/15/`, but not
/// `users/15/edit`.
///
/// Unrecognized tokens are kept verbatim, so the only possible failure is
/// a passthrough that does not form a valid expression.
pub fn compile(pattern: &str) -> Result<RegexMatcher, PatternError> {
    let mut src = String::with_capacity(pattern.len() + 8);
    src.push_str("^/?");
    src.push_str(&translate(pattern));
    src.push_str("/?$");
    let regex = Regex::new(&src)?;
    Ok(RegexMatcher { regex })
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;

    'scan: while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        for &(token, substitute) in TOKENS {
            let head = rest.as_bytes();
            if head.len() >= token.len() && head[..token.len()].eq_ignore_ascii_case(token.as_bytes()) {
                out.push_str(substitute);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }

        if rest[1..].starts_with('/') {
            // a colon directly before a separator matches one whole segment
            out.push_str("([^/]+)");
        } else {
            // unrecognized, keep the colon literal
            out.push(':');
        }
        rest = &rest[1..];
    }

    out.push_str(rest);
    out
}
