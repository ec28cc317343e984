//! Resolution of comma-separated candidate lists such as `srcset`.
//!
//! Each candidate is `url [descriptor]`, e.g. `~/img@2.png 2x`. Only the URL
//! token is handed to the resolver; the descriptor is carried over verbatim.

use crate::content::{HtmlContent, Segment};
use crate::error::Result;
use crate::marker;
use crate::resolver::{UrlResolver, resolve_relative};

const SEPARATOR: &str = ", ";

/// One comma-delimited group of a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate<'a> {
    /// The trimmed group.
    text: &'a str,
    /// Leading token of `text`.
    url: &'a str,
    /// Everything after `url`, including the whitespace before the descriptor.
    descriptor: &'a str,
    /// Byte offset of `text` within the full value.
    offset: usize,
}

impl Candidate<'_> {
    fn is_resolvable(&self) -> bool {
        marker::is_eligible_marker(self.url)
    }
}

fn split_candidates(value: &str) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    let mut offset = 0;
    for group in value.split(',') {
        let leading = group.len() - group.trim_start().len();
        let text = group.trim();
        let url_end = text.find(char::is_whitespace).unwrap_or(text.len());
        candidates.push(Candidate {
            text,
            url: &text[..url_end],
            descriptor: &text[url_end..],
            offset: offset + leading,
        });
        offset += group.len() + 1;
    }
    candidates
}

/// Resolve every `~/` candidate of a plain-text list.
///
/// Returns `None` if no candidate has a marker. Otherwise all candidates are
/// trimmed and rejoined with `", "`.
pub fn resolve_text<R: UrlResolver + ?Sized>(resolver: &R, value: &str) -> Result<Option<String>> {
    let candidates = split_candidates(value);
    if !candidates.iter().any(Candidate::is_resolvable) {
        return Ok(None);
    }

    let mut parts = Vec::with_capacity(candidates.len());
    for candidate in candidates.iter().filter(|c| !c.text.is_empty()) {
        if candidate.is_resolvable() {
            let resolution = resolve_relative(resolver, candidate.url)?;
            parts.push(format!("{}{}", resolution.resolved, candidate.descriptor));
        } else {
            parts.push(candidate.text.to_string());
        }
    }
    Ok(Some(parts.join(SEPARATOR)))
}

/// Resolve every `~/` candidate of a pre-encoded list.
///
/// Text before the first resolvable candidate is kept verbatim. From that
/// candidate on, groups are trimmed and rejoined with `", "`, and each
/// resolved application path is escaped only at serialization time.
pub fn resolve_html<R: UrlResolver + ?Sized>(
    resolver: &R,
    value: &str,
) -> Result<Option<HtmlContent>> {
    let candidates = split_candidates(value);
    let Some(first) = candidates.iter().position(Candidate::is_resolvable) else {
        return Ok(None);
    };

    let mut segments = Vec::new();
    if first > 0 {
        segments.push(Segment::Raw(value[..candidates[first].offset].to_string()));
    }
    let rest = candidates[first..].iter().filter(|c| !c.text.is_empty());
    for (i, candidate) in rest.enumerate() {
        if i > 0 {
            segments.push(Segment::Raw(SEPARATOR.to_string()));
        }
        if candidate.is_resolvable() {
            let resolution = resolve_relative(resolver, candidate.url)?;
            segments.extend(resolution.into_html(candidate.descriptor).into_segments());
        } else {
            segments.push(Segment::Raw(candidate.text.to_string()));
        }
    }
    Ok(Some(HtmlContent::from_segments(segments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HtmlEncoder;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Bracketing;

    impl HtmlEncoder for Bracketing {
        fn encode(&self, value: &str, out: &mut String) {
            out.push_str("HtmlEncode[[");
            out.push_str(value);
            out.push_str("]]");
        }
    }

    fn approot(path: &str) -> String {
        path.replacen("~/", "/approot/", 1)
    }

    #[test]
    fn split_keeps_descriptor_whitespace() {
        let candidates = split_candidates(" ~/a.png  1x,/b.png 2x");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].url, "~/a.png");
        assert_eq!(candidates[0].descriptor, "  1x");
        assert_eq!(candidates[0].offset, 1);
        assert_eq!(candidates[1].text, "/b.png 2x");
        assert_eq!(candidates[1].offset, 13);
    }

    #[test]
    fn single_candidate_with_descriptor() {
        let resolved = resolve_text(&approot, "~/content/image.png 1x").unwrap();
        assert_eq!(resolved.as_deref(), Some("/approot/content/image.png 1x"));
    }

    #[test]
    fn both_candidates_resolved_and_normalized() {
        let resolved =
            resolve_text(&approot, "  ~/content/image.png 1x, ~/content/image@2.png 2x").unwrap();
        assert_eq!(
            resolved.as_deref(),
            Some("/approot/content/image.png 1x, /approot/content/image@2.png 2x")
        );
    }

    #[test]
    fn only_marked_candidate_resolved() {
        let resolved =
            resolve_text(&approot, "/content/image.png 200w, ~/content/image@2.png 400w").unwrap();
        assert_eq!(
            resolved.as_deref(),
            Some("/content/image.png 200w, /approot/content/image@2.png 400w")
        );
    }

    #[test]
    fn list_without_markers_is_untouched() {
        assert_eq!(resolve_text(&approot, "a.png 1x,b.png   2x").unwrap(), None);
        assert_eq!(resolve_html(&approot, "a.png 1x,b.png   2x").unwrap(), None);
    }

    #[test]
    fn resolver_sees_url_token_only() {
        let calls = RefCell::new(Vec::new());
        let resolver = |path: &str| {
            calls.borrow_mut().push(path.to_string());
            approot(path)
        };
        resolve_text(&resolver, "~/a.png 1x, /b.png 2x, ~/c.png 3x").unwrap();
        assert_eq!(*calls.borrow(), vec!["~/a.png".to_string(), "~/c.png".to_string()]);
    }

    #[test]
    fn empty_groups_are_dropped_after_resolution() {
        let resolved = resolve_text(&approot, "~/a.png 1x,,").unwrap();
        assert_eq!(resolved.as_deref(), Some("/approot/a.png 1x"));
    }

    #[test]
    fn html_list_preserves_leading_unresolved_region() {
        let content = resolve_html(&approot, "/a.png 1x ,  ~/b.png 2x,~/c.png 3x")
            .unwrap()
            .unwrap();
        assert_eq!(
            content.to_html_string(&Bracketing),
            "/a.png 1x ,  HtmlEncode[[/approot/]]b.png 2x, HtmlEncode[[/approot/]]c.png 3x"
        );
    }

    #[test]
    fn html_list_drops_leading_whitespace_of_first_candidate() {
        let content = resolve_html(&approot, "  ~/content/image.png 1x, ~/content/image@2.png 2x")
            .unwrap()
            .unwrap();
        assert_eq!(
            content.to_html_string(&Bracketing),
            "HtmlEncode[[/approot/]]content/image.png 1x, HtmlEncode[[/approot/]]content/image@2.png 2x"
        );
    }

    #[test]
    fn html_list_normalizes_after_first_resolution() {
        let content = resolve_html(&approot, "~/a.png 1x,/b.png 2x").unwrap().unwrap();
        assert_eq!(
            content.to_html_string(&Bracketing),
            "HtmlEncode[[/approot/]]a.png 1x, /b.png 2x"
        );
    }

    #[test]
    fn contract_violation_in_any_candidate_fails() {
        let resolver = |path: &str| {
            if path.contains("bad") {
                "UnexpectedResult".to_string()
            } else {
                approot(path)
            }
        };
        assert!(resolve_text(&resolver, "~/ok.png 1x, ~/bad.png 2x").is_err());
        assert!(resolve_html(&resolver, "~/ok.png 1x, ~/bad.png 2x").is_err());
    }
}
