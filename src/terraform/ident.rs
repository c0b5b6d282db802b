//! Terraform identifier generation
//!
//! Display names become identifiers by NFKD decomposition, dropping
//! everything but ASCII word characters, whitespace and hyphens, collapsing
//! whitespace runs into `_` and lowercasing. Candidates that are too short or
//! do not start with a letter or underscore get a kind-specific prefix.
//! [`IdAllocator`] then makes candidates unique within one namespace.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

use crate::config::terraform::{GROUP_PREFIX, SPACE_PREFIX};

fn normalize(name: &str) -> String {
    let kept: String = name
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut in_whitespace = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Identifiers must start with a letter or underscore and be longer than one character
fn is_invalid(candidate: &str) -> bool {
    candidate.len() <= 1
        || !candidate
            .starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
}

/// Turn a display name into a candidate identifier
pub fn sanitize(name: &str, fallback_prefix: &str) -> String {
    let candidate = normalize(name);
    if is_invalid(&candidate) {
        format!("{}{}", fallback_prefix, candidate)
    } else {
        candidate
    }
}

/// Fallback prefix for folders of the given type, e.g. `app_folder_`
pub fn folder_prefix(folder_type: &str) -> String {
    let prefix = format!("{}_folder_", normalize(folder_type));
    if is_invalid(&prefix) {
        format!("_{}", prefix)
    } else {
        prefix
    }
}

/// Candidate identifier for a folder
pub fn folder_candidate(folder_type: &str, name: &str) -> String {
    sanitize(name, &folder_prefix(folder_type))
}

/// Candidate identifier for a group
pub fn group_candidate(name: &str) -> String {
    sanitize(name, GROUP_PREFIX)
}

/// Candidate identifier for a space, derived from its domain
///
/// Dots become underscores first so `a.b.com` reads as `a_b_com`.
pub fn space_candidate(domain: &str) -> String {
    sanitize(&domain.replace('.', "_"), SPACE_PREFIX)
}

/// Hands out identifiers that are unique within one resource namespace
#[derive(Debug, Default)]
pub struct IdAllocator {
    seen: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `candidate` if unused, else the first free `candidate_<n>` for n = 1, 2, ...
    pub fn allocate(&mut self, candidate: String) -> String {
        let id = if self.seen.contains(&candidate) {
            (1u64..)
                .map(|seq| format!("{}_{}", candidate, seq))
                .find(|id| !self.seen.contains(id))
                .unwrap_or(candidate)
        } else {
            candidate
        };
        self.seen.insert(id.clone());
        id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// One allocator per namespace that needs uniqueness
#[derive(Debug, Default)]
pub struct Allocators {
    pub folders: IdAllocator,
    pub groups: IdAllocator,
    pub spaces: IdAllocator,
}
