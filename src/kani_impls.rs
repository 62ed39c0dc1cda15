//! Kani proof harnesses for the parser and builder.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{ParsedUri, UriBuilder};

/// Characters that exercise every branch of the parser
const URI_CHARS: &[u8] = b"a:/@?#&=;";

/// Generate a short string over `URI_CHARS`
fn arbitrary_uri_text(max_len: usize) -> String {
    let len: usize = kani::any();
    kani::assume(len <= max_len);

    let mut s = String::with_capacity(len);
    for _ in 0..len {
        let idx: usize = kani::any();
        s.push(URI_CHARS[idx % URI_CHARS.len()] as char);
    }
    s
}

/// Proof: parsing any short input terminates without panicking
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_never_panics() {
    let input = arbitrary_uri_text(6);
    let _ = ParsedUri::parse(&input);
}

/// Proof: an invalid parse carries no scheme and an empty host
#[kani::proof]
#[kani::unwind(8)]
fn proof_invalid_parse_is_empty() {
    let input = arbitrary_uri_text(6);
    let uri = ParsedUri::parse(&input);
    if !uri.is_valid() {
        assert!(uri.scheme().is_none());
        assert!(uri.host().is_empty());
    }
}

/// Proof: the scheme of a valid parse never contains its terminator
#[kani::proof]
#[kani::unwind(8)]
fn proof_scheme_excludes_terminator() {
    let input = arbitrary_uri_text(6);
    let uri = ParsedUri::parse(&input);
    if let Some(scheme) = uri.scheme() {
        assert!(!scheme.is_empty());
        assert!(!scheme.contains(':'));
    }
}

/// Proof: adding a parameter with empty key and value leaves the query unchanged
#[kani::proof]
#[kani::unwind(8)]
fn proof_empty_parameter_is_noop() {
    let query = arbitrary_uri_text(4);
    let builder = UriBuilder::new().query(query.clone()).add_query_parameter("", "");
    assert_eq!(builder.get_query(), Some(query.as_str()));
}
