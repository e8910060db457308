// ABOUTME: DOM traversal and mutation helpers for HTML documents.
// ABOUTME: Builds on scraper's document tree and ego_tree node ids.

//! DOM utilities for caption repair.
//!
//! This module locates `figcaption` elements in a parsed document, rewrites
//! doubled caption text in place, and serializes the document back to HTML.

pub mod captions;
