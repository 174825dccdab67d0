//! Session-level tests driven by an in-memory daemon stream.

mod support;
