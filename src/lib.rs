//! Callcheck - call matchers for banned-call lint rules
//!
//! Callcheck is a helper library for static-analysis rules that scan JS/TS
//! sources for calls a codebase forbids, such as `it.skip(...)` in test
//! suites or stray `console.log(...)` calls. It operates on syntax trees the
//! caller already owns: rules parse with swc, walk the AST themselves, and
//! use these helpers to recognize call shapes and render findings.
//!
//! ## Module Structure
//!
//! - `matchers`: Call-shape predicates over swc AST nodes
//! - `report`: Diagnostic line formatting (`file:line:col:message`)
//! - `utils`: Shared utility functions

pub mod matchers;
pub mod report;
pub mod utils;
