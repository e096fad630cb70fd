//! # Introduction
//!
//! pawnparse turns Pawn-style source text into a syntax tree. It covers the
//! front half of a compiler pipeline and stops there: no expansion, no type
//! checking, no execution.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → renderer / tree dump
//! ```
//!
//! 1. [`parser::lexer`]: pull-based tokenizer with line/column tracking;
//!    illegal input becomes tokens plus diagnostics, never a failure.
//! 2. [`parser::parse`]: recursive descent over statements, precedence
//!    climbing over expressions, two-token lookahead, error recovery at
//!    statement boundaries.
//! 3. [`parser::ast`]: the node definitions; `Display` renders canonical,
//!    reparseable source with fully parenthesized expressions.
//! 4. [`printer`]: an indented tree dump for debugging; not part of the
//!    parsing core.
//!
//! ## Supported Pawn subset
//!
//! Variables (`new`, tag prefixes, `[]` arrays), functions, `native` and
//! `state` declarations, `tag` and `enum` declarations, `if`/`else`,
//! `while`, `for`, `return`, the full operator set with C-like precedence,
//! and the `#include`/`#define`/`#ifdef` directives (tokenized and parsed,
//! never expanded).

pub mod parser;
pub mod printer;
