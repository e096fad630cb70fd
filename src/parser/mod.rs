//! Pawn source code parser
//!
//! This module transforms Pawn-style source text into an Abstract Syntax
//! Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`precedence`]: operator binding strengths
//! - [`parse`]: the [`Parser`](parse::Parser) struct and coordination
//! - [`statements`], [`expressions`], [`declarations`], [`directives`],
//!   [`types`]: the grammar productions, as `impl Parser` blocks
//! - [`ast`]: AST node definitions and canonical rendering
//!
//! # Supported Pawn Subset
//!
//! - Declarations: `new` variables (with tag prefixes and `[]` arrays),
//!   `function`, `native`, `state`, `tag`, `enum`
//! - Statements: `return`, `if`/`else`, `while`, `for`, blocks
//! - Expressions: arithmetic, logical, bitwise, comparisons, assignment
//!   (plain and compound), calls, indexing, `++`/`--`, array and function
//!   literals
//! - Directives: `#include`, `#define`, `#ifdef`/`#endif`, tokenized and
//!   parsed, never expanded
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with two-token lookahead for statements
//! and precedence climbing for expressions. No external parser generator
//! dependencies. Errors accumulate: a malformed statement is skipped and
//! parsing resumes at the next statement boundary.

pub mod ast;
pub mod declarations;
pub mod directives;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod precedence;
pub mod statements;
pub mod types;
