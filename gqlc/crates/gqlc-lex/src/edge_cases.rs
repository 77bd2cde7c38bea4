//! Edge case tests for gqlc-lex
