//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, the recognizer chain and the driver loop
//! - `trivia` - Whitespace, comma and comment skipping
//! - `punctuator` - Punctuator recognition, including `...`
//! - `identifier` - Name recognition
//! - `number` - Int and float literal recognition
//! - `string` - Block and single-quoted string recognition
//!
//! Every recognizer has the same shape, [`Recognizer`]: it either consumes a
//! whole token and returns its kind, or returns `None` and leaves the cursor
//! where it found it.

mod core;
mod identifier;
mod number;
mod punctuator;
mod string;
mod trivia;

pub use self::core::{Lexer, Recognizer, RecognizerKind, RECOGNIZERS};
pub use identifier::recognize_identifier;
pub use number::{recognize_float, recognize_int};
pub use punctuator::recognize_punctuator;
pub use string::recognize_string;
