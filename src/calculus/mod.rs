//! Numeric building blocks for the cipher.
//!
//! Provides the real-function abstraction shared by key and character
//! functions, the central-difference / Simpson kernel, and the
//! per-character function construction.

pub mod char_function;
pub mod numeric;
pub mod real_function;
