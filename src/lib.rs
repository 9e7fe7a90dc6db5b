//! Calculus-based symmetric character encoding.
//!
//! Each printable character `c` at position `i` is mapped to a smooth
//! function `f_{c,i}`, differentiated numerically, multiplied by a shared
//! key function `g(x + i)`, and integrated over `[-1, 1]` with Simpson's
//! rule. A position-dependent constant is added to the result, giving
//! one `f64` per character.
//!
//! There is no closed-form inverse. Decoding re-encodes all 95 printable
//! characters at each position and keeps the nearest match. This is a
//! toy scheme with no security properties: it is deterministic, keyed
//! only by a real function, and leaks structure freely.
//!
//! # Architecture
//!
//! ```text
//! calculus::numeric        (central difference, composite Simpson)
//! calculus::char_function  (character + position -> real function)
//!     ↓
//! encoder                  (integral of f' * g, plus obfuscation constant)
//!     ↓ used as oracle by
//! search + decoder         (nearest match over the printable set)
//!     ↓
//! CalculusCipher           (session: key function + config)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the default key `sin(2x) + cos(x)`:
//!
//! ```
//! use calculus_cipher::CalculusCipher;
//!
//! let cipher = CalculusCipher::new();
//! let ciphertext = cipher.encrypt("HELLO").unwrap();
//! assert_eq!(ciphertext.len(), 5);
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELLO");
//! ```
//!
//! Use a custom key function. Both sides must use the same one:
//!
//! ```
//! use calculus_cipher::CalculusCipher;
//!
//! let key = |x: f64| (x * x).sin() - 0.5 * x;
//! let cipher = CalculusCipher::with_key(key);
//! let ciphertext = cipher.encrypt("Key!").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "Key!");
//! ```

#![deny(clippy::all)]

pub mod calculus;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod descriptor;
pub mod encoder;
pub mod error;
pub mod key;
pub mod search;

mod cipher;

pub use calculus::char_function::CharFunction;
pub use calculus::real_function::{DefaultKey, RealFunction};
pub use cipher::CalculusCipher;
pub use config::CipherConfig;
pub use decoder::DecodedChar;
pub use error::{CipherError, CipherResult};
