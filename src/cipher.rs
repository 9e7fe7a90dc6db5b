//! CalculusCipher: an encoding session bound to one key function.
//!
//! Holds the key function and the numeric configuration, and forwards to
//! the encoder, decoder and descriptor. Two sessions decode each other's
//! output only if they share the same key function and configuration.

use crate::calculus::real_function::{DefaultKey, RealFunction};
use crate::config::CipherConfig;
use crate::decoder::{self, DecodedChar};
use crate::descriptor::{self, SecurityAnalysis};
use crate::encoder;
use crate::error::CipherResult;

/// Symmetric character-level cipher keyed by a real function.
///
/// The key is immutable for the lifetime of the session. Encoding and
/// decoding take `&self`, so a session can be shared freely between
/// threads when the key is `Sync`.
#[derive(Debug, Clone)]
pub struct CalculusCipher<K = DefaultKey> {
    key: K,
    config: CipherConfig,
}

impl Default for CalculusCipher<DefaultKey> {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculusCipher<DefaultKey> {
    /// Creates a session with the default key `sin(2x) + cos(x)` and the
    /// default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use calculus_cipher::CalculusCipher;
    ///
    /// let cipher = CalculusCipher::new();
    /// let ciphertext = cipher.encrypt("HI").unwrap();
    /// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HI");
    /// ```
    pub fn new() -> Self {
        CalculusCipher {
            key: DefaultKey,
            config: CipherConfig::default(),
        }
    }
}

impl<K> CalculusCipher<K>
where
    K: RealFunction,
{
    /// Creates a session with a custom key function and the default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use calculus_cipher::CalculusCipher;
    ///
    /// let cipher = CalculusCipher::with_key(|x: f64| (3.0 * x).cos() + x);
    /// let ciphertext = cipher.encrypt("abc123!").unwrap();
    /// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "abc123!");
    /// ```
    pub fn with_key(key: K) -> Self {
        CalculusCipher {
            key,
            config: CipherConfig::default(),
        }
    }

    /// Creates a session with a custom key function and configuration.
    ///
    /// # Errors
    /// Returns [`CipherError::Config`](crate::CipherError::Config) if the
    /// configuration does not validate.
    pub fn with_config(key: K, config: CipherConfig) -> CipherResult<Self> {
        config.validate()?;
        Ok(CalculusCipher { key, config })
    }

    /// Returns the key function.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the numeric configuration.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encrypts one character at position `index`.
    pub fn encrypt_character(&self, character: char, index: usize) -> CipherResult<f64> {
        encoder::encrypt_character(&self.key, &self.config, character, index)
    }

    /// Encrypts `text` into one value per character.
    ///
    /// # Errors
    /// Fails on characters outside 32..=126 and on non-finite results.
    pub fn encrypt(&self, text: &str) -> CipherResult<Vec<f64>> {
        encoder::encrypt(&self.key, &self.config, text)
    }

    /// Decodes one value at position `index`.
    pub fn decrypt_character(&self, value: f64, index: usize) -> CipherResult<char> {
        decoder::decrypt_character(&self.key, &self.config, value, index)
    }

    /// Returns the formula text for the per-character transform.
    pub fn encryption_formula(&self) -> &'static str {
        descriptor::encryption_formula()
    }

    /// Returns the descriptive security summary for `text_length` characters.
    pub fn security_analysis(&self, text_length: usize) -> SecurityAnalysis {
        descriptor::security_analysis(text_length)
    }
}

impl<K> CalculusCipher<K>
where
    K: RealFunction + Sync,
{
    /// Decodes `ciphertext` back into text.
    pub fn decrypt(&self, ciphertext: &[f64]) -> CipherResult<String> {
        decoder::decrypt(&self.key, &self.config, ciphertext)
    }

    /// Decodes `ciphertext` and reports each position's residual.
    pub fn decrypt_detailed(&self, ciphertext: &[f64]) -> CipherResult<Vec<DecodedChar>> {
        decoder::decrypt_detailed(&self.key, &self.config, ciphertext)
    }
}
