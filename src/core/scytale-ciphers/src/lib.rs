//! # Scytale Ciphers
//!
//! Classical cipher engine for Scytale.
//!
//! This crate provides deterministic text transforms including:
//! - Monoalphabetic substitution (Caesar, Atbash, Affine, keyed substitution)
//! - Keystream ciphers (Vigenère, Autokey, Beaufort)
//! - Transposition (Rail Fence, Columnar)
//! - Digraphic ciphers (Playfair, Hill 2×2)
//! - Caesar key recovery by chi-squared frequency analysis
//!
//! Every cipher is also reachable through [`Cipher`], which validates key
//! material once and then applies the transform infallibly:
//!
//! ```
//! use scytale_ciphers::{Cipher, CipherKind, KeyParams};
//!
//! let params = KeyParams {
//!     keyword: Some("LEMON".into()),
//!     ..Default::default()
//! };
//! let cipher = Cipher::new(CipherKind::Vigenere, &params).unwrap();
//!
//! let ct = cipher.encrypt("Attack at dawn!");
//! assert_eq!(ct, "Lxfopv ef rnhr!");
//! assert_eq!(cipher.decrypt(&ct), "Attack at dawn!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod error;
pub mod frequency;
pub mod hill;
pub mod keys;
pub mod modular;
pub mod monoalphabetic;
pub mod playfair;
pub mod polyalphabetic;
pub mod substitution;
pub mod transposition;

pub use analysis::{auto_decrypt_caesar, brute_force_caesar, rank_caesar_candidates, Candidate};
pub use cipher::{Cipher, CipherKind, Direction, KeyParams};
pub use error::CipherError;
pub use keys::{AffineKey, HillKey, Keyword};
pub use modular::{matrix_inverse_2x2, mod_inverse, Matrix2};
pub use playfair::{format_playfair_text, KeySquare};
pub use substitution::SubstitutionKey;
