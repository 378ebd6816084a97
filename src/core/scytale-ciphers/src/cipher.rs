//! Cipher dispatch.
//!
//! [`CipherKind`] names a cipher, [`KeyParams`] carries whatever key material
//! a caller has, and [`Cipher`] is the validated combination of the two.
//! Building a [`Cipher`] is the only fallible step; applying it never fails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::CipherError;
use crate::hill::hill;
use crate::keys::{AffineKey, HillKey, Keyword};
use crate::monoalphabetic::{affine, atbash, caesar, hybrid};
use crate::playfair::{playfair, KeySquare};
use crate::polyalphabetic::{autokey, beaufort, vigenere};
use crate::substitution::{substitute, SubstitutionKey};
use crate::transposition::{
    columnar_decrypt, columnar_encrypt, rail_fence_decrypt, rail_fence_encrypt,
};

/// Whether to encrypt or decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherKind {
    /// Shift every letter by a fixed amount.
    Caesar,
    /// Mirror the alphabet.
    Atbash,
    /// `a·x + b` with `a` coprime to 26.
    Affine,
    /// Repeating-keyword shifts.
    Vigenere,
    /// Zig-zag transposition.
    RailFence,
    /// Keyword-ordered column transposition.
    Columnar,
    /// 5×5 key-square digraphs.
    Playfair,
    /// 2×2 matrix multiplication.
    Hill,
    /// Keyword followed by plaintext as keystream.
    Autokey,
    /// Reciprocal `key - x` keystream cipher.
    Beaufort,
    /// Caesar then Atbash.
    Hybrid,
    /// Full 26-letter substitution alphabet.
    Substitution,
}

impl CipherKind {
    /// Every supported cipher, in menu order.
    pub const ALL: [CipherKind; 12] = [
        Self::Caesar,
        Self::Atbash,
        Self::Affine,
        Self::Vigenere,
        Self::RailFence,
        Self::Columnar,
        Self::Playfair,
        Self::Hill,
        Self::Autokey,
        Self::Beaufort,
        Self::Hybrid,
        Self::Substitution,
    ];

    /// Identifier used by `Display`, `FromStr` and serde.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Atbash => "atbash",
            Self::Affine => "affine",
            Self::Vigenere => "vigenere",
            Self::RailFence => "rail-fence",
            Self::Columnar => "columnar",
            Self::Playfair => "playfair",
            Self::Hill => "hill",
            Self::Autokey => "autokey",
            Self::Beaufort => "beaufort",
            Self::Hybrid => "hybrid",
            Self::Substitution => "substitution",
        }
    }

    /// Key material the cipher needs, for help output.
    pub fn key_requirement(&self) -> &'static str {
        match self {
            Self::Caesar | Self::Hybrid => "shift",
            Self::Atbash => "none",
            Self::Affine => "a, b",
            Self::Vigenere | Self::Columnar | Self::Playfair | Self::Autokey | Self::Beaufort => {
                "keyword"
            },
            Self::RailFence => "rails",
            Self::Hill => "matrix",
            Self::Substitution => "alphabet",
        }
    }

    /// Whether the same operation both encrypts and decrypts.
    pub fn is_reciprocal(&self) -> bool {
        matches!(self, Self::Atbash | Self::Beaufort)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "atbash" => Ok(Self::Atbash),
            "affine" => Ok(Self::Affine),
            "vigenere" => Ok(Self::Vigenere),
            "rail-fence" | "railfence" | "rail_fence" => Ok(Self::RailFence),
            "columnar" | "columnar-transposition" => Ok(Self::Columnar),
            "playfair" => Ok(Self::Playfair),
            "hill" => Ok(Self::Hill),
            "autokey" => Ok(Self::Autokey),
            "beaufort" => Ok(Self::Beaufort),
            "hybrid" | "caesar-atbash" => Ok(Self::Hybrid),
            "substitution" => Ok(Self::Substitution),
            _ => Err(CipherError::UnknownCipher(s.to_string())),
        }
    }
}

/// Raw key material as supplied by a caller. Unused fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyParams {
    /// Caesar / Hybrid shift.
    pub shift: Option<i64>,
    /// Affine multiplier.
    pub a: Option<i64>,
    /// Affine offset.
    pub b: Option<i64>,
    /// Keyword for Vigenère, Columnar, Playfair, Autokey, Beaufort.
    pub keyword: Option<String>,
    /// Rail Fence rail count.
    pub rails: Option<i64>,
    /// Hill matrix entries in row-major order.
    pub matrix: Option<[i64; 4]>,
    /// Substitution cipher alphabet.
    pub alphabet: Option<String>,
}

fn require<T: Clone>(value: &Option<T>, kind: CipherKind, name: &str) -> Result<T, CipherError> {
    value
        .clone()
        .ok_or_else(|| CipherError::MissingKey(format!("{kind} requires `{name}`")))
}

/// A cipher with validated key material.
#[derive(Debug, Clone)]
pub enum Cipher {
    /// Caesar shift.
    Caesar {
        /// Shift amount.
        shift: i64,
    },
    /// Atbash.
    Atbash,
    /// Affine.
    Affine(AffineKey),
    /// Vigenère.
    Vigenere(Keyword),
    /// Rail Fence.
    RailFence {
        /// Rail count; fewer than two is the identity.
        rails: usize,
    },
    /// Columnar Transposition.
    Columnar(Keyword),
    /// Playfair, with its key square already built.
    Playfair(KeySquare),
    /// Hill 2×2.
    Hill(HillKey),
    /// Autokey.
    Autokey(Keyword),
    /// Beaufort.
    Beaufort(Keyword),
    /// Caesar→Atbash.
    Hybrid {
        /// Caesar shift applied before Atbash.
        shift: i64,
    },
    /// Keyed substitution.
    Substitution(SubstitutionKey),
}

impl Cipher {
    /// Validates `params` for `kind`.
    ///
    /// # Errors
    ///
    /// [`CipherError::MissingKey`] if required material is absent,
    /// [`CipherError::InvalidKey`] if it is present but unusable.
    pub fn new(kind: CipherKind, params: &KeyParams) -> Result<Self, CipherError> {
        debug!(cipher = %kind, "building cipher");

        let cipher = match kind {
            CipherKind::Caesar => Self::Caesar {
                shift: require(&params.shift, kind, "shift")?,
            },
            CipherKind::Atbash => Self::Atbash,
            CipherKind::Affine => Self::Affine(AffineKey::new(
                require(&params.a, kind, "a")?,
                require(&params.b, kind, "b")?,
            )?),
            CipherKind::Vigenere => Self::Vigenere(Keyword::new(&require(
                &params.keyword,
                kind,
                "keyword",
            )?)?),
            CipherKind::RailFence => Self::RailFence {
                rails: usize::try_from(require(&params.rails, kind, "rails")?).unwrap_or(0),
            },
            CipherKind::Columnar => Self::Columnar(Keyword::new(&require(
                &params.keyword,
                kind,
                "keyword",
            )?)?),
            CipherKind::Playfair => Self::Playfair(KeySquare::new(&Keyword::new(&require(
                &params.keyword,
                kind,
                "keyword",
            )?)?)),
            CipherKind::Hill => Self::Hill(HillKey::from_entries(require(
                &params.matrix,
                kind,
                "matrix",
            )?)?),
            CipherKind::Autokey => Self::Autokey(Keyword::new(&require(
                &params.keyword,
                kind,
                "keyword",
            )?)?),
            CipherKind::Beaufort => Self::Beaufort(Keyword::new(&require(
                &params.keyword,
                kind,
                "keyword",
            )?)?),
            CipherKind::Hybrid => Self::Hybrid {
                shift: require(&params.shift, kind, "shift")?,
            },
            CipherKind::Substitution => Self::Substitution(SubstitutionKey::from_alphabet(
                &require(&params.alphabet, kind, "alphabet")?,
            )?),
        };

        Ok(cipher)
    }

    /// The kind of this cipher.
    pub fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar { .. } => CipherKind::Caesar,
            Self::Atbash => CipherKind::Atbash,
            Self::Affine(_) => CipherKind::Affine,
            Self::Vigenere(_) => CipherKind::Vigenere,
            Self::RailFence { .. } => CipherKind::RailFence,
            Self::Columnar(_) => CipherKind::Columnar,
            Self::Playfair(_) => CipherKind::Playfair,
            Self::Hill(_) => CipherKind::Hill,
            Self::Autokey(_) => CipherKind::Autokey,
            Self::Beaufort(_) => CipherKind::Beaufort,
            Self::Hybrid { .. } => CipherKind::Hybrid,
            Self::Substitution(_) => CipherKind::Substitution,
        }
    }

    /// Runs the cipher in the given direction.
    pub fn apply(&self, text: &str, direction: Direction) -> String {
        trace!(cipher = %self.kind(), %direction, len = text.len(), "applying cipher");

        match self {
            Self::Caesar { shift } => caesar(text, *shift, direction),
            Self::Atbash => atbash(text),
            Self::Affine(key) => affine(text, key, direction),
            Self::Vigenere(key) => vigenere(text, key, direction),
            Self::RailFence { rails } => match direction {
                Direction::Encrypt => rail_fence_encrypt(text, *rails),
                Direction::Decrypt => rail_fence_decrypt(text, *rails),
            },
            Self::Columnar(key) => match direction {
                Direction::Encrypt => columnar_encrypt(text, key),
                Direction::Decrypt => columnar_decrypt(text, key),
            },
            Self::Playfair(square) => playfair(text, square, direction),
            Self::Hill(key) => hill(text, key, direction),
            Self::Autokey(key) => autokey(text, key, direction),
            Self::Beaufort(key) => beaufort(text, key),
            Self::Hybrid { shift } => hybrid(text, *shift, direction),
            Self::Substitution(key) => substitute(text, key, direction),
        }
    }

    /// Shorthand for [`Cipher::apply`] with [`Direction::Encrypt`].
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.apply(plaintext, Direction::Encrypt)
    }

    /// Shorthand for [`Cipher::apply`] with [`Direction::Decrypt`].
    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.apply(ciphertext, Direction::Decrypt)
    }
}
