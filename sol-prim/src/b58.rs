use core::{fmt, str::FromStr};

use crate::consts::{SOLANA_ADDRESS_LEN, SOLANA_DIGEST_LEN, SOLANA_SIGNATURE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("invalid base58 encoding")]
	InvalidEncoding,
	#[error("decoded into {actual} bytes where exactly {expected} are expected")]
	InvalidLength { actual: usize, expected: usize },
}

macro_rules! b58_fixed_bytes {
	($(#[$attr:meta])* $name:ident, $len:expr) => {
		$(#[$attr])*
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub struct $name(pub [u8; $len]);

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&bs58::encode(&self.0).into_string())
			}
		}

		impl fmt::Debug for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, concat!(stringify!($name), "({})"), self)
			}
		}

		impl FromStr for $name {
			type Err = ParseError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				bs58::decode(s)
					.into_vec()
					.map_err(|_| ParseError::InvalidEncoding)?
					.try_into()
					.map(Self)
					.map_err(|rejected: Vec<u8>| ParseError::InvalidLength {
						actual: rejected.len(),
						expected: $len,
					})
			}
		}

		impl From<[u8; $len]> for $name {
			fn from(bytes: [u8; $len]) -> Self {
				Self(bytes)
			}
		}

		impl AsRef<[u8]> for $name {
			fn as_ref(&self) -> &[u8] {
				&self.0
			}
		}

		impl serde::Serialize for $name {
			fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
				ser.collect_str(self)
			}
		}

		impl<'de> serde::Deserialize<'de> for $name {
			fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
				let encoded: String = serde::Deserialize::deserialize(de)?;
				encoded.parse().map_err(serde::de::Error::custom)
			}
		}
	};
}

b58_fixed_bytes!(
	/// A 32-byte account (or program) public key, rendered as base58.
	Address,
	SOLANA_ADDRESS_LEN
);
b58_fixed_bytes!(
	/// A 64-byte transaction signature, rendered as base58.
	Signature,
	SOLANA_SIGNATURE_LEN
);
b58_fixed_bytes!(
	/// A 32-byte hash (blockhash, genesis hash), rendered as base58.
	Digest,
	SOLANA_DIGEST_LEN
);
