use crate::Address;

pub const SOLANA_SIGNATURE_LEN: usize = 64;
pub const SOLANA_ADDRESS_LEN: usize = 32;
pub const SOLANA_DIGEST_LEN: usize = 32;

// 1 SOL = 1,000,000,000 lamports.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const fn const_address(s: &'static str) -> Address {
	Address(bs58_array(s))
}

// Solana native programs
pub const SYSTEM_PROGRAM_ID: Address = const_address("11111111111111111111111111111111");

/// Decode a base58 string literal into a fixed-size byte array at compile time.
///
/// Panics (at compile time) on characters outside the base58 alphabet and on
/// values that do not fit `N` bytes.
pub const fn bs58_array<const N: usize>(s: &'static str) -> [u8; N] {
	const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

	let input = s.as_bytes();
	let mut out = [0u8; N];

	let mut i = 0;
	while i < input.len() {
		let mut digit = usize::MAX;
		let mut j = 0;
		while j < ALPHABET.len() {
			if ALPHABET[j] == input[i] {
				digit = j;
				break
			}
			j += 1;
		}
		assert!(digit != usize::MAX, "character outside of the base58 alphabet");

		// out <- out * 58 + digit, big-endian.
		let mut carry = digit;
		let mut k = N;
		while k > 0 {
			k -= 1;
			let accumulated = out[k] as usize * 58 + carry;
			out[k] = (accumulated % 256) as u8;
			carry = accumulated / 256;
		}
		assert!(carry == 0, "base58 value does not fit the expected byte-length");

		i += 1;
	}

	out
}
