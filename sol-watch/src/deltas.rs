use sol_prim::Amount;

/// The net balance movement of a single account across one transaction, in
/// display units.
///
/// `amount_transferred` is positive when the account paid out, negative when
/// it received (pre-balance minus post-balance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceDelta {
	pub account_index: usize,
	pub amount_transferred: f64,
}

/// The pre- and post-execution balance sheets of one transaction must be
/// index-aligned: differing lengths mean the inputs cannot be trusted, and
/// truncating to the shorter one would silently drop accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("balance sheets differ in shape: {pre_len} pre vs {post_len} post entries")]
pub struct ShapeMismatch {
	pub pre_len: usize,
	pub post_len: usize,
}

/// For each account position, the difference between its balance before and
/// after the transaction, skipping the accounts that saw no movement.
///
/// The raw difference is taken in `i128` (a difference of two `u64` balances
/// does not fit `i64` in general) and only then scaled down by
/// `conversion_factor` into an `f64` amount of display units.
pub fn extract_deltas(
	pre: &[Amount],
	post: &[Amount],
	conversion_factor: Amount,
) -> Result<Vec<BalanceDelta>, ShapeMismatch> {
	if pre.len() != post.len() {
		return Err(ShapeMismatch { pre_len: pre.len(), post_len: post.len() })
	}

	Ok(pre
		.iter()
		.zip(post)
		.enumerate()
		.filter_map(|(account_index, (&before, &after))| {
			let raw_delta = before as i128 - after as i128;
			(raw_delta != 0).then(|| BalanceDelta {
				account_index,
				amount_transferred: raw_delta as f64 / conversion_factor as f64,
			})
		})
		.collect())
}
