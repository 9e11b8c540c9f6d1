use core::{fmt, str::FromStr};

pub type JsValue = serde_json::Value;

/// The level of finality a queried node is asked to assume.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
	Processed = 1,
	Confirmed = 2,
	Finalized = 3,
}

impl Default for Commitment {
	fn default() -> Self {
		Self::Finalized
	}
}

impl Commitment {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Processed => "processed",
			Self::Confirmed => "confirmed",
			Self::Finalized => "finalized",
		}
	}
}

impl fmt::Display for Commitment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown commitment level: {0:?} (expected processed, confirmed or finalized)")]
pub struct InvalidCommitment(String);

impl FromStr for Commitment {
	type Err = InvalidCommitment;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"processed" => Ok(Self::Processed),
			"confirmed" => Ok(Self::Confirmed),
			"finalized" => Ok(Self::Finalized),
			unknown => Err(InvalidCommitment(unknown.to_owned())),
		}
	}
}
