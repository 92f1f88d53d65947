use serde::*;

/// Bounds over [`ModVersion`].
pub type ModVersionBounds = super::VersionBounds<ModVersion>;

/// A package version of the form `[epoch:]version`.
///
/// The epoch exists to force a reordering when a mod changes its versioning
/// scheme; versions without one compare as epoch 0.
#[derive(Debug, Clone, Eq, Hash, Serialize, Deserialize)]
pub struct ModVersion {
	epoch: i32,
	version: String,
}

impl ModVersion {
	pub fn new(version: &str) -> crate::Result<Self> {
		let spl: Vec<&str> = version.splitn(2, ':').collect();
		if spl[spl.len() - 1].is_empty() {
			return Err(crate::Error::Parse(format!("`{}` is not a valid version", version)));
		}
		Ok(ModVersion {
			epoch: if spl.len() == 2 {
				spl[0].parse::<i32>().map_err(|_| crate::Error::Parse(format!("`{}` is not a valid epoch", spl[0])))?
			} else {
				0
			},
			version: spl[spl.len() - 1].to_string(),
		})
	}
}

impl TryFrom<&str> for ModVersion {
	type Error = crate::Error;
	fn try_from(value: &str) -> Result<Self, Self::Error> { Self::new(value) }
}

impl std::fmt::Display for ModVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.epoch == 0 {
			write!(f, "{}", self.version)
		} else {
			write!(f, "{}:{}", self.epoch, self.version)
		}
	}
}

impl PartialEq for ModVersion {
	fn eq(&self, other: &Self) -> bool {
		self.epoch == other.epoch && self.version == other.version
	}
}

impl Ord for ModVersion {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match self.epoch.cmp(&other.epoch) {
			std::cmp::Ordering::Equal => compare_version_strings(&self.version, &other.version),
			ord => ord,
		}
	}
}

impl PartialOrd for ModVersion {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

/// Compares version strings segment-wise so that `1.10` sorts after `1.9`.
///
/// Runs of digits compare numerically, everything else lexically. Falls back
/// to a plain string comparison for numeric segments too large to parse.
fn compare_version_strings(lhs: &str, rhs: &str) -> std::cmp::Ordering {
	let mut l = segments(lhs).into_iter();
	let mut r = segments(rhs).into_iter();
	loop {
		match (l.next(), r.next()) {
			(None, None) => return std::cmp::Ordering::Equal,
			(None, Some(_)) => return std::cmp::Ordering::Less,
			(Some(_), None) => return std::cmp::Ordering::Greater,
			(Some(a), Some(b)) => {
				let ord = match (a.parse::<u64>(), b.parse::<u64>()) {
					(Ok(na), Ok(nb)) => na.cmp(&nb),
					_ => a.cmp(b),
				};
				if ord != std::cmp::Ordering::Equal {
					return ord;
				}
			}
		}
	}
}

/// Splits a version string into alternating non-numeric and numeric runs.
fn segments(s: &str) -> Vec<&str> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut numeric = None::<bool>;
	for (i, c) in s.char_indices() {
		let n = c.is_ascii_digit();
		if numeric != Some(n) {
			if i != start {
				out.push(&s[start..i]);
				start = i;
			}
			numeric = Some(n);
		}
	}
	if start < s.len() {
		out.push(&s[start..]);
	}
	out
}
