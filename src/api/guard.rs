use std::cell::RefCell;
use std::collections::HashMap;

/// Handle for one in-flight request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
	key: String,
	generation: u64,
}

impl Ticket {
	pub fn key(&self) -> &str {
		&self.key
	}
}

/// Tracks the newest request per key so responses from superseded requests
/// can be dropped. Requests for the same key race freely; only the last one
/// issued may publish.
#[derive(Debug, Default)]
pub struct LatestRequests {
	latest: RefCell<HashMap<String, u64>>,
}

impl LatestRequests {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn issue(&self, key: impl Into<String>) -> Ticket {
		let key = key.into();
		let mut latest = self.latest.borrow_mut();
		let generation = latest.get(&key).map_or(1, |g| g + 1);
		latest.insert(key.clone(), generation);
		Ticket { key, generation }
	}

	pub fn is_latest(&self, ticket: &Ticket) -> bool {
		self.latest.borrow().get(&ticket.key) == Some(&ticket.generation)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_newest_ticket_per_key_is_current() {
		let guard = LatestRequests::new();
		let first = guard.issue("keywords");
		let second = guard.issue("keywords");
		assert!(!guard.is_latest(&first));
		assert!(guard.is_latest(&second));
	}

	#[test]
	fn keys_are_independent() {
		let guard = LatestRequests::new();
		let a = guard.issue("a");
		let b = guard.issue("b");
		let _a2 = guard.issue("a");
		assert!(!guard.is_latest(&a));
		assert!(guard.is_latest(&b));
		assert_eq!(b.key(), "b");
	}
}
