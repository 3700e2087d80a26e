use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BreachRecord {
    pub breaches: Vec<String>,
    pub email: String,
}

impl BreachRecord {
    pub fn new(email: &str, breaches: Vec<String>) -> Self {
        Self { breaches, email: email.into() }
    }

    pub fn is_breached(&self) -> bool {
        !self.breaches.is_empty()
    }
}



/// Every account found in at least one breach, in the order they were checked.
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct BreachedAccounts {
    accounts: Vec<BreachRecord>,
}

impl BreachedAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false, leaving the set untouched, if the record has no breaches.
    pub fn record(&mut self, record: BreachRecord) -> bool {
        if record.is_breached() {
            self.accounts.push(record);
            true
        } else {
            false
        }
    }

    pub fn accounts(&self) -> &[BreachRecord] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
