//! Per-visitor record of chosen reactions.
//!
//! The worker only keeps aggregate counts. Which reaction this visitor picked
//! is remembered in a cookie as `entry:reaction` pairs joined by `|`, newest
//! last, capped at [`MAX_REMEMBERED`] pairs.

pub const REACTIONS_COOKIE: &str = "reactions";
pub const MAX_REMEMBERED: usize = 64;
const MAX_TOKEN_LEN: usize = 64;

/// Ids and reaction names are restricted to cookie- and URL-safe tokens.
#[must_use]
pub fn is_token(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_TOKEN_LEN
        && raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionLedger {
    /// `(entry_id, reaction)` in insertion order, unique by entry.
    picks: Vec<(String, String)>,
}

impl ReactionLedger {
    /// Decode a cookie value, dropping malformed pairs.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut ledger = Self::default();
        for pair in raw.split('|') {
            let Some((entry, reaction)) = pair.split_once(':') else {
                continue;
            };
            if is_token(entry) && is_token(reaction) {
                ledger.record(entry, reaction);
            }
        }
        ledger
    }

    #[must_use]
    pub fn get(&self, entry_id: &str) -> Option<&str> {
        self.picks
            .iter()
            .find(|(entry, _)| entry == entry_id)
            .map(|(_, reaction)| reaction.as_str())
    }

    /// Remember `reaction` for `entry_id`, replacing any earlier pick.
    ///
    /// Invalid tokens are ignored. The oldest pick is evicted past the cap.
    pub fn record(&mut self, entry_id: &str, reaction: &str) {
        if !is_token(entry_id) || !is_token(reaction) {
            return;
        }
        self.picks.retain(|(entry, _)| entry != entry_id);
        self.picks.push((entry_id.to_owned(), reaction.to_owned()));
        if self.picks.len() > MAX_REMEMBERED {
            let excess = self.picks.len() - MAX_REMEMBERED;
            self.picks.drain(..excess);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Encode for the cookie value.
    #[must_use]
    pub fn encode(&self) -> String {
        self.picks
            .iter()
            .map(|(entry, reaction)| format!("{entry}:{reaction}"))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
#[path = "reactions_test.rs"]
mod tests;
