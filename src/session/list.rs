//! Bounded process listing with an explicit truncation signal

use super::{RawList, TrackingSession, DEFAULT_LIST_CAPACITY, MAX_LIST_CAPACITY};
use crate::core::types::{ErrorCode, ProcessRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do when more processes exist than fit the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TruncationPolicy {
    /// Report the records that fit and flag the listing as truncated
    #[default]
    Report,
    /// Ask again with a buffer sized to what the service says it needs
    FetchAll,
}

/// Buffer sizing for the listing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPolicy {
    pub capacity: usize,
    pub truncation: TruncationPolicy,
    pub max_fetch_attempts: u32,
}

impl Default for ListPolicy {
    fn default() -> Self {
        ListPolicy {
            capacity: DEFAULT_LIST_CAPACITY,
            truncation: TruncationPolicy::Report,
            max_fetch_attempts: 4,
        }
    }
}

/// Result of the listing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutcome {
    pub code: ErrorCode,
    pub needed: usize,
    pub records: Vec<ProcessRecord>,
    /// More processes exist than were returned
    pub truncated: bool,
    pub attempts: u32,
    pub reboot_reasons: u32,
}

impl ListOutcome {
    /// Whether the records can be reported. `ERROR_MORE_DATA` still
    /// carries whatever fitted the buffer.
    pub fn is_usable(&self) -> bool {
        matches!(self.code, ErrorCode::Success | ErrorCode::MoreData)
    }

    /// How many records the service did not hand back
    pub fn missing(&self) -> usize {
        self.needed.saturating_sub(self.records.len())
    }
}

/// Run the listing step against `session` according to `policy`
pub fn fetch_list<S: TrackingSession + ?Sized>(session: &mut S, policy: &ListPolicy) -> ListOutcome {
    let mut capacity = policy.capacity.clamp(1, MAX_LIST_CAPACITY);
    let max_attempts = policy.max_fetch_attempts.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        let RawList {
            code,
            needed,
            mut records,
            reboot_reasons,
        } = session.get_list(capacity);

        // never report more than the buffer could hold
        records.truncate(capacity);

        let retry = code == ErrorCode::MoreData
            && policy.truncation == TruncationPolicy::FetchAll
            && attempts < max_attempts
            && needed > capacity
            && capacity < MAX_LIST_CAPACITY;
        if retry {
            debug!(
                attempt = attempts,
                capacity, needed, "Process list did not fit, growing buffer"
            );
            capacity = needed.min(MAX_LIST_CAPACITY);
            continue;
        }

        let usable = matches!(code, ErrorCode::Success | ErrorCode::MoreData);
        let truncated = usable && needed > records.len();
        if truncated {
            warn!(
                returned = records.len(),
                needed, "Process list truncated, not all holders are reported"
            );
        }

        return ListOutcome {
            code,
            needed,
            records,
            truncated,
            attempts,
            reboot_reasons,
        };
    }
}
