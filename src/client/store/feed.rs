//! Authoritative local list of emergency requests for one barangay.
//!
//! The list is owned exclusively by the feed component and mutated only
//! through [`FeedList::apply`] and [`FeedList::merge_initial`]. Display
//! order is never stored; [`FeedList::visible`] recomputes it from the raw
//! list and the current filters on every render, so partial updates cannot
//! make the order drift.

use crate::model::emergency::{status_priority, EmergencyRequestDto, RequestStatus};
use crate::model::stream::{ChangeEvent, ChangeEventType, EMERGENCY_REQUEST_TABLE};

/// Raised when a change event warrants a user-facing alert.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedAlert {
    pub request_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct FeedList {
    requests: Vec<EmergencyRequestDto>,
}

impl FeedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[EmergencyRequestDto] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Merges the initial fetch result into the list.
    ///
    /// Stream events can land before the initial fetch completes, so rows
    /// already present (keyed by id) win over the fetched copy rather than
    /// being overwritten by the older snapshot.
    pub fn merge_initial(&mut self, fetched: Vec<EmergencyRequestDto>) {
        for request in fetched {
            if !self.requests.iter().any(|r| r.id == request.id) {
                self.requests.push(request);
            }
        }
    }

    /// Applies one live change event. Returns an alert for newly arrived
    /// Pending requests; updates and deletes never alert.
    pub fn apply(&mut self, event: &ChangeEvent) -> Option<FeedAlert> {
        if event.table != EMERGENCY_REQUEST_TABLE {
            return None;
        }

        match event.event_type {
            ChangeEventType::Insert => {
                let request = decode(event.new.as_ref())?;
                if self.requests.iter().any(|r| r.id == request.id) {
                    return None;
                }
                let alert = (request.status == RequestStatus::Pending.as_str())
                    .then(|| FeedAlert {
                        request_type: request.request_type.clone(),
                    });
                self.requests.insert(0, request);
                alert
            }
            ChangeEventType::Update => {
                let request = decode(event.new.as_ref())?;
                match self.requests.iter_mut().find(|r| r.id == request.id) {
                    // Replace in place; list order is left untouched.
                    Some(existing) => *existing = request,
                    // Update arrived before the initial fetch; keep it.
                    None => self.requests.push(request),
                }
                None
            }
            ChangeEventType::Delete => {
                if let Some(request) = decode(event.old.as_ref()) {
                    self.requests.retain(|r| r.id != request.id);
                }
                None
            }
        }
    }

    /// The derived view: status filter, then case-insensitive search over
    /// request type and details, then the two-key triage sort: status
    /// priority ascending, newest first within the same priority band.
    pub fn visible(
        &self,
        filter_status: Option<RequestStatus>,
        search: &str,
    ) -> Vec<&EmergencyRequestDto> {
        let needle = search.trim().to_lowercase();

        let mut view: Vec<&EmergencyRequestDto> = self
            .requests
            .iter()
            .filter(|r| match filter_status {
                Some(status) => r.status == status.as_str(),
                None => true,
            })
            .filter(|r| {
                if needle.is_empty() {
                    return true;
                }
                r.request_type.to_lowercase().contains(&needle)
                    || r.details
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect();

        view.sort_by(|a, b| {
            status_priority(&a.status)
                .cmp(&status_priority(&b.status))
                .then(b.created_at.cmp(&a.created_at))
        });

        view
    }
}

fn decode(payload: Option<&serde_json::Value>) -> Option<EmergencyRequestDto> {
    serde_json::from_value(payload?.clone()).ok()
}
