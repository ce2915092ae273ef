//! Dashboard views over a ticket list: status tabs, search and counters

use crate::types::{Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

/// Which status tab or page is selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(TicketStatus),
    /// Any of several statuses, e.g. the rejected page showing rejected and
    /// declined tickets together
    AnyOf(Vec<TicketStatus>),
}

impl StatusFilter {
    /// Rejected and declined tickets
    pub fn rejected() -> Self {
        Self::AnyOf(vec![TicketStatus::Rejected, TicketStatus::Declined])
    }

    pub fn matches(&self, status: TicketStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
            Self::AnyOf(wanted) => wanted.contains(&status),
        }
    }
}

impl From<TicketStatus> for StatusFilter {
    fn from(status: TicketStatus) -> Self {
        Self::Only(status)
    }
}

/// Tickets matching the status filter and, when `search` is non-empty,
/// containing it (case-insensitive) in the id, title, description,
/// requester or department. Order is preserved.
pub fn filter_tickets<'a>(
    tickets: &'a [Ticket],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a Ticket> {
    let term = search.to_lowercase();
    tickets
        .iter()
        .filter(|ticket| status.matches(ticket.status))
        .filter(|ticket| term.is_empty() || matches_search(ticket, &term))
        .collect()
}

fn matches_search(ticket: &Ticket, term: &str) -> bool {
    [
        &ticket.id,
        &ticket.title,
        &ticket.description,
        &ticket.requester,
        &ticket.department,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(term))
}

/// Number of tickets per status tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub all: usize,
    pub new: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub approved: usize,
    pub rejected: usize,
    pub declined: usize,
    pub completed: usize,
    pub closed: usize,
}

impl StatusCounts {
    /// Counter for one status
    pub fn get(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::New => self.new,
            TicketStatus::Pending => self.pending,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Approved => self.approved,
            TicketStatus::Rejected => self.rejected,
            TicketStatus::Declined => self.declined,
            TicketStatus::Completed => self.completed,
            TicketStatus::Closed => self.closed,
        }
    }

    /// Share of rejected tickets in percent, 0 when there are none
    pub fn rejection_rate(&self) -> f64 {
        self.rate(self.rejected)
    }

    /// Share of approved tickets in percent, 0 when there are none
    pub fn approval_rate(&self) -> f64 {
        self.rate(self.approved)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.all == 0 {
            return 0.0;
        }
        count as f64 / self.all as f64 * 100.0
    }

    fn bump(&mut self, status: TicketStatus) {
        let slot = match status {
            TicketStatus::New => &mut self.new,
            TicketStatus::Pending => &mut self.pending,
            TicketStatus::InProgress => &mut self.in_progress,
            TicketStatus::Approved => &mut self.approved,
            TicketStatus::Rejected => &mut self.rejected,
            TicketStatus::Declined => &mut self.declined,
            TicketStatus::Completed => &mut self.completed,
            TicketStatus::Closed => &mut self.closed,
        };
        *slot += 1;
    }
}

pub fn status_counts(tickets: &[Ticket]) -> StatusCounts {
    tickets.iter().fold(StatusCounts::default(), |mut counts, ticket| {
        counts.all += 1;
        counts.bump(ticket.status);
        counts
    })
}
