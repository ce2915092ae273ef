//! In-memory ticket book, newest ticket first

use crate::error::{Result, TicketError};
use crate::types::{materials_total, NewTicket, Ticket, TicketComment, TicketStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Ordered collection of tickets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketBook {
    tickets: Vec<Ticket>,
}

impl TicketBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt existing tickets in the given order
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// All tickets, newest first
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Open a ticket stamped now. Returns the assigned id.
    pub fn add(&mut self, ticket: NewTicket) -> Result<String> {
        self.add_at(ticket, Utc::now())
    }

    /// Open a ticket with an explicit creation time.
    ///
    /// The id is `PRO-<millis>`; when two tickets land in the same
    /// millisecond the later one takes the next free value.
    pub fn add_at(&mut self, ticket: NewTicket, now: DateTime<Utc>) -> Result<String> {
        if ticket.title.trim().is_empty() {
            return Err(TicketError::missing_field("title"));
        }

        let mut millis = now.timestamp_millis();
        let id = loop {
            let candidate = format!("PRO-{}", millis);
            if self.get(&candidate).is_none() {
                break candidate;
            }
            millis += 1;
        };

        let NewTicket {
            title,
            description,
            requester,
            department,
            amount,
            priority,
            customer_name,
            sales_manager,
            materials,
        } = ticket;
        let amount = if materials.is_empty() {
            amount
        } else {
            materials_total(&materials)
        };

        self.tickets.insert(
            0,
            Ticket {
                id: id.clone(),
                ticket_id: id.clone(),
                title,
                description,
                requester,
                department,
                amount,
                priority,
                status: TicketStatus::Pending,
                created_at: now,
                customer_name,
                sales_manager,
                materials,
                comments: Vec::new(),
            },
        );

        info!(ticket = %id, "ticket created");
        Ok(id)
    }

    /// Replace the ticket with the same id, keeping its position
    pub fn update(&mut self, ticket: Ticket) -> Result<()> {
        let slot = self.get_mut(&ticket.id)?;
        *slot = ticket;
        info!(ticket = %slot.id, "ticket updated");
        Ok(())
    }

    /// Remove a ticket, returning it
    pub fn delete(&mut self, id: &str) -> Result<Ticket> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TicketError::not_found(id))?;
        let removed = self.tickets.remove(index);
        info!(ticket = %id, "ticket deleted");
        Ok(removed)
    }

    /// Change a ticket's status, returning the previous one
    pub fn update_status(&mut self, id: &str, status: TicketStatus) -> Result<TicketStatus> {
        let ticket = self.get_mut(id)?;
        let previous = std::mem::replace(&mut ticket.status, status);
        info!(ticket = %id, from = %previous, to = %status, "ticket status changed");
        Ok(previous)
    }

    /// Append a comment to a ticket's thread
    pub fn add_comment(&mut self, id: &str, comment: TicketComment) -> Result<()> {
        let ticket = self.get_mut(id)?;
        debug!(ticket = %id, author = %comment.author, "comment added");
        ticket.comments.push(comment);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TicketError::not_found(id))
    }
}
