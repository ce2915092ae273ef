//! Procurement tickets for the dashboard tables
//!
//! A [`TicketBook`] holds requests newest first. The table views are plain
//! functions over a ticket slice: [`filter_tickets`] for the status tabs and
//! search box, [`status_counts`] for the tab badges and [`paginate`] for
//! the footer.
//!
//! ```rust
//! use procureboard_tickets::{filter_tickets, paginate, NewTicket, StatusFilter, TicketBook};
//!
//! let mut book = TicketBook::new();
//! book.add(NewTicket::new("Laptops").with_department("Engineering"))?;
//!
//! let hits = filter_tickets(book.tickets(), StatusFilter::All, "engineer");
//! let page = paginate(&hits, 1, 10)?;
//! assert_eq!(page.summary(), "Showing 1-1 of 1");
//! # Ok::<(), procureboard_tickets::TicketError>(())
//! ```

pub mod book;
mod error;
pub mod filter;
pub mod page;
pub mod types;

pub use book::TicketBook;
pub use error::{Result, TicketError};
pub use filter::{filter_tickets, status_counts, StatusCounts, StatusFilter};
pub use page::{paginate, Page};
pub use types::{
    materials_total, CommentRole, MaterialItem, NewTicket, Ticket, TicketComment, TicketPriority,
    TicketStatus,
};
