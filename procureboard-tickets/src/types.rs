//! Procurement ticket types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    New,
    Pending,
    InProgress,
    Approved,
    Rejected,
    Declined,
    Completed,
    Closed,
}

impl TicketStatus {
    /// Every status, in dashboard order
    pub const ALL: [TicketStatus; 8] = [
        Self::New,
        Self::Pending,
        Self::InProgress,
        Self::Approved,
        Self::Rejected,
        Self::Declined,
        Self::Completed,
        Self::Closed,
    ];

    /// Wire value, e.g. `in-progress`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Declined => "declined",
            Self::Completed => "completed",
            Self::Closed => "closed",
        }
    }

    /// Display label, e.g. `In Progress`
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Declined => "Declined",
            Self::Completed => "Completed",
            Self::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = crate::TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| crate::TicketError::invalid_value("status", format!("unknown status '{}'", s)))
    }
}

/// Ticket urgency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A line item on a ticket. Quantities and prices are kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialItem {
    pub id: String,
    pub position: String,
    pub description: String,
    pub material_number: String,
    pub quantity: String,
    pub currency: String,
    pub cost_price: String,
    pub sales_currency: String,
    pub sales_price: String,
    pub vendor: String,
    pub vendor_number: String,
    pub offer_number: String,
    pub requested_delivery_date: String,
    pub confirmed_delivery_date: String,
    pub purchase_order_no: String,
}

impl MaterialItem {
    /// Sales price as a number. Reads the leading numeric part the way a
    /// form field is read, so `"12.50 EUR"` is 12.5; anything unreadable is 0.
    pub fn sales_price_value(&self) -> f64 {
        leading_number(&self.sales_price)
    }
}

/// Sum of the line items' sales prices
pub fn materials_total(items: &[MaterialItem]) -> f64 {
    items.iter().map(MaterialItem::sales_price_value).sum()
}

fn leading_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();
    // Longest prefix that parses wins
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Who wrote a comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentRole {
    Admin,
    #[default]
    User,
    System,
}

/// A comment in a ticket's activity thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketComment {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub role: CommentRole,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub edited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
}

impl TicketComment {
    /// Create a comment stamped now
    pub fn new(author: impl Into<String>, role: CommentRole, message: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("comment-{}", timestamp.timestamp_millis()),
            author: author.into(),
            role,
            message: message.into(),
            timestamp,
            edited: false,
            edited_at: None,
        }
    }
}

/// A procurement request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub ticket_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requester: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_manager: Option<String>,
    #[serde(default)]
    pub materials: Vec<MaterialItem>,
    #[serde(default)]
    pub comments: Vec<TicketComment>,
}

impl Ticket {
    /// Sum of the line items' sales prices
    pub fn materials_total(&self) -> f64 {
        materials_total(&self.materials)
    }
}

/// Fields a caller supplies when opening a ticket; the book assigns the rest.
/// When `materials` is non-empty the ticket amount is their sales total and
/// `amount` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub requester: String,
    pub department: String,
    pub amount: f64,
    pub priority: TicketPriority,
    pub customer_name: Option<String>,
    pub sales_manager: Option<String>,
    pub materials: Vec<MaterialItem>,
}

impl NewTicket {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the requester
    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = requester.into();
        self
    }

    /// Set the department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the amount
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Append a material line item
    pub fn with_material(mut self, item: MaterialItem) -> Self {
        self.materials.push(item);
        self
    }
}
