use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(TicketId);
id_newtype!(OrderId);
id_newtype!(UserId);
id_newtype!(DepartmentId);
id_newtype!(WorkPeriodId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub ticket_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

/// Editor-side view of a ticket: which orders the user currently has selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketView {
    pub ticket_id: TicketId,
    #[serde(default)]
    pub selected_order_ids: Vec<OrderId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
}

/// Open accounting interval. Dates are local wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPeriod {
    pub work_period_id: WorkPeriodId,
    pub start_date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    DisplayOldTickets,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::DisplayOldTickets => "DisplayOldTickets",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse-grained screen of the whole application, tracked outside the ticket editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppScreen {
    LoginScreen,
    Navigation,
    SingleTicket,
    TicketList,
    Payment,
    Dashboard,
}

impl AppScreen {
    pub const ALL: [AppScreen; 6] = [
        AppScreen::LoginScreen,
        AppScreen::Navigation,
        AppScreen::SingleTicket,
        AppScreen::TicketList,
        AppScreen::Payment,
        AppScreen::Dashboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppScreen::LoginScreen => "login_screen",
            AppScreen::Navigation => "navigation",
            AppScreen::SingleTicket => "single_ticket",
            AppScreen::TicketList => "ticket_list",
            AppScreen::Payment => "payment",
            AppScreen::Dashboard => "dashboard",
        }
    }

    /// Screens on which typed text belongs to the ticket editor.
    pub fn accepts_ticket_text(self) -> bool {
        matches!(self, AppScreen::TicketList | AppScreen::SingleTicket)
    }
}

impl fmt::Display for AppScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppScreen {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AppScreen::ALL
            .into_iter()
            .find(|screen| screen.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownName::new("app screen", wanted))
    }
}
