//! Collaborators the coordinator drives. Implementations live in the host
//! application; everything here is `Send + Sync` so the coordinator can run
//! on a spawned task.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use shared::domain::{AppScreen, Permission, Ticket, TicketView, WorkPeriod};

use crate::{
    explorer::ExplorerQueryRange,
    navigation::{Region, View},
};

/// Render layer: shows a named view in a named region.
pub trait NavigationSink: Send + Sync {
    fn request_navigate(&self, region: Region, view: View) -> anyhow::Result<()>;
}

pub trait ApplicationState: Send + Sync {
    fn current_ticket(&self) -> Option<Ticket>;
    fn current_work_period(&self) -> Option<WorkPeriod>;
    /// Coarse application screen. Read here, maintained elsewhere.
    fn active_app_screen(&self) -> AppScreen;
}

pub trait PermissionChecker: Send + Sync {
    fn is_user_permitted_for(&self, permission: Permission) -> bool;
}

pub trait TicketService: Send + Sync {
    fn close_ticket(&self, ticket: &Ticket) -> anyhow::Result<()>;
}

pub trait TicketList: Send + Sync {
    fn clear_selected_department(&self);
}

pub trait TicketExplorer: Send + Sync {
    fn set_range(&self, range: ExplorerQueryRange);
    /// Reloads the displayed tickets. May return before the reload completes.
    fn refresh(&self) -> anyhow::Result<()>;
}

pub trait MenuItemSelector: Send + Sync {
    fn handle_text_input(&self, text: &str) -> bool;
}

pub trait SelectedOrdersDisplay: Send + Sync {
    fn should_display(&self, ticket_view: &TicketView) -> bool;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, matching how work period dates are recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Clone)]
pub struct Collaborators {
    pub navigation: Arc<dyn NavigationSink>,
    pub app_state: Arc<dyn ApplicationState>,
    pub permissions: Arc<dyn PermissionChecker>,
    pub tickets: Arc<dyn TicketService>,
    pub ticket_list: Arc<dyn TicketList>,
    pub ticket_explorer: Arc<dyn TicketExplorer>,
    pub menu_items: Arc<dyn MenuItemSelector>,
    pub selected_orders: Arc<dyn SelectedOrdersDisplay>,
    pub clock: Arc<dyn Clock>,
}
