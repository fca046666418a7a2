//! In-memory stand-ins for the render layer and domain services, so the
//! coordinator can be driven headless from a script.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDateTime;
use shared::domain::{
    AppScreen, DepartmentId, Permission, Ticket, TicketId, TicketView, WorkPeriod, WorkPeriodId,
};
use ticket_editor::{
    ApplicationState, Collaborators, ExplorerQueryRange, MenuItemSelector, NavigationSink,
    PermissionChecker, Region, SelectedOrdersDisplay, SystemClock, TicketExplorer, TicketList,
    TicketService, View,
};
use tracing::info;

use crate::config::Settings;

#[derive(Default)]
pub struct RecordedNavigation {
    requests: Mutex<Vec<(Region, View)>>,
}

impl RecordedNavigation {
    pub fn requests(&self) -> Vec<(Region, View)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NavigationSink for RecordedNavigation {
    fn request_navigate(&self, region: Region, view: View) -> anyhow::Result<()> {
        info!(%region, %view, "render view");
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((region, view));
        Ok(())
    }
}

pub struct SessionState {
    ticket: Mutex<Option<Ticket>>,
    work_period: WorkPeriod,
    active_app_screen: AppScreen,
}

impl SessionState {
    fn take_ticket(&self) -> Option<Ticket> {
        self.ticket
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl ApplicationState for SessionState {
    fn current_ticket(&self) -> Option<Ticket> {
        self.ticket
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn current_work_period(&self) -> Option<WorkPeriod> {
        Some(self.work_period.clone())
    }

    fn active_app_screen(&self) -> AppScreen {
        self.active_app_screen
    }
}

pub struct StaticPermissions {
    display_old_tickets: bool,
}

impl PermissionChecker for StaticPermissions {
    fn is_user_permitted_for(&self, permission: Permission) -> bool {
        match permission {
            Permission::DisplayOldTickets => self.display_old_tickets,
        }
    }
}

/// Closing a ticket detaches it from the session.
pub struct SessionTickets {
    session: Arc<SessionState>,
    closed: Mutex<Vec<TicketId>>,
}

impl SessionTickets {
    pub fn closed(&self) -> Vec<TicketId> {
        self.closed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TicketService for SessionTickets {
    fn close_ticket(&self, ticket: &Ticket) -> anyhow::Result<()> {
        info!(ticket_number = %ticket.ticket_number, "ticket closed");
        self.session.take_ticket();
        self.closed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ticket.ticket_id);
        Ok(())
    }
}

pub struct DepartmentFilter {
    selected: Mutex<Option<DepartmentId>>,
}

impl DepartmentFilter {
    pub fn selected(&self) -> Option<DepartmentId> {
        *self.selected.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketList for DepartmentFilter {
    fn clear_selected_department(&self) {
        *self.selected.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[derive(Default)]
pub struct ExplorerLog {
    range: Mutex<Option<ExplorerQueryRange>>,
}

impl ExplorerLog {
    pub fn range(&self) -> Option<ExplorerQueryRange> {
        *self.range.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketExplorer for ExplorerLog {
    fn set_range(&self, range: ExplorerQueryRange) {
        *self.range.lock().unwrap_or_else(PoisonError::into_inner) = Some(range);
    }

    fn refresh(&self) -> anyhow::Result<()> {
        if let Some(range) = self.range() {
            info!(start = %range.start, end = %range.end, "listing tickets");
        }
        Ok(())
    }
}

/// Accepts digit-only input, the quantity prefix typed before picking a menu item.
pub struct QuantityEntry;

impl MenuItemSelector for QuantityEntry {
    fn handle_text_input(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
    }
}

pub struct SelectionDisplay;

impl SelectedOrdersDisplay for SelectionDisplay {
    fn should_display(&self, ticket_view: &TicketView) -> bool {
        !ticket_view.selected_order_ids.is_empty()
    }
}

/// One terminal session: an open work period and a ticket being edited.
pub struct Shell {
    pub navigation: Arc<RecordedNavigation>,
    pub session: Arc<SessionState>,
    pub tickets: Arc<SessionTickets>,
    pub departments: Arc<DepartmentFilter>,
    pub explorer: Arc<ExplorerLog>,
    display_old_tickets: bool,
}

impl Shell {
    pub fn open(settings: &Settings, opened_at: NaiveDateTime) -> Self {
        let session = Arc::new(SessionState {
            ticket: Mutex::new(Some(Ticket {
                ticket_id: TicketId(1),
                ticket_number: "00001".into(),
                department_id: Some(DepartmentId(1)),
            })),
            work_period: WorkPeriod {
                work_period_id: WorkPeriodId(1),
                start_date: opened_at,
                end_date: None,
            },
            active_app_screen: settings.active_app_screen,
        });

        Self {
            navigation: Arc::default(),
            tickets: Arc::new(SessionTickets {
                session: session.clone(),
                closed: Mutex::new(Vec::new()),
            }),
            session,
            departments: Arc::new(DepartmentFilter {
                selected: Mutex::new(Some(DepartmentId(1))),
            }),
            explorer: Arc::default(),
            display_old_tickets: settings.display_old_tickets,
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            navigation: self.navigation.clone(),
            app_state: self.session.clone(),
            permissions: Arc::new(StaticPermissions {
                display_old_tickets: self.display_old_tickets,
            }),
            tickets: self.tickets.clone(),
            ticket_list: self.departments.clone(),
            ticket_explorer: self.explorer.clone(),
            menu_items: Arc::new(QuantityEntry),
            selected_orders: Arc::new(SelectionDisplay),
            clock: Arc::new(SystemClock),
        }
    }
}
