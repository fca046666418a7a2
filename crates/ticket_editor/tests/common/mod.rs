#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use anyhow::anyhow;
use chrono::{NaiveDate, NaiveDateTime};
use event_bus::EventBus;
use shared::{
    domain::{
        AppScreen, OrderId, Permission, Ticket, TicketId, TicketView, User, UserId, WorkPeriod,
        WorkPeriodId,
    },
    protocol::{DomainEvent, EventTopic},
};
use ticket_editor::{
    ApplicationState, Clock, Collaborators, ExplorerQueryRange, MenuItemSelector, NavigationSink,
    PermissionChecker, Region, ScreenCoordinator, SelectedOrdersDisplay, SystemClock,
    TicketExplorer, TicketList, TicketService, View,
};

#[derive(Default)]
pub struct RecordingNavigation {
    requests: Mutex<Vec<(Region, View)>>,
    failing_view: Mutex<Option<View>>,
}

impl RecordingNavigation {
    pub fn requests(&self) -> Vec<(Region, View)> {
        self.requests.lock().expect("requests").clone()
    }

    pub fn sub_views(&self) -> Vec<View> {
        self.requests()
            .into_iter()
            .filter(|(region, _)| *region == Region::TicketSubRegion)
            .map(|(_, view)| view)
            .collect()
    }

    pub fn last_sub_view(&self) -> Option<View> {
        self.sub_views().last().copied()
    }

    pub fn clear(&self) {
        self.requests.lock().expect("requests").clear();
    }

    pub fn fail_on(&self, view: View) {
        *self.failing_view.lock().expect("failing view") = Some(view);
    }
}

impl NavigationSink for RecordingNavigation {
    fn request_navigate(&self, region: Region, view: View) -> anyhow::Result<()> {
        if *self.failing_view.lock().expect("failing view") == Some(view) {
            return Err(anyhow!("view {view} is not registered"));
        }
        self.requests.lock().expect("requests").push((region, view));
        Ok(())
    }
}

pub struct FakeAppState {
    ticket: Mutex<Option<Ticket>>,
    work_period: Mutex<Option<WorkPeriod>>,
    screen: Mutex<AppScreen>,
}

impl Default for FakeAppState {
    fn default() -> Self {
        Self {
            ticket: Mutex::new(None),
            work_period: Mutex::new(Some(work_period_opened_at(at(2024, 6, 3, 9, 45)))),
            screen: Mutex::new(AppScreen::TicketList),
        }
    }
}

impl FakeAppState {
    pub fn set_ticket(&self, ticket: Option<Ticket>) {
        *self.ticket.lock().expect("ticket") = ticket;
    }

    pub fn set_work_period(&self, work_period: Option<WorkPeriod>) {
        *self.work_period.lock().expect("work period") = work_period;
    }

    pub fn set_screen(&self, screen: AppScreen) {
        *self.screen.lock().expect("screen") = screen;
    }
}

impl ApplicationState for FakeAppState {
    fn current_ticket(&self) -> Option<Ticket> {
        self.ticket.lock().expect("ticket").clone()
    }

    fn current_work_period(&self) -> Option<WorkPeriod> {
        self.work_period.lock().expect("work period").clone()
    }

    fn active_app_screen(&self) -> AppScreen {
        *self.screen.lock().expect("screen")
    }
}

#[derive(Default)]
pub struct FakePermissions {
    display_old_tickets: AtomicBool,
}

impl FakePermissions {
    pub fn grant_display_old_tickets(&self, granted: bool) {
        self.display_old_tickets.store(granted, Ordering::SeqCst);
    }
}

impl PermissionChecker for FakePermissions {
    fn is_user_permitted_for(&self, permission: Permission) -> bool {
        match permission {
            Permission::DisplayOldTickets => self.display_old_tickets.load(Ordering::SeqCst),
        }
    }
}

#[derive(Default)]
pub struct RecordingTicketService {
    closed: Mutex<Vec<TicketId>>,
    fail: AtomicBool,
}

impl RecordingTicketService {
    pub fn closed(&self) -> Vec<TicketId> {
        self.closed.lock().expect("closed").clone()
    }

    pub fn fail_closing(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl TicketService for RecordingTicketService {
    fn close_ticket(&self, ticket: &Ticket) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("ticket {} is locked", ticket.ticket_number));
        }
        self.closed.lock().expect("closed").push(ticket.ticket_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingTicketList {
    department_clears: AtomicUsize,
}

impl RecordingTicketList {
    pub fn department_clears(&self) -> usize {
        self.department_clears.load(Ordering::SeqCst)
    }
}

impl TicketList for RecordingTicketList {
    fn clear_selected_department(&self) {
        self.department_clears.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingExplorer {
    ranges: Mutex<Vec<ExplorerQueryRange>>,
    refreshes: AtomicUsize,
}

impl RecordingExplorer {
    pub fn ranges(&self) -> Vec<ExplorerQueryRange> {
        self.ranges.lock().expect("ranges").clone()
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl TicketExplorer for RecordingExplorer {
    fn set_range(&self, range: ExplorerQueryRange) {
        self.ranges.lock().expect("ranges").push(range);
    }

    fn refresh(&self) -> anyhow::Result<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMenuItemSelector {
    accepts: AtomicBool,
    inputs: Mutex<Vec<String>>,
}

impl FakeMenuItemSelector {
    pub fn accept_text(&self, accepts: bool) {
        self.accepts.store(accepts, Ordering::SeqCst);
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().expect("inputs").clone()
    }
}

impl MenuItemSelector for FakeMenuItemSelector {
    fn handle_text_input(&self, text: &str) -> bool {
        self.inputs.lock().expect("inputs").push(text.to_string());
        self.accepts.load(Ordering::SeqCst)
    }
}

/// Shows order details whenever at least one order is selected.
pub struct SelectionDrivenDisplay;

impl SelectedOrdersDisplay for SelectionDrivenDisplay {
    fn should_display(&self, ticket_view: &TicketView) -> bool {
        !ticket_view.selected_order_ids.is_empty()
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct Harness {
    pub navigation: Arc<RecordingNavigation>,
    pub app_state: Arc<FakeAppState>,
    pub permissions: Arc<FakePermissions>,
    pub tickets: Arc<RecordingTicketService>,
    pub ticket_list: Arc<RecordingTicketList>,
    pub explorer: Arc<RecordingExplorer>,
    pub menu_items: Arc<FakeMenuItemSelector>,
    pub clock: Arc<dyn Clock>,
    pub bus: EventBus,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            navigation: Arc::default(),
            app_state: Arc::default(),
            permissions: Arc::default(),
            tickets: Arc::default(),
            ticket_list: Arc::default(),
            explorer: Arc::default(),
            menu_items: Arc::default(),
            clock,
            bus: EventBus::default(),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            navigation: self.navigation.clone(),
            app_state: self.app_state.clone(),
            permissions: self.permissions.clone(),
            tickets: self.tickets.clone(),
            ticket_list: self.ticket_list.clone(),
            ticket_explorer: self.explorer.clone(),
            menu_items: self.menu_items.clone(),
            selected_orders: Arc::new(SelectionDrivenDisplay),
            clock: self.clock.clone(),
        }
    }

    pub fn coordinator(&self) -> ScreenCoordinator {
        ScreenCoordinator::new(self.collaborators(), &self.bus).expect("coordinator")
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, 0))
        .expect("valid date")
}

pub fn work_period_opened_at(start: NaiveDateTime) -> WorkPeriod {
    WorkPeriod {
        work_period_id: WorkPeriodId(12),
        start_date: start,
        end_date: None,
    }
}

pub fn ticket(id: i64) -> Ticket {
    Ticket {
        ticket_id: TicketId(id),
        ticket_number: format!("{id:05}"),
        department_id: None,
    }
}

pub fn selected_orders_changed(order_ids: &[i64]) -> DomainEvent {
    DomainEvent::ticket_view(
        EventTopic::SelectedOrdersChanged,
        TicketView {
            ticket_id: TicketId(1),
            selected_order_ids: order_ids.iter().copied().map(OrderId).collect(),
        },
    )
}

pub fn ticket_view_event(topic: EventTopic) -> DomainEvent {
    DomainEvent::ticket_view(
        topic,
        TicketView {
            ticket_id: TicketId(1),
            selected_order_ids: vec![OrderId(1)],
        },
    )
}

pub fn payment_submitted() -> DomainEvent {
    DomainEvent::ticket(EventTopic::PaymentSubmitted, ticket(1))
}

pub fn display_ticket_explorer() -> DomainEvent {
    DomainEvent::work_period(
        EventTopic::DisplayTicketExplorer,
        work_period_opened_at(at(2024, 6, 3, 9, 45)),
    )
}

pub fn user_logged_out() -> DomainEvent {
    DomainEvent::user(
        EventTopic::UserLoggedOut,
        User {
            user_id: UserId(3),
            name: "Administrator".to_string(),
        },
    )
}
