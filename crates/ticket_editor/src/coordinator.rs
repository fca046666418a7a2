use event_bus::{EventBus, EventEnvelope, Subscription};
use shared::{domain::Permission, protocol::DomainEvent};
use tracing::{debug, error, info, trace};

use crate::{
    error::CoordinatorError,
    explorer::ExplorerQueryRange,
    navigation::ScreenState,
    ports::{Collaborators, NavigationSink},
    transitions::{transition_for, Transition},
};

/// Decides which ticket editor sub-screen is shown in response to domain events.
///
/// The coordinator only remembers the screen it last activated; what is
/// actually on screen is owned by the render layer behind [`NavigationSink`].
pub struct ScreenCoordinator {
    collaborators: Collaborators,
    subscription: Subscription,
    current: ScreenState,
}

impl ScreenCoordinator {
    /// Shows order entry, then subscribes to `bus`. Every event published after
    /// this returns is delivered to the coordinator; earlier ones are not.
    pub fn new(collaborators: Collaborators, bus: &EventBus) -> Result<Self, CoordinatorError> {
        activate_screen(collaborators.navigation.as_ref(), ScreenState::OrderEntry)?;
        let subscription = bus.subscribe();
        info!(screen = %ScreenState::OrderEntry, "screen coordinator ready");

        Ok(Self {
            collaborators,
            subscription,
            current: ScreenState::OrderEntry,
        })
    }

    pub fn current_screen(&self) -> ScreenState {
        self.current
    }

    pub fn handle_event(&mut self, event: &DomainEvent) -> Result<(), CoordinatorError> {
        let (stream, topic) = (event.stream(), event.topic());
        let Some(transition) = transition_for(stream, topic) else {
            trace!(%stream, %topic, "ignoring event without a screen transition");
            return Ok(());
        };
        debug!(%stream, %topic, ?transition, "dispatching domain event");

        match transition {
            Transition::Show(ScreenState::OrderEntry) => self.show_order_entry(),
            Transition::Show(ScreenState::TicketDetails) => self.show_ticket_details(),
            Transition::Show(ScreenState::TicketExplorer) => self.show_ticket_explorer(),
            Transition::ShowDetailsWhenOrdersSelected => {
                let wants_details = event
                    .ticket_view_payload()
                    .is_some_and(|view| self.collaborators.selected_orders.should_display(view));
                if wants_details {
                    self.show_ticket_details()
                } else {
                    self.show_order_entry()
                }
            }
            Transition::CloseTicket => self.close_ticket(),
        }
    }

    /// Dispatches every event already queued on the subscription, in publish order.
    /// A fault stops the pass; events behind it stay queued for the next call.
    pub fn pump(&mut self) -> Result<usize, CoordinatorError> {
        let mut dispatched = 0;
        while let Some(envelope) = self.subscription.try_recv() {
            self.dispatch(&envelope)?;
            dispatched += 1;
        }
        Ok(dispatched)
    }

    /// Processes events until the bus is closed and returns the last activated
    /// screen. A collaborator fault is logged and handed to `on_fault` together
    /// with the event that caused it; the loop then moves on to the next event.
    pub async fn run<F>(mut self, mut on_fault: F) -> ScreenState
    where
        F: FnMut(&EventEnvelope, CoordinatorError) + Send,
    {
        while let Some(envelope) = self.subscription.recv().await {
            if let Err(err) = self.dispatch(&envelope) {
                error!(
                    sequence = envelope.sequence,
                    topic = %envelope.event.topic(),
                    screen = %self.current,
                    error = %err,
                    "domain event handling failed"
                );
                on_fault(&envelope, err);
            }
        }
        info!(screen = %self.current, "event bus closed, screen coordinator stopped");
        self.current
    }

    pub fn show_order_entry(&mut self) -> Result<(), CoordinatorError> {
        self.activate(ScreenState::OrderEntry)
    }

    pub fn show_ticket_details(&mut self) -> Result<(), CoordinatorError> {
        self.activate(ScreenState::TicketDetails)
    }

    pub fn show_ticket_explorer(&mut self) -> Result<(), CoordinatorError> {
        let Some(work_period) = self.collaborators.app_state.current_work_period() else {
            error!("ticket explorer requested without an open work period");
            return Err(CoordinatorError::NoOpenWorkPeriod);
        };
        let may_display_old_tickets = self
            .collaborators
            .permissions
            .is_user_permitted_for(Permission::DisplayOldTickets);
        let range = ExplorerQueryRange::for_work_period(
            &work_period,
            may_display_old_tickets,
            self.collaborators.clock.now(),
        );

        self.activate(ScreenState::TicketExplorer)?;

        let explorer = &self.collaborators.ticket_explorer;
        explorer.set_range(range);
        explorer
            .refresh()
            .map_err(|source| CoordinatorError::ExplorerRefresh { source })?;
        debug!(
            start = %range.start,
            end = %range.end,
            may_display_old_tickets,
            "ticket explorer refresh triggered"
        );
        Ok(())
    }

    /// Closes the ticket being edited, if any, and drops the department filter.
    pub fn close_ticket(&self) -> Result<(), CoordinatorError> {
        if let Some(ticket) = self.collaborators.app_state.current_ticket() {
            info!(ticket_id = ticket.ticket_id.0, "closing current ticket");
            self.collaborators
                .tickets
                .close_ticket(&ticket)
                .map_err(|source| CoordinatorError::CloseTicket {
                    ticket_id: ticket.ticket_id,
                    source,
                })?;
        }
        self.collaborators.ticket_list.clear_selected_department();
        Ok(())
    }

    pub fn handle_text_input(&self, text: &str) -> bool {
        self.collaborators
            .app_state
            .active_app_screen()
            .accepts_ticket_text()
            && self.collaborators.menu_items.handle_text_input(text)
    }

    fn dispatch(&mut self, envelope: &EventEnvelope) -> Result<(), CoordinatorError> {
        trace!(sequence = envelope.sequence, "received domain event");
        self.handle_event(&envelope.event)
    }

    fn activate(&mut self, screen: ScreenState) -> Result<(), CoordinatorError> {
        activate_screen(self.collaborators.navigation.as_ref(), screen)?;
        self.current = screen;
        Ok(())
    }
}

fn activate_screen(
    navigation: &dyn NavigationSink,
    screen: ScreenState,
) -> Result<(), CoordinatorError> {
    for (region, view) in screen.navigation_requests() {
        debug!(%region, %view, %screen, "requesting navigation");
        navigation
            .request_navigate(region, view)
            .map_err(|source| CoordinatorError::Navigation {
                region,
                view,
                source,
            })?;
    }
    Ok(())
}
