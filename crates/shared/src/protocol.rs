use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Ticket, TicketView, User, WorkPeriod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTopic {
    SelectedOrdersChanged,
    SelectExtraProperty,
    SelectTicketTag,
    SelectOrderTag,
    EditTicketNote,
    PaymentSubmitted,
    UserLoggedOut,
    DisplayTicketExplorer,
    ActivateTicketView,
    DisplayTicketView,
}

impl EventTopic {
    pub fn as_str(self) -> &'static str {
        match self {
            EventTopic::SelectedOrdersChanged => "selected_orders_changed",
            EventTopic::SelectExtraProperty => "select_extra_property",
            EventTopic::SelectTicketTag => "select_ticket_tag",
            EventTopic::SelectOrderTag => "select_order_tag",
            EventTopic::EditTicketNote => "edit_ticket_note",
            EventTopic::PaymentSubmitted => "payment_submitted",
            EventTopic::UserLoggedOut => "user_logged_out",
            EventTopic::DisplayTicketExplorer => "display_ticket_explorer",
            EventTopic::ActivateTicketView => "activate_ticket_view",
            EventTopic::DisplayTicketView => "display_ticket_view",
        }
    }
}

impl fmt::Display for EventTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The typed channel an event travels on, named after its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStream {
    TicketView,
    Ticket,
    User,
    WorkPeriod,
    Navigation,
}

impl EventStream {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStream::TicketView => "ticket_view",
            EventStream::Ticket => "ticket",
            EventStream::User => "user",
            EventStream::WorkPeriod => "work_period",
            EventStream::Navigation => "navigation",
        }
    }
}

impl fmt::Display for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParameters<T> {
    pub topic: EventTopic,
    pub value: T,
}

impl<T> EventParameters<T> {
    pub fn new(topic: EventTopic, value: T) -> Self {
        Self { topic, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stream", content = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    TicketView(EventParameters<TicketView>),
    Ticket(EventParameters<Ticket>),
    User(EventParameters<User>),
    WorkPeriod(EventParameters<WorkPeriod>),
    /// Shell-level view requests; the payload carries nothing.
    Navigation(EventParameters<()>),
}

impl DomainEvent {
    pub fn ticket_view(topic: EventTopic, view: TicketView) -> Self {
        DomainEvent::TicketView(EventParameters::new(topic, view))
    }

    pub fn ticket(topic: EventTopic, ticket: Ticket) -> Self {
        DomainEvent::Ticket(EventParameters::new(topic, ticket))
    }

    pub fn user(topic: EventTopic, user: User) -> Self {
        DomainEvent::User(EventParameters::new(topic, user))
    }

    pub fn work_period(topic: EventTopic, work_period: WorkPeriod) -> Self {
        DomainEvent::WorkPeriod(EventParameters::new(topic, work_period))
    }

    pub fn navigation(topic: EventTopic) -> Self {
        DomainEvent::Navigation(EventParameters::new(topic, ()))
    }

    pub fn stream(&self) -> EventStream {
        match self {
            DomainEvent::TicketView(_) => EventStream::TicketView,
            DomainEvent::Ticket(_) => EventStream::Ticket,
            DomainEvent::User(_) => EventStream::User,
            DomainEvent::WorkPeriod(_) => EventStream::WorkPeriod,
            DomainEvent::Navigation(_) => EventStream::Navigation,
        }
    }

    pub fn topic(&self) -> EventTopic {
        match self {
            DomainEvent::TicketView(params) => params.topic,
            DomainEvent::Ticket(params) => params.topic,
            DomainEvent::User(params) => params.topic,
            DomainEvent::WorkPeriod(params) => params.topic,
            DomainEvent::Navigation(params) => params.topic,
        }
    }

    pub fn ticket_view_payload(&self) -> Option<&TicketView> {
        match self {
            DomainEvent::TicketView(params) => Some(&params.value),
            _ => None,
        }
    }
}
