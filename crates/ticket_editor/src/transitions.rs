use shared::protocol::{EventStream, EventTopic};

use crate::navigation::ScreenState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Show(ScreenState),
    /// Ticket details when the selected-orders display wants the payload, order entry otherwise.
    ShowDetailsWhenOrdersSelected,
    /// Leaves the screen alone.
    CloseTicket,
}

pub const TRANSITIONS: &[(EventStream, EventTopic, Transition)] = &[
    (
        EventStream::TicketView,
        EventTopic::SelectedOrdersChanged,
        Transition::ShowDetailsWhenOrdersSelected,
    ),
    (
        EventStream::TicketView,
        EventTopic::SelectExtraProperty,
        Transition::Show(ScreenState::TicketDetails),
    ),
    (
        EventStream::TicketView,
        EventTopic::SelectTicketTag,
        Transition::Show(ScreenState::TicketDetails),
    ),
    (
        EventStream::TicketView,
        EventTopic::SelectOrderTag,
        Transition::Show(ScreenState::TicketDetails),
    ),
    (
        EventStream::TicketView,
        EventTopic::EditTicketNote,
        Transition::Show(ScreenState::TicketDetails),
    ),
    (
        EventStream::Ticket,
        EventTopic::PaymentSubmitted,
        Transition::Show(ScreenState::OrderEntry),
    ),
    (
        EventStream::WorkPeriod,
        EventTopic::DisplayTicketExplorer,
        Transition::Show(ScreenState::TicketExplorer),
    ),
    (
        EventStream::Navigation,
        EventTopic::ActivateTicketView,
        Transition::Show(ScreenState::OrderEntry),
    ),
    (
        EventStream::Navigation,
        EventTopic::DisplayTicketView,
        Transition::Show(ScreenState::OrderEntry),
    ),
    (
        EventStream::User,
        EventTopic::UserLoggedOut,
        Transition::CloseTicket,
    ),
];

/// Topics arriving on a stream that does not handle them map to `None`.
pub fn transition_for(stream: EventStream, topic: EventTopic) -> Option<Transition> {
    TRANSITIONS
        .iter()
        .find(|(row_stream, row_topic, _)| *row_stream == stream && *row_topic == topic)
        .map(|(_, _, transition)| *transition)
}
