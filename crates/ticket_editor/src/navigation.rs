use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    MainRegion,
    TicketSubRegion,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::MainRegion => "MainRegion",
            Region::TicketSubRegion => "TicketSubRegion",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    TicketEditorView,
    MenuItemSelectorView,
    SelectedOrdersView,
    TicketExplorerView,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::TicketEditorView => "TicketEditorView",
            View::MenuItemSelectorView => "MenuItemSelectorView",
            View::SelectedOrdersView => "SelectedOrdersView",
            View::TicketExplorerView => "TicketExplorerView",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutually exclusive sub-screens of the ticket editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenState {
    #[default]
    OrderEntry,
    TicketDetails,
    TicketExplorer,
}

impl ScreenState {
    pub fn sub_view(self) -> View {
        match self {
            ScreenState::OrderEntry => View::MenuItemSelectorView,
            ScreenState::TicketDetails => View::SelectedOrdersView,
            ScreenState::TicketExplorer => View::TicketExplorerView,
        }
    }

    /// Requests issued, in order, to put this screen up. Always a full replace.
    pub fn navigation_requests(self) -> [(Region, View); 2] {
        [
            (Region::MainRegion, View::TicketEditorView),
            (Region::TicketSubRegion, self.sub_view()),
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenState::OrderEntry => "order_entry",
            ScreenState::TicketDetails => "ticket_details",
            ScreenState::TicketExplorer => "ticket_explorer",
        }
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
