//! Screen coordination for the point-of-sale ticket editor: maps domain events
//! onto the order entry, ticket details and ticket explorer screens.

mod coordinator;
pub mod error;
pub mod explorer;
pub mod navigation;
pub mod ports;
pub mod transitions;

pub use coordinator::ScreenCoordinator;
pub use error::CoordinatorError;
pub use explorer::ExplorerQueryRange;
pub use navigation::{Region, ScreenState, View};
pub use ports::{
    ApplicationState, Clock, Collaborators, MenuItemSelector, NavigationSink, PermissionChecker,
    SelectedOrdersDisplay, SystemClock, TicketExplorer, TicketList, TicketService,
};
pub use transitions::{transition_for, Transition, TRANSITIONS};
