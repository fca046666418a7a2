use thiserror::Error;

use shared::domain::TicketId;

use crate::navigation::{Region, View};

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("navigation to {view} in {region} failed: {source}")]
    Navigation {
        region: Region,
        view: View,
        source: anyhow::Error,
    },
    #[error("closing ticket {} failed: {source}", .ticket_id.0)]
    CloseTicket {
        ticket_id: TicketId,
        source: anyhow::Error,
    },
    #[error("ticket explorer refresh failed: {source}")]
    ExplorerRefresh { source: anyhow::Error },
    #[error("ticket explorer requested while no work period is open")]
    NoOpenWorkPeriod,
}
