use crate::core::{AgentRoster, Status, Ticket, TicketBuilder, TicketId};
use chrono::{DateTime, Duration, Utc};

const SEED_AGENTS: [&str; 5] = ["Stan", "Priska", "Edward", "Fred", "Chaldine"];

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// The two tickets every fresh store starts with
#[must_use]
pub fn seed_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new()
            .id(TicketId::new(1))
            .title("UI button is misaligned")
            .description("The main login button on the home page is off-center on mobile.")
            .status(Status::Open)
            .created_at(days_ago(1))
            .build(),
        TicketBuilder::new()
            .id(TicketId::new(2))
            .title("API call returns 500 error")
            .description("The user profile endpoint is crashing when no avatar is set.")
            .status(Status::InProgress)
            .agent(SEED_AGENTS[0])
            .created_at(days_ago(4))
            .build(),
    ]
}

/// The five agents every fresh store starts with
#[must_use]
pub fn seed_agents() -> AgentRoster {
    SEED_AGENTS.into_iter().collect()
}
