// Phonebook - app/router.rs
//
// Maps an inbound message to one of the query handlers.
//
// Routes are evaluated in a fixed priority order and the first match wins.
// The last route accepts everything, so every message gets a reply.

use crate::app::handlers::QueryHandlers;
use crate::util::{constants, logging};

/// A single (predicate, handler) pair.
pub struct Route {
    /// Short name used in logs.
    pub name: &'static str,
    /// Returns true if this route handles the message text.
    pub matches: fn(&str) -> bool,
    /// Produces the reply for a matched message.
    pub handle: fn(&QueryHandlers, &str) -> String,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route").field("name", &self.name).finish()
    }
}

// Both predicates see the message exactly as received; leading whitespace
// means the message is not a command.
fn is_start(text: &str) -> bool {
    text == constants::START_COMMAND
}

fn is_search(text: &str) -> bool {
    text.starts_with(constants::SEARCH_COMMAND)
}

fn always(_: &str) -> bool {
    true
}

fn handle_start(handlers: &QueryHandlers, _: &str) -> String {
    handlers.sample_query()
}

fn handle_search(handlers: &QueryHandlers, text: &str) -> String {
    handlers.search_query(text)
}

fn handle_help(handlers: &QueryHandlers, _: &str) -> String {
    handlers.help_query()
}

/// Routes in priority order: `/start` exact, `/search` prefix, help fallback.
pub const ROUTES: &[Route] = &[
    Route {
        name: "start",
        matches: is_start,
        handle: handle_start,
    },
    Route {
        name: "search",
        matches: is_search,
        handle: handle_search,
    },
    Route {
        name: "help",
        matches: always,
        handle: handle_help,
    },
];

/// Find the route for `text`.
pub fn route_for(text: &str) -> &'static Route {
    ROUTES
        .iter()
        .find(|route| (route.matches)(text))
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Answer one inbound message.
pub fn dispatch(handlers: &QueryHandlers, text: &str) -> String {
    let route = route_for(text);
    tracing::debug!(route = route.name, "Dispatching message");
    tracing::trace!(
        text = logging::preview(text, constants::DEBUG_MAX_LINE_PREVIEW),
        "Message text"
    );
    (route.handle)(handlers, text)
}
