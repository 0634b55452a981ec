// Localization API surface.
// Implements: request/response types and the route handlers. All
// transformation goes through the shared engine in AppState — no engine
// logic lives here.

pub mod handlers;
