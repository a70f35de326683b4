//! Onboarding module - first-run versus returning-user routing.

mod entry_route;

pub use entry_route::EntryRoute;
