//! Adapter implementations of the onboarding data-access port.

mod table;

pub use table::TableOnboardStore;
