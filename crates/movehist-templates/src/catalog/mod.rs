//! The production template catalogue, one module per audited table.
//!
//! Within a module, templates with a concrete event name are listed before
//! the wildcard template for the same table, so the catalogue resolves the
//! same way under either match strategy.

use crate::template::EventTemplate;

pub mod addresses;
pub mod agents;
pub mod allowances;
pub mod customer;
pub mod documents;
pub mod evaluations;
pub mod moves;
pub mod orders;
pub mod payment_requests;
pub mod ppm;
pub mod remarks;
pub mod reweighs;
pub mod service_items;
pub mod shipments;
pub mod sit_extensions;

/// Every production template, in registration order.
#[must_use]
pub fn all() -> Vec<&'static EventTemplate> {
    [
        moves::TEMPLATES,
        shipments::TEMPLATES,
        ppm::TEMPLATES,
        addresses::TEMPLATES,
        orders::TEMPLATES,
        allowances::TEMPLATES,
        service_items::TEMPLATES,
        sit_extensions::TEMPLATES,
        payment_requests::TEMPLATES,
        customer::TEMPLATES,
        remarks::TEMPLATES,
        evaluations::TEMPLATES,
        reweighs::TEMPLATES,
        agents::TEMPLATES,
        documents::TEMPLATES,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
}
