//! `addresses` table. Context names the address role (`address_type`) and,
//! for shipment addresses, the shipment.

use movehist_core::{AuditRecord, DbAction, Details, EventName, LabeledDetails, Pattern};
use movehist_format::labels::{self, label_or_raw};
use movehist_format::{AddressParts, format_address};

use crate::shipment::shipment_label;
use crate::template::EventTemplate;

const ADDRESSES: Pattern<&str> = Pattern::Exact("addresses");

/// Field label for the address, from the context address type.
fn address_label(record: &AuditRecord) -> String {
    record
        .context_str(0, "address_type")
        .map_or_else(|| "Address".to_string(), |code| label_or_raw(labels::address_type, code))
}

/// Header (shipment, if any) and one field holding the merged address.
pub fn address_details(record: &AuditRecord) -> Details {
    let mut details = LabeledDetails::with_header(shipment_label(record));
    details.push(address_label(record), format_address(&AddressParts::from_record(record)));
    Details::Labeled(details)
}

pub static UPDATE_SHIPMENT_ADDRESS: EventTemplate = EventTemplate {
    id: "updateMTOShipment.addresses",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOShipment"),
    table_name: ADDRESSES,
    name: |_| EventName::text("Updated shipment"),
    details: address_details,
};

pub static UPDATE_PROFILE_ADDRESS: EventTemplate = EventTemplate {
    id: "patchServiceMember.addresses",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("patchServiceMember"),
    table_name: ADDRESSES,
    name: |_| EventName::text("Updated profile"),
    details: address_details,
};

pub static CREATE_ADDRESS: EventTemplate = EventTemplate {
    id: "insert.*.addresses",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Any,
    table_name: ADDRESSES,
    name: |_| EventName::text("Added address"),
    details: address_details,
};

pub static UPDATE_ADDRESS: EventTemplate = EventTemplate {
    id: "update.*.addresses",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: ADDRESSES,
    name: |_| EventName::text("Updated address"),
    details: address_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &UPDATE_SHIPMENT_ADDRESS,
    &UPDATE_PROFILE_ADDRESS,
    &CREATE_ADDRESS,
    &UPDATE_ADDRESS,
];
