//! `payment_requests` and `payment_service_items`.
//!
//! Payment request context holds one row per payment service item with
//! `name`, `status`, `price` (cents) and, for shipment-level items, the
//! shipment identifiers. Items without a shipment are move-level services.

use movehist_core::{
    AuditRecord, DbAction, DetailField, Details, EventName, FieldMap, Pattern, PaymentDetails,
    ShipmentServices, value_text,
};
use movehist_format::{PLACEHOLDER, cents_from_value, format_cents, labels};

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::{shipment_label_from, shipment_label_with};
use crate::template::EventTemplate;

const PAYMENT_REQUESTS: Pattern<&str> = Pattern::Exact("payment_requests");

const PAYMENT_REQUEST_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::payment_request_status)),
    field("rejection_reason", "Reason", FieldKind::Text),
    field("reviewed_at", "Reviewed", FieldKind::Date),
    field("sent_to_gex_at", "Sent to GEX", FieldKind::Date),
    field("received_by_gex_at", "Received by GEX", FieldKind::Date),
    field("paid_at", "Paid", FieldKind::Date),
    field("recalculation_of_payment_request_id", "Recalculation of", FieldKind::Text),
];

const PAYMENT_SERVICE_ITEM_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::payment_service_item_status)),
    field("price_cents", "Price", FieldKind::Cents),
    field("rejection_reason", "Reason", FieldKind::Text),
];

fn row_text(row: &FieldMap, key: &str) -> Option<String> {
    row.get(key)
        .and_then(value_text)
        .filter(|value| !value.trim().is_empty())
}

/// The identifiers a context row uses for its shipment, lower-cased.
#[derive(Debug, Default)]
struct ShipmentRef {
    id: Option<String>,
    abbr: Option<String>,
    locator: Option<String>,
}

impl ShipmentRef {
    fn from_row(row: &FieldMap) -> Self {
        let id = |key| row_text(row, key).map(|value| value.to_lowercase());
        Self {
            id: id("shipment_id"),
            abbr: id("shipment_id_abbr"),
            locator: id("shipment_locator"),
        }
    }

    const fn is_empty(&self) -> bool {
        self.id.is_none() && self.abbr.is_none() && self.locator.is_none()
    }

    /// Any shared identifier, or a short id that prefixes the other full id.
    fn same_as(&self, other: &Self) -> bool {
        let equal = |a: &Option<String>, b: &Option<String>| matches!((a, b), (Some(a), Some(b)) if a == b);
        let abbreviates = |abbr: &Option<String>, id: &Option<String>| {
            matches!((abbr, id), (Some(abbr), Some(id)) if id.starts_with(abbr.as_str()))
        };
        equal(&self.id, &other.id)
            || equal(&self.abbr, &other.abbr)
            || equal(&self.locator, &other.locator)
            || abbreviates(&self.abbr, &other.id)
            || abbreviates(&other.abbr, &self.id)
    }

    fn absorb(&mut self, other: Self) {
        self.id = self.id.take().or(other.id);
        self.abbr = self.abbr.take().or(other.abbr);
        self.locator = self.locator.take().or(other.locator);
    }

    fn display_id(&self) -> String {
        self.locator
            .as_ref()
            .or(self.abbr.as_ref())
            .or(self.id.as_ref())
            .map_or_else(String::new, |id| id.to_uppercase())
    }
}

/// Service names collected for one shipment.
struct ShipmentGroup {
    shipment: ShipmentRef,
    label: Option<String>,
    names: Vec<String>,
}

impl ShipmentGroup {
    fn claims(&self, shipment: &ShipmentRef, label: Option<&String>) -> bool {
        if shipment.is_empty() || self.shipment.is_empty() {
            return shipment.is_empty() && self.shipment.is_empty() && self.label.as_ref() == label;
        }
        self.shipment.same_as(shipment)
    }

    fn header(self) -> ShipmentServices {
        let header = self
            .label
            .unwrap_or_else(|| format!("Shipment #{}", self.shipment.display_id()));
        ShipmentServices {
            header,
            services: self.names.join(", "),
        }
    }
}

/// Add a shipment-level service to its group; `false` for move-level rows.
fn group_service(groups: &mut Vec<ShipmentGroup>, row: &FieldMap, name: &str) -> bool {
    let shipment = ShipmentRef::from_row(row);
    let label = shipment_label_from(row);
    if shipment.is_empty() && label.is_none() {
        return false;
    }

    match groups.iter_mut().find(|group| group.claims(&shipment, label.as_ref())) {
        Some(group) => {
            group.shipment.absorb(shipment);
            if group.label.is_none() {
                group.label = label;
            }
            group.names.push(name.to_string());
        }
        None => groups.push(ShipmentGroup {
            shipment,
            label,
            names: vec![name.to_string()],
        }),
    }
    true
}

/// The payment request number, from the changed/old values or from context.
#[must_use]
pub fn payment_request_number(record: &AuditRecord) -> Option<String> {
    record
        .merged_text("payment_request_number")
        .or_else(|| record.context_text(0, "payment_request_number"))
        .filter(|number| !number.trim().is_empty())
}

/// Build the payment layout from the context rows.
///
/// With `reviewed` set the layout carries approved and rejected totals
/// (`price` summed by status) and an amount per service item taken from the
/// item's own `amount`, which is `$0.00` when the row carries none.
#[must_use]
pub fn payment_details(record: &AuditRecord, reviewed: bool) -> Details {
    let mut approved = 0_i64;
    let mut rejected = 0_i64;
    let mut move_services = Vec::new();
    let mut groups = Vec::new();
    let mut service_amounts = Vec::new();

    for row in record.context_rows() {
        let name = row_text(row, "name").unwrap_or_else(|| PLACEHOLDER.to_string());
        let price = row.get("price").and_then(cents_from_value).unwrap_or(0);
        match row_text(row, "status").as_deref() {
            Some("APPROVED") => approved = approved.saturating_add(price),
            Some("DENIED" | "REJECTED") => rejected = rejected.saturating_add(price),
            _ => {}
        }

        if !group_service(&mut groups, row, &name) {
            move_services.push(name.clone());
        }

        if reviewed {
            let amount = row.get("amount").and_then(cents_from_value).unwrap_or(0);
            service_amounts.push(DetailField {
                label: name,
                value: format_cents(Some(amount)),
            });
        }
    }

    Details::Payment(PaymentDetails {
        approved_total: reviewed.then(|| format_cents(Some(approved))),
        rejected_total: reviewed.then(|| format_cents(Some(rejected))),
        move_services: (!move_services.is_empty()).then(|| move_services.join(", ")),
        shipments: groups.into_iter().map(ShipmentGroup::header).collect(),
        service_amounts,
    })
}

pub static CREATE_PAYMENT_REQUEST: EventTemplate = EventTemplate {
    id: "createPaymentRequest.payment_requests",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createPaymentRequest"),
    table_name: PAYMENT_REQUESTS,
    name: |record| match payment_request_number(record) {
        Some(number) => EventName::two_line("Submitted payment request", format!("#{number}")),
        None => EventName::text("Submitted payment request"),
    },
    details: |record| payment_details(record, false),
};

pub static REVIEW_PAYMENT_REQUEST: EventTemplate = EventTemplate {
    id: "updatePaymentRequestStatus.payment_requests",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updatePaymentRequestStatus"),
    table_name: PAYMENT_REQUESTS,
    name: |record| match payment_request_number(record) {
        Some(number) => EventName::text(format!("Reviewed payment request #{number}")),
        None => EventName::text("Reviewed payment request"),
    },
    details: |record| payment_details(record, true),
};

pub static UPDATE_PAYMENT_REQUEST: EventTemplate = EventTemplate {
    id: "*.payment_requests",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: PAYMENT_REQUESTS,
    name: |_| EventName::text("Updated payment request"),
    details: |record| {
        let header = payment_request_number(record).map(|number| format!("Payment request #{number}"));
        labeled_details(record, header, PAYMENT_REQUEST_FIELDS)
    },
};

pub static REVIEW_PAYMENT_SERVICE_ITEM: EventTemplate = EventTemplate {
    id: "updatePaymentServiceItemStatus.payment_service_items",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updatePaymentServiceItemStatus"),
    table_name: Pattern::Exact("payment_service_items"),
    name: |record| {
        let label = match record.changed_text("status").as_deref() {
            Some("APPROVED") => "Approved service item",
            Some("DENIED") => "Rejected service item",
            _ => "Updated service item",
        };
        EventName::text(label)
    },
    details: |record| {
        labeled_details(record, shipment_label_with(record, "name"), PAYMENT_SERVICE_ITEM_FIELDS)
    },
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &CREATE_PAYMENT_REQUEST,
    &REVIEW_PAYMENT_REQUEST,
    &UPDATE_PAYMENT_REQUEST,
    &REVIEW_PAYMENT_SERVICE_ITEM,
];
