//! Address formatting.
//!
//! Address events usually change only some columns, so the display string is
//! built from the changed values merged over the old values.

use movehist_core::AuditRecord;

use crate::PLACEHOLDER;

/// Column names of an address row, in display order.
pub const ADDRESS_COLUMNS: [&str; 5] = [
    "street_address_1",
    "street_address_2",
    "city",
    "state",
    "postal_code",
];

/// The components of a postal address. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub street_address_1: Option<String>,
    pub street_address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressParts {
    /// Merge changed values over old values (changed values take precedence).
    #[must_use]
    pub fn from_record(record: &AuditRecord) -> Self {
        Self::from_lookup(|column| record.merged_text(column))
    }

    /// Only the changed values of the record.
    #[must_use]
    pub fn from_changed(record: &AuditRecord) -> Self {
        Self::from_lookup(|column| record.changed_text(column))
    }

    /// Build from any column lookup, e.g. a context row.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let [street_1, street_2, city, state, postal] = ADDRESS_COLUMNS;
        Self {
            street_address_1: lookup(street_1),
            street_address_2: lookup(street_2),
            city: lookup(city),
            state: lookup(state),
            postal_code: lookup(postal),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.street_address_1,
            &self.street_address_2,
            &self.city,
            &self.state,
            &self.postal_code,
        ]
        .into_iter()
        .all(|part| non_empty(part.as_deref()).is_none())
    }
}

/// `12 Any Street, P.O. Box 1234, Beverly Hills, CA 90211`. Absent components
/// are omitted; an entirely empty address renders the placeholder.
#[must_use]
pub fn format_address(parts: &AddressParts) -> String {
    let mut segments: Vec<String> = [
        &parts.street_address_1,
        &parts.street_address_2,
        &parts.city,
    ]
    .into_iter()
    .filter_map(|part| non_empty(part.as_deref()).map(str::to_string))
    .collect();

    let state_and_postal = [&parts.state, &parts.postal_code]
        .into_iter()
        .filter_map(|part| non_empty(part.as_deref()))
        .collect::<Vec<_>>()
        .join(" ");
    if !state_and_postal.is_empty() {
        segments.push(state_and_postal);
    }

    if segments.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        segments.join(", ")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
