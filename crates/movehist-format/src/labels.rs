//! Fixed lookup tables from backend enum codes to display labels.
//!
//! Each table is a `match`, exposed as a [`LabelLookup`] so field specs can
//! reference it. Unknown codes yield `None`; callers usually fall back to the
//! raw code via [`label_or_raw`].

/// Signature shared by every lookup table.
pub type LabelLookup = fn(&str) -> Option<&'static str>;

/// Look up `code`, falling back to the code itself.
#[must_use]
pub fn label_or_raw(lookup: LabelLookup, code: &str) -> String {
    lookup(code).map_or_else(|| code.to_string(), str::to_string)
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[must_use]
pub fn orders_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "PERMANENT_CHANGE_OF_STATION" => "Permanent Change Of Station (PCS)",
        "LOCAL_MOVE" => "Local Move",
        "RETIREMENT" => "Retirement",
        "SEPARATION" => "Separation",
        "WOUNDED_WARRIOR" => "Wounded Warrior",
        "BLUEBARK" => "BLUEBARK",
        "SAFETY" => "Safety",
        "TEMPORARY_DUTY" => "Temporary Duty (TDY)",
        "EARLY_RETURN_OF_DEPENDENTS" => "Early Return of Dependents",
        "STUDENT_TRAVEL" => "Student Travel",
        _ => return None,
    })
}

#[must_use]
pub fn orders_type_detail(code: &str) -> Option<&'static str> {
    Some(match code {
        "HHG_PERMITTED" => "Shipment of HHG Permitted",
        "PCS_TDY" => "PCS with TDY Enroute",
        "HHG_RESTRICTED_PROHIBITED" => "Shipment of HHG Restricted or Prohibited",
        "HHG_RESTRICTED_AREA" => "HHG Restricted Area-HHG Prohibited",
        "INSTRUCTION_20_WEEKS" => "Course of Instruction 20 Weeks or More",
        "HHG_PROHIBITED_20_WEEKS" => "Shipment of HHG Prohibited but Authorized within 20 weeks",
        "DELAYED_APPROVAL" => "Delayed Approval 20 Weeks or More",
        _ => return None,
    })
}

/// Service branch (affiliation).
#[must_use]
pub fn branch(code: &str) -> Option<&'static str> {
    Some(match code {
        "ARMY" => "Army",
        "NAVY" => "Navy",
        "MARINES" => "Marine Corps",
        "AIR_FORCE" => "Air Force",
        "COAST_GUARD" => "Coast Guard",
        "SPACE_FORCE" => "Space Force",
        "OTHER" => "Other",
        _ => return None,
    })
}

#[must_use]
pub fn pay_grade(code: &str) -> Option<&'static str> {
    Some(match code {
        "E_1" => "E-1",
        "E_2" => "E-2",
        "E_3" => "E-3",
        "E_4" => "E-4",
        "E_5" => "E-5",
        "E_6" => "E-6",
        "E_7" => "E-7",
        "E_8" => "E-8",
        "E_9" => "E-9",
        "E_9_SPECIAL_SENIOR_ENLISTED" => "E-9 (Special Senior Enlisted)",
        "O_1" | "O_1_ACADEMY_GRADUATE" => "O-1 or Service Academy Graduate",
        "O_2" => "O-2",
        "O_3" => "O-3",
        "O_4" => "O-4",
        "O_5" => "O-5",
        "O_6" => "O-6",
        "O_7" => "O-7",
        "O_8" => "O-8",
        "O_9" => "O-9",
        "O_10" => "O-10",
        "W_1" => "W-1",
        "W_2" => "W-2",
        "W_3" => "W-3",
        "W_4" => "W-4",
        "W_5" => "W-5",
        "AVIATION_CADET" => "Aviation Cadet",
        "CIVILIAN_EMPLOYEE" => "Civilian Employee",
        "ACADEMY_CADET" => "Service Academy Cadet",
        "MIDSHIPMAN" => "Midshipman",
        _ => return None,
    })
}

#[must_use]
pub fn department_indicator(code: &str) -> Option<&'static str> {
    Some(match code {
        "NAVY_AND_MARINES" => "Navy and Marine Corps",
        "ARMY" => "Army",
        "ARMY_CORPS_OF_ENGINEERS" => "Army Corps of Engineers",
        "AIR_AND_SPACE_FORCE" => "Air Force and Space Force",
        "COAST_GUARD" => "Coast Guard",
        "OFFICE_OF_SECRETARY_OF_DEFENSE" => "Office of the Secretary of Defense",
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

#[must_use]
pub fn move_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "DRAFT" => "Draft",
        "SUBMITTED" => "New move",
        "APPROVED" => "Move approved",
        "CANCELED" => "Canceled",
        "APPROVALS REQUESTED" => "Approvals requested",
        "NEEDS SERVICE COUNSELING" => "Needs counseling",
        "SERVICE COUNSELING COMPLETED" => "Service counseling completed",
        _ => return None,
    })
}

#[must_use]
pub fn shipment_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "DRAFT" => "Draft",
        "SUBMITTED" => "Requested",
        "APPROVED" => "Approved",
        "REJECTED" => "Rejected",
        "CANCELLATION_REQUESTED" => "Cancellation requested",
        "CANCELED" => "Canceled",
        "DIVERSION_REQUESTED" => "Diversion requested",
        "TERMINATED_FOR_CAUSE" => "Terminated for cause",
        "APPROVALS_REQUESTED" => "Approvals requested",
        _ => return None,
    })
}

#[must_use]
pub fn service_item_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "SUBMITTED" => "Requested",
        "APPROVED" => "Approved",
        "REJECTED" => "Rejected",
        _ => return None,
    })
}

#[must_use]
pub fn sit_extension_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "PENDING" => "Pending",
        "APPROVED" => "Approved",
        "DENIED" => "Denied",
        "REMOVED" => "Removed",
        _ => return None,
    })
}

#[must_use]
pub fn sit_extension_reason(code: &str) -> Option<&'static str> {
    Some(match code {
        "SERIOUS_ILLNESS_MEMBER" => "Serious illness of the member",
        "SERIOUS_ILLNESS_DEPENDENT" => "Serious illness or death of a dependent",
        // The backend enum carries this misspelling.
        "IMPENDING_ASSIGNEMENT" | "IMPENDING_ASSIGNMENT" => "Impending assignment",
        "DIRECTED_TEMPORARY_DUTY" => "Directed temporary duty after arrival",
        "NONAVAILABILITY_OF_CIVILIAN_HOUSING" => "Nonavailability of civilian housing",
        "AWAITING_COMPLETION_OF_RESIDENCE" => "Awaiting completion of residence under construction",
        "OTHER" => "Other reason",
        _ => return None,
    })
}

#[must_use]
pub fn payment_request_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "PENDING" => "Payment requested",
        "REVIEWED" => "Reviewed",
        "REVIEWED_AND_ALL_SERVICE_ITEMS_REJECTED" => "Rejected",
        "SENT_TO_GEX" => "Sent to GEX",
        "TPPS_RECEIVED" => "TPPS received",
        "PAID" => "Paid",
        "EDI_ERROR" => "EDI error",
        "DEPRECATED" => "Deprecated",
        _ => return None,
    })
}

#[must_use]
pub fn payment_service_item_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "REQUESTED" => "Requested",
        "APPROVED" => "Approved",
        "DENIED" => "Rejected",
        "SENT_TO_GEX" => "Sent to GEX",
        "PAID" => "Paid",
        "EDI_ERROR" => "EDI error",
        _ => return None,
    })
}

#[must_use]
pub fn ppm_shipment_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "DRAFT" => "Draft",
        "SUBMITTED" => "Submitted",
        "WAITING_ON_CUSTOMER" => "Waiting on customer",
        "NEEDS_ADVANCE_APPROVAL" => "Needs advance approval",
        "NEEDS_CLOSEOUT" => "Needs closeout",
        "CLOSEOUT_COMPLETE" => "Closeout complete",
        "CANCELED" => "Canceled",
        _ => return None,
    })
}

#[must_use]
pub fn ppm_document_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "APPROVED" => "Accept",
        "REJECTED" => "Reject",
        "EXCLUDED" => "Exclude",
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Context codes
// ---------------------------------------------------------------------------

/// Context `address_type` codes.
#[must_use]
pub fn address_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "pickupAddress" => "Pickup Address",
        "secondaryPickupAddress" => "Second Pickup Address",
        "tertiaryPickupAddress" => "Third Pickup Address",
        "destinationAddress" => "Destination Address",
        "secondaryDestinationAddress" => "Second Destination Address",
        "tertiaryDestinationAddress" => "Third Destination Address",
        "residentialAddress" => "Current Address",
        "backupMailingAddress" => "Backup Address",
        "storageFacility" => "Storage Facility Address",
        "sitDestinationFinalAddress" => "SIT final destination address",
        _ => return None,
    })
}

/// Context `upload_type` codes for document uploads.
#[must_use]
pub fn upload_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "orders" => "Orders",
        "amendedOrders" => "Amended orders",
        "weightTicket" => "Weight ticket",
        "proGearWeightTicket" => "Pro-gear weight ticket",
        "expense" => "Expense",
        "supportingDocument" => "Supporting document",
        _ => return None,
    })
}

#[must_use]
pub fn moving_expense_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "CONTRACTED_EXPENSE" => "Contracted expense",
        "GAS" => "Gas",
        "OIL" => "Oil",
        "OTHER" => "Other",
        "PACKING_MATERIALS" => "Packing materials",
        "RENTAL_EQUIPMENT" => "Rental equipment",
        "STORAGE" => "Storage",
        "TOLLS" => "Tolls",
        "WEIGHING_FEE" => "Weighing fee",
        _ => return None,
    })
}

#[must_use]
pub fn inspection_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "DATA_REVIEW" => "Data review",
        "PHYSICAL" => "Physical",
        "VIRTUAL" => "Virtual",
        _ => return None,
    })
}

#[must_use]
pub fn evaluation_location(code: &str) -> Option<&'static str> {
    Some(match code {
        "ORIGIN" => "Origin",
        "DESTINATION" => "Destination",
        "OTHER" => "Other",
        _ => return None,
    })
}

#[must_use]
pub fn reweigh_requester(code: &str) -> Option<&'static str> {
    Some(match code {
        "CUSTOMER" => "Customer",
        "PRIME" => "Prime",
        "SYSTEM" => "System",
        "TOO" => "Task ordering officer",
        _ => return None,
    })
}

#[must_use]
pub fn agent_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "RELEASING_AGENT" => "Releasing agent",
        "RECEIVING_AGENT" => "Receiving agent",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(orders_type as LabelLookup, "PERMANENT_CHANGE_OF_STATION", "Permanent Change Of Station (PCS)")]
    #[case(orders_type_detail as LabelLookup, "PCS_TDY", "PCS with TDY Enroute")]
    #[case(branch as LabelLookup, "MARINES", "Marine Corps")]
    #[case(pay_grade as LabelLookup, "E_9_SPECIAL_SENIOR_ENLISTED", "E-9 (Special Senior Enlisted)")]
    #[case(pay_grade as LabelLookup, "O_1", "O-1 or Service Academy Graduate")]
    #[case(department_indicator as LabelLookup, "AIR_AND_SPACE_FORCE", "Air Force and Space Force")]
    #[case(sit_extension_status as LabelLookup, "DENIED", "Denied")]
    #[case(sit_extension_reason as LabelLookup, "IMPENDING_ASSIGNEMENT", "Impending assignment")]
    #[case(payment_request_status as LabelLookup, "REVIEWED_AND_ALL_SERVICE_ITEMS_REJECTED", "Rejected")]
    #[case(move_status as LabelLookup, "APPROVALS REQUESTED", "Approvals requested")]
    #[case(shipment_status as LabelLookup, "SUBMITTED", "Requested")]
    #[case(address_type as LabelLookup, "residentialAddress", "Current Address")]
    #[case(payment_service_item_status as LabelLookup, "DENIED", "Rejected")]
    #[case(ppm_shipment_status as LabelLookup, "NEEDS_CLOSEOUT", "Needs closeout")]
    fn known_codes(#[case] lookup: LabelLookup, #[case] code: &str, #[case] expected: &str) {
        assert_eq!(lookup(code), Some(expected));
    }

    #[test]
    fn unknown_codes_fall_back_to_raw() {
        assert_eq!(pay_grade("Z_99"), None);
        assert_eq!(label_or_raw(pay_grade, "Z_99"), "Z_99");
        assert_eq!(label_or_raw(branch, "NAVY"), "Navy");
    }
}
