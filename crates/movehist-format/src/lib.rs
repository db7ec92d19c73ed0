//! # movehist-format
//!
//! Shared, locale-stable formatting helpers used by the event templates.
//!
//! Every helper takes optional input and renders [`PLACEHOLDER`] instead of
//! failing, so a missing or malformed column never breaks a history row:
//! - currency: integer cents to `$1,234.99`
//! - dates: ISO dates to `DD MMM YYYY`
//! - weights and dimensions: `8,000 lbs`, `12x24x36 in`
//! - addresses: `street1, street2, city, state postal`
//! - enum codes to display labels (orders, pay grade, statuses, ...)

pub mod address;
pub mod currency;
pub mod date;
pub mod labels;
pub mod number;
pub mod text;
pub mod weight;

pub use address::{AddressParts, format_address};
pub use currency::{cents_from_value, format_cents};
pub use date::{format_date, format_date_time};
pub use labels::LabelLookup;
pub use movehist_core::display::PLACEHOLDER;
pub use number::{group_thousands, integer_from_value};
pub use text::{format_days, format_full_name, format_miles, format_yes_no};
pub use weight::{format_dimensions, format_weight};
