//! Year-scoped serial numbers for whitelist requests.
//!
//! Serials have the form `WL-<year>-<seq>` where the sequence restarts at
//! `0001` every January 1st. The sequence is derived from a count of rows
//! already created in the year, so uniqueness is ultimately guaranteed by
//! the schema constraint, not by this formatter.

/// Builds the serial for the next request of a calendar year.
///
/// `taken` is the number of sequence slots assumed to be in use; the
/// printed sequence is one past it, left-padded with zeros to four digits.
/// Sequences beyond 9999 print at their natural width.
pub fn serial_number(year: i32, taken: u64) -> String {
    format!("WL-{}-{:04}", year, taken + 1)
}
