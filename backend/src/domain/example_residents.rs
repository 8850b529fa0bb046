//! Demo residents loaded at startup.

use tracing::info;

use super::{Error, ResidentDraft, ResidentList};

const EXAMPLE_RESIDENTS: [(&str, &str, &str, &str); 2] = [
    ("Ali Raza", "A-101", "0333-1234567", "2024-01-01"),
    ("Sara Khan", "B-203", "0312-9876543", "2024-02-15"),
];

/// Add the demo residents to `list`, returning how many were added.
///
/// # Errors
/// Returns an internal error if a demo record is rejected, for example
/// because its flat is already occupied.
pub fn seed_example_residents(list: &mut ResidentList) -> Result<usize, Error> {
    for (name, flat, contact, move_in_date) in EXAMPLE_RESIDENTS {
        list.create(&ResidentDraft::new(name, flat, contact, move_in_date))
            .map_err(|err| Error::internal(format!("invalid example resident {flat}: {err}")))?;
    }
    info!(count = EXAMPLE_RESIDENTS.len(), "example residents seeded");
    Ok(EXAMPLE_RESIDENTS.len())
}
