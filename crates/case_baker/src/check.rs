//! Reference count check for traced tables.

use anyhow::Result;
use case_table::ValidationReport;
use log::{debug, error, warn};

/// Log the mismatches of a validation report and fail on unexplained ones.
///
/// Ambiguous-complement mismatches are expected for traced tables: each is
/// logged at debug level, with one warning for the lot. Returns how many
/// there were.
pub fn check_reference(validation: &ValidationReport) -> Result<usize> {
	for mismatch in validation.ambiguous() {
		debug!("{mismatch}");
	}
	let ambiguous = validation.ambiguous().count();
	if ambiguous > 0 {
		warn!(
			"{ambiguous} cases differ from the reference counts where the reference resolves an ambiguous configuration as one surface"
		);
	}

	let mut unexplained = 0;
	for mismatch in validation.unexplained() {
		error!("{mismatch}");
		unexplained += 1;
	}
	if unexplained > 0 {
		anyhow::bail!("{unexplained} cases disagree with the reference counts");
	}

	Ok(ambiguous)
}

#[cfg(test)]
#[path = "check_test.rs"]
mod check_test;
