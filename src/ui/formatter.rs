//! Pure formatting functions for UI output.
//!
//! Results go to stdout so they can be captured by scripts; errors, warnings
//! and status lines go to stderr.

use crate::boundary::BoundaryWarning;
use crate::domain::Version;
use console::style;
use std::cmp::Ordering;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print a machine-readable result line.
pub fn display_result(value: &str) {
    println!("{}", value);
}

/// Symbol used for an ordering between two versions.
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Relationship notes between two versions, as shown by `compare`.
pub fn relationship_notes(a: &Version, b: &Version) -> Vec<String> {
    let mut notes = Vec::new();
    if a.is_rc_of(b) {
        notes.push(format!("{} is a pre-release of {}", a, b));
    }
    if b.is_rc_of(a) {
        notes.push(format!("{} is a pre-release of {}", b, a));
    }
    if a.is_different_rc_of(b) {
        notes.push("different pre-releases of the same release".to_string());
    }
    if a.is_different_patch_of(b) {
        notes.push("different patches of the same minor".to_string());
    }
    notes
}

/// Display the fields of a parsed version.
pub fn display_version_fields(raw: &str, version: &Version, marker: Option<&str>) {
    println!("{}", style(format!("Parsed '{}'", raw)).bold());
    println!("  major:       {}", version.major);
    println!("  minor:       {}", version.minor);
    println!(
        "  patch:       {}",
        version
            .patch
            .map(|p| p.to_string())
            .unwrap_or_else(|| "(absent)".to_string())
    );
    println!(
        "  pre-release: {}",
        version
            .pre_release
            .map(|p| p.to_string())
            .unwrap_or_else(|| "(final)".to_string())
    );
    if let Some(marker) = marker {
        println!("  marker:      {}", marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_symbol() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "=");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
    }

    #[test]
    fn test_relationship_notes_rc() {
        let rc = Version::new(1, 2, 0).with_pre_release(1);
        let notes = relationship_notes(&rc, &Version::short(1, 2));
        assert_eq!(notes, vec!["1.2-rc-1 is a pre-release of 1.2"]);
    }

    #[test]
    fn test_relationship_notes_patch() {
        let notes = relationship_notes(&Version::new(1, 2, 3), &Version::new(1, 2, 4));
        assert_eq!(notes, vec!["different patches of the same minor"]);
    }

    #[test]
    fn test_relationship_notes_unrelated() {
        assert!(relationship_notes(&Version::short(1, 2), &Version::short(3, 4)).is_empty());
    }

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }
}
