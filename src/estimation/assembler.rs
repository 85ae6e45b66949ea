//! Joins story fields into one analyzable text

/// `summary`, `description` and the space-joined labels, separated by single
/// spaces and trimmed at both ends.
pub fn assemble(summary: &str, description: &str, labels: &[String]) -> String {
    format!("{} {} {}", summary, description, labels.join(" "))
        .trim()
        .to_string()
}
