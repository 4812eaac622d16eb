//! Instructors seeded on first run, so the app has something to rate.

use yogarate_core::Instructor;

const DEFAULT_INSTRUCTORS: [(&str, &str); 3] = [
    ("1", "Sarah Johnson"),
    ("2", "Michael Chen"),
    ("3", "Priya Patel"),
];

/// The fixed default instructor set.
pub fn default_instructors() -> Vec<Instructor> {
    DEFAULT_INSTRUCTORS
        .iter()
        .map(|(id, name)| Instructor {
            id: (*id).into(),
            name: (*name).to_string(),
        })
        .collect()
}
