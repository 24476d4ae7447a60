//! Suggested tag vocabularies offered by the client.
//!
//! The server stores any non-empty label; these lists only drive client
//! suggestions.

/// `(value, label)` pairs for the project tag.
pub const PROJECTS: &[(&str, &str)] = &[
    ("web-app", "Web Application"),
    ("mobile-app", "Mobile Application"),
    ("dashboard", "Dashboard System"),
    ("api", "API Development"),
    ("database", "Database Management"),
];

/// `(value, label)` pairs for the module tag.
pub const MODULES: &[(&str, &str)] = &[
    ("authentication", "Authentication"),
    ("user-management", "User Management"),
    ("reporting", "Reporting"),
    ("analytics", "Analytics"),
    ("notifications", "Notifications"),
    ("settings", "Settings"),
];

/// `(value, label)` pairs for the section tag.
pub const SECTIONS: &[(&str, &str)] = &[
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("database", "Database"),
    ("ui-ux", "UI/UX"),
    ("testing", "Testing"),
    ("deployment", "Deployment"),
];

/// Whether `value` is one of the suggested values in `vocabulary`.
pub fn is_suggested(vocabulary: &[(&str, &str)], value: &str) -> bool {
    vocabulary.iter().any(|(v, _)| *v == value)
}
