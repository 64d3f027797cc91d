/// Complaint categories.
///
/// Two taxonomies coexist in the deployed intake forms, so category is an
/// open, server-validated string set rather than a closed enum. A value is
/// accepted when it belongs to either recognized taxonomy.
pub const CAMPUS_CATEGORIES: &[&str] = &["Hostel", "Class", "Mentor", "System", "Other"];

pub const SERVICE_CATEGORIES: &[&str] = &[
    "academic",
    "facilities",
    "technical",
    "administrative",
    "other",
];

/// Maximum stored length of a category value.
pub const MAX_CATEGORY_LEN: usize = 50;

pub fn is_recognized_category(value: &str) -> bool {
    CAMPUS_CATEGORIES.contains(&value) || SERVICE_CATEGORIES.contains(&value)
}
