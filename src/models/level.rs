pub const FULL_SCALE_POINTS: f64 = 140.0;

pub const LEVELS: [&str; 7] = ["Below A1", "A1", "A2", "B1", "B2", "C1", "C2"];

// Ordered descending guards; the exact-140 check must run before the C1
// band, so this cannot collapse into a range lookup.
pub fn determine_language_level(score: f64) -> &'static str {
    if score == FULL_SCALE_POINTS {
        return "C2";
    }
    if score >= 130.0 {
        return "C1";
    }
    if score >= 115.0 {
        return "B2";
    }
    if score >= 95.0 {
        return "B1";
    }
    if score >= 65.0 {
        return "A2";
    }
    if score >= 40.0 {
        return "A1";
    }
    "Below A1"
}

pub fn is_assignable_level(label: &str) -> bool {
    LEVELS.contains(&label)
}
