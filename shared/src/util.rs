/// Today's UTC date, the lower bound used for provider listings
///
/// Always UTC so the window does not move with the host's local zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Format a money figure with exactly two decimal places
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
