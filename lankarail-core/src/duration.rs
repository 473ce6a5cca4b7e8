//! Parsing for the human-readable journey durations carried by the train
//! dataset ("8h 35m", "45m", "3h").

/// Convert a duration string into total minutes.
///
/// Hour and minute components are each optional, but at least one must be
/// present; anything else in the string is ignored.
pub fn parse_duration(input: &str) -> Result<u32, DurationParseError> {
    let mut hours: Option<u32> = None;
    let mut minutes: Option<u32> = None;
    let mut digits = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if !digits.is_empty() {
            let value: u32 = digits
                .parse()
                .map_err(|_| DurationParseError::Malformed(input.to_string()))?;
            match ch {
                'h' | 'H' => hours = Some(value),
                'm' | 'M' => minutes = Some(value),
                _ => {}
            }
            digits.clear();
        }
    }

    if hours.is_none() && minutes.is_none() {
        return Err(DurationParseError::Malformed(input.to_string()));
    }

    Ok(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
}

/// Render minutes back into the dataset's "8h 35m" form.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DurationParseError {
    #[error("Malformed duration: {0:?} (expected e.g. \"8h 35m\")")]
    Malformed(String),
}
