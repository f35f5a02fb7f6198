//! Time-of-day rendering for hour and minute labels.

/// Renders `G:i` (24-hour) or `g:i A` (12-hour) with an unpadded hour and a
/// two-digit minute.
pub fn clock_label(hour: u8, minute: u8, twelve_hour_time: bool) -> String {
    if twelve_hour_time {
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{minute:02} {meridiem}")
    } else {
        format!("{hour}:{minute:02}")
    }
}
