/// Format seconds as `M:SS`.
///
/// Unknown positions (NaN, infinite, negative) render as `0:00`, which is what
/// an `<audio>` element reports before its metadata has loaded.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total_seconds = seconds.floor() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
