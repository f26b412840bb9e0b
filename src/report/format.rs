//! Human-readable number formats used by result views.
//!
//! Rounding is half away from zero at the displayed precision, so
//! `1_250_000` dollars shows as `$1.3M`.

/// Rounds to `decimals` places, half away from zero.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Formats a dollar amount.
///
/// # Examples
///
/// ```
/// use fleet_routing::report::format_currency;
///
/// assert_eq!(format_currency(1_250_000.0), "$1.3M");
/// assert_eq!(format_currency(4_200.0), "$4K");
/// assert_eq!(format_currency(850.0), "$850");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount > 1_000_000.0 {
        format!("${:.1}M", round_to(amount / 1_000_000.0, 1))
    } else if amount > 1_000.0 {
        format!("${:.0}K", round_to(amount / 1_000.0, 0))
    } else {
        format!("${:.0}", round_to(amount, 0))
    }
}

/// Formats a distance in nautical miles.
///
/// ```
/// use fleet_routing::report::format_distance;
///
/// assert_eq!(format_distance(152.6), "153 nm");
/// assert_eq!(format_distance(42.25), "42.3 nm");
/// ```
pub fn format_distance(nm: f64) -> String {
    if nm > 100.0 {
        format!("{:.0} nm", round_to(nm, 0))
    } else {
        format!("{:.1} nm", round_to(nm, 1))
    }
}

/// Formats a fuel volume in liters.
///
/// ```
/// use fleet_routing::report::format_fuel;
///
/// assert_eq!(format_fuel(2_450.0), "2.5K L");
/// assert_eq!(format_fuel(640.4), "640 L");
/// ```
pub fn format_fuel(liters: f64) -> String {
    if liters > 1_000.0 {
        format!("{:.1}K L", round_to(liters / 1_000.0, 1))
    } else {
        format!("{:.0} L", round_to(liters, 0))
    }
}

/// Formats a duration given in hours.
///
/// Below one hour as minutes, below a day as decimal hours, otherwise as
/// days and hours.
///
/// ```
/// use fleet_routing::report::format_duration;
///
/// assert_eq!(format_duration(0.75), "45m");
/// assert_eq!(format_duration(5.25), "5.3h");
/// assert_eq!(format_duration(50.0), "2d 2h");
/// ```
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        format!("{:.0}m", round_to(hours * 60.0, 0))
    } else if hours < 24.0 {
        format!("{:.1}h", round_to(hours, 1))
    } else {
        let mut days = (hours / 24.0).floor();
        let mut rem = round_to(hours - days * 24.0, 0);
        if rem >= 24.0 {
            days += 1.0;
            rem = 0.0;
        }
        format!("{:.0}d {:.0}h", days, rem)
    }
}
