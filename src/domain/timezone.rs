use chrono::Utc;
use chrono_tz::{TZ_VARIANTS, Tz};

/// Continental regions of the IANA database. Names such as `US/Eastern` or
/// `Etc/GMT+1` fall outside them.
const REGIONS: [&str; 10] = [
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
];

/// Identifiers under a continental region, sorted, with `UTC` appended last.
///
/// chrono-tz does not mark which names are links, so backward-compatible
/// names inside a region (`Asia/Calcutta`, `Europe/Kiev`) are offered next to
/// their current forms. Both resolve to the same zone.
pub fn timezone_identifiers() -> Vec<String> {
    let mut identifiers: Vec<String> = TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| {
            name.split_once('/').is_some_and(|(region, _)| REGIONS.contains(&region))
        })
        .map(String::from)
        .collect();
    identifiers.sort();
    identifiers.push("UTC".to_string());
    identifiers
}

/// Current UTC offset of an identifier, e.g. `+02:00`.
pub fn utc_offset(identifier: &str) -> Option<String> {
    let tz: Tz = identifier.parse().ok()?;
    Some(Utc::now().with_timezone(&tz).format("%:z").to_string())
}
