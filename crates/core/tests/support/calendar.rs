//! Calendar and policy fixtures.
//!
//! Builds the configuration shapes the surrounding application stores:
//! JSON-backed calendar/policy records plus their normalized forms. The
//! standard fixture is the Mon-Fri 09:00-17:00 UTC business week used by
//! most scenarios.

use chrono::{DateTime, TimeZone, Utc};
use deskflow_domain::{BusinessCalendar, SlaPolicy, SlaPolicyRecord};

/// `2023-01-02` is a Monday; most scenarios anchor on that week.
pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn weekday_json(active: bool) -> serde_json::Value {
    if active {
        serde_json::json!({ "active": true, "starts_at": "09:00", "ends_at": "17:00" })
    } else {
        serde_json::json!({ "active": false, "starts_at": "", "ends_at": "" })
    }
}

/// Raw stored record for a Mon-Fri 09:00-17:00 week in `timezone`.
pub fn business_week_record(timezone: &str) -> serde_json::Value {
    let days: Vec<_> = (0..7).map(|day| weekday_json(day < 5)).collect();
    serde_json::json!({ "timezone": timezone, "days": days })
}

/// Normalized Mon-Fri 09:00-17:00 calendar in `timezone`.
pub fn business_week_calendar(timezone: &str) -> BusinessCalendar {
    let record = serde_json::from_value(business_week_record(timezone)).unwrap();
    BusinessCalendar::from_record(&record).unwrap()
}

/// Standard policy over the business week: critical 1h/4h, high 4h/16h,
/// low 24h/120h.
pub fn standard_policy(timezone: &str) -> SlaPolicy {
    let json = serde_json::json!({
        "name": "standard",
        "calendar": business_week_record(timezone),
        "targets": [
            { "priority": "critical", "response_time": "01:00", "resolve_time": "04:00" },
            { "priority": "high",     "response_time": "04:00", "resolve_time": "16:00" },
            { "priority": "low",      "response_time": "24:00", "resolve_time": "120:00" }
        ]
    });
    let record: SlaPolicyRecord = serde_json::from_value(json).unwrap();
    SlaPolicy::from_record(&record).unwrap()
}
