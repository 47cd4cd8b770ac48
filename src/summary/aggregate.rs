use crate::summary::types::{DaySummary, ForecastSummary, WeatherPeriod};
use chrono::{Datelike, Weekday};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Buckets forecast periods by the weekday of their start time.
///
/// The first period seen for a weekday fixes `day` and seeds both `low` and
/// `high`. Every later period for that weekday is compared against the
/// current `low` only: a warmer period replaces `high`, anything else
/// replaces `low`. With three or more periods per weekday the result can
/// therefore differ from the true minimum and maximum (70, 80, 75 yields
/// 70/75). Forecast texts are joined with `"; "` in encounter order.
///
/// Output order is unspecified; sort with [`ForecastSummary::sort_by_day`].
pub fn summarize<'a, I>(periods: I) -> ForecastSummary
where
    I: IntoIterator<Item = &'a WeatherPeriod>,
{
    let mut days: HashMap<Weekday, DaySummary> = HashMap::new();

    for period in periods {
        let weekday = period.start_time.weekday();

        match days.entry(weekday) {
            Entry::Vacant(slot) => {
                slot.insert(DaySummary::first(weekday, period));
            }
            Entry::Occupied(mut slot) => {
                let day = slot.get_mut();

                if period.temperature > day.low {
                    day.high = period.temperature;
                } else {
                    day.low = period.temperature;
                }

                day.short_forecast.push_str("; ");
                day.short_forecast.push_str(&period.short_forecast);
            }
        }
    }

    ForecastSummary {
        days: days.into_values().collect(),
    }
}
