//! Data types shared by the forecast parser, the aggregator and the presenters.

use chrono::{DateTime, FixedOffset, Weekday};
use serde::{Serialize, Serializer};

/// One forecast period as published by the NWS (e.g. "Tonight").
///
/// Only `start_time`, `temperature` and `short_forecast` take part in
/// aggregation. `number` and `name` are kept for display and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPeriod {
    pub number: u32,
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub temperature: f64,
    pub short_forecast: String,
}

/// A parsed gridpoint forecast: the periods in the order the API listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    pub periods: Vec<WeatherPeriod>,
}

impl Forecast {
    /// Collapses the periods into one [`DaySummary`] per weekday.
    pub fn summary(&self) -> ForecastSummary {
        crate::summary::aggregate::summarize(&self.periods)
    }
}

/// Low/high temperature and combined forecast text for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DaySummary {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    /// Start time of the first period seen for this weekday.
    pub day: DateTime<FixedOffset>,
    pub low: f64,
    pub high: f64,
    pub short_forecast: String,
}

impl DaySummary {
    pub(crate) fn first(weekday: Weekday, period: &WeatherPeriod) -> Self {
        Self {
            weekday,
            day: period.start_time,
            low: period.temperature,
            high: period.temperature,
            short_forecast: period.short_forecast.clone(),
        }
    }
}

/// Per-weekday summaries. Order is unspecified until [`sort_by_day`] is called.
///
/// [`sort_by_day`]: ForecastSummary::sort_by_day
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastSummary {
    pub days: Vec<DaySummary>,
}

impl ForecastSummary {
    /// Sorts the days chronologically by their representative timestamp.
    pub fn sort_by_day(&mut self) {
        self.days.sort_by_key(|d| d.day);
    }

    pub fn get(&self, weekday: Weekday) -> Option<&DaySummary> {
        self.days.iter().find(|d| d.weekday == weekday)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }
}

/// Full English weekday name, e.g. `"Friday"`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(ts: &str, low: f64, high: f64) -> DaySummary {
        let day = DateTime::parse_from_rfc3339(ts).unwrap();
        DaySummary {
            weekday: chrono::Datelike::weekday(&day),
            day,
            low,
            high,
            short_forecast: "Sunny".to_string(),
        }
    }

    #[test]
    fn test_weekday_name_is_full_english() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Thu), "Thursday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_sort_by_day() {
        let mut summary = ForecastSummary {
            days: vec![
                day("2020-04-26T06:00:00-04:00", 68.0, 88.0),
                day("2020-04-24T11:00:00-04:00", 70.0, 87.0),
                day("2020-04-25T06:00:00-04:00", 70.0, 88.0),
            ],
        };
        summary.sort_by_day();

        let order: Vec<_> = summary.days.iter().map(|d| d.weekday).collect();
        assert_eq!(order, vec![Weekday::Fri, Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_json_shape() {
        let summary = ForecastSummary {
            days: vec![day("2020-04-24T11:00:00-04:00", 70.0, 87.0)],
        };
        let json = serde_json::to_value(&summary).unwrap();

        let first = &json["Days"][0];
        assert_eq!(first["Weekday"], "Friday");
        assert_eq!(first["Day"], "2020-04-24T11:00:00-04:00");
        assert_eq!(first["Low"], 70.0);
        assert_eq!(first["High"], 87.0);
        assert_eq!(first["ShortForecast"], "Sunny");
    }

    #[test]
    fn test_get_by_weekday() {
        let summary = ForecastSummary {
            days: vec![day("2020-04-24T11:00:00-04:00", 70.0, 87.0)],
        };
        assert!(summary.get(Weekday::Fri).is_some());
        assert!(summary.get(Weekday::Mon).is_none());
    }
}
