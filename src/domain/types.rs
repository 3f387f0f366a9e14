use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date filter applied to observations. Both bounds are inclusive; a missing
/// `end` runs through the latest stored date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn since(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

/// Min/avg/max of observed temperature over a range.
///
/// All three fields are `None` when no non-null reading falls in the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// Aggregate the non-null values of `readings`
    pub fn from_readings<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in readings.into_iter().flatten() {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            min: Some(min),
            avg: Some(sum / count as f64),
            max: Some(max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}
