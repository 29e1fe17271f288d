//! The ordered GDP series that drives the chart.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::data_point::DataPoint;
use crate::error::LoadError;
use crate::source::SourceDocument;

/// Descriptive metadata carried alongside the series when the document has it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_name: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// Ordered sequence of [`DataPoint`]s.
///
/// Order is preserved from the source document, which is already sorted by
/// date ascending. A dataset is built once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    points: Vec<DataPoint>,
    info: DatasetInfo,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            info: DatasetInfo::default(),
        }
    }

    pub fn with_info(mut self, info: DatasetInfo) -> Self {
        self.info = info;
        self
    }

    /// Parse a GDP response body into a dataset.
    ///
    /// Any malformed pair fails the whole load; there is no partial dataset.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let document = SourceDocument::from_json(body)?;
        Self::try_from(document)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Earliest date in the series, `None` when empty.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.points.iter().map(DataPoint::date).min()
    }

    /// Latest date in the series, `None` when empty.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.points.iter().map(DataPoint::date).max()
    }

    /// Largest value in the series, `None` when empty.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(DataPoint::value)
            .fold(None, |max, v| match max {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }
}

impl TryFrom<SourceDocument> for Dataset {
    type Error = LoadError;

    fn try_from(document: SourceDocument) -> Result<Self, Self::Error> {
        let points = document
            .data
            .iter()
            .map(|(date, value)| DataPoint::from_pair(date, *value))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Parsed {} GDP data points", points.len());

        Ok(Self::new(points).with_info(DatasetInfo {
            name: document.name,
            description: document.description,
            source_name: document.source_name,
            from_date: document.from_date,
            to_date: document.to_date,
        }))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../fixtures/gdp_sample.json");

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_json_preserves_order() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 8);
        let dates: Vec<String> = dataset.iter().map(DataPoint::formatted_date).collect();
        assert_eq!(dates[0], "1947-01-01");
        assert_eq!(dates[2], "1947-07-01");
        assert_eq!(dates[7], "1948-10-01");
        assert!(dataset.points().windows(2).all(|w| w[0].date() < w[1].date()));
    }

    #[test]
    fn test_from_json_carries_info() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(
            dataset.info().name.as_deref(),
            Some("Gross Domestic Product, 1 Decimal")
        );
        assert_eq!(dataset.info().from_date.as_deref(), Some("1947-01-01"));
    }

    #[test]
    fn test_extents() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.min_date(), Some(date(1947, 1, 1)));
        assert_eq!(dataset.max_date(), Some(date(1948, 10, 1)));
        assert_eq!(dataset.max_value(), Some(280.7));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_json(r#"{"data": []}"#).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.min_date(), None);
        assert_eq!(dataset.max_value(), None);
    }

    #[test]
    fn test_bad_date_fails_whole_load() {
        let body = r#"{"data": [["1947-01-01", 243.1], ["not-a-date", 246.3]]}"#;
        assert!(matches!(
            Dataset::from_json(body),
            Err(LoadError::Date { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Dataset::from_json("<html>404</html>"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_max_value_ignores_position() {
        let dataset = Dataset::new(vec![
            DataPoint::new(date(2000, 1, 1), 5.0),
            DataPoint::new(date(2000, 4, 1), 9.0),
            DataPoint::new(date(2000, 7, 1), 7.0),
        ]);
        assert_eq!(dataset.max_value(), Some(9.0));
    }
}
