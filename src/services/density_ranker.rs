//! Population density ranking
//!
//! Pure transform over raw country objects: derive density, drop records
//! without a positive density, sort densest first, keep the first `limit`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for missing country names
pub const NOT_AVAILABLE: &str = "N/A";

/// One ranked country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name_common: String,
    pub name_official: String,
    /// km²
    pub area: f64,
    pub population: i64,
    /// people per km²
    pub population_density: f64,
}

impl CountryRecord {
    /// Build a record from one upstream object, defaulting anything missing
    pub fn from_raw(raw: &Value) -> Self {
        let area = raw.get("area").and_then(Value::as_f64).unwrap_or(0.0);
        let population = raw.get("population").map(population_of).unwrap_or(0);

        Self {
            name_common: name_field(raw, "common"),
            name_official: name_field(raw, "official"),
            area,
            population,
            population_density: density(population, area),
        }
    }
}

fn name_field(raw: &Value, key: &str) -> String {
    raw.get("name")
        .and_then(|name| name.get(key))
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Integral populations are taken as-is, fractional ones truncated
fn population_of(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or(0)
}

/// Zero unless both inputs are strictly positive and the quotient is finite
pub fn density(population: i64, area: f64) -> f64 {
    if area > 0.0 && population > 0 {
        let value = population as f64 / area;
        if value.is_finite() { value } else { 0.0 }
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DensityRanker;

impl DensityRanker {
    pub fn new() -> Self {
        Self
    }

    /// Top `limit` countries by density, densest first.
    ///
    /// Equal densities keep their upstream order. `limit <= 0` yields an
    /// empty list.
    pub fn rank(&self, raw: &[Value], limit: i64) -> Vec<CountryRecord> {
        if limit <= 0 {
            return Vec::new();
        }

        let mut records: Vec<CountryRecord> = raw
            .iter()
            .map(CountryRecord::from_raw)
            .filter(|record| record.population_density > 0.0)
            .collect();

        // sort_by is stable
        records.sort_by(|a, b| b.population_density.total_cmp(&a.population_density));
        records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(name: &str, area: f64, population: i64) -> Value {
        json!({
            "name": {"common": name, "official": format!("Republic of {}", name)},
            "area": area,
            "population": population,
        })
    }

    #[test]
    fn test_density_requires_both_positive() {
        assert_eq!(density(100, 10.0), 10.0);
        assert_eq!(density(0, 10.0), 0.0);
        assert_eq!(density(100, 0.0), 0.0);
        assert_eq!(density(-5, 10.0), 0.0);
        assert_eq!(density(5, -10.0), 0.0);
    }

    #[test]
    fn test_density_overflow_is_zero() {
        assert_eq!(density(1000, 1e-310), 0.0);
        assert_eq!(density(1000, f64::MIN_POSITIVE), 0.0);
    }

    #[test]
    fn test_from_raw_defaults_missing_fields() {
        let record = CountryRecord::from_raw(&json!({}));
        assert_eq!(record.name_common, NOT_AVAILABLE);
        assert_eq!(record.name_official, NOT_AVAILABLE);
        assert_eq!(record.area, 0.0);
        assert_eq!(record.population, 0);
        assert_eq!(record.population_density, 0.0);
    }

    #[test]
    fn test_from_raw_ignores_malformed_values() {
        let record = CountryRecord::from_raw(&json!({
            "name": {"common": 42, "official": null},
            "area": "large",
            "population": true,
        }));
        assert_eq!(record.name_common, NOT_AVAILABLE);
        assert_eq!(record.name_official, NOT_AVAILABLE);
        assert_eq!(record.area, 0.0);
        assert_eq!(record.population, 0);
    }

    #[test]
    fn test_from_raw_truncates_fractional_population() {
        let record = CountryRecord::from_raw(&json!({"area": 2, "population": 9.9}));
        assert_eq!(record.population, 9);
        assert_eq!(record.population_density, 4.5);
    }

    #[test]
    fn test_rank_sorts_descending_and_truncates() {
        let raw = vec![
            country("Low", 100.0, 100),
            country("High", 1.0, 1000),
            country("Mid", 10.0, 100),
        ];

        let ranked = DensityRanker::new().rank(&raw, 2);
        let names: Vec<&str> = ranked.iter().map(|r| r.name_common.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let raw = vec![
            country("First", 10.0, 100),
            country("Denser", 1.0, 100),
            country("Second", 20.0, 200),
        ];

        let ranked = DensityRanker::new().rank(&raw, 10);
        let names: Vec<&str> = ranked.iter().map(|r| r.name_common.as_str()).collect();
        assert_eq!(names, vec!["Denser", "First", "Second"]);
    }

    #[test]
    fn test_rank_non_positive_limit() {
        let raw = vec![country("A", 1.0, 10)];
        assert!(DensityRanker::new().rank(&raw, 0).is_empty());
        assert!(DensityRanker::new().rank(&raw, -3).is_empty());
    }

    #[test]
    fn test_rank_huge_limit() {
        let raw = vec![country("A", 1.0, 10), country("B", 1.0, 0)];
        let ranked = DensityRanker::new().rank(&raw, i64::MAX);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = CountryRecord::from_raw(&country("X", 10.0, 100));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["nameCommon"], "X");
        assert_eq!(json["nameOfficial"], "Republic of X");
        assert_eq!(json["populationDensity"], 10.0);
    }
}
