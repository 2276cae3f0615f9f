use crate::error::{Result, WqmError};
use crate::quality::QualityLevel;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Geographic position of a monitoring station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A monitored region (city or province) with its latest measurements.
///
/// The `level` is assigned by hand in the fixture and is not derived from
/// the measurements; see [`Region::level_matches_tds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
    /// Total Dissolved Solids in mg/L
    pub tds: f64,
    pub ph: f64,
    /// Turbidity in NTU
    pub turbidity: f64,
    pub level: QualityLevel,
    pub coordinates: Coordinates,
}

impl Region {
    /// True when the assigned tier agrees with the TDS thresholds table.
    pub fn level_matches_tds(&self) -> bool {
        self.level.thresholds().tds.contains(self.tds)
    }

    /// Parse a CSV string of region rows.
    ///
    /// Expected columns (with headers): `id,name,tds,ph,turbidity,level,lat,lng`
    pub fn parse_region_csv(csv_object: &str) -> Result<Vec<Region>> {
        let mut region_list = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let region = Region {
                id: parse_field(&record, 0, "id")?,
                name: text_field(&record, 1, "name")?.to_string(),
                tds: parse_field(&record, 2, "tds")?,
                ph: parse_field(&record, 3, "ph")?,
                turbidity: parse_field(&record, 4, "turbidity")?,
                level: text_field(&record, 5, "level")?.parse()?,
                coordinates: Coordinates {
                    lat: parse_field(&record, 6, "lat")?,
                    lng: parse_field(&record, 7, "lng")?,
                },
            };
            if !region.level_matches_tds() {
                log::warn!(
                    "region {} is tagged {} but its TDS {} falls outside that tier",
                    region.name,
                    region.level.key(),
                    region.tds
                );
            }
            region_list.push(region);
        }
        Ok(region_list)
    }
}

pub(crate) fn text_field<'a>(
    record: &'a StringRecord,
    index: usize,
    column: &'static str,
) -> Result<&'a str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or(WqmError::MissingColumn(column))
}

pub(crate) fn parse_field<T: std::str::FromStr>(
    record: &StringRecord,
    index: usize,
    column: &'static str,
) -> Result<T> {
    let value = text_field(record, index, column)?;
    value.parse::<T>().map_err(|_| WqmError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,tds,ph,turbidity,level,lat,lng
1,Hanoi,120,7.2,2.3,good,21.0285,105.8542
10,Thai Nguyen,300,6.2,8.5,dangerous,21.5944,105.8480
";

    #[test]
    fn test_parse_region_csv() {
        let regions = Region::parse_region_csv(SAMPLE).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].id, 1);
        assert_eq!(regions[0].name, "Hanoi");
        assert!((regions[0].tds - 120.0).abs() < f64::EPSILON);
        assert!((regions[0].ph - 7.2).abs() < f64::EPSILON);
        assert_eq!(regions[0].level, QualityLevel::Good);
        assert!((regions[1].coordinates.lat - 21.5944).abs() < f64::EPSILON);
        assert_eq!(regions[1].level, QualityLevel::Dangerous);
    }

    #[test]
    fn test_parse_empty_csv() {
        let regions = Region::parse_region_csv("id,name,tds,ph,turbidity,level,lat,lng\n").unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let csv = "id,name,tds,ph,turbidity,level,lat,lng\n1,Hanoi,abc,7.2,2.3,good,21.0,105.8\n";
        let err = Region::parse_region_csv(csv).unwrap_err();
        assert!(matches!(err, WqmError::InvalidNumber { column: "tds", .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        let csv = "id,name,tds,ph,turbidity,level,lat,lng\n1,Hanoi,120,7.2,2.3,murky,21.0,105.8\n";
        assert!(matches!(
            Region::parse_region_csv(csv),
            Err(WqmError::UnknownLevel(_))
        ));
    }

    #[test]
    fn test_level_consistency_is_reported_not_enforced() {
        let csv = "id,name,tds,ph,turbidity,level,lat,lng\n1,Mismatch,300,7.2,2.3,excellent,21.0,105.8\n";
        let regions = Region::parse_region_csv(csv).unwrap();
        assert_eq!(regions[0].level, QualityLevel::Excellent);
        assert!(!regions[0].level_matches_tds());
    }
}
