//! Garden statistics: aggregate counts and chart payloads.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{ApiError, GardenService, PlantStatus, Season};
use crate::repositories::{BedRepository, PlantRepository};
use crate::utils::datetime;

/// Whole-garden aggregate statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GardenStats {
    pub total_plants: i64,
    pub plants_by_status: BTreeMap<String, i64>,
    pub plants_by_season: BTreeMap<String, i64>,
    pub plants_by_year: BTreeMap<String, i64>,
}

/// Per-bed statistics, including space utilization.
#[derive(Debug, Clone, Serialize)]
pub struct BedStats {
    pub bed_name: String,
    pub dimensions: String,
    pub total_plants: i64,
    pub total_space_used: i64,
    /// Percentage text, or "N/A" when the bed dimensions are malformed
    pub space_utilization: String,
    pub plants_by_status: BTreeMap<String, i64>,
    pub plants_by_year: BTreeMap<String, i64>,
}

/// Zeroed status counter map so every status always appears in output.
fn empty_status_counts() -> BTreeMap<String, i64> {
    PlantStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect()
}

fn empty_season_counts() -> BTreeMap<String, i64> {
    Season::ALL.iter().map(|s| (s.as_str().to_string(), 0)).collect()
}

/// Bed area in square units from its "WxH" dimension text.
fn bed_area(dimensions: &str) -> Option<i64> {
    let mut parts = dimensions.split('x');
    let w: i64 = parts.next()?.trim().parse().ok()?;
    let h: i64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || w <= 0 || h <= 0 {
        return None;
    }
    Some(w * h)
}

impl GardenService {
    /// Aggregate statistics across the whole garden.
    pub async fn garden_stats(&self) -> Result<GardenStats, ApiError> {
        let plants = PlantRepository::get_all(self.conn()).await?;

        let mut stats = GardenStats {
            total_plants: 0,
            plants_by_status: empty_status_counts(),
            plants_by_season: empty_season_counts(),
            plants_by_year: BTreeMap::new(),
        };

        for plant in &plants {
            let quantity = i64::from(plant.quantity);
            stats.total_plants += quantity;
            if let Some(count) = stats.plants_by_status.get_mut(&plant.status) {
                *count += quantity;
            }
            if let Some(count) = stats.plants_by_season.get_mut(&plant.season) {
                *count += quantity;
            }
            *stats.plants_by_year.entry(plant.year.to_string()).or_insert(0) += quantity;
        }

        Ok(stats)
    }

    /// Statistics for a single bed, optionally restricted to one year.
    pub async fn bed_stats(&self, bed_uuid: &Uuid, year: Option<i32>) -> Result<BedStats, ApiError> {
        let bed = BedRepository::get_by_id(self.conn(), bed_uuid)
            .await?
            .ok_or_else(|| ApiError::NotFound("Garden bed".into()))?;

        let plants = PlantRepository::get_for_bed(self.conn(), bed_uuid).await?;

        let mut total_plants = 0i64;
        let mut total_space_used = 0i64;
        let mut plants_by_status = empty_status_counts();
        let mut plants_by_year = BTreeMap::new();

        for plant in &plants {
            if let Some(wanted) = year {
                if plant.year != wanted {
                    continue;
                }
            }
            let quantity = i64::from(plant.quantity);
            total_plants += quantity;
            total_space_used += quantity * i64::from(plant.space_required);
            if let Some(count) = plants_by_status.get_mut(&plant.status) {
                *count += quantity;
            }
            *plants_by_year.entry(plant.year.to_string()).or_insert(0) += quantity;
        }

        let space_utilization = match bed_area(&bed.dimensions) {
            Some(area) => format!("{:.1}%", (total_space_used as f64 / area as f64) * 100.0),
            None => "N/A".to_string(),
        };

        Ok(BedStats {
            bed_name: bed.name,
            dimensions: bed.dimensions,
            total_plants,
            total_space_used,
            space_utilization,
            plants_by_status,
            plants_by_year,
        })
    }

    /// Years that have plants, plus the current and next year, descending.
    pub async fn available_years(&self) -> Result<Vec<i32>, ApiError> {
        let current = datetime::current_year();
        let mut years = PlantRepository::get_years(self.conn()).await?;
        years.push(current);
        years.push(current + 1);
        years.sort_unstable();
        years.dedup();
        years.reverse();
        Ok(years)
    }

    /// Bar-chart payload of plant counts per year.
    pub async fn plants_by_year_chart(&self) -> Result<Value, ApiError> {
        let stats = self.garden_stats().await?;

        let mut by_year = stats.plants_by_year;
        if by_year.is_empty() {
            by_year.insert(datetime::current_year().to_string(), 0);
        }

        let years: Vec<String> = by_year.keys().cloned().collect();
        let counts: Vec<i64> = by_year.values().copied().collect();

        Ok(chart_payload("Plants by Year", "Year", years, counts))
    }

    /// Bar-chart payload of plant counts per season.
    pub async fn plants_by_season_chart(&self) -> Result<Value, ApiError> {
        let stats = self.garden_stats().await?;

        let seasons: Vec<String> = stats.plants_by_season.keys().cloned().collect();
        let counts: Vec<i64> = stats.plants_by_season.values().copied().collect();

        Ok(chart_payload("Plants by Season", "Season", seasons, counts))
    }
}

/// Common `{data, layout}` bar-chart structure.
fn chart_payload(title: &str, x_title: &str, x: Vec<String>, y: Vec<i64>) -> Value {
    json!({
        "data": [
            {
                "x": x,
                "y": y,
                "type": "bar",
                "name": "Plants"
            }
        ],
        "layout": {
            "title": title,
            "xaxis": { "title": x_title },
            "yaxis": {
                "title": "Number of Plants",
                "tickmode": "linear",
                "tick0": 0,
                "dtick": 1
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bed_area_parses_well_formed_dimensions() {
        assert_eq!(bed_area("4x8"), Some(32));
        assert_eq!(bed_area(" 3 x 3 "), Some(9));
    }

    #[test]
    fn bed_area_rejects_malformed_dimensions() {
        assert_eq!(bed_area("huge"), None);
        assert_eq!(bed_area("4x"), None);
        assert_eq!(bed_area("4x8x2"), None);
        assert_eq!(bed_area("0x5"), None);
    }
}
