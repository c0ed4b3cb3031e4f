//! GeoJSON export of accepted match links.
//!
//! Selects rows with an accepted verdict and a real candidate, and emits
//! one LineString feature per row connecting the reference and candidate
//! centroids. Rows without geometry are skipped.

use serde_json::{json, Value};

use crate::decision::MatchResultRow;

/// Rows that represent an accepted match with a real candidate.
pub fn accepted_rows(rows: &[MatchResultRow]) -> impl Iterator<Item = &MatchResultRow> {
    rows.iter().filter(|row| row.is_accepted())
}

/// Build a GeoJSON FeatureCollection of reference→candidate link lines
/// for every accepted row carrying both centroids.
pub fn links_to_geojson(rows: &[MatchResultRow]) -> Value {
    let features: Vec<Value> = accepted_rows(rows)
        .filter_map(|row| {
            let link = row.link.as_ref()?;
            Some(json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [
                        [link.reference.x, link.reference.y],
                        [link.candidate.x, link.candidate.y],
                    ],
                },
                "properties": {
                    "reference_id": row.reference_id,
                    "reference_name": row.reference_name,
                    "candidate_id": row.candidate_id,
                    "candidate_name": row.candidate_name,
                    "probability": row.probability,
                    "gap": row.gap,
                },
            }))
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
