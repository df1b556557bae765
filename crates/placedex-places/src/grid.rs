//! Grid-cell enumeration for location-biased search sweeps.
//!
//! Divides the bounded target region into `steps × steps` cells and yields
//! each cell's center point as the location-bias circle for one query batch.

/// Center of one search cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Bounded region and grid resolution for a collection sweep.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    /// The grid is `steps × steps` cells.
    pub steps: u32,
}

impl GridConfig {
    /// Boundaries for Irvine, CA, the default collection target.
    #[must_use]
    pub fn irvine(steps: u32) -> Self {
        Self {
            min_lat: 33.620,
            max_lat: 33.765,
            min_lng: -117.870,
            max_lng: -117.700,
            steps,
        }
    }

    /// Cell-center points, row-major from the southwest corner.
    #[must_use]
    pub fn cell_centers(&self) -> Vec<GridPoint> {
        let steps = self.steps.max(1);
        let lat_step = (self.max_lat - self.min_lat) / f64::from(steps);
        let lng_step = (self.max_lng - self.min_lng) / f64::from(steps);
        let mut centers = Vec::with_capacity((steps * steps) as usize);
        for i in 0..steps {
            for j in 0..steps {
                centers.push(GridPoint {
                    lat: self.min_lat + lat_step * f64::from(i) + lat_step / 2.0,
                    lng: self.min_lng + lng_step * f64::from(j) + lng_step / 2.0,
                });
            }
        }
        centers
    }
}
