//! Static airport and airspace reference data.
//!
//! The tables are immutable for the process lifetime and shared read-only
//! between requests.

use crate::models::{Airport, AirspaceRegion, BorderStyle};

// (iata, name, city, country, lat, lon)
const AIRPORTS: &[(&str, &str, &str, &str, f64, f64)] = &[
    ("EBB", "Entebbe International", "Entebbe", "Uganda", 0.042386, 32.443503),
    ("KGL", "Kigali International", "Kigali", "Rwanda", -1.968629, 30.139492),
    ("NBO", "Jomo Kenyatta International", "Nairobi", "Kenya", -1.319167, 36.927500),
    ("MBA", "Moi International", "Mombasa", "Kenya", -4.034833, 39.594250),
    ("WIL", "Wilson Airport", "Nairobi", "Kenya", -1.321889, 36.814833),
    ("EDL", "Eldoret International", "Eldoret", "Kenya", 0.404457, 35.238886),
    ("DAR", "Julius Nyerere International", "Dar es Salaam", "Tanzania", -6.878111, 39.202625),
    ("JRO", "Kilimanjaro International", "Kilimanjaro", "Tanzania", -3.429406, 37.074461),
    ("ZNZ", "Abeid Amani Karume Intl", "Zanzibar", "Tanzania", -6.221978, 39.224911),
    ("BJM", "Bujumbura International", "Bujumbura", "Burundi", -3.324019, 29.318519),
    ("FIH", "N'djili International", "Kinshasa", "D.R. Congo", -4.385751, 15.444600),
    ("GOM", "Goma International", "Goma", "D.R. Congo", -1.670814, 29.238472),
    ("FBM", "Lubumbashi International", "Lubumbashi", "D.R. Congo", -11.591514, 27.530107),
    ("JUB", "Juba International", "Juba", "South Sudan", 4.872006, 31.601117),
    ("MGQ", "Aden Adde International", "Mogadishu", "Somalia", 2.014547, 45.304698),
    ("BBO", "Berbera International", "Berbera", "Somalia", 10.389167, 44.941111),
    ("HGA", "Egal International", "Hargeisa", "Somalia", 9.519917, 44.088806),
    ("GGR", "Garowe Airport", "Garowe", "Somalia", 8.460556, 48.484444),
];

// (name, rgb, fill alpha, closed ring as [lat, lon])
const REGIONS: &[(&str, (u8, u8, u8), f64, &[[f64; 2]])] = &[
    (
        "Kenya FIR",
        (255, 0, 0),
        0.2,
        &[[5.0, 34.0], [5.0, 42.0], [-1.0, 42.0], [-1.0, 34.0], [5.0, 34.0]],
    ),
    (
        "Uganda FIR",
        (0, 255, 0),
        0.2,
        &[[1.5, 29.0], [1.5, 35.5], [-2.5, 35.5], [-2.5, 29.0], [1.5, 29.0]],
    ),
    (
        "Tanzania FIR",
        (0, 0, 255),
        0.2,
        &[[-1.0, 34.0], [-1.0, 40.0], [-7.0, 40.0], [-7.0, 34.0], [-1.0, 34.0]],
    ),
    (
        "Upper Traffic Zone",
        (255, 255, 0),
        0.15,
        &[[-2.0, 33.0], [4.0, 43.0], [10.0, 43.0], [10.0, 33.0], [-2.0, 33.0]],
    ),
];

const BORDER_ALPHA: f64 = 0.8;
const BORDER_WIDTH: u32 = 2;

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Read-only store of airports and airspace regions.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    airports: Vec<Airport>,
    regions: Vec<AirspaceRegion>,
}

impl ReferenceData {
    pub fn new(airports: Vec<Airport>, regions: Vec<AirspaceRegion>) -> Self {
        Self { airports, regions }
    }

    /// The East African airports and illustrative FIR polygons.
    pub fn builtin() -> Self {
        let airports = AIRPORTS
            .iter()
            .map(|&(iata, name, city, country, lat, lon)| Airport {
                iata: iata.to_string(),
                name: name.to_string(),
                city: city.to_string(),
                country: country.to_string(),
                lat,
                lon,
            })
            .collect();

        let regions = REGIONS
            .iter()
            .map(|&(name, rgb, alpha, ring)| AirspaceRegion {
                name: name.to_string(),
                polygon: ring.to_vec(),
                fill_color: rgba(rgb, alpha),
                border: BorderStyle {
                    color: rgba(rgb, BORDER_ALPHA),
                    width: BORDER_WIDTH,
                },
            })
            .collect();

        Self::new(airports, regions)
    }

    pub fn list_airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Exact, case-sensitive lookup by IATA code.
    pub fn find_airport(&self, code: &str) -> Option<&Airport> {
        self.airports.iter().find(|airport| airport.iata == code)
    }

    pub fn airport_codes(&self) -> Vec<&str> {
        self.airports.iter().map(|airport| airport.iata.as_str()).collect()
    }

    pub fn list_regions(&self) -> &[AirspaceRegion] {
        &self.regions
    }

    pub fn find_region(&self, name: &str) -> Option<&AirspaceRegion> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Regions whose polygon contains the point, in table order.
    pub fn regions_containing(&self, lat: f64, lon: f64) -> Vec<&AirspaceRegion> {
        self.regions
            .iter()
            .filter(|region| region.contains(lat, lon))
            .collect()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_loaded_in_order() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.list_airports().len(), 18);
        assert_eq!(reference.list_airports()[0].iata, "EBB");
        assert_eq!(reference.list_airports()[17].iata, "GGR");

        let names: Vec<_> = reference.list_regions().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Kenya FIR", "Uganda FIR", "Tanzania FIR", "Upper Traffic Zone"]
        );
    }

    #[test]
    fn test_find_airport_is_case_sensitive() {
        let reference = ReferenceData::builtin();
        let nbo = reference.find_airport("NBO").expect("NBO present");
        assert_eq!(nbo.city, "Nairobi");
        assert!(reference.find_airport("nbo").is_none());
        assert!(reference.find_airport("XXX").is_none());
    }

    #[test]
    fn test_builtin_regions_are_closed() {
        let reference = ReferenceData::builtin();
        for region in reference.list_regions() {
            assert!(region.is_valid(), "{:?}", region.validate());
        }
    }

    #[test]
    fn test_region_colors() {
        let reference = ReferenceData::builtin();
        let kenya = reference.find_region("Kenya FIR").unwrap();
        assert_eq!(kenya.fill_color, "rgba(255, 0, 0, 0.2)");
        assert_eq!(kenya.border.color, "rgba(255, 0, 0, 0.8)");

        let upper = reference.find_region("Upper Traffic Zone").unwrap();
        assert_eq!(upper.fill_color, "rgba(255, 255, 0, 0.15)");
    }

    #[test]
    fn test_regions_containing_nairobi() {
        let reference = ReferenceData::builtin();
        let names: Vec<_> = reference
            .regions_containing(-0.5, 36.9)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Kenya FIR"]);
        assert!(reference.regions_containing(30.0, 0.0).is_empty());
    }
}
