//! Preset catalog entries.
//!
//! Two simulator samples followed by well-known near-Earth asteroids from the
//! lesson's fallback list.

use super::Scenario;

/// All catalog entries, simulator samples first.
pub static SCENARIOS: &[Scenario] = &[
    IMPACTOR_2025,
    APOPHIS,
    EROS,
    APOLLO,
    HEPHAISTOS,
    PHAETHON,
    TOUTATIS,
];

/// Fictional tutorial impactor, sized to land in the challenge band.
pub static IMPACTOR_2025: Scenario = Scenario {
    id: "3542519",
    name: "2025 Impactor",
    diameter_km: 1.2,
    velocity_km_s: 18.5,
    miss_distance_km: 4_500_000.0,
    hazardous: true,
    close_approach_date: "2025-04-13",
};

/// 99942 Apophis, 2029 close approach.
pub static APOPHIS: Scenario = Scenario {
    id: "2001031",
    name: "Apophis",
    diameter_km: 0.37,
    velocity_km_s: 30.7,
    miss_distance_km: 31_000_000.0,
    hazardous: true,
    close_approach_date: "2029-04-13",
};

pub static EROS: Scenario = Scenario {
    id: "2000433",
    name: "433 Eros",
    diameter_km: 16.84,
    velocity_km_s: 24.36,
    miss_distance_km: 41_884_032.0,
    hazardous: false,
    close_approach_date: "2023-11-05",
};

pub static APOLLO: Scenario = Scenario {
    id: "2001862",
    name: "1862 Apollo",
    diameter_km: 1.5,
    velocity_km_s: 22.48,
    miss_distance_km: 7_479_342.0,
    hazardous: true,
    close_approach_date: "2023-11-12",
};

pub static HEPHAISTOS: Scenario = Scenario {
    id: "2002212",
    name: "2212 Hephaistos",
    diameter_km: 5.7,
    velocity_km_s: 19.87,
    miss_distance_km: 26_923_456.0,
    hazardous: true,
    close_approach_date: "2023-11-18",
};

/// Parent body of the Geminids.
pub static PHAETHON: Scenario = Scenario {
    id: "2003200",
    name: "3200 Phaethon",
    diameter_km: 5.1,
    velocity_km_s: 35.76,
    miss_distance_km: 17_952_384.0,
    hazardous: false,
    close_approach_date: "2023-12-10",
};

pub static TOUTATIS: Scenario = Scenario {
    id: "2004179",
    name: "4179 Toutatis",
    diameter_km: 4.5,
    velocity_km_s: 16.94,
    miss_distance_km: 34_398_720.0,
    hazardous: false,
    close_approach_date: "2023-12-25",
};
