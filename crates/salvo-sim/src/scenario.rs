//! Built-in scenario: the default coastline and its cities.

use crate::city::CityDef;

/// Default seed for the built-in scenario.
pub const DEFAULT_SEED: u64 = 42;

const TERRAIN: [&str; 20] = [
    "~~~~                                ~~~~~~~~~~~~~~",
    "~~~                                 ~~~~~~~~~~~~~~",
    "~~~                                 ~~~~~~~~~~~~~~",
    "~~~                                           ~~~~",
    "~~~                                           ~~~~",
    "~~~~        #                                 ~~~~",
    "~~~                                           ~~~~",
    "~~~                                          ~~~~~",
    "~~~                                          ~~~~~",
    "~~~                           #              ~~~~~",
    "~~~~                                         ~~~~~",
    "~~~                                          ~~~~~",
    "~~~                                     #    ~~~~~",
    "~~~                                          ~~~~~",
    "~~~               #                         ~~~~~~",
    "~~~~                                        ~~~~~~",
    "~~~~~~~~~~~~                                ~~~~~~",
    "~~~~~~~~~~~~                                ~~~~~~",
    "~~~~~~~~~~~~                                ~~~~~~",
    "~~~~~~~~~~~~                                ~~~~~~",
];

pub fn default_terrain() -> Vec<String> {
    TERRAIN.iter().map(|l| l.to_string()).collect()
}

pub fn default_cities() -> Vec<CityDef> {
    vec![
        CityDef::new("Avalon", 5, 12, 800),
        CityDef::new("Brightwater", 9, 30, 1200),
        CityDef::new("Cinderford", 14, 18, 600),
        CityDef::new("Dunmore", 12, 40, 900),
    ]
}
