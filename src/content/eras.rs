//! Era catalogue

use serde::Serialize;

/// Which side of the race an accomplishment belongs to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EraCategory {
    Us,
    Ussr,
    Joint,
    Other,
}

impl EraCategory {
    /// Heading shown above the category's accomplishments
    pub fn label(self) -> &'static str {
        match self {
            EraCategory::Us => "United States",
            EraCategory::Ussr => "Soviet Union",
            EraCategory::Joint => "Joint Missions",
            EraCategory::Other => "Global Momentum",
        }
    }
}

/// A named period of the narrative
#[derive(Debug, Clone, Serialize)]
pub struct Era {
    pub id: u8,
    pub title: &'static str,
    pub years: &'static str,
    /// Accomplishments grouped by category, in display order
    pub accomplishments: &'static [(EraCategory, &'static [&'static str])],
}

/// Number of bullets shown for an era on the catalogue overview
pub const SUMMARY_BULLETS: usize = 4;

impl Era {
    /// The first few accomplishments across categories, in catalogue order
    pub fn summary_bullets(&self) -> Vec<&'static str> {
        self.accomplishments
            .iter()
            .flat_map(|(_, items)| items.iter().copied())
            .take(SUMMARY_BULLETS)
            .collect()
    }
}

pub static ERAS: &[Era] = &[
    Era {
        id: 1,
        title: "ERA 1 — Foundations",
        years: "1945–1957",
        accomplishments: &[
            (
                EraCategory::Us,
                &[
                    "German V-2 expertise absorbed into Army Ballistic Missile Agency",
                    "ICBM research accelerates: Redstone → Jupiter series",
                ],
            ),
            (
                EraCategory::Ussr,
                &[
                    "Korolev leads R-7 Semyorka, the rocket that will launch Sputnik",
                    "Reverse-engineering V-2 hardware jump-starts Soviet design bureaus",
                ],
            ),
            (
                EraCategory::Other,
                &[
                    "1955: Both nations announce plans to launch an artificial satellite",
                ],
            ),
        ],
    },
    Era {
        id: 2,
        title: "ERA 2 — Dawn of Spaceflight",
        years: "1957–1961",
        accomplishments: &[
            (
                EraCategory::Ussr,
                &[
                    "Sputnik 1 signals the dawn of the space age",
                    "Laika becomes the first living passenger to orbit Earth",
                    "Yuri Gagarin completes first human orbital flight",
                ],
            ),
            (
                EraCategory::Us,
                &[
                    "Explorer 1 discovers the Van Allen radiation belts",
                    "NASA is established to coordinate the civilian space program",
                    "Alan Shepard completes the first American crewed flight",
                ],
            ),
        ],
    },
    Era {
        id: 3,
        title: "ERA 3 — Moon Race & Human Spaceflight",
        years: "1961–1969",
        accomplishments: &[
            (
                EraCategory::Ussr,
                &[
                    "Valentina Tereshkova becomes the first woman in space",
                    "Alexei Leonov performs the first spacewalk",
                ],
            ),
            (
                EraCategory::Us,
                &[
                    "Gemini program masters rendezvous, docking, EVA techniques",
                    "Apollo 8 carries humans around the Moon for the first time",
                    "Apollo 11 lands Armstrong and Aldrin on the lunar surface",
                ],
            ),
        ],
    },
    Era {
        id: 4,
        title: "ERA 4 — Space Stations & Shuttle Era",
        years: "1970–1991",
        accomplishments: &[
            (
                EraCategory::Ussr,
                &[
                    "Salyut 1 inaugurates long-duration orbital labs",
                    "Mir demonstrates modular station operations",
                ],
            ),
            (
                EraCategory::Us,
                &[
                    "Skylab begins microgravity science for the US",
                    "Space Shuttle introduces partial reusability",
                ],
            ),
            (
                EraCategory::Joint,
                &[
                    "Apollo–Soyuz handsake foreshadows cooperation",
                ],
            ),
        ],
    },
    Era {
        id: 5,
        title: "ERA 5 — International Cooperation",
        years: "1991–2006",
        accomplishments: &[
            (
                EraCategory::Joint,
                &[
                    "1993 ISS agreement unites five space agencies",
                    "1998 begins ISS assembly — still the largest structure in space",
                ],
            ),
            (
                EraCategory::Ussr,
                &[
                    "Russia commercializes Soyuz seats, seeding private partnerships",
                ],
            ),
            (
                EraCategory::Us,
                &[
                    "Shuttle fleet constructs and services ISS modules",
                ],
            ),
        ],
    },
    Era {
        id: 6,
        title: "ERA 6 — Rise of Commercial Space",
        years: "2006–2015",
        accomplishments: &[
            (
                EraCategory::Us,
                &[
                    "NASA COTS and CRS programs invest in private launchers",
                    "SpaceX Falcon 1 reaches orbit in 2008",
                    "Space Shuttle retires in 2011, opening lanes for commercial crew",
                    "Blue Origin successfully lands New Shepard in 2015",
                ],
            ),
        ],
    },
    Era {
        id: 7,
        title: "ERA 7 — Corporate Conquest Era",
        years: "2015–Present",
        accomplishments: &[
            (
                EraCategory::Us,
                &[
                    "Falcon 9 and Falcon Heavy prove reusable heavy lift",
                    "Crew Dragon ushers in commercial astronaut taxis",
                    "Starship testing pushes ultra-heavy fully reusable craft",
                    "Starlink mega-constellation scales orbital internet",
                ],
            ),
            (
                EraCategory::Other,
                &[
                    "China: Tiangong station, Chang’e lunar series, Tianwen-1 Mars",
                    "India: Chandrayaan-3 achieves south-pole landing",
                ],
            ),
        ],
    },
    Era {
        id: 8,
        title: "ERA 8 — The New Space Race",
        years: "2020s–Future",
        accomplishments: &[
            (
                EraCategory::Us,
                &[
                    "NASA Artemis aims to return humans to the Moon",
                    "Lunar Gateway architecture enables deep-space staging",
                    "Starship targets Mars-scale logistics",
                    "Blue Origin Blue Moon and lunar base concepts mature",
                ],
            ),
            (
                EraCategory::Other,
                &[
                    "China–Russia outline a lunar research station",
                    "Private ventures explore space tourism and asteroid mining",
                ],
            ),
        ],
    },
];

/// Look up an era by id
pub fn era(id: u8) -> Option<&'static Era> {
    ERAS.iter().find(|era| era.id == id)
}
