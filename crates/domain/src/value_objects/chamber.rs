//! The four chambers (divisions) of the society.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chamber {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

pub const CHAMBERS: [Chamber; 4] = [
    Chamber {
        slug: "disco",
        title: "DISCO",
        tagline: "Digital Sub-Council",
    },
    Chamber {
        slug: "baja",
        title: "BAJA",
        tagline: "OFF-ROAD RACING & EXPLORATION",
    },
    Chamber {
        slug: "aero",
        title: "AERO MODELLING",
        tagline: "FLIGHT DRONES & INNOVATION",
    },
    Chamber {
        slug: "supra",
        title: "SUPRA",
        tagline: "SUPER RACING ASSOCIATION",
    },
];
