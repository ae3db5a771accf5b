//! Built-in valuation tables.
//!
//! Multiples reflect the firm's mid-market reference ranges for Spanish
//! SMEs. Deployments can replace them with a JSON table file.

use super::{GrowthBand, SizeNudge};
use crate::sectors::{RevenueMultiple, SectorMultiple};
use crate::valuation::SizeBucket;

fn sector(
    key: &str,
    label: &str,
    aliases: &[&str],
    min: f64,
    base: f64,
    max: f64,
) -> SectorMultiple {
    SectorMultiple {
        key: key.to_string(),
        label: label.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        base_multiple: base,
        min_multiple: min,
        max_multiple: max,
    }
}

fn revenue(key: &str, min: f64, base: f64, max: f64) -> RevenueMultiple {
    RevenueMultiple {
        sector: key.to_string(),
        base_multiple: base,
        min_multiple: min,
        max_multiple: max,
    }
}

pub(crate) fn sectors() -> Vec<SectorMultiple> {
    vec![
        sector("general", "General", &["otros", "other"], 3.5, 5.0, 6.5),
        sector(
            "technology",
            "Tecnología",
            &["tecnologia", "tech", "software", "saas", "it"],
            4.0,
            6.0,
            8.0,
        ),
        sector(
            "retail",
            "Retail y comercio",
            &["comercio", "comercio minorista", "distribucion"],
            3.0,
            4.5,
            6.0,
        ),
        sector(
            "healthcare",
            "Salud",
            &["salud", "sanidad", "health", "farma"],
            5.0,
            7.0,
            9.0,
        ),
        sector(
            "industrial",
            "Industria",
            &["industria", "manufactura", "manufacturing"],
            3.5,
            5.0,
            6.5,
        ),
        sector(
            "services",
            "Servicios profesionales",
            &["servicios", "consultoria", "professional services"],
            4.0,
            5.5,
            7.0,
        ),
        sector(
            "construction",
            "Construcción",
            &["construccion", "inmobiliaria", "real estate"],
            3.0,
            4.0,
            5.5,
        ),
        sector(
            "hospitality",
            "Hostelería y turismo",
            &["hosteleria", "turismo", "restauracion"],
            3.0,
            4.5,
            6.0,
        ),
        sector(
            "logistics",
            "Logística y transporte",
            &["logistica", "transporte"],
            3.5,
            5.0,
            6.5,
        ),
        sector(
            "food",
            "Alimentación",
            &["alimentacion", "agroalimentario", "food and beverage"],
            4.5,
            6.0,
            7.5,
        ),
        sector(
            "energy",
            "Energía",
            &["energia", "renovables"],
            5.0,
            7.0,
            9.0,
        ),
        sector(
            "education",
            "Educación",
            &["educacion", "formacion"],
            4.0,
            6.0,
            8.0,
        ),
    ]
}

pub(crate) fn revenue_multiples() -> Vec<RevenueMultiple> {
    vec![
        revenue("general", 0.4, 0.7, 1.0),
        revenue("technology", 1.0, 1.5, 2.5),
        revenue("retail", 0.5, 0.8, 1.1),
        revenue("healthcare", 0.8, 1.2, 1.8),
        revenue("industrial", 0.4, 0.7, 1.0),
        revenue("services", 0.6, 0.9, 1.3),
        revenue("construction", 0.3, 0.5, 0.8),
        revenue("hospitality", 0.4, 0.6, 0.9),
        revenue("logistics", 0.4, 0.6, 0.9),
        revenue("food", 0.6, 0.9, 1.2),
        revenue("energy", 0.9, 1.3, 2.0),
        revenue("education", 0.7, 1.1, 1.6),
    ]
}

pub(crate) fn growth_bands() -> Vec<GrowthBand> {
    vec![
        GrowthBand {
            min_growth_pct: 10.0,
            multiple_delta: 0.5,
        },
        GrowthBand {
            min_growth_pct: 20.0,
            multiple_delta: 1.0,
        },
        GrowthBand {
            min_growth_pct: 30.0,
            multiple_delta: 1.5,
        },
    ]
}

pub(crate) fn decline_penalty() -> f64 {
    0.5
}

pub(crate) fn size_nudges() -> Vec<SizeNudge> {
    vec![
        SizeNudge {
            size_bucket: SizeBucket::Micro,
            headroom_fraction: 0.0,
        },
        SizeNudge {
            size_bucket: SizeBucket::Small,
            headroom_fraction: 0.10,
        },
        SizeNudge {
            size_bucket: SizeBucket::Medium,
            headroom_fraction: 0.25,
        },
        SizeNudge {
            size_bucket: SizeBucket::Large,
            headroom_fraction: 0.50,
        },
    ]
}
