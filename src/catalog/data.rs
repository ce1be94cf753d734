// SPDX-License-Identifier: MPL-2.0
//! Built-in certificate data.
//!
//! The gallery opens with the four seed certificates and reveals the
//! archive two at a time.

use super::{Catalog, CatalogError, CatalogItem};

/// Certificates visible as soon as the gallery mounts.
#[must_use]
pub fn seed_certificates() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            1,
            "Create an intelligent document processing solution with Azure AI Document Intelligence",
            "Microsoft",
            "certificates/first.png",
        ),
        CatalogItem::new(
            2,
            "Build a natural language processing solution with Azure AI Language",
            "Microsoft",
            "certificates/second.png",
        ),
        CatalogItem::new(
            3,
            "Microsoft AI Skill Challenge",
            "Microsoft",
            "certificates/third.png",
        ),
        CatalogItem::new(
            4,
            "Gen AI Study Jams",
            "Google Cloud",
            "certificates/fourth.png",
        ),
    ]
}

/// The archive revealed on demand, in display order.
pub fn archive_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        CatalogItem::new(
            5,
            "Bharatiya Sakshya Adhiniyam",
            "MyGov",
            "certificates/fifth.png",
        ),
        CatalogItem::new(6, "SQL Module", "Newton School", "certificates/sixth.png"),
        CatalogItem::new(
            7,
            "Internship Certificate",
            "IBM",
            "certificates/seventh.png",
        ),
        CatalogItem::new(8, "Yuva AI for All", "India AI", "certificates/eighth.png"),
        CatalogItem::new(9, "MoSPI & MyGov", "MyGov", "certificates/ninth.png"),
        CatalogItem::new(
            10,
            "Frontend Developer",
            "SWOC'25",
            "certificates/tenth.png",
        ),
        CatalogItem::new(
            11,
            "Master class of Figma",
            "Physics Wallah",
            "certificates/eleventh.png",
        ),
        CatalogItem::new(
            12,
            "Frontend Developer(React)",
            "HackerRank",
            "certificates/twelfth.png",
        ),
        CatalogItem::new(
            13,
            "Hackathon",
            "MAIT, Rohini",
            "certificates/thirteenth.png",
        ),
        CatalogItem::new(
            14,
            "AINCAT 2025",
            "Naukri Campus",
            "certificates/fourteenth.png",
        ),
        CatalogItem::new(
            15,
            "Frontend Battle 2.0",
            "IIT Bhubaneswar",
            "certificates/fifteenth.png",
        ),
    ])
}
