//! Hard-coded slide and logo lists shipped with the site.

use serde::{Deserialize, Serialize};

/// One rotating hero banner entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Background image reference, relative to the page.
    pub image: String,
    /// Caption shown under the banner while this slide is active.
    pub caption: String,
}

impl Slide {
    #[must_use]
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self { image: image.into(), caption: caption.into() }
    }
}

/// One brand logo in the scrolling strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub image: String,
    pub alt: String,
}

impl Logo {
    #[must_use]
    pub fn new(image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { image: image.into(), alt: alt.into() }
    }
}

/// `(image, caption)` pairs for the home page hero, in rotation order.
pub const HERO_SLIDES: &[(&str, &str)] = &[
    ("daftruck.jpg", "Powerful and reliable DAF Trucks from Europe — built for performance and endurance."),
    (
        "massyferguson.jpg",
        "High-quality Massey Ferguson Tractors from Japan, built for efficiency and durability.",
    ),
    ("semitrailers.jpg", "Strong and dependable Semi-Trailers designed for long-distance heavy transport."),
    ("tyres.jpg", "Premium Tyres from top brands for maximum traction and performance."),
];

/// `(image, alt)` pairs for the partner logo strip.
pub const PARTNER_LOGOS: &[(&str, &str)] = &[
    ("logos/daf.png", "DAF Trucks"),
    ("logos/massey-ferguson.png", "Massey Ferguson"),
];

/// Owned copy of [`HERO_SLIDES`].
#[must_use]
pub fn hero_slides() -> Vec<Slide> {
    HERO_SLIDES.iter().map(|(image, caption)| Slide::new(*image, *caption)).collect()
}

/// Owned copy of [`PARTNER_LOGOS`].
#[must_use]
pub fn partner_logos() -> Vec<Logo> {
    PARTNER_LOGOS.iter().map(|(image, alt)| Logo::new(*image, *alt)).collect()
}
