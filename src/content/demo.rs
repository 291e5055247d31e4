// SPDX-License-Identifier: MPL-2.0
//! Built-in demo catalogue used when no content endpoint is configured.

use super::Artwork;
use crate::domain::gallery::ItemId;

const SUBJECTS: [&str; 12] = [
    "Harbour", "Neon", "Paper", "Signal", "Orchard", "Static", "Tide", "Copper", "Glass",
    "Meadow", "Vapour", "Granite",
];

const FORMS: [&str; 8] = [
    "Study", "Identity", "Campaign", "Loop", "Poster", "Series", "Sketch", "Film",
];

/// Number of entries per category in the demo catalogue.
pub const DEMO_CATEGORY_SIZES: [(&str, usize); 3] = [("work", 40), ("play", 17), ("daily", 9)];

/// Number of leading entries per category that are featured.
pub const DEMO_FEATURED_COUNT: usize = 3;

/// Builds the demo catalogue: every category in [`DEMO_CATEGORY_SIZES`],
/// ids unique across categories.
#[must_use]
pub fn catalogue() -> Vec<Artwork> {
    let mut next_id: u64 = 1;
    let mut entries = Vec::new();

    for (category, count) in DEMO_CATEGORY_SIZES {
        for index in 0..count {
            let subject = SUBJECTS[(next_id as usize * 7) % SUBJECTS.len()];
            let form = FORMS[(index * 3 + category.len()) % FORMS.len()];
            let title = format!("{subject} {form}");
            entries.push(Artwork {
                id: ItemId::from(next_id),
                slug: format!("{}-{}", title.to_lowercase().replace(' ', "-"), next_id),
                title,
                category: category.to_string(),
                summary: Some(format!("{category} entry #{}", index + 1)),
                image_url: None,
            });
            next_id += 1;
        }
    }

    entries
}
