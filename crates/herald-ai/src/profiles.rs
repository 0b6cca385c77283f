//! Fixed tone/format profiles and the country table.
//!
//! Profiles are selected by label; the sets are compiled in and never
//! change at runtime.

/// A named tone/format directive interpolated into the system turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub label: &'static str,
    pub instruction: &'static str,
}

impl StyleProfile {
    /// Look a profile up by label, ignoring ASCII case and surrounding space.
    pub fn find(set: &'static [StyleProfile], label: &str) -> Option<&'static StyleProfile> {
        let label = label.trim();
        set.iter().find(|p| p.label.eq_ignore_ascii_case(label))
    }
}

/// Tones offered by the email drafting assistant.
pub const EMAIL_STYLES: &[StyleProfile] = &[
    StyleProfile {
        label: "Business Formal",
        instruction: "Writes in a polite, professional business email format.",
    },
    StyleProfile {
        label: "Business Casual",
        instruction: "Writes in a friendly yet professional business email format.",
    },
    StyleProfile {
        label: "Academic",
        instruction: "Writes in a scholarly, formal register.",
    },
    StyleProfile {
        label: "Friendly",
        instruction: "Writes in a warm, personal tone.",
    },
];

/// Briefing styles offered by the news assistant.
pub const NEWS_STYLES: &[StyleProfile] = &[
    StyleProfile {
        label: "Key Summary",
        instruction: "Summarizes only the essential information, concisely.",
    },
    StyleProfile {
        label: "In Depth",
        instruction: "Explains the important points in detail.",
    },
];

/// A country the headline source can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub label: &'static str,
    /// ISO 3166-1 alpha-2 code as the news API expects it.
    pub code: &'static str,
}

impl Country {
    /// Look a country up by label or code, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Country> {
        let name = name.trim();
        COUNTRIES
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(name) || c.code.eq_ignore_ascii_case(name))
    }
}

pub const COUNTRIES: &[Country] = &[Country {
    label: "United States",
    code: "us",
}];
