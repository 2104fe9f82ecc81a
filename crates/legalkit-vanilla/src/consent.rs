//! # Vanilla Consent Baseline
//!
//! The stock five-category consent configuration, per locale. Entry
//! cookie patterns cover the integrations the baseline legal content
//! assumes: auth sessions, Stripe checkout, Plausible/Umami analytics,
//! Google Ads, Meta and LinkedIn pixels.

use legalkit_consent::{
    category_ids, entry_ids, ConsentCategory, ConsentConfig, ConsentEntry, DefaultState,
};

fn entry(id: &str, label: &str, description: &str, cookies: &[&str]) -> ConsentEntry {
    ConsentEntry {
        id: id.into(),
        label: label.into(),
        description: Some(description.into()),
        cookies: Some(cookies.iter().map(|c| c.to_string()).collect()),
        required: false,
        default_state: DefaultState::Off,
    }
}

fn required(entry: ConsentEntry) -> ConsentEntry {
    ConsentEntry {
        required: true,
        default_state: DefaultState::On,
        ..entry
    }
}

pub(crate) fn consent_en() -> ConsentConfig {
    vec![
        ConsentCategory {
            id: category_ids::NECESSARY.into(),
            title: "Strictly necessary".into(),
            description: Some(
                "Required for security, login, payments, and site stability. Always on.".into(),
            ),
            required: true,
            entries: vec![
                required(entry(
                    entry_ids::SESSION,
                    "Authentication & sessions",
                    "Keeps you signed in and protects your account.",
                    &["__client*", "__clerk*", "clerk*", "__session", "__refresh*"],
                )),
                required(entry(
                    entry_ids::PAYMENTS,
                    "Payments ({{PAYMENTS_PROVIDER}})",
                    "Checkout and load-balancing for secure payments.",
                    &["__stripe*"],
                )),
            ],
        },
        ConsentCategory {
            id: category_ids::PREFERENCES.into(),
            title: "Preferences".into(),
            description: Some("Remember your UI choices, such as theme or language.".into()),
            required: false,
            entries: vec![entry(
                entry_ids::UI_PREFERENCES,
                "Theme and locale",
                "Saves light/dark mode and language preferences.",
                &["cookie_preferences", "theme", "locale"],
            )],
        },
        ConsentCategory {
            id: category_ids::ANALYTICS.into(),
            title: "Analytics".into(),
            description: Some("Help us understand usage to improve the product.".into()),
            required: false,
            entries: vec![
                entry(
                    entry_ids::PLAUSIBLE,
                    "Plausible Analytics",
                    "Lightweight, privacy-friendly analytics.",
                    &["_plausible*"],
                ),
                entry(
                    entry_ids::UMAMI,
                    "Umami Analytics",
                    "Lightweight analytics; can run cookie-less.",
                    &["umami_*"],
                ),
            ],
        },
        ConsentCategory {
            id: category_ids::ADVERTISING.into(),
            title: "Advertising".into(),
            description: Some("Personalised ads and attribution (only if enabled).".into()),
            required: false,
            entries: vec![entry(
                entry_ids::GOOGLE_ADS,
                "Google Ads (Consent Mode v2)",
                "Personalised ads and attribution for Google Ads.",
                &["_gads", "_gcl_au", "_fbp"],
            )],
        },
        ConsentCategory {
            id: category_ids::SOCIAL.into(),
            title: "Social & pixels".into(),
            description: Some("Measure social campaigns and conversions (only if enabled).".into()),
            required: false,
            entries: vec![
                entry(entry_ids::META, "Meta Pixel", "Social campaign measurement.", &["fr"]),
                entry(
                    entry_ids::LINKEDIN,
                    "LinkedIn Insight Tag",
                    "Social campaign measurement.",
                    &["bcookie", "li_gc"],
                ),
            ],
        },
    ]
}

pub(crate) fn consent_fi() -> ConsentConfig {
    vec![
        ConsentCategory {
            id: category_ids::NECESSARY.into(),
            title: "Välttämättömät".into(),
            description: Some(
                "Turvallisuus, kirjautuminen, maksut ja sivuston vakaus. Aina päällä.".into(),
            ),
            required: true,
            entries: vec![
                required(entry(
                    entry_ids::SESSION,
                    "Autentikointi ja istunnot",
                    "Pitää sinut kirjautuneena ja suojaa tiliäsi.",
                    &["__client*", "__clerk*", "clerk*", "__session", "__refresh*"],
                )),
                required(entry(
                    entry_ids::PAYMENTS,
                    "Maksut ({{PAYMENTS_PROVIDER}})",
                    "Kassa ja kuormantasauksen evästeet turvallisiin maksuihin.",
                    &["__stripe*"],
                )),
            ],
        },
        ConsentCategory {
            id: category_ids::PREFERENCES.into(),
            title: "Asetukset".into(),
            description: Some(
                "Tallentaa käyttöliittymävalinnat, kuten teeman ja kielen.".into(),
            ),
            required: false,
            entries: vec![entry(
                entry_ids::UI_PREFERENCES,
                "Teema ja kieli",
                "Tallentaa vaalea/tumma-tilan ja kieliasetukset.",
                &["cookie_preferences", "theme", "locale"],
            )],
        },
        ConsentCategory {
            id: category_ids::ANALYTICS.into(),
            title: "Analytiikka".into(),
            description: Some("Auttaa ymmärtämään käyttöä ja parantamaan palvelua.".into()),
            required: false,
            entries: vec![
                entry(
                    entry_ids::PLAUSIBLE,
                    "Plausible Analytics",
                    "Kevyt ja tietosuojaystävällinen analytiikka.",
                    &["_plausible*"],
                ),
                entry(
                    entry_ids::UMAMI,
                    "Umami Analytics",
                    "Kevyt analytiikka; voi toimia ilman evästeitä.",
                    &["umami_*"],
                ),
            ],
        },
        ConsentCategory {
            id: category_ids::ADVERTISING.into(),
            title: "Mainonta".into(),
            description: Some(
                "Personoidut mainokset ja attribuutio (vain jos käytössä).".into(),
            ),
            required: false,
            entries: vec![entry(
                entry_ids::GOOGLE_ADS,
                "Google Ads (Consent Mode v2)",
                "Personoidut mainokset ja attribuutio Google Adsiin.",
                &["_gads", "_gcl_au", "_fbp"],
            )],
        },
        ConsentCategory {
            id: category_ids::SOCIAL.into(),
            title: "Sosiaaliset ja pikselit".into(),
            description: Some("Sosiaalisten kampanjoiden mittaus (vain jos käytössä).".into()),
            required: false,
            entries: vec![
                entry(
                    entry_ids::META,
                    "Meta Pixel",
                    "Sosiaalisten kampanjoiden mittaus.",
                    &["fr"],
                ),
                entry(
                    entry_ids::LINKEDIN,
                    "LinkedIn Insight Tag",
                    "Sosiaalisten kampanjoiden mittaus.",
                    &["bcookie", "li_gc"],
                ),
            ],
        },
    ]
}
