//! # Vanilla Legal Templates
//!
//! Stock terms/privacy/cookies skeletons per locale. Sections reference
//! snippets by id; see [`crate::snippets`] for the fragment content.

use std::collections::BTreeMap;

use legalkit_core::{LegalTemplate, LegalTemplateSection};

fn section(id: &str, title: &str, snippet_id: &str) -> LegalTemplateSection {
    LegalTemplateSection::new(id, title).with_snippets([snippet_id])
}

pub(crate) fn templates_en() -> BTreeMap<String, LegalTemplate> {
    let terms = LegalTemplate {
        slug: "terms".into(),
        title: "Terms of Service".into(),
        summary: Some(
            "Please read these Terms of Service carefully before using {{SERVICE_NAME}}.".into(),
        ),
        eyebrow: None,
        toc_label: None,
        updated_label: None,
        updated_at: None,
        sections: vec![
            section("introduction", "Introduction", "terms.introduction"),
            section("definitions", "1. Definitions", "terms.definitions"),
            section("eligibility", "2. Eligibility", "terms.eligibility"),
            section("account-registration", "3. Account Registration", "terms.account"),
            section("service", "4. The Service", "terms.service"),
            section("fees", "5. Fees and Payment", "terms.fees"),
            section("acceptable-use", "6. Acceptable Use", "terms.acceptable_use"),
            section(
                "intellectual-property",
                "7. Intellectual Property",
                "terms.intellectual_property",
            ),
            section("third-parties", "8. Third-Party Services", "terms.third_parties"),
            section("termination", "9. Termination", "terms.termination"),
            section("disclaimers", "10. Disclaimers", "terms.disclaimers"),
            section("liability", "11. Limitation of Liability", "terms.liability"),
            section("indemnification", "12. Indemnification", "terms.indemnification"),
            section(
                "governing-law",
                "13. Governing Law and Dispute Resolution",
                "terms.governing_law",
            ),
            section("changes", "14. Changes to Terms", "terms.changes"),
            section("contact", "15. Contact", "terms.contact"),
        ],
    };

    let privacy = LegalTemplate {
        slug: "privacy".into(),
        title: "Privacy Policy".into(),
        summary: Some("How {{SERVICE_NAME}} collects, uses, and protects your data.".into()),
        eyebrow: None,
        toc_label: None,
        updated_label: None,
        updated_at: None,
        sections: vec![
            section("who-we-are", "1. Who we are", "privacy.who_we_are"),
            section("data-we-collect", "2. What data we collect", "privacy.data_we_collect"),
            section("use-of-data", "3. How we use your data", "privacy.use_of_data"),
            section(
                "subprocessors",
                "4. Sub-processors and data location",
                "privacy.subprocessors",
            ),
            section("retention", "5. Data retention", "privacy.retention"),
            section("rights", "6. Your rights (GDPR Art. 12-23)", "privacy.rights"),
            section("security", "7. Security", "privacy.security"),
            section("cookies", "8. Cookies and similar technologies", "privacy.cookies"),
            section("changes", "9. Changes to this policy", "privacy.changes"),
            section("contact", "10. Contact us", "privacy.contact"),
        ],
    };

    let cookies = LegalTemplate {
        slug: "cookies".into(),
        title: "Cookie Policy".into(),
        summary: Some("How {{SERVICE_NAME}} uses cookies and similar technologies.".into()),
        eyebrow: None,
        toc_label: None,
        updated_label: None,
        updated_at: None,
        sections: vec![
            section("introduction", "Introduction", "cookies.introduction"),
            section("what-are-cookies", "1. What are cookies?", "cookies.definition"),
            section("how-we-use", "2. How we use cookies", "cookies.usage"),
            section("choices", "3. Managing your choices", "cookies.choices"),
            section("third-party", "4. Third-party cookies", "cookies.third_party"),
            section("retention", "5. Retention", "cookies.retention"),
            section("updates", "6. Updates", "cookies.updates"),
            section("contact", "7. Contact", "cookies.contact"),
        ],
    };

    [terms, privacy, cookies]
        .into_iter()
        .map(|template| (template.slug.clone(), template))
        .collect()
}

pub(crate) fn templates_fi() -> BTreeMap<String, LegalTemplate> {
    let terms = LegalTemplate {
        slug: "terms".into(),
        title: "Käyttöehdot".into(),
        summary: Some(
            "Lue nämä käyttöehdot huolellisesti ennen kuin käytät {{SERVICE_NAME}}-palvelua."
                .into(),
        ),
        eyebrow: None,
        toc_label: None,
        updated_label: None,
        updated_at: None,
        sections: vec![
            section("introduction", "Johdanto", "terms.introduction"),
            section("definitions", "1. Määritelmät", "terms.definitions"),
            section("eligibility", "2. Kelpoisuus", "terms.eligibility"),
            section("account-registration", "3. Tilin rekisteröinti", "terms.account"),
            section("service", "4. Palvelu", "terms.service"),
            section("fees", "5. Maksut ja tilaushinnat", "terms.fees"),
            section("acceptable-use", "6. Hyväksyttävä käyttö", "terms.acceptable_use"),
            section(
                "intellectual-property",
                "7. Immateriaalioikeudet",
                "terms.intellectual_property",
            ),
            section(
                "third-parties",
                "8. Kolmannen osapuolen palvelut",
                "terms.third_parties",
            ),
            section("termination", "9. Irtisanominen", "terms.termination"),
            section("disclaimers", "10. Vastuuvapauslauseke", "terms.disclaimers"),
            section("liability", "11. Vastuunrajoitus", "terms.liability"),
            section(
                "indemnification",
                "12. Vahingonkorvausvelvollisuus",
                "terms.indemnification",
            ),
            section(
                "governing-law",
                "13. Sovellettava laki ja riidanratkaisu",
                "terms.governing_law",
            ),
            section("changes", "14. Ehtojen muutokset", "terms.changes"),
            section("contact", "15. Yhteydenotto", "terms.contact"),
        ],
    };

    let privacy = LegalTemplate {
        slug: "privacy".into(),
        title: "Tietosuojakäytäntö".into(),
        summary: Some("Miten {{SERVICE_NAME}} käsittelee tietojasi.".into()),
        eyebrow: None,
        toc_label: None,
        updated_label: None,
        updated_at: None,
        sections: vec![
            section("who-we-are", "1. Keitä olemme", "privacy.who_we_are"),
            section("data-we-collect", "2. Mitä tietoja keräämme", "privacy.data_we_collect"),
            section("use-of-data", "3. Miten käytämme tietojasi", "privacy.use_of_data"),
            section("subprocessors", "4. Alikäsittelijät ja sijainti", "privacy.subprocessors"),
            section("retention", "5. Säilytysajat", "privacy.retention"),
            section("rights", "6. Oikeutesi (GDPR Art. 12-23)", "privacy.rights"),
            section("security", "7. Tietoturva", "privacy.security"),
            section("cookies", "8. Evästeet ja vastaavat tekniikat", "privacy.cookies"),
            section("changes", "9. Muutokset tähän käytäntöön", "privacy.changes"),
            section("contact", "10. Yhteydenotto", "privacy.contact"),
        ],
    };

    let cookies = LegalTemplate {
        slug: "cookies".into(),
        title: "Evästekäytäntö".into(),
        summary: Some("Miten {{SERVICE_NAME}} käyttää evästeitä ja vastaavia tekniikoita.".into()),
        eyebrow: None,
        toc_label: None,
        updated_label: None,
        updated_at: None,
        sections: vec![
            section("introduction", "Johdanto", "cookies.introduction"),
            section("what-are-cookies", "1. Mitä evästeet ovat?", "cookies.definition"),
            section("how-we-use", "2. Miten käytämme evästeitä", "cookies.usage"),
            section("choices", "3. Kuinka hallitset valintojasi", "cookies.choices"),
            section("third-party", "4. Kolmannen osapuolen evästeet", "cookies.third_party"),
            section("retention", "5. Säilytys", "cookies.retention"),
            section("updates", "6. Päivitykset", "cookies.updates"),
            section("contact", "7. Yhteydenotto", "cookies.contact"),
        ],
    };

    [terms, privacy, cookies]
        .into_iter()
        .map(|template| (template.slug.clone(), template))
        .collect()
}
