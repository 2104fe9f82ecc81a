//! # Vanilla Snippet Libraries
//!
//! The reusable fragments behind the stock terms/privacy/cookies
//! templates, per locale. Tokens (`{{SERVICE_NAME}}`,
//! `{{PAYMENTS_PROVIDER}}`, `{{CONTACT_URL}}`, ...) are left for the
//! deploying application to fill in at composition time.
//!
//! The privacy data-collection, sub-processor, and retention tables and
//! the cookie-category tables start empty in their block snippets; rows
//! arrive exclusively through the `*.service`, `*.payments`, etc.
//! table-row snippets so deployments can omit individual rows.

use legalkit_core::{snippet_library, LegalBlock, LegalSnippet, SnippetLibrary};

pub(crate) fn snippets_en() -> SnippetLibrary {
    snippet_library([
        LegalSnippet::blocks(
            "terms.introduction",
            [
                LegalBlock::paragraph(
                    "Welcome to {{SERVICE_NAME}} (\"we\", \"us\", \"our\").",
                ),
                LegalBlock::paragraph(
                    "Please read these Terms of Service (\"Terms\") carefully before using the \
                     {{SERVICE_NAME}} website, applications, and related services (collectively, \
                     the \"Service\").",
                ),
                LegalBlock::paragraph(
                    "By accessing or using the Service you agree to be bound by these Terms and \
                     our [Privacy Policy](/privacy). If you do not agree, do not access or use \
                     the Service.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.definitions",
            [LegalBlock::table(
                ["Term", "Meaning"],
                [
                    ["Account", "The user profile created to access the Service."],
                    [
                        "Content",
                        "Data, text, images, feedback, or other materials submitted through the \
                         Service.",
                    ],
                    [
                        "Subscription",
                        "A paid plan granting time-limited access to premium features.",
                    ],
                ],
            )
            .with_id("terms-definitions")],
        ),
        LegalSnippet::blocks(
            "terms.eligibility",
            [LegalBlock::paragraph(
                "You must be at least 18 years old (or the age of majority in your jurisdiction) \
                 and have the authority to enter into these Terms on behalf of yourself or an \
                 organisation.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.account",
            [LegalBlock::list([
                "Provide accurate information and keep it updated.",
                "Keep credentials confidential; you are responsible for all activity under your \
                 Account.",
                "We may suspend or terminate Accounts that breach these Terms.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.service",
            [LegalBlock::list([
                "{{SERVICE_DESCRIPTION}}",
                "We may modify or discontinue features at any time with reasonable notice.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.fees",
            [LegalBlock::list([
                "Certain features may require a Subscription billed in advance on a recurring \
                 basis (for example, monthly or annually).",
                "Prices are shown inclusive of VAT where applicable.",
                "Payments are processed by {{PAYMENTS_PROVIDER}}; we do not store full card \
                 details.",
                "Subscriptions auto-renew unless cancelled before the end of the current billing \
                 period.",
                "You may cancel at any time; no refunds for partial periods unless required by \
                 law.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.acceptable_use",
            [
                LegalBlock::paragraph("You agree not to:"),
                LegalBlock::list([
                    "Upload unlawful, harmful, or infringing Content.",
                    "Attempt to disrupt or reverse-engineer the Service.",
                    "Use the Service to store or transmit personal data without a lawful basis.",
                    "Misrepresent your affiliation or impersonate others.",
                ]),
                LegalBlock::paragraph(
                    "We reserve the right to remove Content or suspend Accounts that breach this \
                     section.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.intellectual_property",
            [LegalBlock::list([
                "Ownership: The Service and all software, trademarks, and content (excluding \
                 user Content) are our property or that of our licensors.",
                "Licence: We grant you a non-exclusive, non-transferable right to use the \
                 Service during the Subscription term.",
                "User Content: You retain all rights to Content you upload. You grant us a \
                 worldwide licence to host and process it for the purpose of operating the \
                 Service.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.third_parties",
            [LegalBlock::paragraph(
                "The Service may integrate third-party tools (for example, analytics or payment \
                 processors). Use of those services is subject to their separate terms and \
                 privacy practices.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.termination",
            [LegalBlock::list([
                "You may terminate your Subscription via the dashboard or by contacting support.",
                "We may terminate or suspend the Service (with reasonable notice) if you breach \
                 these Terms or fail to pay fees.",
                "Upon termination, your right to use the Service stops immediately and we may \
                 delete your Content after 30 days.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.disclaimers",
            [
                LegalBlock::paragraph(
                    "The Service is provided \"as is\" and \"as available\" without warranties \
                     of any kind, express or implied.",
                ),
                LegalBlock::paragraph(
                    "We do not guarantee that the Service will be uninterrupted, error-free, or \
                     meet your specific requirements.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.liability",
            [
                LegalBlock::paragraph("To the maximum extent permitted by law:"),
                LegalBlock::list([
                    "Our total liability for any claim arising out of these Terms will not \
                     exceed the total fees paid by you in the 12 months preceding the claim.",
                    "We are not liable for indirect, incidental, special, consequential, or \
                     punitive damages.",
                ]),
                LegalBlock::paragraph(
                    "Nothing in these Terms limits liability for gross negligence, wilful \
                     misconduct, or where limitation is prohibited by applicable law (for \
                     example, consumer rights).",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.indemnification",
            [LegalBlock::paragraph(
                "You agree to indemnify and hold us harmless from any claims arising out of \
                 your breach of these Terms or misuse of the Service.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.governing_law",
            [LegalBlock::list([
                "These Terms are governed by the laws of {{GOVERNING_LAW}} without regard to \
                 conflict-of-law principles.",
                "Any dispute shall be submitted to the exclusive jurisdiction of the courts of \
                 {{GOVERNING_VENUE}}.",
                "Consumers in the EU may also apply to the EU Online Dispute Resolution \
                 platform.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.changes",
            [LegalBlock::paragraph(
                "We may update these Terms occasionally. Material changes will be announced 14 \
                 days in advance via email or in-app notice. Continued use after the effective \
                 date constitutes acceptance.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.contact",
            [LegalBlock::paragraph(
                "Questions? Reach us via the [contact form]({{CONTACT_URL}}).",
            )],
        ),
        LegalSnippet::blocks(
            "privacy.who_we_are",
            [
                LegalBlock::paragraph(
                    "For the purposes of the EU General Data Protection Regulation (GDPR) and \
                     applicable local data protection laws, {{COMPANY_NAME}} ({{SERVICE_NAME}}, \
                     \"we\", \"our\", or \"us\") is the data controller for the processing \
                     activities described in this policy.",
                ),
                LegalBlock::note(
                    "Contact: [contact form]({{CONTACT_URL}})\nAddress: {{COMPANY_ADDRESS}}",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "privacy.data_we_collect",
            [
                LegalBlock::table(
                    ["Category", "Examples", "Purpose", "Legal basis"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("privacy-data-collection"),
                LegalBlock::paragraph(
                    "We do not intentionally collect names, phone numbers, or precise locations \
                     from end-user actions.",
                ),
            ],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.service",
            "privacy-data-collection",
            [[
                "{{SERVICE_DATA_CATEGORY}}",
                "{{SERVICE_DATA_EXAMPLES}}",
                "Deliver core service functionality",
                "Art. 6(1)(b) - Performance of a contract",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.payments",
            "privacy-data-collection",
            [[
                "Payment Data (via {{PAYMENTS_PROVIDER}})",
                "Card token, last 4 digits, billing address, VAT ID",
                "Process subscription payments and comply with tax law",
                "Art. 6(1)(b) - Contract and Art. 6(1)(c) - Legal obligation",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.usage",
            "privacy-data-collection",
            [[
                "Device and Usage Data",
                "Browser UA string, OS, IP (truncated), pages visited",
                "Service security, debugging, aggregated metrics",
                "Art. 6(1)(f) - Legitimate interests",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.email",
            "privacy-data-collection",
            [[
                "Email (optional)",
                "Address you enter in a newsletter or contact form",
                "Send product updates and respond to requests",
                "Art. 6(1)(a) - Consent",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.cookies",
            "privacy-data-collection",
            [[
                "Cookies",
                "__session, __clerk*, __stripe*",
                "Session management, security, and preferences",
                "Art. 6(1)(f) or Art. 6(1)(a) depending on category",
            ]],
        ),
        LegalSnippet::blocks(
            "privacy.use_of_data",
            [
                LegalBlock::list([
                    "Deliver core functionality - {{SERVICE_DESCRIPTION}}",
                    "Process payments and invoices through {{PAYMENTS_PROVIDER}}.",
                    "Improve the product with aggregated usage trends.",
                    "Maintain security and prevent abuse.",
                    "Send marketing communications only if you opt in.",
                ]),
                LegalBlock::paragraph(
                    "We do not sell personal data. We share it only with our processors and, \
                     where you opt in, limited analytics or advertising partners - never for \
                     their own resale.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "privacy.subprocessors",
            [
                LegalBlock::table(
                    ["Service", "Purpose", "Region", "Safeguard"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("privacy-subprocessors"),
                LegalBlock::paragraph(
                    "We primarily store and process data in {{DATA_REGION_PRIMARY}}. Some \
                     providers may process or back up data outside that region (for example \
                     {{DATA_REGION_BACKUP}}); when they do, we rely on safeguards such as \
                     Standard Contractual Clauses (SCCs) or an adequacy decision (GDPR Art. \
                     45-46).",
                ),
            ],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.auth",
            "privacy-subprocessors",
            [[
                "Authentication provider (e.g. Clerk)",
                "User authentication and accounts",
                "{{DATA_REGION_PRIMARY}}",
                "DPA + SCCs",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.payments",
            "privacy-subprocessors",
            [[
                "{{PAYMENTS_PROVIDER}}",
                "Subscription and payment processing",
                "{{DATA_REGION_PRIMARY}} (primary), {{DATA_REGION_BACKUP}} (backup)",
                "DPA + SCCs + PSD2 compliance",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.hosting",
            "privacy-subprocessors",
            [[
                "Web hosting provider (e.g. Vercel)",
                "Web and edge hosting",
                "{{DATA_REGION_PRIMARY}}",
                "DPA + SCCs",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.db",
            "privacy-subprocessors",
            [["Database provider (e.g. Neon)", "Database", "{{DATA_REGION_PRIMARY}}", "DPA + SCCs"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.email",
            "privacy-subprocessors",
            [[
                "Email provider (e.g. Resend)",
                "Transactional and promotional emails",
                "{{DATA_REGION_PRIMARY}}",
                "DPA + SCCs",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.analytics",
            "privacy-subprocessors",
            [[
                "Analytics provider (e.g. Umami)",
                "Privacy-friendly statistics",
                "{{DATA_REGION_PRIMARY}}",
                "No cookies or personal data",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.google_ads",
            "privacy-subprocessors",
            [["Google Ireland", "Google Ads (if enabled)", "{{DATA_REGION_PRIMARY}}", "DPA + SCCs"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.meta",
            "privacy-subprocessors",
            [[
                "Meta Platforms Ireland",
                "Meta Pixel (if enabled)",
                "{{DATA_REGION_PRIMARY}}",
                "DPA + SCCs",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.linkedin",
            "privacy-subprocessors",
            [["LinkedIn Ireland", "Insight Tag (if enabled)", "{{DATA_REGION_PRIMARY}}", "DPA + SCCs"]],
        ),
        LegalSnippet::blocks(
            "privacy.retention",
            [LegalBlock::table(
                ["Data type", "Retention period"],
                Vec::<Vec<String>>::new(),
            )
            .with_id("privacy-retention")],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.service",
            "privacy-retention",
            [["{{SERVICE_DATA_TYPE}}", "{{SERVICE_DATA_TYPE_DESCRIPTION}}"]],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.newsletter",
            "privacy-retention",
            [["Newsletter email addresses", "Until you unsubscribe"]],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.logs",
            "privacy-retention",
            [["Error logs", "30 days"]],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.analytics",
            "privacy-retention",
            [["Analytics session ID", "Stored in browser storage; not server-side identifiable"]],
        ),
        LegalSnippet::blocks(
            "privacy.rights",
            [
                LegalBlock::list([
                    "Access your personal data",
                    "Rectify inaccurate data",
                    "Erase data (right to be forgotten)",
                    "Restrict or object to processing",
                    "Data portability",
                    "Withdraw consent at any time (newsletters, non-essential cookies)",
                ]),
                LegalBlock::note(
                    "How to exercise: Send a request via the [contact form]({{CONTACT_URL}}). \
                     We respond within 30 days.",
                ),
                LegalBlock::paragraph(
                    "If you believe your rights are violated, you may lodge a complaint with \
                     your local supervisory authority.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "privacy.security",
            [LegalBlock::list([
                "Data at rest: industry-standard encryption such as AES-256.",
                "Data in transit: TLS 1.3 encryption.",
                "Secure processing: secure coding practices and access controls aligned with \
                 OWASP Top 10.",
            ])],
        ),
        LegalSnippet::blocks(
            "privacy.cookies",
            [LegalBlock::paragraph(
                "We use cookies and similar technologies for essential site functions, \
                 analytics and, with your permission, personalised advertising. Details and \
                 your current choices are explained in our [Cookie Policy](/cookies).",
            )],
        ),
        LegalSnippet::blocks(
            "privacy.changes",
            [LegalBlock::paragraph(
                "We will update this document when we introduce new processing activities or \
                 change sub-processors. Material changes will be announced 14 days in advance \
                 via in-app notice and/or email.",
            )],
        ),
        LegalSnippet::blocks(
            "privacy.contact",
            [LegalBlock::paragraph(
                "Questions or concerns? Send a request via the [contact form]({{CONTACT_URL}}).",
            )],
        ),
        LegalSnippet::blocks(
            "cookies.introduction",
            [
                LegalBlock::paragraph(
                    "This Cookie Policy explains how {{SERVICE_NAME}} (\"we\", \"us\") uses \
                     cookies and similar technologies when you visit our websites and apps (the \
                     \"Service\").",
                ),
                LegalBlock::paragraph(
                    "It should be read together with our [Privacy Policy](/privacy).",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "cookies.definition",
            [LegalBlock::paragraph(
                "Cookies are small text files stored on your device. They enable core site \
                 functionality, help us understand usage patterns, allow social features, and \
                 show relevant ads.",
            )],
        ),
        LegalSnippet::blocks(
            "cookies.usage",
            [
                LegalBlock::table(
                    ["Category", "Typical cookie names", "Purpose", "Consent?", "Lifetime"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("cookies-categories"),
                LegalBlock::note("Exact lifetimes may vary by provider."),
            ],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.strict",
            "cookies-categories",
            [[
                "Strictly necessary",
                "__client*, __clerk*, clerk*, __session, __stripe*, __refresh*",
                "Login, security, load-balancing, payments",
                "Not required",
                "1 year",
            ]],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.preferences",
            "cookies-categories",
            [[
                "Preferences",
                "cookie_preferences, theme, locale",
                "Remember UI and cookie choices",
                "Yes",
                "1 year",
            ]],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.advertising",
            "cookies-categories",
            [["Advertising", "_gads, _gcl_au, _fbp", "Personalised ads", "Yes", "3-24 months"]],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.social",
            "cookies-categories",
            [["Social / pixels", "bcookie, li_gc, fr", "Measure social campaigns", "Yes", "3-12 months"]],
        ),
        LegalSnippet::blocks(
            "cookies.choices",
            [LegalBlock::list([
                "First visit - we load only Strictly Necessary cookies.",
                "Change your mind anytime - use the Cookie Policy link in the footer to update \
                 preferences or withdraw consent.",
                "Browser controls - you can delete or block cookies via your browser settings \
                 (Chrome, Firefox, Safari).",
            ])],
        ),
        LegalSnippet::blocks(
            "cookies.third_party",
            [
                LegalBlock::paragraph(
                    "We use trusted providers; they only run after you opt in to their category.",
                ),
                LegalBlock::table(
                    ["Provider", "Service", "Region", "Safeguard"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("cookies-third-party"),
            ],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.google_ads",
            "cookies-third-party",
            [["Google Ireland", "Google Ads (Consent Mode v2)", "EU primary, US backup", "SCCs"]],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.meta",
            "cookies-third-party",
            [["Meta Platforms Ireland", "Meta Pixel (if enabled)", "EU", "SCCs"]],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.linkedin",
            "cookies-third-party",
            [["LinkedIn Ireland", "Insight Tag (if enabled)", "EU", "SCCs"]],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.payments",
            "cookies-third-party",
            [[
                "{{PAYMENTS_PROVIDER}}",
                "Payment session cookies",
                "{{DATA_REGION_PRIMARY}} primary, {{DATA_REGION_BACKUP}} backup",
                "PSD2, SCCs",
            ]],
        ),
        LegalSnippet::blocks(
            "cookies.retention",
            [LegalBlock::paragraph("Cookie lifetimes are listed on this page.")],
        ),
        LegalSnippet::blocks(
            "cookies.updates",
            [LegalBlock::paragraph(
                "We may revise this policy to reflect changes in cookies, providers, or \
                 legislation.",
            )],
        ),
        LegalSnippet::blocks(
            "cookies.contact",
            [LegalBlock::paragraph(
                "Questions? Reach us via the [contact form]({{CONTACT_URL}}).",
            )],
        ),
    ])
}

pub(crate) fn snippets_fi() -> SnippetLibrary {
    snippet_library([
        LegalSnippet::blocks(
            "terms.introduction",
            [
                LegalBlock::paragraph(
                    "Tervetuloa palveluun {{SERVICE_NAME}} (\"me\", \"meitä\", \"meidän\").",
                ),
                LegalBlock::paragraph(
                    "Lue nämä käyttöehdot (\"Ehdot\") huolellisesti ennen kuin käytät \
                     {{SERVICE_NAME}}-verkkosivustoa, sovelluksia ja niihin liittyviä palveluja \
                     (yhdessä \"Palvelu\").",
                ),
                LegalBlock::paragraph(
                    "Käyttämällä Palvelua sitoudut noudattamaan näitä Ehtoja sekä \
                     [tietosuojakäytäntöämme](/privacy). Jos et hyväksy Ehtoja, älä käytä \
                     Palvelua.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.definitions",
            [LegalBlock::table(
                ["Termi", "Merkitys"],
                [
                    ["Tili", "Käyttäjäprofiili, joka luodaan Palvelun käyttöä varten."],
                    [
                        "Sisältö",
                        "Data, teksti, kuvat, palaute ja muu materiaali, jonka lähetät Palvelun \
                         kautta.",
                    ],
                    [
                        "Tilaus",
                        "Maksullinen paketti, joka antaa määräaikaisen pääsyn \
                         premium-ominaisuuksiin.",
                    ],
                ],
            )
            .with_id("terms-definitions")],
        ),
        LegalSnippet::blocks(
            "terms.eligibility",
            [LegalBlock::paragraph(
                "Sinun on oltava vähintään 18-vuotias (tai täysi-ikäinen omassa \
                 lainkäyttöalueessasi) ja sinulla tulee olla valtuudet solmia nämä Ehdot itsesi \
                 tai organisaatiosi puolesta.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.account",
            [LegalBlock::list([
                "Anna paikkansapitävät tiedot ja pidä ne ajan tasalla.",
                "Säilytä tunnistetietosi luottamuksellisina; vastaat kaikesta Tililläsi \
                 tapahtuvasta toiminnasta.",
                "Voimme keskeyttää tai sulkea Tilejä, jotka rikkovat näitä Ehtoja.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.service",
            [LegalBlock::list([
                "{{SERVICE_DESCRIPTION}}",
                "Voimme muuttaa tai lopettaa ominaisuuksia milloin tahansa kohtuullisella \
                 ilmoitusajalla.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.fees",
            [LegalBlock::list([
                "Tietyt ominaisuudet edellyttävät Tilausta, joka laskutetaan etukäteen \
                 toistuvasti (esim. kuukausittain tai vuosittain).",
                "Hinnat esitetään arvonlisävero mukaan lukien, jos se on sovellettavissa.",
                "Maksut käsittelee {{PAYMENTS_PROVIDER}}; emme tallenna täydellisiä \
                 korttitietoja.",
                "Tilaukset uusiutuvat automaattisesti, ellei niitä peruuteta ennen kuluvan \
                 laskutuskauden päättymistä.",
                "Voit peruuttaa koska tahansa; osittaisista kausista ei palauteta maksuja, \
                 ellei laki sitä vaadi.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.acceptable_use",
            [
                LegalBlock::paragraph("Sitoudut olemaan:"),
                LegalBlock::list([
                    "Lataamatta laitonta, vahingollista tai oikeuksia loukkaavaa Sisältöä.",
                    "Yrittämättä häiritä tai purkaa Palvelun toimintaa tai koodia.",
                    "Käyttämättä Palvelua henkilötietojen tallentamiseen tai siirtämiseen ilman \
                     laillista perustetta.",
                    "Antamatta vääriä tietoja yhteydestäsi tai esiintymättä toisena henkilönä.",
                ]),
                LegalBlock::paragraph(
                    "Pidätämme oikeuden poistaa Sisältöä tai keskeyttää Tilejä, jotka rikkovat \
                     tätä kohtaa.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.intellectual_property",
            [LegalBlock::list([
                "Omistusoikeus: Palvelu sekä kaikki ohjelmistot, tavaramerkit ja muu sisältö \
                 (pois lukien käyttäjien Sisältö) ovat meidän tai lisenssinantajiemme \
                 omaisuutta.",
                "Lisenssi: Myönnämme sinulle ei-yksinomaisen, siirto-oikeudettoman oikeuden \
                 käyttää Palvelua Tilauskauden aikana.",
                "Käyttäjän Sisältö: Säilytät kaikki oikeudet lataamaasi Sisältöön. Myönnät \
                 meille maailmanlaajuisen, ei-yksinomaisen lisenssin isännöidä ja käsitellä \
                 Sisältöä Palvelun tuottamiseksi.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.third_parties",
            [LegalBlock::paragraph(
                "Palvelu voi integroitua kolmannen osapuolen työkaluihin (esim. analytiikka, \
                 maksupalvelut). Näiden palveluiden käyttöä säätelevät niiden omat käyttöehdot \
                 ja tietosuojakäytännöt.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.termination",
            [LegalBlock::list([
                "Voit päättää Tilauksesi kojelaudan kautta tai ottamalla yhteyttä tukeen.",
                "Voimme keskeyttää tai sulkea Palvelun (kohtuullisella ilmoitusajalla), jos \
                 rikot näitä Ehtoja tai jätät maksut suorittamatta.",
                "Irtisanomisen jälkeen oikeutesi käyttää Palvelua lakkaa välittömästi ja voimme \
                 poistaa Sisältösi 30 päivän kuluttua.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.disclaimers",
            [
                LegalBlock::paragraph(
                    "Palvelu tarjotaan \"sellaisena kuin se on\" ja \"saatavuuden mukaan\" \
                     ilman minkäänlaisia nimenomaisia tai hiljaisia takuita.",
                ),
                LegalBlock::paragraph(
                    "Emme takaa, että Palvelu on keskeytyksetön, virheetön tai täyttää \
                     erityiset vaatimuksesi.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.liability",
            [
                LegalBlock::paragraph("Sovellettavan lain sallimissa rajoissa:"),
                LegalBlock::list([
                    "Kokonaisvastuumme mistä tahansa vaateesta näiden Ehtojen perusteella ei \
                     ylitä viimeisen 12 kuukauden aikana maksamiesi maksujen yhteismäärää.",
                    "Emme vastaa epäsuorista, satunnaisista, erityisistä, seurannaisista tai \
                     rangaistusluonteisista vahingoista.",
                ]),
                LegalBlock::paragraph(
                    "Mikään näissä Ehdoissa ei rajoita vastuuta törkeästä huolimattomuudesta, \
                     tahallisesta väärinkäytöstä tai vastuusta, jota ei voida lain mukaan \
                     rajoittaa (esim. kuluttajansuoja).",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "terms.indemnification",
            [LegalBlock::paragraph(
                "Sitoudut korvaamaan meille kaikki vaateet, kustannukset ja vahingot, jotka \
                 johtuvat näiden Ehtojen rikkomisesta tai Palvelun väärinkäytöstäsi.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.governing_law",
            [LegalBlock::list([
                "Näihin Ehtoihin sovelletaan {{GOVERNING_LAW}} lakia poissulkien \
                 lainvalintasäännökset.",
                "Mahdolliset riidat ratkaistaan yksinomaan {{GOVERNING_VENUE}} \
                 käräjäoikeudessa.",
                "EU-kuluttajat voivat myös käyttää EU:n verkkovälitteistä \
                 riidanratkaisufoorumia.",
            ])],
        ),
        LegalSnippet::blocks(
            "terms.changes",
            [LegalBlock::paragraph(
                "Voimme päivittää näitä Ehtoja ajoittain. Olennaisista muutoksista ilmoitetaan \
                 14 päivää etukäteen sähköpostitse ja/tai sovelluksen sisäisesti. Palvelun \
                 käyttäminen muutosten jälkeen merkitsee hyväksyntää.",
            )],
        ),
        LegalSnippet::blocks(
            "terms.contact",
            [LegalBlock::paragraph(
                "Kysyttävää? Ota yhteyttä [yhteydenottolomakkeella]({{CONTACT_URL}}).",
            )],
        ),
        LegalSnippet::blocks(
            "privacy.who_we_are",
            [
                LegalBlock::paragraph(
                    "EU:n yleisen tietosuoja-asetuksen (GDPR) ja sovellettavan kansallisen \
                     tietosuojalainsäädännön mukaisesti {{COMPANY_NAME}} ({{SERVICE_NAME}}, \
                     \"me\", \"meidän\" tai \"meitä\") toimii tämän käytännön mukaisten \
                     käsittelytoimien rekisterinpitäjänä.",
                ),
                LegalBlock::note(
                    "Yhteystiedot: [yhteydenottolomake]({{CONTACT_URL}})\nOsoite: \
                     {{COMPANY_ADDRESS}}",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "privacy.data_we_collect",
            [
                LegalBlock::table(
                    ["Luokka", "Esimerkit", "Tarkoitus", "Oikeusperuste"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("privacy-data-collection"),
                LegalBlock::paragraph(
                    "Emme tietoisesti kerää nimiä, puhelinnumeroita tai tarkkoja \
                     sijaintitietoja loppukäyttäjien toiminnasta.",
                ),
            ],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.service",
            "privacy-data-collection",
            [[
                "{{SERVICE_DATA_CATEGORY}}",
                "{{SERVICE_DATA_EXAMPLES}}",
                "Palvelun ydintoiminnot",
                "Art. 6(1)(b) - Sopimuksen täytäntöönpano",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.payments",
            "privacy-data-collection",
            [[
                "Maksutiedot ({{PAYMENTS_PROVIDER}})",
                "Korttitunniste, 4 viimeistä numeroa, laskutusosoite, ALV-tunnus",
                "Tilauksen veloitus ja verovelvoitteiden täyttäminen",
                "Art. 6(1)(b) - Sopimus ja Art. 6(1)(c) - Lakisääteinen velvoite",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.usage",
            "privacy-data-collection",
            [[
                "Laite- ja käyttötiedot",
                "Selaimen UA-merkkijono, käyttöjärjestelmä, IP (lyhennetty), sivut",
                "Palvelun suojaus, virheenkorjaus, koontimittarit",
                "Art. 6(1)(f) - Oikeutettu etu",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.email",
            "privacy-data-collection",
            [[
                "Sähköposti (vapaaehtoinen)",
                "Uutiskirje- tai yhteydenottolomakkeelle syötetty osoite",
                "Tuoteuutiset ja pyyntöihin vastaaminen",
                "Art. 6(1)(a) - Suostumus",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.data_we_collect.cookies",
            "privacy-data-collection",
            [[
                "Evästeet",
                "__session, __clerk*, __stripe*",
                "Istunnon hallinta, tietoturva ja mieltymykset",
                "Art. 6(1)(f) tai Art. 6(1)(a) luokasta riippuen",
            ]],
        ),
        LegalSnippet::blocks(
            "privacy.use_of_data",
            [
                LegalBlock::list([
                    "Palvelun perustoiminnot - {{SERVICE_DESCRIPTION}}",
                    "Maksujen ja laskujen käsittely {{PAYMENTS_PROVIDER}}n kautta.",
                    "Palvelun kehittäminen anonymisoitujen trendien avulla.",
                    "Tietoturva ja väärinkäytösten ehkäisy.",
                    "Markkinointiviestit vain suostumuksella.",
                ]),
                LegalBlock::paragraph(
                    "Emme myy henkilötietoja. Jaamme niitä vain käsittelijöillemme ja, \
                     suostumuksellasi, rajatuille analytiikka- tai mainontakumppaneille - ei \
                     koskaan heidän omaan jälleenmyyntiinsä.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "privacy.subprocessors",
            [
                LegalBlock::table(
                    ["Palvelu", "Käyttötarkoitus", "Alue", "Suojauskeino"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("privacy-subprocessors"),
                LegalBlock::paragraph(
                    "Tallennamme ja käsittelemme tietoja ensisijaisesti alueella \
                     {{DATA_REGION_PRIMARY}}. Osa palveluntarjoajista voi käsitellä tai \
                     varmuuskopioida tietoja alueen ulkopuolella (esimerkiksi \
                     {{DATA_REGION_BACKUP}}); tällöin käytämme suojakeinoja kuten EU:n \
                     vakiolausekkeita (SCC) tai riittävyyspäätöstä (GDPR Art. 45-46).",
                ),
            ],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.auth",
            "privacy-subprocessors",
            [["Clerk", "Käyttäjäautentikointi ja tilit", "{{DATA_REGION_PRIMARY}}", "DPA + SCC-lausekkeet"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.payments",
            "privacy-subprocessors",
            [[
                "{{PAYMENTS_PROVIDER}}",
                "Tilaukset ja maksujen käsittely",
                "{{DATA_REGION_PRIMARY}} (ensisijainen), {{DATA_REGION_BACKUP}} (varmistus)",
                "DPA + SCC + PSD2",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.hosting",
            "privacy-subprocessors",
            [["Vercel", "Verkkopalvelu ja edge-hosting", "{{DATA_REGION_PRIMARY}}", "DPA + SCC"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.db",
            "privacy-subprocessors",
            [["Neon", "Tietokanta", "{{DATA_REGION_PRIMARY}}", "DPA + SCC"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.email",
            "privacy-subprocessors",
            [["Resend", "Transaktio- ja markkinointisähköpostit", "{{DATA_REGION_PRIMARY}}", "DPA + SCC"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.analytics",
            "privacy-subprocessors",
            [[
                "Umami Analytics",
                "Tietosuojaystävällinen analytiikka",
                "{{DATA_REGION_PRIMARY}}",
                "Ei evästeitä tai henkilötietoja",
            ]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.google_ads",
            "privacy-subprocessors",
            [["Google Ireland", "Google Ads (jos käytössä)", "{{DATA_REGION_PRIMARY}}", "DPA + SCC"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.meta",
            "privacy-subprocessors",
            [["Meta Platforms Ireland", "Meta Pixel (jos käytössä)", "{{DATA_REGION_PRIMARY}}", "DPA + SCC"]],
        ),
        LegalSnippet::table_rows(
            "privacy.subprocessors.linkedin",
            "privacy-subprocessors",
            [["LinkedIn Ireland", "Insight Tag (jos käytössä)", "{{DATA_REGION_PRIMARY}}", "DPA + SCC"]],
        ),
        LegalSnippet::blocks(
            "privacy.retention",
            [LegalBlock::table(
                ["Tietotyyppi", "Säilytysaika"],
                Vec::<Vec<String>>::new(),
            )
            .with_id("privacy-retention")],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.service",
            "privacy-retention",
            [["{{SERVICE_DATA_TYPE}}", "{{SERVICE_DATA_TYPE_DESCRIPTION}}"]],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.newsletter",
            "privacy-retention",
            [["Uutiskirjeosoitteet", "Kunnes peruutat tilauksen"]],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.logs",
            "privacy-retention",
            [["Virhelokit", "30 päivää"]],
        ),
        LegalSnippet::table_rows(
            "privacy.retention.analytics",
            "privacy-retention",
            [["Analytiikkaistunto ID", "Tallennetaan selaimeen; ei tunnistettavissa palvelimella"]],
        ),
        LegalSnippet::blocks(
            "privacy.rights",
            [
                LegalBlock::list([
                    "Saada pääsy henkilötietoihisi",
                    "Oikaista virheelliset tiedot",
                    "Poistaa tiedot (oikeus tulla unohdetuksi)",
                    "Rajoittaa tai vastustaa käsittelyä",
                    "Siirtää tiedot järjestelmästä toiseen",
                    "Perua suostumus milloin tahansa (uutiskirjeet, ei-välttämättömät evästeet)",
                ]),
                LegalBlock::note(
                    "Näin toimit: Lähetä pyyntö [yhteydenottolomakkeella]({{CONTACT_URL}}). \
                     Vastaamme 30 päivän kuluessa.",
                ),
                LegalBlock::paragraph(
                    "Jos koet, että oikeuksiasi on loukattu, voit tehdä valituksen \
                     Tietosuojavaltuutetun toimistolle tai omalle valvontaviranomaisellesi.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "privacy.security",
            [LegalBlock::list([
                "Lepotilassa: AES-256 -salaus.",
                "Siirrossa: TLS 1.3.",
                "Käsittelyssä: tietoturvallinen ohjelmointi ja pääsynhallinta (OWASP Top 10).",
            ])],
        ),
        LegalSnippet::blocks(
            "privacy.cookies",
            [LegalBlock::paragraph(
                "Käytämme evästeitä ydintoimintoihin, analytiikkaan ja suostumuksellasi \
                 personoituun mainontaan. Yksityiskohdat ja nykyiset valintasi löytyvät \
                 [evästekäytännöstä](/cookies).",
            )],
        ),
        LegalSnippet::blocks(
            "privacy.changes",
            [LegalBlock::paragraph(
                "Päivitämme asiakirjaa, kun käsittelytoimet tai alikäsittelijät muuttuvat. \
                 Merkittävistä muutoksista ilmoitetaan 14 päivää etukäteen sovelluksessa ja/tai \
                 sähköpostitse.",
            )],
        ),
        LegalSnippet::blocks(
            "privacy.contact",
            [LegalBlock::paragraph(
                "Kysyttävää? Ota yhteyttä [yhteydenottolomakkeella]({{CONTACT_URL}}).",
            )],
        ),
        LegalSnippet::blocks(
            "cookies.introduction",
            [
                LegalBlock::paragraph(
                    "Tämä evästekäytäntö selittää, miten {{SERVICE_NAME}} (\"me\", \"meidän\") \
                     käyttää evästeitä ja vastaavia tekniikoita, kun vierailet \
                     verkkosivustoillamme ja sovelluksissamme (\"Palvelu\").",
                ),
                LegalBlock::paragraph(
                    "Lue tämä asiakirja yhdessä [tietosuojakäytäntömme](/privacy) kanssa.",
                ),
            ],
        ),
        LegalSnippet::blocks(
            "cookies.definition",
            [LegalBlock::paragraph(
                "Evästeet ovat pieniä tekstitiedostoja, jotka tallennetaan laitteellesi. Ne \
                 mahdollistavat sivuston ydintoiminnot, auttavat meitä ymmärtämään palvelumme \
                 käyttöä, mahdollistavat sosiaalisia toimintoja ja näyttävät kohdennettuja \
                 mainoksia.",
            )],
        ),
        LegalSnippet::blocks(
            "cookies.usage",
            [
                LegalBlock::table(
                    [
                        "Luokka",
                        "Tyypilliset evästenimet",
                        "Tarkoitus",
                        "Suostumus?",
                        "Voimassaoloaika",
                    ],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("cookies-categories"),
                LegalBlock::note(
                    "Tarkka voimassaoloaika voi vaihdella palveluntarjoajasta riippuen.\n\
                     Täydellinen luettelo (nimi, tarjoaja, voimassaolo) on nähtävissä \
                     Evästeasetukset-paneelissa.",
                ),
            ],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.strict",
            "cookies-categories",
            [[
                "Välttämättömät",
                "__client*, __clerk*, clerk*, __session, __stripe*, __refresh*",
                "Sisäänkirjautuminen, tietoturva, kuormanjako, maksut",
                "Ei vaadita",
                "1 vuosi",
            ]],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.preferences",
            "cookies-categories",
            [[
                "Mieltymykset",
                "cookie_preferences, theme, locale",
                "Muistaa käyttöliittymä- ja evästevalinnat",
                "Kyllä",
                "1 vuosi",
            ]],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.advertising",
            "cookies-categories",
            [["Mainonta", "_gads, _gcl_au, _fbp", "Kohdennetut mainokset", "Kyllä", "3-24 kk"]],
        ),
        LegalSnippet::table_rows(
            "cookies.usage.social",
            "cookies-categories",
            [[
                "Sosiaalinen / pikselit",
                "bcookie, li_gc, fr",
                "Sosiaalisen median kampanjoiden mittaus",
                "Kyllä",
                "3-12 kk",
            ]],
        ),
        LegalSnippet::blocks(
            "cookies.choices",
            [LegalBlock::list([
                "Ensikäynti - lataamme vain välttämättömät evästeet.",
                "Muuta mieltäsi milloin tahansa - löydät alatunnisteesta \
                 Evästekäytäntö-linkin, jonka kautta voit päivittää valintasi tai perua \
                 suostumuksen.",
                "Selainasetukset - voit poistaa tai estää evästeitä selaimesi kautta (Chrome, \
                 Firefox, Safari).",
            ])],
        ),
        LegalSnippet::blocks(
            "cookies.third_party",
            [
                LegalBlock::paragraph(
                    "Käytämme luotettavia kumppaneita; heidän evästeensä aktivoituvat vasta, \
                     kun olet antanut suostumuksen kyseiseen luokkaan.",
                ),
                LegalBlock::table(
                    ["Tarjoaja", "Palvelu", "Alue", "Suojauskeino"],
                    Vec::<Vec<String>>::new(),
                )
                .with_id("cookies-third-party"),
            ],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.google_ads",
            "cookies-third-party",
            [["Google Ireland", "Google Ads (Consent Mode v2)", "EU ensisijainen, US varmistus", "SCC"]],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.meta",
            "cookies-third-party",
            [["Meta Platforms Ireland", "Meta Pixel (jos käytössä)", "EU", "SCC"]],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.linkedin",
            "cookies-third-party",
            [["LinkedIn Ireland", "Insight Tag (jos käytössä)", "EU", "SCC"]],
        ),
        LegalSnippet::table_rows(
            "cookies.third_party.payments",
            "cookies-third-party",
            [[
                "{{PAYMENTS_PROVIDER}}",
                "Maksuistuntojen evästeet",
                "{{DATA_REGION_PRIMARY}} ensisijainen, {{DATA_REGION_BACKUP}} varmistus",
                "PSD2, SCC",
            ]],
        ),
        LegalSnippet::blocks(
            "cookies.retention",
            [LegalBlock::paragraph("Evästeiden voimassaoloajat on lueteltu tällä sivulla.")],
        ),
        LegalSnippet::blocks(
            "cookies.updates",
            [LegalBlock::paragraph(
                "Saatamme muokata tätä käytäntöä evästeiden, palveluntarjoajien tai \
                 lainsäädännön muuttuessa.",
            )],
        ),
        LegalSnippet::blocks(
            "cookies.contact",
            [LegalBlock::paragraph(
                "Kysyttävää? Ota yhteyttä [yhteydenottolomakkeella]({{CONTACT_URL}}).",
            )],
        ),
    ])
}
