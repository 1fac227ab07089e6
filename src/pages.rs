//! HTML page rendering.
//!
//! The site is a single document: all five page sections are rendered on
//! every request and CSS shows only the one marked `active`. Translated
//! strings come from the dictionary; structured content (experience
//! lists, skills, interests) is read from the per-language section tree
//! and escaped, since only scalar translations are trusted markup.

use serde_json::{json, Value};

use crate::i18n::{Dictionary, Language, LanguageRegistry};

const OWNER_NAME: &str = "Ethan Nicolas";
const OWNER_EMAIL: &str = "contact@ethancls.com";
const FAVICON_URL: &str = "https://portfolio.ethancls.com/favicon.ico";
const AVATAR_URL: &str = "https://www.gravatar.com/avatar/fdabfb6dddfc22957ffd6f22a1802941?s=400";
const GITHUB_URL: &str = "https://github.com/ethancls";
const LINKEDIN_URL: &str = "https://linkedin.com/in/ethannicolas";
const TWITTER_URL: &str = "https://twitter.com/somayhka";
const TWITTER_HANDLE: &str = "@somayhka";
const INSTAGRAM_URL: &str = "https://instagram.com/ethancls";
const DISCORD_URL: &str = "https://discord.com/invite/MtQPwYZZ";
const DISCORD_HANDLE: &str = "azuma93";

// One video, per-language subtitle tracks
const VIDEO_ID: &str = "dQw4w9WgXcQ";

const ICON_HOME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9,22 9,12 15,12 15,22"/></svg>"#;
const ICON_PROJECTS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/></svg>"#;
const ICON_EXPERIENCES: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/></svg>"#;
const ICON_EDUCATION: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z"/><path d="M22 10v6"/><path d="M6 12.5V16a6 3 0 0 0 12 0v-3.5"/></svg>"#;
const ICON_CONTACT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/></svg>"#;
const ICON_USER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/></svg>"#;
const ICON_VIDEO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="23 7 16 12 23 17 23 7"/><rect x="1" y="5" width="15" height="14" rx="2" ry="2"/></svg>"#;
const ICON_PIN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/></svg>"#;
const ICON_CHECK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M9 12l2 2 4-4"/><circle cx="12" cy="12" r="10"/></svg>"#;
const ICON_THEME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/></svg>"#;
const ICON_MAIL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/></svg>"#;

/// The five pages the query parameter may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Experiences,
    Education,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Projects,
        Page::Experiences,
        Page::Education,
        Page::Contact,
    ];

    /// Resolve the `page` query parameter; anything outside the
    /// allow-list falls back to the home page.
    pub fn from_query(raw: Option<&str>) -> Page {
        match raw {
            Some("projects") => Page::Projects,
            Some("experiences") => Page::Experiences,
            Some("education") => Page::Education,
            Some("contact") => Page::Contact,
            _ => Page::Home,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Experiences => "experiences",
            Page::Education => "education",
            Page::Contact => "contact",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Page::Home => ICON_HOME,
            Page::Projects => ICON_PROJECTS,
            Page::Experiences => ICON_EXPERIENCES,
            Page::Education => ICON_EDUCATION,
            Page::Contact => ICON_CONTACT,
        }
    }
}

/// Everything one render needs.
pub struct PageContext<'a> {
    pub dictionary: &'a Dictionary,
    pub language: Language,
    pub page: Page,
    /// Scheme plus host, no trailing slash.
    pub base_url: &'a str,
}

/// Render the complete HTML document for a request.
pub fn render_page(ctx: &PageContext) -> String {
    let mut html = String::with_capacity(32 * 1024);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\" dir=\"{}\">\n",
        ctx.language.code(),
        ctx.dictionary.dir(ctx.language)
    ));
    html.push_str(&head(ctx));
    html.push_str("<body itemscope itemtype=\"https://schema.org/Person\">\n");
    html.push_str(&header_nav(ctx));
    html.push_str("<main class=\"main-content\">\n");
    html.push_str(&home_section(ctx));
    html.push_str(&projects_section(ctx));
    html.push_str(&experiences_section(ctx));
    html.push_str(&education_section(ctx));
    html.push_str(&contact_section(ctx));
    html.push_str("</main>\n");
    html.push_str(&format!(
        "<footer class=\"footer\"><p>{}</p></footer>\n",
        ctx.dictionary.text(ctx.language, "footer.copyright")
    ));
    html.push_str(CLIENT_SCRIPT);
    html.push_str("</body>\n</html>\n");

    html
}

/// Escape text for interpolation into HTML content or attributes.
fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn active_class(current: Page, section: Page) -> &'static str {
    if current == section {
        " active"
    } else {
        ""
    }
}

/// The YouTube embed URL, preferring a subtitle track in the page
/// language where one exists.
fn video_url(language: Language) -> String {
    let cc = match language.code() {
        "fr" | "en" | "ja" => language.code(),
        _ => "fr",
    };
    format!(
        "https://www.youtube.com/embed/{}?cc_lang_pref={}&cc_load_policy=1",
        VIDEO_ID, cc
    )
}

fn head(ctx: &PageContext) -> String {
    let title = ctx.dictionary.text(ctx.language, "home.title");
    let title_attr = html_escape(&title);
    let subtitle = html_escape(&ctx.dictionary.text(ctx.language, "home.subtitle"));
    let page_url = format!(
        "{}?page={}&lang={}",
        ctx.base_url,
        ctx.page.slug(),
        ctx.language.code()
    );
    let og_image = format!("{}/og-image.png", ctx.base_url);
    let lang = ctx.language.code();
    let alternates = alternate_links(ctx);
    let json_ld = json_ld(ctx);

    format!(
        r#"<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="{FAVICON_URL}" type="image/x-icon">
    <meta name="description" content="{subtitle}">
    <meta name="author" content="{OWNER_NAME}">
    <meta name="keywords" content="portfolio, développeur, ingénieur informatique, web development, programming">
    <meta property="og:title" content="{title_attr}">
    <meta property="og:description" content="{subtitle}">
    <meta property="og:type" content="website">
    <meta property="og:url" content="{page_url}">
    <meta property="og:locale" content="{lang}">
    <meta property="og:image" content="{og_image}">
    <meta property="og:image:url" content="{og_image}">
    <meta property="og:image:alt" content="{title_attr}">
    <meta property="og:image:secure_url" content="{og_image}">
    <meta property="og:image:width" content="1200">
    <meta property="og:image:height" content="630">
    <meta property="og:image:type" content="image/png">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="{TWITTER_HANDLE}">
    <meta name="twitter:creator" content="{TWITTER_HANDLE}">
    <meta name="twitter:title" content="{title_attr}">
    <meta name="twitter:description" content="{subtitle}">
    <meta name="twitter:image" content="{og_image}">
    <meta name="twitter:image:alt" content="{title_attr}">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
    <link rel="stylesheet" href="/style.css">
{alternates}    <script type="application/ld+json">
{json_ld}
    </script>
</head>
"#
    )
}

fn alternate_links(ctx: &PageContext) -> String {
    let mut links = String::new();
    for config in LanguageRegistry::get().list_all() {
        links.push_str(&format!(
            "    <link rel=\"alternate\" hreflang=\"{}\" href=\"{}?page={}&lang={}\">\n",
            config.code,
            ctx.base_url,
            ctx.page.slug(),
            config.code
        ));
    }
    links
}

fn json_ld(ctx: &PageContext) -> String {
    let codes: Vec<&str> = LanguageRegistry::get()
        .list_all()
        .iter()
        .map(|config| config.code)
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": OWNER_NAME,
        "jobTitle": ctx.dictionary.text(ctx.language, "job"),
        "description": ctx.dictionary.text(ctx.language, "home.subtitle"),
        "url": ctx.base_url,
        "image": format!("{}/og-image.png", ctx.base_url),
        "sameAs": [GITHUB_URL, LINKEDIN_URL, TWITTER_URL, INSTAGRAM_URL],
        "email": OWNER_EMAIL,
        "knowsLanguage": codes,
    })
    .to_string()
}

fn nav_links(ctx: &PageContext) -> String {
    let mut links = String::new();
    for page in Page::ALL {
        links.push_str(&format!(
            "                <a class=\"nav-link{}\" href=\"?page={}&lang={}\">{} {}</a>\n",
            active_class(ctx.page, page),
            page.slug(),
            ctx.language.code(),
            page.icon(),
            ctx.dictionary
                .text(ctx.language, &format!("navigation.{}", page.slug()))
        ));
    }
    links
}

fn language_selector(ctx: &PageContext, dropdown_id: &str) -> String {
    let current_iso = ctx.language.code().to_uppercase();
    let current_name = ctx.dictionary.name(ctx.language);

    let mut options = String::new();
    for config in LanguageRegistry::get().list_all() {
        if config.code == ctx.language.code() {
            continue;
        }
        // Each language names itself in its own dictionary entry
        let name = ctx
            .dictionary
            .section(config.code)
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(config.name);
        options.push_str(&format!(
            "                    <a href=\"?page={}&lang={}\" class=\"language-option\"><span class=\"language-iso\">{}</span> <span class=\"language-name\">{}</span></a>\n",
            ctx.page.slug(),
            config.code,
            config.code.to_uppercase(),
            name
        ));
    }

    format!(
        r#"<div class="language-selector">
                <button class="language-btn" onclick="toggleLanguageDropdown()">
                    <span class="language-iso">{current_iso}</span> <span class="language-name">{current_name}</span> ▼
                </button>
                <div class="language-dropdown" id="{dropdown_id}">
{options}                </div>
            </div>
"#
    )
}

fn header_nav(ctx: &PageContext) -> String {
    let lang = ctx.language.code();
    let desktop_links = nav_links(ctx);
    let mobile_links = nav_links(ctx);
    let desktop_selector = language_selector(ctx, "languageDropdown");
    let mobile_selector = language_selector(ctx, "languageDropdownMobile");

    format!(
        r#"<header class="header">
    <nav class="nav-container">
        <a class="logo" href="?page=home&lang={lang}">
            <img src="{FAVICON_URL}" alt="Portfolio" class="logo-icon">
        </a>

        <div class="nav-menu">
{desktop_links}        </div>

        <button class="hamburger" id="hamburger">
            <span></span>
            <span></span>
            <span></span>
        </button>

        <button class="theme-toggle" id="theme-toggle" title="Basculer mode sombre/clair">{ICON_THEME}</button>

        {desktop_selector}
        <div class="mobile-menu" id="mobileMenu">
{mobile_links}
            <div class="mobile-controls">
                <button class="theme-toggle" onclick="toggleTheme()">{ICON_THEME}</button>
                {mobile_selector}
            </div>
        </div>
    </nav>
</header>
"#
    )
}

fn home_section(ctx: &PageContext) -> String {
    let d = ctx.dictionary;
    let active = active_class(ctx.page, Page::Home);
    let about_title = d.text(ctx.language, "home.about_title");
    let about_content = d.text(ctx.language, "home.about_content");
    let video_title = d.text(ctx.language, "home.video_title");
    let video_description = d.text(ctx.language, "home.video_description");
    let video_src = video_url(ctx.language);

    format!(
        r#"<div class="page-content{active}" id="home">
    <section class="about-section">
        <div class="section-header">{ICON_USER}<h2>{about_title}</h2></div>
        <div class="about-content">
            <div class="about-card avatar-right">
                <p class="about-text">{about_content}</p>
                <img src="{AVATAR_URL}" alt="Profile Picture" class="about-avatar">
            </div>
        </div>
    </section>

    <section class="video-section">
        <div class="section-header">{ICON_VIDEO}<h2>{video_title}</h2></div>
        <div class="video-card">
            <p class="video-description">{video_description}</p>
            <div class="video-container">
                <iframe src="{video_src}" title="{video_title}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>
            </div>
        </div>
    </section>
</div>
"#
    )
}

fn projects_section(ctx: &PageContext) -> String {
    let active = active_class(ctx.page, Page::Projects);
    let projects = [
        ("fs0ciety", "https://fs0ciety.uk", "/fs0ciety.png"),
        ("atlas", "https://atlas.ethancls.com", "/atlas.png"),
        ("jarvys", "https://jarvys.ethancls.com", "/jarvys.png"),
        ("portfolio", "https://portfolio.ethancls.com", "/portfolio.png"),
    ];

    let mut cards = String::new();
    for (key, url, preview) in projects {
        cards.push_str(&format!(
            r#"        <a href="{url}" target="_blank" class="project-card" itemscope itemtype="https://schema.org/CreativeWork">
            <div class="project-header">
                <h3 class="project-title" itemprop="name">{title}</h3>
                <p class="project-description" itemprop="description">{description}</p>
            </div>
            <div class="project-preview">
                <img src="{preview}" alt="{key} Preview" itemprop="url">
            </div>
        </a>
"#,
            title = ctx
                .dictionary
                .text(ctx.language, &format!("projects.{}.title", key)),
            description = ctx
                .dictionary
                .text(ctx.language, &format!("projects.{}.description", key)),
        ));
    }

    format!(
        "<div class=\"page-content{}\" id=\"projects\">\n    <div class=\"projects-grid\">\n{}    </div>\n</div>\n",
        active, cards
    )
}

fn experiences_section(ctx: &PageContext) -> String {
    let active = active_class(ctx.page, Page::Experiences);
    let section = ctx.dictionary.section(ctx.language.code());

    let body = match section.get("experiences").and_then(Value::as_array) {
        Some(experiences) => {
            let mut cards = String::new();
            for exp in experiences {
                let date = html_escape(exp.get("date").and_then(Value::as_str).unwrap_or(""));
                let title = html_escape(exp.get("title").and_then(Value::as_str).unwrap_or(""));
                let company =
                    html_escape(exp.get("company").and_then(Value::as_str).unwrap_or(""));

                let details = match exp.get("details").and_then(Value::as_array) {
                    Some(items) => {
                        let mut list = String::new();
                        for item in items {
                            list.push_str(&format!(
                                "                    <li>{} {}</li>\n",
                                ICON_CHECK,
                                html_escape(item.as_str().unwrap_or(""))
                            ));
                        }
                        format!(
                            "            <div class=\"experience-content\">\n                <ul class=\"experience-details\">\n{}                </ul>\n            </div>\n",
                            list
                        )
                    }
                    None => String::new(),
                };

                cards.push_str(&format!(
                    r#"        <div class="experience-card">
            <div class="experience-header">
                <div class="experience-badge">{date}</div>
                <div class="experience-meta">
                    <h3 class="experience-title">{title}</h3>
                    <p class="experience-company">{ICON_PIN} {company}</p>
                </div>
            </div>
{details}        </div>
"#
                ));
            }
            cards
        }
        None => format!(
            "        <div class=\"empty-state\">{}<p>Données d'expérience non disponibles.</p></div>\n",
            ICON_EXPERIENCES
        ),
    };

    format!(
        "<div class=\"page-content{}\" id=\"experiences\">\n    <div class=\"experience-grid\">\n{}    </div>\n</div>\n",
        active, body
    )
}

fn education_section(ctx: &PageContext) -> String {
    let active = active_class(ctx.page, Page::Education);
    let section = ctx.dictionary.section(ctx.language.code());

    let timeline = match section.get("education").and_then(Value::as_array) {
        Some(entries) => {
            let mut items = String::new();
            for edu in entries {
                items.push_str(&format!(
                    r#"            <div class="cv-timeline-item">
                <div class="cv-timeline-date">{date}</div>
                <div class="cv-timeline-content">
                    <div class="cv-timeline-title">{title} <span class="cv-timeline-company">@ {school}</span></div>
                    <div class="cv-timeline-desc">{desc}</div>
                </div>
            </div>
"#,
                    date = html_escape(edu.get("date").and_then(Value::as_str).unwrap_or("")),
                    title = html_escape(edu.get("title").and_then(Value::as_str).unwrap_or("")),
                    school = html_escape(edu.get("school").and_then(Value::as_str).unwrap_or("")),
                    desc = html_escape(edu.get("desc").and_then(Value::as_str).unwrap_or("")),
                ));
            }
            items
        }
        None => "            <p>Données d'éducation non disponibles.</p>\n".to_string(),
    };

    let mut skills = String::new();
    if let Some(entries) = section.get("skills").and_then(Value::as_array) {
        for skill in entries {
            skills.push_str(&format!(
                "            <div>{} <strong>{} :</strong> {}</div>\n",
                ICON_CHECK,
                html_escape(skill.get("cat").and_then(Value::as_str).unwrap_or("")),
                html_escape(skill.get("items").and_then(Value::as_str).unwrap_or(""))
            ));
        }
    }

    let mut language_skills = String::new();
    if let Some(entries) = section.get("languageskills").and_then(Value::as_array) {
        for entry in entries {
            language_skills.push_str(&format!(
                "            <li><span class=\"fa-solid fa-circle-check\"></span> {} : {}</li>\n",
                html_escape(entry.get("lang").and_then(Value::as_str).unwrap_or("")),
                html_escape(entry.get("level").and_then(Value::as_str).unwrap_or(""))
            ));
        }
    }

    let mut interests = String::new();
    if let Some(entries) = section.get("interests").and_then(Value::as_array) {
        for interest in entries {
            interests.push_str(&format!(
                "            <li><span class=\"fa-solid fa-heart\"></span> {}</li>\n",
                html_escape(interest.as_str().unwrap_or(""))
            ));
        }
    }

    let mut qualities = String::new();
    if let Some(entries) = section.get("qualities").and_then(Value::as_array) {
        for quality in entries {
            qualities.push_str(&format!(
                "            <li>{}</li>\n",
                html_escape(quality.as_str().unwrap_or(""))
            ));
        }
    }

    format!(
        r#"<div class="page-content{active}" id="education">
    <section class="cv-education">
        <h2>{ICON_EDUCATION} {h_education}</h2>
        <div class="cv-timeline">
{timeline}        </div>
    </section>
    <section class="cv-skills">
        <h2><span class="fa-solid fa-screwdriver-wrench"></span> {h_skills}</h2>
        <div class="cv-skills-list">
{skills}        </div>
    </section>
    <section class="cv-languages">
        <h2><span class="fa-solid fa-language"></span> {h_languages}</h2>
        <ul class="cv-languages-list">
{language_skills}        </ul>
    </section>
    <section class="cv-interests">
        <h2><span class="fa-solid fa-heart"></span> {h_interests}</h2>
        <ul class="cv-interests-list">
{interests}        </ul>
    </section>
    <section class="cv-qualities">
        <h2><span class="fa-solid fa-star"></span> {h_qualities}</h2>
        <ul class="cv-qualities-list">
{qualities}        </ul>
    </section>
</div>
"#,
        active = active,
        h_education = subtitle(ctx, 0),
        h_skills = subtitle(ctx, 1),
        h_languages = subtitle(ctx, 2),
        h_interests = subtitle(ctx, 3),
        h_qualities = subtitle(ctx, 4),
        timeline = timeline,
        skills = skills,
        language_skills = language_skills,
        interests = interests,
        qualities = qualities,
    )
}

/// One of the education page's section headers, from the `subtitles`
/// list.
fn subtitle(ctx: &PageContext, index: usize) -> String {
    ctx.dictionary
        .lookup(ctx.language, "subtitles")
        .and_then(Value::as_array)
        .and_then(|list| list.get(index))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn contact_card(icon: &str, heading: &str, href: &str, label: &str, link_attrs: &str) -> String {
    format!(
        r#"            <div class="contact-card">
                <div class="contact-icon">{icon}</div>
                <div class="contact-details">
                    <h3>{heading}</h3>
                    <a href="{href}"{link_attrs}>{label}</a>
                </div>
            </div>
"#
    )
}

fn contact_section(ctx: &PageContext) -> String {
    let d = ctx.dictionary;
    let lang = ctx.language;
    let active = active_class(ctx.page, Page::Contact);
    let external = r#" target="_blank" rel="noopener" itemprop="sameAs""#;

    let mut cards = String::new();
    cards.push_str(&contact_card(
        ICON_MAIL,
        &d.text(lang, "contact.email"),
        &format!("mailto:{}", OWNER_EMAIL),
        OWNER_EMAIL,
        r#" itemprop="email""#,
    ));
    cards.push_str(&contact_card(
        r#"<span class="fa-brands fa-github"></span>"#,
        &d.text(lang, "contact.github"),
        GITHUB_URL,
        "github.com/ethancls",
        external,
    ));
    cards.push_str(&contact_card(
        r#"<span class="fa-brands fa-linkedin"></span>"#,
        &d.text(lang, "contact.linkedin"),
        LINKEDIN_URL,
        "linkedin.com/in/ethannicolas",
        external,
    ));
    cards.push_str(&contact_card(
        r#"<span class="fa-brands fa-twitter"></span>"#,
        &d.text(lang, "contact.twitter"),
        TWITTER_URL,
        TWITTER_HANDLE,
        external,
    ));
    cards.push_str(&contact_card(
        r#"<span class="fa-brands fa-instagram"></span>"#,
        &d.text(lang, "contact.instagram"),
        INSTAGRAM_URL,
        "@ethancls",
        external,
    ));
    cards.push_str(&contact_card(
        r#"<span class="fa-brands fa-discord"></span>"#,
        &d.text(lang, "contact.discord"),
        DISCORD_URL,
        DISCORD_HANDLE,
        external,
    ));

    format!(
        r#"<div class="page-content{active}" id="contact">
    <div class="contact-container">
        <div class="contact-info">
{cards}        </div>

        <div class="contact-cta">
            <div class="cta-card">
                <h3>{cta_title}</h3>
                <p>{cta_description}</p>
                <a href="mailto:{OWNER_EMAIL}" class="cta-button">{ICON_MAIL} {send_email}</a>
            </div>
        </div>
    </div>
</div>
"#,
        active = active,
        cards = cards,
        cta_title = d.text(lang, "contact.cta_title"),
        cta_description = d.text(lang, "contact.cta_description"),
        send_email = d.text(lang, "contact.send_email"),
    )
}

const CLIENT_SCRIPT: &str = r#"<script>
    // Dark/Light mode toggle
    const themeToggle = document.getElementById('theme-toggle');
    const root = document.documentElement;

    function setTheme(theme) {
        root.setAttribute('data-theme', theme);
        localStorage.setItem('theme', theme);
    }

    function toggleTheme() {
        const current = root.getAttribute('data-theme') || 'light';
        setTheme(current === 'dark' ? 'light' : 'dark');
    }

    themeToggle.addEventListener('click', toggleTheme);

    const savedTheme = localStorage.getItem('theme') || (window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light');
    setTheme(savedTheme);

    // Hamburger menu toggle
    const hamburger = document.getElementById('hamburger');
    const mobileMenu = document.getElementById('mobileMenu');

    hamburger.addEventListener('click', function() {
        hamburger.classList.toggle('active');
        mobileMenu.classList.toggle('show');
    });

    // Language dropdown toggle
    function toggleLanguageDropdown() {
        const dropdown = document.getElementById('languageDropdown');
        const dropdownMobile = document.getElementById('languageDropdownMobile');
        if (dropdown) dropdown.classList.toggle('show');
        if (dropdownMobile) dropdownMobile.classList.toggle('show');
    }

    // Close menus when clicking outside or pressing Escape
    document.addEventListener('click', function(event) {
        let clickedInside = false;
        document.querySelectorAll('.language-selector').forEach(function(selector) {
            if (selector.contains(event.target)) clickedInside = true;
        });
        if (!clickedInside) {
            document.querySelectorAll('.language-dropdown').forEach(function(dropdown) {
                dropdown.classList.remove('show');
            });
        }

        const header = document.querySelector('.header');
        if (!header.contains(event.target)) {
            hamburger.classList.remove('active');
            mobileMenu.classList.remove('show');
        }
    });

    document.addEventListener('keydown', function(event) {
        if (event.key === 'Escape') {
            document.querySelectorAll('.language-dropdown').forEach(function(dropdown) {
                dropdown.classList.remove('show');
            });
            hamburger.classList.remove('active');
            mobileMenu.classList.remove('show');
        }
    });
</script>
"#;
