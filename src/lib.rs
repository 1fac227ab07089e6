//! Multilingual portfolio web server.
//!
//! Serves a personal portfolio site in eight languages. The request
//! language is resolved from explicit choices, the visitor's session,
//! and the Accept-Language header. Translations come from a JSON
//! dictionary that is validated at startup. Static assets are served
//! with long-lived caching and revalidation support.

pub mod assets;
pub mod config;
pub mod i18n;
pub mod og_image;
pub mod pages;
pub mod server;
pub mod session;
