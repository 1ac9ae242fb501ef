//! Typed links.
//!
//! In-app navigation goes through [`Route`] so a link can only point at a page
//! that exists. Anything leaving the app is an [`Href::External`] URL, limited
//! to schemes an email client can follow safely.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static TEMPLATE_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/templates/(?P<template>[A-Za-z0-9._-]+)/(?P<page>edit|preview)/?$")
        .expect("template route pattern is valid")
});

const EXTERNAL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Empty link")]
    Empty,
    #[error("Unsupported link scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    #[error("Malformed link: {0}")]
    Malformed(String),
}

/// Pages of the editor application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Templates,
    Editor { template: String },
    Preview { template: String },
}

impl Route {
    pub fn href(&self) -> String {
        match self {
            Route::Templates => "/templates".to_string(),
            Route::Editor { template } => format!("/templates/{template}/edit"),
            Route::Preview { template } => format!("/templates/{template}/preview"),
        }
    }

    pub fn parse(path: &str) -> Result<Self, LinkError> {
        let path = path.trim();
        if path == "/templates" || path == "/templates/" {
            return Ok(Route::Templates);
        }

        let captures = TEMPLATE_ROUTE
            .captures(path)
            .ok_or_else(|| LinkError::UnknownRoute(path.to_string()))?;
        let template = captures["template"].to_string();
        match &captures["page"] {
            "edit" => Ok(Route::Editor { template }),
            _ => Ok(Route::Preview { template }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Link target: an app route or an external URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Href {
    Route(Route),
    External(String),
}

impl Href {
    pub fn parse(link: &str) -> Result<Self, LinkError> {
        let link = link.trim();
        if link.is_empty() {
            return Err(LinkError::Empty);
        }
        if link.starts_with('/') && !link.starts_with("//") {
            return Route::parse(link).map(Href::Route);
        }

        let (scheme, rest) = link
            .split_once(':')
            .ok_or_else(|| LinkError::Malformed(link.to_string()))?;
        let scheme = scheme.to_ascii_lowercase();
        if !EXTERNAL_SCHEMES.contains(&scheme.as_str()) {
            return Err(LinkError::UnsupportedScheme(scheme));
        }
        if scheme.starts_with("http") && !(rest.starts_with("//") && rest.len() > 2) {
            return Err(LinkError::Malformed(link.to_string()));
        }
        if scheme == "mailto" && !rest.contains('@') {
            return Err(LinkError::Malformed(link.to_string()));
        }

        Ok(Href::External(link.to_string()))
    }

    pub fn href(&self) -> String {
        match self {
            Href::Route(route) => route.href(),
            Href::External(url) => url.clone(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Href::External(_))
    }
}

impl From<Route> for Href {
    fn from(route: Route) -> Self {
        Href::Route(route)
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
