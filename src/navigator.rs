//! Routing between the two views.

use crate::messages::{MessageKind, Messages};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NavError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// The two routable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Served at `/productos` and at the root.
    #[default]
    Products,
    Categories,
}

impl Route {
    pub fn from_path(path: &str) -> Result<Self, NavError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" | "/productos" => Ok(Route::Products),
            "/categorias" => Ok(Route::Categories),
            _ => Err(NavError::UnknownRoute(path.to_string())),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Products => "/productos",
            Route::Categories => "/categorias",
        }
    }

    /// The route the in-view cross-navigation button leads to.
    pub fn cross(self) -> Self {
        match self {
            Route::Products => Route::Categories,
            Route::Categories => Route::Products,
        }
    }

    pub fn label(self) -> MessageKind {
        match self {
            Route::Products => MessageKind::NavProducts,
            Route::Categories => MessageKind::NavCategories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// The shared navigation bar: a brand link to the root and one link per route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub brand: NavLink,
    pub links: Vec<NavLink>,
}

impl NavBar {
    pub fn new(brand: &str, messages: &Messages) -> Self {
        let links = [Route::Products, Route::Categories]
            .into_iter()
            .map(|route| NavLink {
                label: messages.get(route.label()).to_string(),
                path: route.path().to_string(),
            })
            .collect();
        Self {
            brand: NavLink { label: brand.to_string(), path: "/".to_string() },
            links,
        }
    }
}

/// Tracks the active route.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, path: &str) -> Result<Route, NavError> {
        let route = Route::from_path(path)?;
        debug!(path, route = route.path(), "Navigate");
        self.current = route;
        Ok(route)
    }

    pub fn current(&self) -> Route {
        self.current
    }
}
