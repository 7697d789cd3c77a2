use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, VehicleRecord};
use crate::Error;

const VEHICLE_PREFIX: &str = "/car/";

/// Screens reachable in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Catalog carousel
    Home,
    /// Detail screen for one vehicle id (may not exist)
    Vehicle { id: String },
}

impl Route {
    pub fn vehicle(id: impl Into<String>) -> Self {
        Route::Vehicle { id: id.into() }
    }

    /// Parse a path (`/` or `/car/{id}`)
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }
        let id = path.strip_prefix(VEHICLE_PREFIX)?.trim_end_matches('/');
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::vehicle(id))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Vehicle { id } => write!(f, "{}{}", VEHICLE_PREFIX, id),
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| Error::InvalidRoute(s.to_string()))
    }
}

/// Navigation history; the root route is never popped
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // Invariant: the stack always holds the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!("Navigate to {}", route);
        self.stack.push(route);
    }

    /// Pop the current route; returns false at the root
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            tracing::debug!("Navigate back to {}", self.current());
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

/// Outcome of resolving a detail route against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState<'a> {
    Found(&'a VehicleRecord),
    /// Stale or invalid id; rendered as a plain fallback message
    NotFound { id: &'a str },
}

impl DetailState<'_> {
    pub const NOT_FOUND_MESSAGE: &'static str = "Vehicle not found";

    pub fn vehicle(&self) -> Option<&VehicleRecord> {
        match *self {
            DetailState::Found(vehicle) => Some(vehicle),
            DetailState::NotFound { .. } => None,
        }
    }
}

/// Look up the vehicle a detail route points at
pub fn resolve_detail<'a>(catalog: &'a Catalog, id: &'a str) -> DetailState<'a> {
    match catalog.find(id) {
        Some(vehicle) => DetailState::Found(vehicle),
        None => {
            tracing::debug!("No vehicle with id '{}'", id);
            DetailState::NotFound { id }
        }
    }
}
