//! Navigation framework
//!
//! Routes, a URL router, and a navigation stack for the app's two-level
//! hierarchy: the home carousel and the detail screens pushed when a card
//! is activated.

use std::collections::HashMap;

use app_core::{branding, DetailTopic};
use serde::{Deserialize, Serialize};

/// Parameters extracted from a matched route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Home carousel
    Home,
    /// Detail content for a topic
    Detail {
        /// Topic the detail screen presents
        topic: DetailTopic,
    },
    /// Not found
    NotFound,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Detail { topic } => {
                format!("/detail/{}", urlencoding::encode(topic.tag()))
            }
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => branding::HOME_TITLE,
            Route::Detail { topic } => topic.title(),
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack (bottom to top)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self
            .entries
            .last()
            .expect("Stack should never be empty")
            .route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
    /// None (instant)
    None,
}

/// Pending navigation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNavigation {
    /// Target route
    pub route: Route,
    /// Animation type
    pub animation: NavigationAnimation,
}

/// Complete navigation state for one screen hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// The navigation stack
    pub stack: NavigationStack,
    /// Pending navigation (for animations)
    #[serde(skip)]
    pub pending: Option<PendingNavigation>,
    /// Is navigation in progress
    #[serde(skip)]
    pub is_navigating: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::Home),
            pending: None,
            is_navigating: false,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state rooted at home
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.stack.current()
    }

    /// Navigate to a route with the default push animation
    pub fn navigate(&mut self, route: Route) {
        self.navigate_with_animation(route, NavigationAnimation::Push);
    }

    /// Navigate to a route with an explicit animation
    pub fn navigate_with_animation(&mut self, route: Route, animation: NavigationAnimation) {
        self.pending = Some(PendingNavigation { route, animation });
        self.is_navigating = true;
        self.stack.push(route);
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        if self.stack.pop() {
            self.pending = Some(PendingNavigation {
                route: *self.current_route(),
                animation: NavigationAnimation::Pop,
            });
            self.is_navigating = true;
            true
        } else {
            false
        }
    }

    /// Complete the pending navigation
    pub fn complete_navigation(&mut self) {
        self.pending = None;
        self.is_navigating = false;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/detail/:topic", |params| {
            let topic = DetailTopic::from_tag(params.get("topic")?)?;
            Some(Route::Detail { topic })
        });

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let pathname = path.split('?').next().unwrap_or(path);
        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = Self::match_pattern(&pattern.segments, &path_segments) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments
    fn match_pattern(pattern: &[PatternSegment], path: &[&str]) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }

        Some(params)
    }
}

// =============================================================================
// Tests
// =============================================================================
