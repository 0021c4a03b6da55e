//! Placeholder-segment route.
//!
//! # Responsibilities
//! - Match paths against patterns like `/blog/:slug/:page`
//! - Bind `:name` placeholders to parameters on match
//! - Substitute parameters back into the pattern on assembly
//!
//! # Design Decisions
//! - Segment-by-segment comparison, no regex
//! - A placeholder never binds an empty segment
//! - Assembly fails when a placeholder has no value after default merge

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::routing::definition::RouteOptions;
use crate::routing::error::RouteError;
use crate::routing::route::{AssembleOptions, Route, RouteMatch, RouteParams};

#[derive(Debug, Clone)]
enum Part {
    Literal(String),
    Param(String),
}

/// Matches paths with named placeholder segments.
#[derive(Debug, Clone)]
pub struct SegmentRoute {
    parts: Vec<Part>,
    defaults: RouteParams,
    priority: i32,
}

impl SegmentRoute {
    /// Build from a pattern; segments starting with `:` become named
    /// placeholders.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        let parts = pattern
            .as_ref()
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Part::Param(name.to_string()),
                None => Part::Literal(segment.to_string()),
            })
            .collect();

        Self {
            parts,
            defaults: RouteParams::new(),
            priority: 0,
        }
    }

    /// Parameters reported on every match when the placeholders did not
    /// already bind them.
    pub fn with_defaults(mut self, defaults: RouteParams) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Factory constructor for declarative definitions.
    pub(crate) fn from_options(options: &RouteOptions) -> Result<Arc<dyn Route>, RouteError> {
        let pattern = options.path.clone().ok_or_else(|| {
            RouteError::InvalidArgument("missing \"path\" option for segment route".into())
        })?;
        Ok(Arc::new(
            Self::new(pattern).with_defaults(options.defaults.clone()),
        ))
    }
}

impl Route for SegmentRoute {
    fn match_request(&self, req: &Request<Body>) -> Option<RouteMatch> {
        let path = req.uri().path();
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() != self.parts.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (part, segment) in self.parts.iter().zip(&segments) {
            match part {
                Part::Literal(expected) => {
                    if expected != segment {
                        return None;
                    }
                }
                Part::Param(name) => {
                    if segment.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), (*segment).to_string());
                }
            }
        }

        for (key, value) in &self.defaults {
            params.entry(key.clone()).or_insert_with(|| value.clone());
        }

        Some(RouteMatch::new(params).with_length(path.len()))
    }

    fn assemble(
        &self,
        params: &RouteParams,
        _options: &AssembleOptions,
    ) -> Result<String, RouteError> {
        let mut segments = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            match part {
                Part::Literal(text) => segments.push(text.clone()),
                Part::Param(name) => {
                    let value = params.get(name).or_else(|| self.defaults.get(name));
                    match value {
                        Some(value) => segments.push(value.clone()),
                        None => {
                            return Err(RouteError::InvalidArgument(format!(
                                "missing parameter \"{name}\""
                            )))
                        }
                    }
                }
            }
        }
        Ok(segments.join("/"))
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
