//! Code generation descriptors attached to emitted spans.
//!
//! Descriptors are constructed by the parser and interpreted only by the
//! code generator that consumes [`ParseResults`](crate::ParseResults).

/// HTTP method restriction of a route directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum HttpVerb {
    /// `httpget`
    Get,
    /// `httpput`
    Put,
    /// `httppost`
    Post,
    /// `httpdelete`
    Delete,
    /// `httppatch`
    Patch,
}

impl HttpVerb {
    /// Lowercase method name, e.g. `"get"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Patch => "patch",
        }
    }
}

/// What the code generator should produce for a span.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(tag = "type", rename_all = "snake_case"))]
pub enum CodeGeneratorDescriptor {
    /// `@inherits T`: the generated class derives from `base_type`.
    SetBaseType {
        /// Base class name as written.
        base_type: String,
    },
    /// `@model T`: the generated class derives from `base_type<model_type>`.
    Model {
        /// Configured default base class.
        base_type: String,
        /// Model type name as written.
        model_type: String,
    },
    /// `@inject T Name`: a property of type `type_name` named `property_name`.
    InjectParameter {
        /// Injected service type.
        type_name: String,
        /// Generated property name (may be empty after a reported error).
        property_name: String,
    },
    /// `@route pattern` or `@http<verb> pattern`.
    Route {
        /// Route template (may be empty).
        pattern: String,
        /// Method restriction, `None` for a bare `route`.
        verb: Option<HttpVerb>,
    },
}

impl CodeGeneratorDescriptor {
    /// Model descriptor wrapping the configured base type.
    #[must_use]
    pub fn model(base_type: impl Into<String>, model_type: impl Into<String>) -> Self {
        Self::Model {
            base_type: base_type.into(),
            model_type: model_type.into(),
        }
    }

    /// Inject descriptor.
    #[must_use]
    pub fn inject(type_name: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self::InjectParameter {
            type_name: type_name.into(),
            property_name: property_name.into(),
        }
    }

    /// Route descriptor.
    #[must_use]
    pub fn route(pattern: impl Into<String>, verb: Option<HttpVerb>) -> Self {
        Self::Route {
            pattern: pattern.into(),
            verb,
        }
    }
}
