//! Structured diagnostic events emitted during conversion.
//!
//! The conversion engine never logs directly. It reports through an
//! [`EventSink`] injected by the caller, so the CLI can forward events to
//! `tracing` while tests assert on the events themselves.

use std::fmt;

/// A diagnostic event produced while converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    /// A package-like component carries neither a purl nor a CPE.
    MissingIdentifier {
        name: String,
        component_type: String,
        mime_type: Option<String>,
    },
    /// The component walk completed; `count` components were mapped.
    ComponentsMapped { count: usize },
    /// Component type occurrence counts for the completed walk.
    TypeTally { counts: Vec<(String, usize)> },
}

impl fmt::Display for ConversionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentifier {
                name,
                component_type,
                mime_type,
            } => write!(
                f,
                "package {:?}:{:?}:{:?} missing purl and CPE",
                name,
                component_type,
                mime_type.as_deref().unwrap_or_default()
            ),
            Self::ComponentsMapped { count } => {
                write!(f, "loaded {count} components from BOM")
            }
            Self::TypeTally { counts } => {
                write!(f, "component types:")?;
                for (label, count) in counts {
                    write!(f, " {label}={count}")?;
                }
                Ok(())
            }
        }
    }
}

/// Destination for conversion diagnostics.
///
/// Warnings are purely observational; a sink must not influence control
/// flow.
pub trait EventSink {
    /// Record an informational event.
    fn record_info(&mut self, event: ConversionEvent);

    /// Record a warning event.
    fn record_warning(&mut self, event: ConversionEvent);
}

/// Sink forwarding events to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record_info(&mut self, event: ConversionEvent) {
        tracing::info!("{event}");
    }

    fn record_warning(&mut self, event: ConversionEvent) {
        tracing::warn!("{event}");
    }
}

/// Sink that keeps every event, for inspection in tests and embedders.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub infos: Vec<ConversionEvent>,
    pub warnings: Vec<ConversionEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for CollectingSink {
    fn record_info(&mut self, event: ConversionEvent) {
        self.infos.push(event);
    }

    fn record_warning(&mut self, event: ConversionEvent) {
        self.warnings.push(event);
    }
}
