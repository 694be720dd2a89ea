//! Dimension records - the measurement axes recorded along a run

use serde::{Deserialize, Serialize};

/// What a dimension measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionKind {
    /// Consumed algorithm effort (evaluation counters).
    Effort,
    /// Wall-clock or normalized runtime.
    Time,
    /// Solution quality.
    Objective,
}

/// Value type of a dimension axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    /// Non-negative integer values.
    UnsignedInt,
    /// Floating-point values.
    Float,
}

/// A named, typed measurement axis.
///
/// Data points are tokenized against the registered dimensions by
/// consumers of the model; the ingestion core itself hands point lines
/// over verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRecord {
    name: String,
    description: String,
    kind: DimensionKind,
    value_type: ValueType,
}

impl DimensionRecord {
    /// Create a dimension record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: DimensionKind,
        value_type: ValueType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            value_type,
        }
    }

    /// Get the dimension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get what the dimension measures.
    #[must_use]
    pub const fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// Get the value type of the axis.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// The five axes a TSPSuite log point carries, in column order.
#[must_use]
pub fn standard_dimensions() -> Vec<DimensionRecord> {
    vec![
        DimensionRecord::new(
            "FEs",
            "objective function evaluations",
            DimensionKind::Effort,
            ValueType::UnsignedInt,
        ),
        DimensionRecord::new(
            "DEs",
            "distance evaluations",
            DimensionKind::Effort,
            ValueType::UnsignedInt,
        ),
        DimensionRecord::new(
            "AT",
            "absolute runtime in milliseconds",
            DimensionKind::Time,
            ValueType::UnsignedInt,
        ),
        DimensionRecord::new(
            "NT",
            "normalized runtime",
            DimensionKind::Time,
            ValueType::Float,
        ),
        DimensionRecord::new(
            "L",
            "best tour length found so far",
            DimensionKind::Objective,
            ValueType::UnsignedInt,
        ),
    ]
}
