use serde::Serialize;

use crate::difficulty::{Tier, TierSet};

/// Issue severity, ordered least to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Minor,
    Warning,
    Problem,
}

/// Timestamp anchor for an issue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Span {
    /// A single instant in milliseconds.
    At(f64),
    /// An inclusive start..end range in milliseconds.
    Between(f64, f64),
}

impl Span {
    /// The earliest instant covered by the span.
    pub fn start(self) -> f64 {
        match self {
            Span::At(time) => time,
            Span::Between(start, _) => start,
        }
    }
}

/// One formatted argument for the reporter's message template.
///
/// The literal message text is a reporting concern; analyzers only fix the
/// identity, order, and type of the arguments each template expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IssueArg {
    Int(i64),
    Number(f64),
    Text(String),
}

impl IssueArg {
    pub fn text(value: impl Into<String>) -> Self {
        IssueArg::Text(value.into())
    }
}

/// One rule violation anchored to a beatmap position.
///
/// Immutable once built; produced in ascending timestamp order within each
/// tier pass of an analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Message-template key within the emitting check.
    pub template: &'static str,
    pub severity: Severity,
    pub span: Option<Span>,
    /// Difficulty tiers the issue applies to; empty means tier-independent.
    pub tiers: TierSet,
    pub args: Vec<IssueArg>,
}

impl Issue {
    pub fn new(template: &'static str, severity: Severity) -> Self {
        Self {
            template,
            severity,
            span: None,
            tiers: TierSet::EMPTY,
            args: Vec::new(),
        }
    }

    pub fn at(mut self, time: f64) -> Self {
        self.span = Some(Span::At(time));
        self
    }

    pub fn between(mut self, start: f64, end: f64) -> Self {
        self.span = Some(Span::Between(start, end));
        self
    }

    pub fn for_tier(mut self, tier: Tier) -> Self {
        self.tiers = self.tiers.with(tier);
        self
    }

    pub fn for_tiers(mut self, tiers: TierSet) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn arg(mut self, arg: IssueArg) -> Self {
        self.args.push(arg);
        self
    }
}
