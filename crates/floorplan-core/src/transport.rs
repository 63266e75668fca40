//! Transportation records and their ingestion into a [`FacilityState`].
//!
//! A record moves `quantity` units from one department to another. Accepted records become (or
//! aggregate into) an undirected edge between the two department centroids whose weight is the
//! cumulative quantity. Records within a single department never create an edge; their quantity
//! is tallied separately.

use chrono::NaiveDateTime;
use floorgraph::{EdgeData, EdgeInsert, Graph, GraphOptions};
use serde::{Deserialize, Serialize};

use crate::department::{CENTROID, vertex_label};
use crate::error::{Error, Result};
use crate::facility::FacilityState;
use crate::time::{format_timestamp, parse_timestamp};

/// Payload of a transport edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    /// Time of every record that contributed to the edge, in ingestion order.
    pub times: Vec<NaiveDateTime>,
    pub distance_hint: Option<f64>,
    pub time_hint: Option<f64>,
}

impl EdgeData for Transport {
    fn absorb(&mut self, other: &Self) {
        self.times.extend_from_slice(&other.times);
        if self.distance_hint.is_none() {
            self.distance_hint = other.distance_hint;
        }
        if self.time_hint.is_none() {
            self.time_hint = other.time_hint;
        }
    }
}

pub type TransportGraph = Graph<Transport>;

/// Undirected, positioned vertices, caller-supplied weights that add up on repetition.
pub fn transport_graph_options() -> GraphOptions {
    GraphOptions {
        directed: false,
        coordinates: true,
        explicit_weight: true,
        aggregate_weight: true,
    }
}

/// A transport row as read from an external source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransportRecord {
    pub source: String,
    pub destination: String,
    pub quantity: String,
    pub timestamp: String,
    #[serde(default)]
    pub distance_hint: Option<f64>,
    #[serde(default)]
    pub time_hint: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRecord {
    pub source: String,
    pub destination: String,
    pub quantity: i64,
    pub timestamp: NaiveDateTime,
    pub distance_hint: Option<f64>,
    pub time_hint: Option<f64>,
}

impl TransportRecord {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    fn payload(&self) -> Transport {
        Transport {
            times: vec![self.timestamp],
            distance_hint: self.distance_hint,
            time_hint: self.time_hint,
        }
    }
}

impl TryFrom<RawTransportRecord> for TransportRecord {
    type Error = Error;

    fn try_from(raw: RawTransportRecord) -> Result<Self> {
        let quantity = raw
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::NonIntegerQuantity {
                value: raw.quantity.clone(),
            })?;
        let timestamp = parse_timestamp(&raw.timestamp)?;
        Ok(Self {
            source: raw.source,
            destination: raw.destination,
            quantity,
            timestamp,
            distance_hint: raw.distance_hint,
            time_hint: raw.time_hint,
        })
    }
}

/// Inclusive `[from, to]` filter on record timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidDateRange {
                from: format_timestamp(from),
                to: format_timestamp(to),
            });
        }
        Ok(Self { from, to })
    }

    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_timestamp(from)?, parse_timestamp(to)?)
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.from <= t && t <= self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportOutcome {
    Recorded(EdgeInsert),
    /// Source and destination are the same department; no edge was created.
    SelfLoop { quantity: i64 },
}

/// Summary of a batch ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    pub accepted: usize,
    pub self_loop_quantity: i64,
    pub skipped: usize,
    /// The filter bounds when a range was given, otherwise the earliest and latest timestamps
    /// seen among well-formed rows.
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
}

pub(crate) fn record_edge(graph: &mut TransportGraph, record: &TransportRecord) -> Result<TransportOutcome> {
    if record.is_self_loop() {
        return Ok(TransportOutcome::SelfLoop {
            quantity: record.quantity,
        });
    }
    let source = vertex_label(&record.source, CENTROID);
    let destination = vertex_label(&record.destination, CENTROID);
    let inserted = graph.add_edge_with(
        &source,
        &destination,
        Some(record.quantity as f64),
        record.payload(),
    )?;
    Ok(TransportOutcome::Recorded(inserted))
}

impl FacilityState {
    /// Adds one validated record. Both endpoints must be registered departments.
    pub fn add_transport_record(&mut self, record: TransportRecord) -> Result<TransportOutcome> {
        for label in [&record.source, &record.destination] {
            if self.department(label).is_none() {
                return Err(Error::UnknownDepartment {
                    label: label.clone(),
                });
            }
        }
        let outcome = record_edge(self.graph_mut(), &record)?;
        if let TransportOutcome::SelfLoop { quantity } = outcome {
            self.tally_self_loop(quantity);
        }
        self.push_record(record);
        Ok(outcome)
    }

    /// Ingests a batch of raw rows, skipping (and counting) rows that are malformed, outside
    /// `range` or that reference unknown departments.
    pub fn ingest<I>(&mut self, rows: I, range: Option<&DateRange>) -> IngestReport
    where
        I: IntoIterator<Item = RawTransportRecord>,
    {
        let mut report = IngestReport {
            date_from: range.map(|r| r.from),
            date_to: range.map(|r| r.to),
            ..Default::default()
        };

        for (row, raw) in rows.into_iter().enumerate() {
            let record = match TransportRecord::try_from(raw) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(row, %err, "skipping malformed transport row");
                    report.skipped += 1;
                    continue;
                }
            };

            match range {
                Some(range) if !range.contains(record.timestamp) => {
                    tracing::warn!(row, timestamp = %record.timestamp, "skipping transport row outside date range");
                    report.skipped += 1;
                    continue;
                }
                Some(_) => {}
                None => {
                    let t = record.timestamp;
                    report.date_from = Some(report.date_from.map_or(t, |d| d.min(t)));
                    report.date_to = Some(report.date_to.map_or(t, |d| d.max(t)));
                }
            }

            match self.add_transport_record(record) {
                Ok(TransportOutcome::SelfLoop { quantity }) => {
                    report.accepted += 1;
                    report.self_loop_quantity += quantity;
                }
                Ok(TransportOutcome::Recorded(_)) => report.accepted += 1,
                Err(err) => {
                    tracing::warn!(row, %err, "skipping transport row");
                    report.skipped += 1;
                }
            }
        }

        tracing::debug!(
            accepted = report.accepted,
            skipped = report.skipped,
            self_loop_quantity = report.self_loop_quantity,
            "ingested transport rows"
        );
        report
    }
}
