//! Everything the view needs from one set of inputs, computed in one pass.

use crate::derivation::{derive, format_distance, Derivation, Field, TrainingInputs};
use crate::duration::{format_duration, format_pace};
use crate::laps::{compute_splits, LapSplit, LapSummary};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub field: Field,
    pub value: Option<f64>,
    /// Formatted value, `None` when there is nothing meaningful to show.
    pub display: Option<String>,
    /// True when the value was supplied by the user.
    pub supplied: bool,
    /// True for the single field being calculated.
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRow {
    #[serde(flatten)]
    pub split: LapSplit,
    pub label: String,
    pub elapsed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub inputs: TrainingInputs,
    pub derivation: Derivation,
    pub distance: FieldReport,
    pub time: FieldReport,
    pub pace: FieldReport,
    pub lap_summary: Option<LapSummary>,
    pub splits: Vec<SplitRow>,
}

impl TrainingReport {
    pub fn build(inputs: &TrainingInputs, lap_length_m: f64) -> Self {
        let derivation = derive(inputs);

        let field_report = |field: Field, supplied: bool| {
            let value = derivation.value(field);
            let calculated = derivation.is_calculated(field);
            let display = value.and_then(|v| match field {
                Field::Distance => format_distance(v, calculated),
                Field::Time => format_duration(v),
                Field::Pace => format_pace(v),
            });
            FieldReport {
                field,
                value,
                display,
                supplied,
                highlighted: calculated,
            }
        };

        let distance = field_report(Field::Distance, inputs.distance_m.is_some());
        let time = field_report(Field::Time, inputs.total_secs.is_some());
        let pace = field_report(Field::Pace, inputs.pace_secs_per_km.is_some());

        let lap_summary = derivation
            .distance_m
            .and_then(|meters| LapSummary::compute(meters, lap_length_m));

        let splits = derivation
            .distance_m
            .map(|meters| {
                compute_splits(
                    meters,
                    lap_length_m,
                    derivation.pace_secs_per_km,
                    derivation.total_secs,
                )
            })
            .unwrap_or_default()
            .into_iter()
            .map(|split| SplitRow {
                label: split.label(),
                elapsed: split.elapsed_secs.and_then(format_duration),
                split,
            })
            .collect();

        Self {
            inputs: *inputs,
            derivation,
            distance,
            time,
            pace,
            lap_summary,
            splits,
        }
    }

    /// Parse raw field text and build the report.
    pub fn from_text(distance: &str, time: &str, pace: &str, lap_length_m: f64) -> Self {
        Self::build(&TrainingInputs::parse(distance, time, pace), lap_length_m)
    }

    pub fn field(&self, field: Field) -> &FieldReport {
        match field {
            Field::Distance => &self.distance,
            Field::Time => &self.time,
            Field::Pace => &self.pace,
        }
    }

    pub fn highlighted(&self) -> Option<Field> {
        self.derivation.calculated
    }
}
