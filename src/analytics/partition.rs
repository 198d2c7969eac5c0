//! Splits a series into partitions by equality on the configured fields.

use crate::config::GroupField;
use crate::observation::Observation;
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// One component of a partition key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyPart<'a> {
    Text(&'a str),
    Number(OrderedFloat<f64>),
}

fn key_part(observation: &Observation, field: GroupField) -> KeyPart<'_> {
    match field {
        GroupField::Group => KeyPart::Text(&observation.group),
        GroupField::Time => KeyPart::Number(OrderedFloat(observation.time)),
        GroupField::Value => KeyPart::Number(OrderedFloat(observation.value)),
    }
}

/// Groups observation indices into partitions.
///
/// Partitions are returned in order of first appearance and each one keeps
/// the relative input order of its members. Without fields the whole series
/// is a single partition.
pub fn partition_indices(series: &[Observation], fields: Option<&[GroupField]>) -> Vec<Vec<usize>> {
    if series.is_empty() {
        return Vec::new();
    }

    let fields = match fields {
        Some(fields) => fields,
        None => return vec![(0..series.len()).collect()],
    };

    let mut slots: HashMap<Vec<KeyPart<'_>>, usize> = HashMap::new();
    let mut partitions: Vec<Vec<usize>> = Vec::new();

    for (index, observation) in series.iter().enumerate() {
        let key: Vec<KeyPart<'_>> = fields
            .iter()
            .map(|&field| key_part(observation, field))
            .collect();
        let slot = *slots.entry(key).or_insert_with(|| {
            partitions.push(Vec::new());
            partitions.len() - 1
        });
        partitions[slot].push(index);
    }

    partitions
}
