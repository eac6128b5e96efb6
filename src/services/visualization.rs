// src/services/visualization.rs
use std::collections::BTreeMap;

use serde::Serialize;

use super::vehicle::{COLUMNS, ValidationError, VehicleRecord, VehicleType};
use crate::render::{Block, Page};

pub const TITLE: &str = "Visualisation des données d'achat";
pub const EMPTY_INFO: &str =
    "Aucune donnée disponible. Veuillez d'abord saisir des achats via l'application du formulaire.";
pub const FILTER_LABEL: &str = "Filtrer par type de véhicule";
pub const TABLE_SUBHEADER: &str = "Données filtrées";
pub const CHART_SUBHEADER: &str = "Graphique du nombre d'achats par type";
pub const CATEGORY_AXIS: &str = "Type";
pub const COUNT_AXIS: &str = "Nombre d'achats";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "Type")]
    pub vehicle_type: VehicleType,
    #[serde(rename = "Nombre d'achats")]
    pub count: usize,
}

/// Types present in `records`, sorted by label.
pub fn distinct_types(records: &[VehicleRecord]) -> Vec<VehicleType> {
    let mut types: Vec<VehicleType> = Vec::new();
    for record in records {
        if !types.contains(&record.vehicle_type) {
            types.push(record.vehicle_type);
        }
    }
    types.sort_by_key(|t| t.as_str());
    types
}

/// Rows whose type is in `selection`, order preserved.
pub fn filter_by_types(records: &[VehicleRecord], selection: &[VehicleType]) -> Vec<VehicleRecord> {
    records
        .iter()
        .filter(|r| selection.contains(&r.vehicle_type))
        .cloned()
        .collect()
}

/// Row count per type, one entry per type present, sorted by label.
pub fn count_by_type(records: &[VehicleRecord]) -> Vec<TypeCount> {
    let mut groups: BTreeMap<&'static str, TypeCount> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.vehicle_type.as_str())
            .or_insert(TypeCount {
                vehicle_type: record.vehicle_type,
                count: 0,
            })
            .count += 1;
    }
    groups.into_values().collect()
}

pub fn parse_selection(labels: &[String]) -> Result<Vec<VehicleType>, ValidationError> {
    labels.iter().map(|l| l.parse()).collect()
}

/// Read-only render over the session's records. `selection` of `None` means
/// every type present is selected.
pub fn render(records: &[VehicleRecord], selection: Option<&[VehicleType]>) -> Page {
    let mut page = Page::new(TITLE);

    if records.is_empty() {
        page.push(Block::Info {
            text: EMPTY_INFO.into(),
        });
        return page;
    }

    let options = distinct_types(records);
    let selected = selection.map_or_else(|| options.clone(), <[VehicleType]>::to_vec);
    let filtered = filter_by_types(records, &selected);
    let counts = count_by_type(&filtered);

    page.push(Block::MultiSelect {
        label: FILTER_LABEL.into(),
        options: options.iter().map(|t| t.to_string()).collect(),
        selected: selected
            .iter()
            .filter(|t| options.contains(*t))
            .map(|t| t.to_string())
            .collect(),
    })
    .push(Block::Subheader {
        text: TABLE_SUBHEADER.into(),
    })
    .push(Block::Table {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: filtered,
    })
    .push(Block::Subheader {
        text: CHART_SUBHEADER.into(),
    })
    .push(Block::BarChart {
        x_label: CATEGORY_AXIS.into(),
        y_label: COUNT_AXIS.into(),
        bars: counts,
    });

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::vehicle::PaymentMethod;
    use chrono::NaiveDate;

    fn record(name: &str, vehicle_type: VehicleType) -> VehicleRecord {
        VehicleRecord {
            name: name.into(),
            contact: String::new(),
            vehicle_type,
            model: String::new(),
            price: 0.0,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            payment_method: PaymentMethod::Comptant,
            comments: String::new(),
        }
    }

    fn sample() -> Vec<VehicleRecord> {
        vec![
            record("a", VehicleType::Suv),
            record("b", VehicleType::Pickup),
            record("c", VehicleType::Suv),
            record("d", VehicleType::Autre),
            record("e", VehicleType::Berline),
        ]
    }

    #[test]
    fn distinct_types_sorted_by_label() {
        let types = distinct_types(&sample());
        let labels: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, ["Autre", "Berline", "Pickup", "SUV"]);
    }

    #[test]
    fn filter_keeps_only_selected_in_order() {
        let rows = filter_by_types(&sample(), &[VehicleType::Suv, VehicleType::Autre]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "d"]);
    }

    #[test]
    fn counts_rows_per_present_type() {
        let counts = count_by_type(&sample());
        assert_eq!(
            counts,
            vec![
                TypeCount { vehicle_type: VehicleType::Autre, count: 1 },
                TypeCount { vehicle_type: VehicleType::Berline, count: 1 },
                TypeCount { vehicle_type: VehicleType::Pickup, count: 1 },
                TypeCount { vehicle_type: VehicleType::Suv, count: 2 },
            ]
        );
    }

    #[test]
    fn empty_selection_yields_empty_table_and_chart() {
        let page = render(&sample(), Some(&[]));
        assert!(page.tables().next().unwrap().is_empty());
        assert!(page.bar_charts().next().unwrap().is_empty());
    }

    #[test]
    fn selected_labels_stay_within_options() {
        let page = render(&sample(), Some(&[VehicleType::Fourgon, VehicleType::Pickup]));
        let select = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::MultiSelect { selected, .. } => Some(selected.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(select, vec!["Pickup".to_string()]);
        let rows = page.tables().next().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "b");
    }

    #[test]
    fn counts_count_rows_even_with_empty_names() {
        let records = vec![record("", VehicleType::Fourgon), record("", VehicleType::Fourgon)];
        assert_eq!(count_by_type(&records)[0].count, 2);
    }

    #[test]
    fn unknown_label_in_selection_is_rejected() {
        assert!(parse_selection(&["SUV".into(), "Moto".into()]).is_err());
        assert_eq!(
            parse_selection(&["Citadine".into()]).unwrap(),
            vec![VehicleType::Citadine]
        );
    }
}
