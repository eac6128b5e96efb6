// src/services/intake.rs
use chrono::NaiveDate;
use tracing::info;

use super::{
    session_manager::Session,
    vehicle::{COLUMNS, PaymentMethod, ValidationError, VehicleSubmission, VehicleType},
};
use crate::render::{Block, Control, Page};

pub const TITLE: &str = "Formulaire d'achat de véhicule";
pub const FORM_KEY: &str = "vehicle_form";
pub const SUCCESS_TEXT: &str = "Données enregistrées avec succès.";
pub const HISTORY_SUBHEADER: &str = "Historique des achats";

pub fn form_controls(today: NaiveDate) -> Vec<Control> {
    vec![
        Control::TextInput {
            name: "name".into(),
            label: "Nom et prénom du client".into(),
        },
        Control::TextInput {
            name: "contact".into(),
            label: "Contact (email ou téléphone)".into(),
        },
        Control::Select {
            name: "vehicle_type".into(),
            label: "Type de véhicule".into(),
            options: VehicleType::ALL.iter().map(|t| t.to_string()).collect(),
            default: VehicleType::Suv.to_string(),
        },
        Control::TextInput {
            name: "model".into(),
            label: "Modèle / Marque".into(),
        },
        Control::NumberInput {
            name: "price".into(),
            label: "Prix (€)".into(),
            min: 0.0,
            step: 500.0,
            format: "%.2f".into(),
        },
        Control::DateInput {
            name: "purchase_date".into(),
            label: "Date d'achat".into(),
            default: today.format("%Y-%m-%d").to_string(),
            display_format: "DD/MM/YYYY".into(),
        },
        Control::Select {
            name: "payment_method".into(),
            label: "Mode de paiement".into(),
            options: PaymentMethod::ALL.iter().map(|p| p.to_string()).collect(),
            default: PaymentMethod::Comptant.to_string(),
        },
        Control::TextArea {
            name: "comments".into(),
            label: "Commentaires supplémentaires".into(),
            height: 100,
            placeholder: "Notes sur la transaction…".into(),
        },
        Control::SubmitButton {
            label: "Envoyer".into(),
        },
    ]
}

/// Renders the intake form. The session is only written when `submission`
/// is present, and only once it has been validated.
pub fn render(
    session: &mut Session,
    submission: Option<VehicleSubmission>,
    today: NaiveDate,
) -> Result<Page, ValidationError> {
    let submitted = match submission {
        Some(sub) => {
            let record = sub.into_record(today)?;
            let rows = session.push_record(record);
            info!(session_id = %session.id, rows, "vehicle purchase recorded");
            true
        }
        None => false,
    };

    let mut page = Page::new(TITLE);
    page.push(Block::Form {
        key: FORM_KEY.into(),
        controls: form_controls(today),
    });
    if submitted {
        page.push(Block::Success {
            text: SUCCESS_TEXT.into(),
        });
    }

    if !session.vehicle_data.is_empty() {
        page.push(Block::Subheader {
            text: HISTORY_SUBHEADER.into(),
        })
        .push(Block::Table {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: session.vehicle_data.clone(),
        });
    }

    Ok(page)
}
