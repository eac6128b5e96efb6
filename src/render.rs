// src/render.rs
//! Render descriptions returned by the views. A front end draws a [`Page`]
//! block by block; nothing here knows about layout or styling.

use serde::Serialize;

use crate::services::{
    session_manager::Role,
    vehicle::VehicleRecord,
    visualization::TypeCount,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn tables(&self) -> impl Iterator<Item = &Vec<VehicleRecord>> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table { rows, .. } => Some(rows),
            _ => None,
        })
    }

    pub fn bar_charts(&self) -> impl Iterator<Item = &Vec<TypeCount>> {
        self.blocks.iter().filter_map(|b| match b {
            Block::BarChart { bars, .. } => Some(bars),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Subheader {
        text: String,
    },
    Info {
        text: String,
    },
    Success {
        text: String,
    },
    Form {
        key: String,
        controls: Vec<Control>,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<VehicleRecord>,
    },
    MultiSelect {
        label: String,
        options: Vec<String>,
        selected: Vec<String>,
    },
    BarChart {
        x_label: String,
        y_label: String,
        bars: Vec<TypeCount>,
    },
    ChatMessage {
        role: Role,
        content: String,
    },
    ChatInput {
        placeholder: String,
    },
}

/// Input controls of a form. `name` is the key the client posts the value
/// under.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    TextInput {
        name: String,
        label: String,
    },
    NumberInput {
        name: String,
        label: String,
        min: f64,
        step: f64,
        format: String,
    },
    DateInput {
        name: String,
        label: String,
        default: String,
        display_format: String,
    },
    Select {
        name: String,
        label: String,
        options: Vec<String>,
        default: String,
    },
    TextArea {
        name: String,
        label: String,
        height: u32,
        placeholder: String,
    },
    SubmitButton {
        label: String,
    },
}
