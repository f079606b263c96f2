//! Static dashboard layout: heading, site dropdown and payload slider.

use serde::Serialize;

use crate::config::{ALL_SITES, DASHBOARD_TITLE, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use crate::data::Dataset;
use crate::models::PayloadRange;


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownLayout {
    pub id: &'static str,
    pub options: Vec<String>,
    pub value: String,
    pub placeholder: &'static str,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderLayout {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: PayloadRange,
}


/// Everything a front end needs to draw the input widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub site_dropdown: DropdownLayout,
    pub payload_slider: SliderLayout,
}


impl DashboardLayout {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            title: DASHBOARD_TITLE,
            site_dropdown: DropdownLayout {
                id: "site-dropdown",
                options: dataset.site_options(),
                value: ALL_SITES.to_string(),
                placeholder: "Select a launch site",
            },
            payload_slider: SliderLayout {
                id: "payload-slider",
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: dataset.initial_payload_range(),
            },
        }
    }

    /// Initial payload range selected on the slider.
    pub fn initial_range(&self) -> PayloadRange {
        self.payload_slider.value
    }
}
