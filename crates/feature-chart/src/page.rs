// File: crates/feature-chart/src/page.rs
// Summary: In-memory page of canvas elements addressed by id; charts bind to and render into them.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chart_core::{Chart, Frame, RenderOptions, Theme};
use log::{info, warn};

use crate::error::RenderError;

/// Page-wide rendering settings applied to every element.
#[derive(Clone, Copy, Debug)]
pub struct PageSettings {
    pub theme: Theme,
    pub device_pixel_ratio: f32,
    pub draw_labels: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self { theme: Theme::dark(), device_pixel_ratio: 1.0, draw_labels: true }
    }
}

/// A canvas element with its bound chart and the last rendered frame.
pub struct Element {
    id: String,
    width: i32,
    height: i32,
    chart: Option<Chart>,
    frame: Option<Frame>,
}

impl Element {
    pub fn id(&self) -> &str { &self.id }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn chart(&self) -> Option<&Chart> { self.chart.as_ref() }
    pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }
}

#[derive(Default)]
pub struct Page {
    elements: BTreeMap<String, Element>,
    settings: PageSettings,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PageSettings) -> Self {
        Self { elements: BTreeMap::new(), settings }
    }

    pub fn with_element(mut self, id: impl Into<String>, width: i32, height: i32) -> Self {
        self.add_element(id, width, height);
        self
    }

    /// Add an empty element, replacing any element with the same id.
    pub fn add_element(&mut self, id: impl Into<String>, width: i32, height: i32) -> &mut Element {
        let id = id.into();
        let element = Element { id: id.clone(), width, height, chart: None, frame: None };
        match self.elements.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(element);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(element),
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Render `chart` into element `id` and keep it bound there.
    /// A chart already bound to the element is replaced.
    pub fn bind_chart(&mut self, id: &str, chart: Chart) -> Result<&Element, RenderError> {
        let settings = self.settings;
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| RenderError::ElementNotFound(id.to_string()))?;

        let frame = chart.render_to_rgba8(&render_options(&settings, element.width, element.height))?;
        if element.chart.is_some() {
            warn!("replacing chart already bound to element '{id}'");
        }
        info!(
            "bound line chart with {} dataset(s) to '{id}' ({}x{})",
            chart.config().data.datasets.len(),
            element.width,
            element.height
        );
        element.chart = Some(chart);
        element.frame = Some(frame);
        Ok(&*element)
    }

    /// Resize element `id`. A responsive bound chart is re-rendered at the new size.
    /// Returns whether a new frame was produced. On a render error the size and frame are kept.
    pub fn resize(&mut self, id: &str, width: i32, height: i32) -> Result<bool, RenderError> {
        let settings = self.settings;
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| RenderError::ElementNotFound(id.to_string()))?;

        // Render before committing the size so a failure leaves the element untouched.
        let frame = match &element.chart {
            Some(chart) if chart.is_responsive() => {
                Some(chart.render_to_rgba8(&render_options(&settings, width, height))?)
            }
            _ => None,
        };
        element.width = width;
        element.height = height;
        let rerendered = frame.is_some();
        if rerendered {
            element.frame = frame;
        }
        Ok(rerendered)
    }
}

fn render_options(settings: &PageSettings, width: i32, height: i32) -> RenderOptions {
    RenderOptions {
        theme: settings.theme,
        draw_labels: settings.draw_labels,
        device_pixel_ratio: settings.device_pixel_ratio,
        ..RenderOptions::with_size(width, height)
    }
}
