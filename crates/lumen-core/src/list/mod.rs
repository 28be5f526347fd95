//! Vertically scrolling selection list.
//!
//! Entries sit at fixed world positions (`top + index * row_height`); the
//! list scrolls by steering the shared camera, never by moving entries.
//! Only rows intersecting the viewport are drawn, so a frame costs
//! O(visible rows) regardless of list length.

use alloc::{boxed::Box, vec::Vec};
use core::ops::Range;

use log::debug;

use crate::{
    geometry::Rect,
    graphics::Graphics,
    input::InputEvent,
    motion::{Follower, UI_EPSILON},
    surface::Canvas,
    widget::{FrameContext, VerticalAnchor, Widget, WidgetBase},
    widgets::Label,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListConfig {
    pub row_height: i32,
    /// Follower coefficient for the selection box.
    pub easing: f32,
    /// Added to the measured entry width.
    pub box_padding: i32,
    /// Horizontal offset of entry content from the list edge.
    pub text_inset: i32,
    /// Row top to baseline for baseline-anchored entries.
    pub baseline_offset: i32,
    pub box_inset: i32,
    pub box_radius: i32,
    pub scrollbar_width: i32,
    /// Scrollbar distance from the right edge.
    pub scrollbar_margin: i32,
    pub min_scrollbar: i32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            row_height: 16,
            easing: 0.3,
            box_padding: 12,
            text_inset: 6,
            baseline_offset: 12,
            box_inset: 2,
            box_radius: 2,
            scrollbar_width: 2,
            scrollbar_margin: 3,
            min_scrollbar: 4,
        }
    }
}

impl ListConfig {
    pub const fn with_row_height(mut self, row_height: i32) -> Self {
        self.row_height = row_height;
        self
    }

    pub const fn with_easing(mut self, easing: f32) -> Self {
        self.easing = easing;
        self
    }

    pub const fn with_box_padding(mut self, box_padding: i32) -> Self {
        self.box_padding = box_padding;
        self
    }

    pub const fn with_text_inset(mut self, text_inset: i32) -> Self {
        self.text_inset = text_inset;
        self
    }

    pub const fn with_baseline_offset(mut self, baseline_offset: i32) -> Self {
        self.baseline_offset = baseline_offset;
        self
    }

    pub const fn with_min_scrollbar(mut self, min_scrollbar: i32) -> Self {
        self.min_scrollbar = min_scrollbar;
        self
    }
}

/// Scrollbar placement relative to the list's top edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollbarGeometry {
    pub y: i32,
    pub height: i32,
}

pub struct ScrollList {
    base: WidgetBase,
    config: ListConfig,
    entries: Vec<Box<dyn Widget>>,
    selected: Option<usize>,
    box_y: Follower,
    box_width: Follower,
    scroll_target: i32,
}

impl ScrollList {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::with_config(x, y, w, h, ListConfig::default())
    }

    pub fn with_config(x: i32, y: i32, w: i32, h: i32, mut config: ListConfig) -> Self {
        config.row_height = config.row_height.max(1);
        config.min_scrollbar = config.min_scrollbar.max(0);

        Self {
            base: WidgetBase::new(x, y, w, h),
            config,
            entries: Vec::new(),
            selected: None,
            box_y: Follower::new(0.0, config.easing, UI_EPSILON),
            box_width: Follower::new(0.0, config.easing, UI_EPSILON),
            scroll_target: 0,
        }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and positions it on its row. Returns its index.
    pub fn push(&mut self, mut entry: Box<dyn Widget>) -> usize {
        let index = self.entries.len();
        place(self.base.bounds, &self.config, index, entry.as_mut());
        let interactive = entry.is_interactive();
        self.entries.push(entry);

        match self.selected {
            None => self.selected = Some(index),
            Some(current) if interactive && !self.entries[current].is_interactive() => {
                self.selected = Some(index);
            }
            _ => {}
        }

        index
    }

    /// Appends a selectable text row.
    pub fn add_item(&mut self, text: &str) -> usize {
        self.push(Box::new(Label::new(0, 0, text).selectable()))
    }

    pub fn entries(&self) -> &[Box<dyn Widget>] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&dyn Widget> {
        self.entries.get(index).map(|entry| entry.as_ref())
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Box<dyn Widget>> {
        self.entries.get_mut(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&dyn Widget> {
        self.entry(self.selected?)
    }

    /// Content of the selected entry, or `""` for an empty list.
    pub fn selected_text(&self) -> &str {
        self.selected_entry().map_or("", |entry| entry.content())
    }

    /// Selects `index` if it names an interactive entry.
    pub fn select(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) if entry.is_interactive() => {
                self.selected = Some(index);
                debug!("list: selected {}", index);
                true
            }
            _ => false,
        }
    }

    pub fn select_next(&mut self) -> bool {
        self.step(true)
    }

    pub fn select_previous(&mut self) -> bool {
        self.step(false)
    }

    /// Circular scan for the next interactive entry. At most `len` candidates.
    fn step(&mut self, forward: bool) -> bool {
        let Some(start) = self.selected else {
            return false;
        };
        let len = self.entries.len();

        let mut candidate = start;
        for _ in 0..len {
            candidate = if forward {
                (candidate + 1) % len
            } else {
                (candidate + len - 1) % len
            };
            if candidate == start {
                break;
            }
            if self.entries[candidate].is_interactive() {
                self.selected = Some(candidate);
                debug!("list: selection {} -> {}", start, candidate);
                return true;
            }
        }

        false
    }

    /// Clicks the selected entry when it is interactive.
    pub fn activate_selected(&mut self) -> bool {
        let Some(index) = self.selected else {
            return false;
        };
        match self.entries.get_mut(index) {
            Some(entry) if entry.is_interactive() => {
                entry.activate();
                debug!("list: activated {}", index);
                true
            }
            _ => false,
        }
    }

    pub fn content_height(&self) -> i32 {
        row_top(self.entries.len(), self.config.row_height)
    }

    pub fn viewport_height(&self) -> i32 {
        self.base.bounds.h
    }

    /// Camera Y that centres the selected row, clamped to the content.
    /// Content shorter than the viewport is centred instead.
    pub fn scroll_target(&self) -> i32 {
        let viewport = self.viewport_height();
        let total = self.content_height();
        if total < viewport {
            return -(viewport - total) / 2;
        }

        let row_height = self.config.row_height;
        let centre = row_top(self.selected.unwrap_or(0), row_height)
            .saturating_add(row_height / 2)
            .saturating_sub(viewport / 2);
        centre.clamp(0, total - viewport)
    }

    /// Scroll target pushed to the camera on the last update.
    pub fn last_scroll_target(&self) -> i32 {
        self.scroll_target
    }

    /// Indices of the rows intersecting a viewport scrolled to `cam_y`.
    pub fn visible_range(&self, cam_y: i32) -> Range<usize> {
        let row_height = self.config.row_height;
        let offset = cam_y.saturating_sub(self.base.bounds.y);

        let first = offset.div_euclid(row_height);
        let last = ceil_div(offset.saturating_add(self.viewport_height()), row_height).saturating_add(1);

        let len = self.entries.len();
        let clamp = |row: i32| usize::try_from(row).map_or(0, |row| row.min(len));
        let start = clamp(first);
        start..clamp(last).max(start)
    }

    /// Proportional scrollbar, `None` when everything fits.
    pub fn scrollbar(&self, cam_y: i32) -> Option<ScrollbarGeometry> {
        let viewport = self.viewport_height();
        let total = self.content_height();
        if viewport <= 0 || total <= viewport {
            return None;
        }

        let max_scroll = total - viewport;
        let proportional = (i64::from(viewport) * i64::from(viewport) / i64::from(total)) as i32;
        let height = proportional.max(self.config.min_scrollbar).min(viewport);
        let travel = viewport - height;
        let y = (i64::from(cam_y) * i64::from(travel) / i64::from(max_scroll))
            .clamp(0, i64::from(travel)) as i32;

        Some(ScrollbarGeometry { y, height })
    }

    /// Current selection box in world space, hidden when the selected entry
    /// is not interactive.
    pub fn selection_box(&self) -> Option<Rect> {
        let entry = self.selected_entry()?;
        if !entry.is_interactive() {
            return None;
        }
        let b = self.base.bounds;
        Some(Rect::new(
            b.x + self.config.box_inset,
            b.y.saturating_add(self.box_y.value()),
            self.box_width.value(),
            self.config.row_height,
        ))
    }

    fn relayout(&mut self) {
        let bounds = self.base.bounds;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            place(bounds, &self.config, index, entry.as_mut());
        }
    }

    fn measure(&self, metrics: &dyn Canvas) -> i32 {
        let Some(entry) = self.selected_entry() else {
            return 0;
        };
        let width = entry.bounds().w;
        let content = if width > 0 {
            width
        } else {
            metrics.string_width(entry.content())
        };
        content + self.config.box_padding
    }
}

/// Offset of row `index` from the list top, saturating for huge lists.
fn row_top(index: usize, row_height: i32) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(row_height)
}

fn place(bounds: Rect, config: &ListConfig, index: usize, entry: &mut dyn Widget) {
    let x = bounds.x.saturating_add(config.text_inset);
    let top = bounds.y.saturating_add(row_top(index, config.row_height));
    match entry.vertical_anchor() {
        VerticalAnchor::Baseline => {
            entry.set_position(x, top.saturating_add(config.baseline_offset))
        }
        VerticalAnchor::Top => entry.set_position(x, top),
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

impl Widget for ScrollList {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        for entry in self.entries.iter_mut() {
            entry.update(ctx);
        }

        self.scroll_target = self.scroll_target();
        ctx.camera.set_target(0.0, self.scroll_target as f32);

        let row = self.selected.unwrap_or(0);
        self.box_y.set_target(row_top(row, self.config.row_height) as f32);

        let width = self.measure(ctx.metrics) as f32;
        self.box_width.set_target(width);
        if self.box_width.value() == 0 {
            self.box_width.jump_to(width);
        }

        self.box_y.tick();
        self.box_width.tick();
    }

    fn draw(&self, g: &mut Graphics<'_>) {
        if !self.base.visible {
            return;
        }

        if let Some(rect) = self.selection_box() {
            g.round_rect(rect.x, rect.y, rect.w, rect.h, self.config.box_radius);
        }

        let cam_y = g.camera_offset().y;
        for entry in &self.entries[self.visible_range(cam_y)] {
            if entry.is_visible() {
                entry.draw(g);
            }
        }

        if let Some(bar) = self.scrollbar(cam_y) {
            let b = self.base.bounds;
            let x = b.x + b.w - self.config.scrollbar_margin;
            let y = b.y + bar.y;
            let w = self.config.scrollbar_width;
            g.with_screen_space(|g| g.fill_rect(x, y, w, bar.height));
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn activate(&mut self) {
        self.activate_selected();
    }

    fn content(&self) -> &str {
        self.selected_text()
    }

    fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        match event {
            InputEvent::Next => {
                self.select_next();
            }
            InputEvent::Previous => {
                self.select_previous();
            }
            InputEvent::Activate => {
                self.activate_selected();
            }
        }
        true
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.base.bounds.x = x;
        self.base.bounds.y = y;
        self.relayout();
    }
}

#[cfg(test)]
mod tests;
