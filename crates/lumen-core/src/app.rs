//! Frame loop owner: surface, camera, root widgets and input focus.

use alloc::{boxed::Box, vec::Vec};

use log::{debug, info};

use crate::{
    graphics::Graphics,
    input::{InputEvent, InputProvider},
    motion::{Camera, CameraConfig},
    surface::PixelSurface,
    widget::{FrameContext, Widget},
};

/// Handle to a root widget owned by an [`App`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

pub struct App<S> {
    surface: S,
    camera: Camera,
    widgets: Vec<Box<dyn Widget>>,
    focus: Option<WidgetId>,
    frames: u64,
}

impl<S> App<S>
where
    S: PixelSurface,
{
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, CameraConfig::default())
    }

    pub fn with_config(surface: S, camera: CameraConfig) -> Self {
        Self {
            surface,
            camera: Camera::new(camera),
            widgets: Vec::new(),
            focus: None,
            frames: 0,
        }
    }

    /// Initializes the surface and parks the camera at the origin.
    pub fn begin(&mut self) -> Result<(), S::Error> {
        self.surface.init()?;
        self.camera.jump_to(0.0, 0.0);
        let size = self.surface.size();
        info!("app: surface ready {}x{}", size.width, size.height);
        Ok(())
    }

    /// Adds a root widget; widgets draw in insertion order.
    pub fn add<W>(&mut self, widget: W) -> WidgetId
    where
        W: Widget + 'static,
    {
        self.widgets.push(Box::new(widget));
        WidgetId(self.widgets.len() - 1)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id.0).map(|widget| widget.as_ref())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Box<dyn Widget>> {
        self.widgets.get_mut(id.0)
    }

    /// Routes input to `id`; `None` offers events to every root in order.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        if self.focus != id {
            debug!("app: focus {:?} -> {:?}", self.focus, id);
        }
        self.focus = id;
    }

    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Drains `input`, returning how many events a widget consumed.
    pub fn process_inputs<I>(&mut self, input: &mut I) -> Result<usize, I::Error>
    where
        I: InputProvider,
    {
        let mut consumed = 0;
        while let Some(event) = input.poll_event()? {
            if self.dispatch(event) {
                consumed += 1;
            }
        }
        Ok(consumed)
    }

    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        if let Some(id) = self.focus {
            return self
                .widgets
                .get_mut(id.0)
                .is_some_and(|widget| widget.handle_input(event));
        }

        self.widgets
            .iter_mut()
            .any(|widget| widget.handle_input(event))
    }

    /// Runs one frame: camera, clear, update and draw every root, present.
    pub fn frame(&mut self) -> Result<(), S::Error> {
        self.camera.update();
        let offset = self.camera.position();
        let now_ms = self.surface.now_millis();

        self.surface.clear();

        let Self {
            surface,
            camera,
            widgets,
            ..
        } = self;
        for widget in widgets.iter_mut() {
            let mut ctx = FrameContext::new(&mut *camera, &*surface, now_ms);
            widget.update(&mut ctx);

            let mut g = Graphics::with_offset(&mut *surface, offset);
            widget.draw(&mut g);
        }

        self.surface.present()?;
        self.frames += 1;
        Ok(())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        input::ScriptedInput,
        list::ScrollList,
        testing::RecordingSurface,
        widgets::{FpsCounter, Label},
    };

    fn app() -> App<RecordingSurface> {
        let mut app = App::new(RecordingSurface::new(128, 64));
        let Ok(()) = app.begin();
        app
    }

    #[test]
    fn begin_initializes_surface() {
        let app = app();
        assert!(app.surface().initialized);
        assert_eq!(app.camera().position(), crate::geometry::Point::new(0, 0));
        assert_eq!(app.frame_count(), 0);
    }

    #[test]
    fn frame_clears_draws_and_presents() {
        let mut app = app();
        app.add(Label::new(6, 12, "Hello"));

        let Ok(()) = app.frame();
        let Ok(()) = app.frame();

        let surface = app.surface();
        assert_eq!(surface.clears, 2);
        assert_eq!(surface.presents, 2);
        // Cleared before the second draw, so only one string survives.
        assert_eq!(surface.canvas.strings, vec![(6, 12, "Hello".to_string())]);
        assert_eq!(app.frame_count(), 2);
    }

    #[test]
    fn frame_applies_camera_offset() {
        let mut app = app();
        app.camera_mut().jump_to(0.0, 20.0);
        app.add(Label::new(6, 32, "Shifted"));
        app.add(FpsCounter::new(90, 0));

        let Ok(()) = app.frame();

        let strings = &app.surface().canvas.strings;
        assert!(strings.contains(&(6, 12, "Shifted".to_string())));
        assert!(strings.contains(&(90, 10, "FPS: 0".to_string())));
    }

    #[test]
    fn unfocused_input_goes_to_first_consumer() {
        let mut app = app();
        app.add(Label::new(0, 0, "Title"));
        let mut list = ScrollList::new(0, 0, 128, 64);
        list.add_item("One");
        list.add_item("Two");
        let id = app.add(list);

        let script = [InputEvent::Next, InputEvent::Next, InputEvent::Activate];
        let mut input = ScriptedInput::new(&script);
        assert_eq!(app.process_inputs(&mut input), Ok(3));
        assert!(input.is_exhausted());
        assert_eq!(app.widget(id).map(|list| list.content()), Some("One"));
    }

    #[test]
    fn focused_widget_receives_all_input() {
        let mut app = app();
        let mut first = ScrollList::new(0, 0, 64, 64);
        first.add_item("A");
        first.add_item("B");
        let first = app.add(first);

        let mut second = ScrollList::new(64, 0, 64, 64);
        second.add_item("C");
        second.add_item("D");
        let second = app.add(second);

        app.set_focus(Some(second));
        assert_eq!(app.focus(), Some(second));
        assert!(app.dispatch(InputEvent::Next));

        assert_eq!(app.widget(first).map(|w| w.content()), Some("A"));
        assert_eq!(app.widget(second).map(|w| w.content()), Some("D"));
    }

    #[test]
    fn focus_on_missing_widget_consumes_nothing() {
        let mut app = app();
        app.set_focus(Some(WidgetId(7)));
        assert!(!app.dispatch(InputEvent::Activate));
    }
}
