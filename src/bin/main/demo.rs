use lumen_core::{
    app::{App, WidgetId},
    list::ScrollList,
    surface::PixelSurface,
    widgets::{FpsCounter, Label, ProgressBar, Switch},
};

const SCREEN_W: i32 = 128;
const SCREEN_H: i32 = 64;
/// Fixed-width rows leave room for the selection box padding and the
/// scrollbar on the right.
const ROW_W: i32 = SCREEN_W - 18;

const MENU_ITEMS: [&str; 7] = [
    "Dashboard",
    "WiFi Settings",
    "Bluetooth",
    "Notifications",
    "System Info",
    "About Device",
    "Restart",
];

/// Handles to the widgets the simulator reports on.
pub struct DemoMenu {
    list: WidgetId,
}

impl DemoMenu {
    pub fn install<S>(app: &mut App<S>) -> Self
    where
        S: PixelSurface,
    {
        let mut list = ScrollList::new(0, 0, SCREEN_W, SCREEN_H);
        for item in MENU_ITEMS {
            list.add_item(item);
        }
        list.push(Box::new(Label::new(0, 0, "- Display -")));
        list.push(Box::new(Switch::new(0, 0, ROW_W, 16, "Dark mode", false)));
        list.push(Box::new(ProgressBar::new(0, 0, ROW_W, 16, "Battery", 0.72)));
        list.push(Box::new(Label::new(0, 0, "Advanced").with_width(ROW_W).with_arrow()));

        let list = app.add(list);
        app.add(FpsCounter::new(SCREEN_W - 44, 0));
        app.set_focus(Some(list));

        Self { list }
    }

    pub fn selected_text<'a, S>(&self, app: &'a App<S>) -> Option<&'a str>
    where
        S: PixelSurface,
    {
        app.widget(self.list).map(|list| list.content())
    }
}
