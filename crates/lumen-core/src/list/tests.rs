use std::{cell::Cell, rc::Rc};

use super::*;
use crate::{
    app::App,
    motion::Camera,
    testing::{RecordingCanvas, RecordingSurface},
    widgets::Switch,
};

const MENU: [&str; 7] = [
    "Dashboard",
    "WiFi Settings",
    "Bluetooth",
    "Notifications",
    "System Info",
    "About Device",
    "Restart",
];

/// Entry that counts how often it is drawn.
struct Tally {
    base: WidgetBase,
    interactive: bool,
    draws: Rc<Cell<usize>>,
}

impl Tally {
    fn new(interactive: bool, draws: &Rc<Cell<usize>>) -> Box<Self> {
        Box::new(Self {
            base: WidgetBase::new(0, 0, 0, 0),
            interactive,
            draws: Rc::clone(draws),
        })
    }
}

impl Widget for Tally {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, _g: &mut Graphics<'_>) {
        self.draws.set(self.draws.get() + 1);
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

fn menu_list() -> ScrollList {
    let mut list = ScrollList::new(0, 0, 128, 64);
    for item in MENU {
        list.add_item(item);
    }
    list
}

fn update(list: &mut ScrollList, camera: &mut Camera) {
    let canvas = RecordingCanvas::new(128, 64);
    let mut ctx = FrameContext::new(camera, &canvas, 0);
    list.update(&mut ctx);
}

#[test]
fn navigation_skips_non_interactive_entries_and_wraps() {
    let draws = Rc::new(Cell::new(0));
    let mut list = ScrollList::new(0, 0, 128, 64);
    for interactive in [false, true, false, true] {
        list.push(Tally::new(interactive, &draws));
    }
    assert_eq!(list.selected_index(), Some(1));

    assert!(list.select_next());
    assert_eq!(list.selected_index(), Some(3));
    assert!(list.select_next());
    assert_eq!(list.selected_index(), Some(1));

    assert!(list.select_previous());
    assert_eq!(list.selected_index(), Some(3));
    assert!(list.select_previous());
    assert_eq!(list.selected_index(), Some(1));
}

#[test]
fn all_non_interactive_list_never_moves() {
    let draws = Rc::new(Cell::new(0));
    let mut list = ScrollList::new(0, 0, 128, 64);
    for _ in 0..3 {
        list.push(Tally::new(false, &draws));
    }
    assert_eq!(list.selected_index(), Some(0));

    assert!(!list.select_next());
    assert!(!list.select_previous());
    assert_eq!(list.selected_index(), Some(0));
    assert!(!list.activate_selected());
    assert_eq!(list.selection_box(), None);
}

#[test]
fn single_interactive_entry_stays_selected() {
    let mut list = ScrollList::new(0, 0, 128, 64);
    list.add_item("Only");
    assert!(!list.select_next());
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn empty_list_is_inert() {
    let mut list = ScrollList::new(0, 0, 128, 64);
    let mut camera = Camera::default();

    assert_eq!(list.selected_index(), None);
    assert_eq!(list.selected_text(), "");
    assert!(!list.select_next());
    assert!(!list.handle_input(InputEvent::Next));
    assert_eq!(list.scrollbar(0), None);
    assert_eq!(list.visible_range(0), 0..0);

    update(&mut list, &mut camera);
    assert_eq!(list.selection_box(), None);

    let mut canvas = RecordingCanvas::new(128, 64);
    list.draw(&mut Graphics::new(&mut canvas));
    assert!(canvas.pixels.is_empty());
}

#[test]
fn drawing_visits_only_visible_rows() {
    let draws = Rc::new(Cell::new(0));
    let mut list = ScrollList::new(0, 0, 128, 64);
    for _ in 0..1000 {
        list.push(Tally::new(true, &draws));
    }
    let max_scroll = list.content_height() - list.viewport_height();

    for cam_y in [-40, -10, 0, 7, 16, 500, 8_001, max_scroll - 1, max_scroll, max_scroll + 30] {
        draws.set(0);
        let mut canvas = RecordingCanvas::new(128, 64);
        let mut g = Graphics::new(&mut canvas);
        g.set_camera_offset(0, cam_y);
        list.draw(&mut g);

        assert!(draws.get() <= 6, "cam_y={cam_y} drew {} rows", draws.get());
        assert_eq!(draws.get(), list.visible_range(cam_y).len());
    }
}

#[test]
fn visible_range_floors_negative_offsets() {
    let mut list = menu_list();
    assert_eq!(list.visible_range(0), 0..5);
    assert_eq!(list.visible_range(-1), 0..5);
    assert_eq!(list.visible_range(-17), 0..4);
    assert_eq!(list.visible_range(48), 3..7);
    assert_eq!(list.visible_range(-200), 0..0);

    list.set_position(0, 20);
    assert_eq!(list.visible_range(20), 0..5);
}

#[test]
fn scrollbar_stays_inside_viewport() {
    for len in [5usize, 6, 7, 12, 40, 333, 1000] {
        let mut list = ScrollList::new(0, 0, 128, 64);
        for _ in 0..len {
            list.add_item("row");
        }
        let max_scroll = list.content_height() - 64;

        let mut cam_y = -64;
        while cam_y <= max_scroll + 64 {
            let bar = list.scrollbar(cam_y).expect("content overflows");
            assert!(bar.height >= 4, "len={len} height={}", bar.height);
            assert!(bar.y >= 0);
            assert!(bar.y <= 64 - bar.height, "len={len} cam_y={cam_y} bar={bar:?}");
            cam_y += 7;
        }

        let top = list.scrollbar(0).expect("content overflows");
        let bottom = list.scrollbar(max_scroll).expect("content overflows");
        assert_eq!(top.y, 0);
        assert_eq!(bottom.y, 64 - bottom.height);
    }
}

#[test]
fn scrollbar_absent_when_content_fits() {
    let mut list = ScrollList::new(0, 0, 128, 64);
    for _ in 0..4 {
        list.add_item("row");
    }
    assert_eq!(list.content_height(), 64);
    assert_eq!(list.scrollbar(0), None);

    let zero_height = ScrollList::new(0, 0, 128, 0);
    assert_eq!(zero_height.scrollbar(0), None);
}

#[test]
fn last_item_scrolls_camera_to_bottom() {
    let mut app = App::new(RecordingSurface::new(128, 64));
    let Ok(()) = app.begin();

    let mut list = menu_list();
    assert!(list.select(6));
    assert_eq!(list.scroll_target(), 48);
    let id = app.add(list);

    for _ in 0..120 {
        let Ok(()) = app.frame();
    }

    assert_eq!(app.camera().y(), 48);
    assert_eq!(app.camera().y_follower().current(), 48.0);
    assert_eq!(app.widget(id).map(|list| list.content()), Some("Restart"));
}

#[test]
fn short_list_is_centred() {
    let mut app = App::new(RecordingSurface::new(128, 64));
    let Ok(()) = app.begin();

    let mut list = ScrollList::new(0, 0, 128, 64);
    list.add_item("Yes");
    list.add_item("No");
    assert_eq!(list.scroll_target(), -16);
    app.add(list);

    for _ in 0..120 {
        let Ok(()) = app.frame();
    }
    assert_eq!(app.camera().y(), -16);
}

#[test]
fn scroll_target_clamps_to_top() {
    let mut list = menu_list();
    assert_eq!(list.scroll_target(), 0);
    list.select(3);
    assert_eq!(list.scroll_target(), 24);
}

#[test]
fn huge_rows_saturate_instead_of_overflowing() {
    let config = ListConfig::default().with_row_height(1 << 24);
    let mut list = ScrollList::with_config(0, 0, 128, 64, config);
    for _ in 0..200 {
        list.add_item("row");
    }
    assert_eq!(list.content_height(), i32::MAX);
    assert_eq!(list.entry(199).map(|entry| entry.bounds().y), Some(i32::MAX));

    list.select(199);
    assert_eq!(list.scroll_target(), i32::MAX - 64);

    let mut camera = Camera::default();
    update(&mut list, &mut camera);
    assert_eq!(list.last_scroll_target(), i32::MAX - 64);

    let range = list.visible_range(list.last_scroll_target());
    assert!(!range.is_empty() && range.end <= list.len(), "{range:?}");
}

#[test]
fn box_width_snaps_on_first_frame_then_animates() {
    let mut list = menu_list();
    let mut camera = Camera::default();

    update(&mut list, &mut camera);
    // "Dashboard": 9 glyphs * 6 px + 12 px padding.
    assert_eq!(list.selection_box(), Some(Rect::new(2, 0, 66, 16)));

    list.select(2);
    update(&mut list, &mut camera);
    let rect = list.selection_box().expect("interactive selection");
    // "Bluetooth" is also 66 wide, the box only travels down.
    assert_eq!(rect.w, 66);
    assert_eq!(rect.y, 10);

    list.select(6);
    update(&mut list, &mut camera);
    let rect = list.selection_box().expect("interactive selection");
    // 66 -> 54 ("Restart") at 0.3 per frame.
    assert!(rect.w > 54 && rect.w < 66, "w={}", rect.w);

    for _ in 0..60 {
        update(&mut list, &mut camera);
    }
    assert_eq!(list.selection_box(), Some(Rect::new(2, 96, 54, 16)));
}

#[test]
fn update_pushes_scroll_target_to_camera() {
    let mut list = menu_list();
    let mut camera = Camera::default();
    list.select(5);
    update(&mut list, &mut camera);

    assert_eq!(list.last_scroll_target(), 48);
    assert_eq!(camera.target(), (0.0, 48.0));
}

#[test]
fn fixed_width_entries_use_their_own_width() {
    let mut list = ScrollList::new(0, 0, 128, 64);
    list.push(Box::new(Switch::new(0, 0, 100, 16, "Dark mode", false)));
    let mut camera = Camera::default();
    update(&mut list, &mut camera);

    assert_eq!(list.selection_box().map(|rect| rect.w), Some(112));
}

#[test]
fn entries_are_anchored_per_row() {
    let mut list = ScrollList::new(4, 10, 128, 64);
    list.add_item("Dashboard");
    list.push(Box::new(Switch::new(0, 0, 100, 16, "Dark mode", false)));
    list.add_item("Bluetooth");

    assert_eq!(list.entry(0).map(|e| e.bounds().origin()), Some(crate::geometry::Point::new(10, 22)));
    assert_eq!(list.entry(1).map(|e| e.bounds().origin()), Some(crate::geometry::Point::new(10, 26)));
    assert_eq!(list.entry(2).map(|e| e.bounds().origin()), Some(crate::geometry::Point::new(10, 54)));

    list.set_position(0, 0);
    assert_eq!(list.entry(2).map(|e| e.bounds().origin()), Some(crate::geometry::Point::new(6, 44)));
}

#[test]
fn input_drives_selection_and_activation() {
    let mut list = ScrollList::new(0, 0, 128, 64);
    list.add_item("Dashboard");
    list.push(Box::new(Switch::new(0, 0, 100, 16, "Dark mode", false)));

    assert!(list.handle_input(InputEvent::Next));
    assert_eq!(list.selected_text(), "Dark mode");
    assert!(list.handle_input(InputEvent::Activate));
    assert!(list.handle_input(InputEvent::Previous));
    assert_eq!(list.selected_index(), Some(0));

    // The switch knob is filled once it has been toggled on.
    let mut canvas = RecordingCanvas::new(128, 64);
    list.entry(1).expect("switch entry").draw(&mut Graphics::new(&mut canvas));
    // Track at x 77..=101 on row 1; the knob has not moved yet but is solid.
    assert!(canvas.pixels.contains(&(83, 23)));
}

#[test]
fn scrollbar_is_drawn_in_screen_space() {
    let mut list = menu_list();
    list.select(6);
    let mut camera = Camera::default();
    for _ in 0..60 {
        update(&mut list, &mut camera);
    }

    let mut canvas = RecordingCanvas::new(128, 64);
    let mut g = Graphics::new(&mut canvas);
    g.set_camera_offset(0, 48);
    list.draw(&mut g);

    // 64 * 64 / 112 = 36 px bar at the bottom of its 28 px travel.
    assert!(canvas.pixels.contains(&(125, 28)));
    assert!(canvas.pixels.contains(&(126, 63)));
    assert!(!canvas.pixels.contains(&(125, 27)));
    // Selection box on row 6 lands on the last screen row band.
    assert!(canvas.pixels.contains(&(4, 48)));
    assert!(canvas.strings.iter().any(|(x, y, s)| *x == 6 && *y == 60 && s == "Restart"));
}
