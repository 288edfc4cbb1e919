//! Integration tests for window functionality
//!
//! These tests verify:
//! - Edge and corner resizing, including the minimum size
//! - Dragging the window by its title bar
//! - Window controls (minimize, maximize, close)
//! - Title bar layout and icon painting

use anyhow::Result;
use frameless_chrome::chrome::{ButtonKind, Icon, TitleBar, TitleBarElement};
use frameless_chrome::paint::Canvas;
use frameless_chrome::utils::Config;
use frameless_chrome::window::CursorKind;
use frameless_chrome::{ChromeError, Point, Rect, Size};
use frameless_chrome_integration_tests::{HostCall, Scenario, TestFixture};
use serde_json::json;

fn restored_frame() -> Rect {
    Rect::new(100, 50, 400, 300)
}

#[test]
fn test_left_edge_resize_moves_origin() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.move_to(101, 200);
    assert_eq!(scenario.host().cursor(), Some(CursorKind::Horizontal));

    scenario.press(101, 200);
    scenario.move_to(81, 200);
    assert_eq!(scenario.frame(), Rect::new(80, 50, 420, 300));

    // Deltas are measured against the current frame, not the gesture start
    scenario.move_to(71, 200);
    assert_eq!(scenario.frame(), Rect::new(70, 50, 430, 300));
    assert_eq!(
        scenario.host().geometries(),
        vec![Rect::new(80, 50, 420, 300), Rect::new(70, 50, 430, 300)]
    );

    scenario.release(71, 200);
    assert!(!scenario.window.is_resizing());

    scenario.move_to(300, 200);
    assert_eq!(scenario.host().cursor(), Some(CursorKind::Arrow));

    Ok(())
}

#[test]
fn test_corner_resize() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.move_to(499, 349);
    assert_eq!(scenario.window.cursor(), CursorKind::DiagonalNwSe);

    scenario.press(499, 349);
    scenario.move_to(520, 370);
    scenario.release(520, 370);

    assert_eq!(scenario.frame(), Rect::new(100, 50, 421, 321));
    assert_eq!(scenario.host().frame, scenario.frame());
    assert_eq!(scenario.window.title_bar().width(), 421 - 6);

    Ok(())
}

#[test]
fn test_resize_stops_at_minimum_size() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;
    assert_eq!(scenario.window.minimum_size(), Size::new(132, 60));

    scenario.move_to(499, 200);
    scenario.press(499, 200);

    scenario.move_to(200, 200);
    assert_eq!(scenario.frame(), restored_frame());
    assert!(scenario.host().geometries().is_empty());

    scenario.move_to(250, 200);
    assert_eq!(scenario.frame(), Rect::new(100, 50, 151, 300));

    scenario.release(250, 200);
    Ok(())
}

#[test]
fn test_second_press_on_edge_resizes_again() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.move_to(499, 200);
    scenario.click(499, 200);
    assert!(!scenario.window.is_resizing());

    scenario.press(499, 200);
    assert!(scenario.window.is_resizing());
    scenario.move_to(519, 200);
    scenario.release(519, 200);

    assert_eq!(scenario.frame(), Rect::new(100, 50, 420, 300));
    Ok(())
}

#[test]
fn test_title_bar_drag_moves_window() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.drag(Point::new(200, 60), Point::new(260, 100));
    assert_eq!(scenario.frame(), Rect::new(160, 90, 400, 300));

    // The grab point stays under the cursor across drags
    scenario.drag(Point::new(260, 100), Point::new(270, 100));
    assert_eq!(scenario.frame(), Rect::new(170, 90, 400, 300));
    assert_eq!(
        scenario.host().positions(),
        vec![Point::new(160, 90), Point::new(170, 90)]
    );

    // Size never changes while moving
    assert!(scenario.host().geometries().is_empty());
    Ok(())
}

#[test]
fn test_title_bar_never_shows_resize_cursor() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.move_to(101, 200);
    assert_eq!(scenario.window.cursor(), CursorKind::Horizontal);

    scenario.move_to(200, 60);
    assert_eq!(scenario.window.cursor(), CursorKind::Arrow);

    // The pending edge was dropped, so pressing here starts a move instead
    scenario.press(200, 60);
    assert!(!scenario.window.is_resizing());
    assert!(scenario.window.title_bar().is_dragging());
    scenario.release(200, 60);

    Ok(())
}

#[test]
fn test_double_click_maximizes_and_restores() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.click(200, 60);
    scenario.double_click(200, 60);
    scenario.release(200, 60);

    assert!(scenario.window.is_maximized());
    assert_eq!(scenario.window.margin(), 0);
    assert_eq!(scenario.frame(), Rect::new(0, 0, 1920, 1080));
    assert_eq!(scenario.window.title_bar_rect(), Rect::new(0, 0, 1920, 25));

    // A maximized window neither moves nor resizes
    scenario.drag(Point::new(200, 10), Point::new(300, 50));
    assert_eq!(scenario.frame().origin, Point::ZERO);
    assert!(scenario.host().positions().is_empty());

    scenario.move_to(0, 500);
    assert_eq!(scenario.window.cursor(), CursorKind::Arrow);
    scenario.press(0, 500);
    assert!(!scenario.window.is_resizing());
    scenario.release(0, 500);

    scenario.double_click(200, 10);
    scenario.release(200, 10);
    assert!(!scenario.window.is_maximized());
    assert_eq!(scenario.window.margin(), 3);
    assert_eq!(scenario.frame(), restored_frame());

    Ok(())
}

#[test]
fn test_maximize_button() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.click(460, 65);
    assert!(scenario.window.is_maximized());
    assert!(scenario.host().calls.contains(&HostCall::SetMaximized(true)));

    Ok(())
}

#[test]
fn test_minimize_then_maximize_restores_visibility() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.click(442, 64);
    assert!(scenario.host().minimized);

    scenario.window.toggle_maximize();
    scenario.pump();

    let calls = &scenario.host().calls;
    let start = calls
        .iter()
        .rposition(|call| *call == HostCall::SetVisible(true))
        .expect("window was shown again");
    assert_eq!(
        &calls[start..start + 3],
        &[
            HostCall::SetVisible(true),
            HostCall::SetMinimized(false),
            HostCall::SetMaximized(true),
        ]
    );
    assert!(!scenario.host().minimized);
    assert!(scenario.window.is_maximized());

    Ok(())
}

#[test]
fn test_close_button_needs_release_inside() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    // Pressed on close, released elsewhere: nothing happens
    scenario.press(481, 65);
    scenario.release(300, 65);
    assert!(!scenario.host().closed);

    scenario.click(481, 65);
    assert!(scenario.host().closed);
    assert_eq!(scenario.frame(), restored_frame());

    Ok(())
}

#[test]
fn test_longer_title_raises_minimum_width() -> Result<()> {
    let mut scenario = Scenario::new(restored_frame())?;

    scenario.window.set_title("A much longer window title");
    assert_eq!(scenario.window.title(), "A much longer window title");
    assert_eq!(scenario.window.minimum_size().width, 292);

    Ok(())
}

#[test]
fn test_icon_is_painted_in_title_bar() -> Result<()> {
    let fixture = TestFixture::new()?;
    let icon = Icon::load(&fixture.icon_png, 20)?;
    assert_eq!((icon.width(), icon.height()), (20, 20));

    let scenario = Scenario::with_config(restored_frame(), &Config::default(), Some(icon))?;
    let placed = scenario
        .window
        .title_bar()
        .element_rect(TitleBarElement::Icon)
        .expect("icon is laid out");
    assert_eq!(placed, Rect::new(5, 2, 20, 20));

    let mut canvas = Canvas::new(1, 1);
    scenario.window.paint(&mut canvas);
    assert_eq!(canvas.size(), Size::new(400, 300));

    let [r, g, b, a] = canvas.pixel(10, 8).expect("pixel inside the canvas");
    assert_eq!((r, g, a), (0, 0, 255));
    assert!(b >= 250);

    Ok(())
}

#[test]
fn test_missing_icon_is_tolerated() -> Result<()> {
    let fixture = TestFixture::new()?;
    let icon = Icon::load_or_warn(&fixture.path().join("missing.png"), 20);
    assert!(icon.is_none());

    let scenario = Scenario::with_config(restored_frame(), &Config::default(), icon)?;
    let placed = scenario
        .window
        .title_bar()
        .element_rect(TitleBarElement::Icon)
        .expect("icon slot is laid out");
    assert_eq!(placed.size, Size::ZERO);

    Ok(())
}

#[test]
fn test_custom_layout_rejects_unknown_items() {
    let config = Config::default();
    let result = TitleBar::with_layout(
        &json!([5, "title_label", "bogus"]),
        "Title",
        &config.title_bar,
        &config.buttons,
        None,
    );

    match result {
        Err(err @ ChromeError::InvalidLayoutItem { .. }) => {
            assert!(err.to_string().contains("bogus"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("layout with an unknown item was accepted"),
    }
}

#[test]
fn test_custom_layout_places_buttons_first() -> Result<()> {
    let config = Config::default();
    let mut bar = TitleBar::with_layout(
        &json!(["close_button", "minimize_button", "maximize_button", -1, "title_label", 5]),
        "Title",
        &config.title_bar,
        &config.buttons,
        None,
    )?;
    bar.set_width(200);

    assert_eq!(
        bar.element_rect(TitleBarElement::Button(ButtonKind::Close)),
        Some(Rect::new(0, 2, 20, 20))
    );
    assert_eq!(
        bar.element_rect(TitleBarElement::Label),
        Some(Rect::new(155, 8, 40, 8))
    );

    Ok(())
}
