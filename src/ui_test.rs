use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_cycles_light_dark_system() {
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::System);
    assert_eq!(Theme::System.next(), Theme::Light);
}

#[test]
fn theme_cycle_returns_to_start_after_three_steps() {
    let start = Theme::Light;
    assert_eq!(start.next().next().next(), start);
}

#[test]
fn theme_parse_unknown_is_system() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse("system"), Theme::System);
    assert_eq!(Theme::parse("sepia"), Theme::System);
    assert_eq!(Theme::default(), Theme::System);
}

#[test]
fn theme_resolve_follows_system_only_when_system() {
    assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
    assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
    assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
    assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
}

#[test]
fn theme_icon_and_label() {
    assert_eq!(Theme::Light.icon(true), "☀");
    assert_eq!(Theme::Dark.icon(false), "☾");
    assert_eq!(Theme::System.label(true), "AUTO");
    assert_eq!(Theme::Light.label(true), "LIGHT");
    assert_eq!(Theme::Dark.label(false), "DARK");
}

#[test]
fn theme_data_attribute_omitted_for_system() {
    assert_eq!(Theme::Dark.data_attribute(), Some("dark"));
    assert_eq!(Theme::Light.data_attribute(), Some("light"));
    assert_eq!(Theme::System.data_attribute(), None);
}

// =============================================================
// FloatingNav
// =============================================================

#[test]
fn nav_starts_collapsed_and_toggles() {
    let nav = FloatingNav::default();
    assert!(!nav.is_open());
    assert_eq!(nav.phase(), "collapsed");
    assert!(nav.toggled().is_open());
    assert_eq!(nav.toggled().phase(), "expanded");
    assert_eq!(nav.toggled().toggled(), nav);
}

#[test]
fn nav_from_query_only_opens_on_open() {
    assert!(FloatingNav::from_query(Some("open")).is_open());
    assert!(!FloatingNav::from_query(Some("1")).is_open());
    assert!(!FloatingNav::from_query(Some("")).is_open());
    assert!(!FloatingNav::from_query(None).is_open());
}

#[test]
fn nav_touch_keeps_menu_open() {
    assert!(FloatingNav::default().touched().is_open());
    assert!(FloatingNav::from_query(Some("open")).touched().is_open());
}

#[test]
fn nav_navigate_closes_immediately() {
    let nav = FloatingNav::from_query(Some("open"));
    assert!(!nav.navigated().is_open());
    assert!(!FloatingNav::default().navigated().is_open());
}

#[test]
fn nav_auto_close_timings() {
    assert_eq!(NAV_AUTO_CLOSE, Duration::from_millis(2000));
    assert_eq!(NAV_FADE_OUT, Duration::from_millis(300));
}

// =============================================================
// DetailSelection
// =============================================================

#[test]
fn detail_toggle_selects_then_clears() {
    let mut sel = DetailSelection::default();
    assert!(!sel.is_open());
    sel.toggle(1);
    assert_eq!(sel.selected(), Some(1));
    sel.toggle(1);
    assert_eq!(sel.selected(), None);
}

#[test]
fn detail_toggle_other_index_switches() {
    let mut sel = DetailSelection::default();
    sel.toggle(0);
    sel.toggle(2);
    assert_eq!(sel.selected(), Some(2));
    assert!(!sel.closed().is_open());
    sel.close();
    assert!(!sel.is_open());
}

#[test]
fn detail_from_query_ignores_out_of_range() {
    assert_eq!(DetailSelection::from_query(Some(1), 2).selected(), Some(1));
    assert_eq!(DetailSelection::from_query(Some(2), 2).selected(), None);
    assert_eq!(DetailSelection::from_query(None, 2).selected(), None);
}

#[test]
fn home_query_encodes_selection_and_nav() {
    let sel = DetailSelection::from_query(Some(0), 3);
    let nav = FloatingNav::default();
    assert_eq!(home_query(sel, nav), "?open=0");
    assert_eq!(home_query(sel.toggled(0), nav), "");
    assert_eq!(home_query(sel.toggled(2), nav), "?open=2");
    assert_eq!(home_query(sel, nav.toggled()), "?open=0&nav=open");
    assert_eq!(home_query(sel.closed(), nav.touched()), "?nav=open");
}

#[test]
fn header_hides_when_scrolled_or_detail_open() {
    assert!(!header_hidden(0, false));
    assert!(!header_hidden(50, false));
    assert!(header_hidden(51, false));
    assert!(header_hidden(0, true));
}
