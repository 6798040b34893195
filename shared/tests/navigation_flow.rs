use crux_core::testing::AppTester;
use proptest::prelude::*;
use shared::{App, Effect, Event, Model, NavigationSource, Screen};

type Tester = AppTester<App, Effect>;

fn navigate(app: &Tester, model: &mut Model, target: Screen, source: NavigationSource) {
    app.update(Event::Navigate { target, source }, model);
}

fn renders(effects: &[Effect]) -> bool {
    effects.iter().any(|effect| matches!(effect, Effect::Render(_)))
}

#[test]
fn starts_on_home_without_nav_bar() {
    let app = Tester::default();
    let model = Model::default();
    let view = app.view(&model);
    assert_eq!(view.screen, Screen::Home);
    assert!(!view.show_nav_bar);
    assert!(!view.mobile_menu_open);
}

#[test]
fn navigate_renders_and_shows_nav_bar() {
    let app = Tester::default();
    let mut model = Model::default();
    let update = app.update(
        Event::Navigate {
            target: Screen::AuthorityDashboard,
            source: NavigationSource::Control,
        },
        &mut model,
    );
    assert!(renders(&update.effects));

    let view = app.view(&model);
    assert_eq!(view.screen, Screen::AuthorityDashboard);
    assert!(view.show_nav_bar);
    let labels: Vec<_> = view.nav.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Tourist Onboarding",
            "Tourist Dashboard",
            "Panic Button",
            "Tourist Settings",
            "Authority Dashboard",
            "Incident Management",
            "Incident Details",
            "Wearable Integration",
        ]
    );
}

#[test]
fn mobile_menu_closes_only_from_the_menu() {
    let app = Tester::default();
    let mut model = Model::default();

    app.update(Event::ToggleMobileMenu, &mut model);
    assert!(app.view(&model).mobile_menu_open);

    navigate(&app, &mut model, Screen::Wearable, NavigationSource::Control);
    assert!(app.view(&model).mobile_menu_open);

    navigate(&app, &mut model, Screen::TouristPanic, NavigationSource::MobileMenu);
    let view = app.view(&model);
    assert_eq!(view.screen, Screen::TouristPanic);
    assert!(!view.mobile_menu_open);

    app.update(Event::ToggleMobileMenu, &mut model);
    app.update(Event::ToggleMobileMenu, &mut model);
    assert!(!app.view(&model).mobile_menu_open);
}

#[test]
fn menu_navigation_to_current_screen_still_closes_menu() {
    let app = Tester::default();
    let mut model = Model::default();
    navigate(&app, &mut model, Screen::Wearable, NavigationSource::Control);
    app.update(Event::ToggleMobileMenu, &mut model);

    navigate(&app, &mut model, Screen::Wearable, NavigationSource::MobileMenu);
    let view = app.view(&model);
    assert_eq!(view.screen, Screen::Wearable);
    assert!(!view.mobile_menu_open);
}

#[test]
fn back_controls_follow_fixed_targets() {
    let cases = [
        (Screen::TouristPanic, Screen::TouristDashboard),
        (Screen::TouristSettings, Screen::TouristDashboard),
        (Screen::AuthorityIncidents, Screen::AuthorityDashboard),
        (Screen::AuthorityIncidentDetail, Screen::AuthorityIncidents),
        (Screen::Wearable, Screen::Home),
    ];
    for (from, to) in cases {
        let app = Tester::default();
        let mut model = Model::default();
        navigate(&app, &mut model, from, NavigationSource::Control);
        assert_eq!(app.view(&model).back_target, Some(to));

        app.update(Event::NavigateBack, &mut model);
        assert_eq!(model.current_screen(), to, "back from {from}");
    }
}

#[test]
fn back_without_target_is_ignored() {
    let app = Tester::default();
    let mut model = Model::default();
    let update = app.update(Event::NavigateBack, &mut model);
    assert!(update.effects.is_empty());
    assert_eq!(model.current_screen(), Screen::Home);
}

#[test]
fn screen_identifiers_are_kebab_case_on_the_wire() {
    let json = serde_json::to_string(&Screen::AuthorityIncidentDetail).unwrap();
    assert_eq!(json, r#""authority-incident-detail""#);
    let screen: Screen = serde_json::from_str(r#""tourist-onboarding""#).unwrap();
    assert_eq!(screen, Screen::TouristOnboarding);
}

fn any_screen() -> impl Strategy<Value = Screen> {
    prop::sample::select(Screen::ALL.to_vec())
}

fn any_source() -> impl Strategy<Value = NavigationSource> {
    prop_oneof![
        Just(NavigationSource::Control),
        Just(NavigationSource::MobileMenu),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Go(Screen, NavigationSource),
    Toggle,
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (any_screen(), any_source()).prop_map(|(screen, source)| Step::Go(screen, source)),
        1 => Just(Step::Toggle),
    ]
}

proptest! {
    #[test]
    fn router_tracks_last_target_and_menu(steps in prop::collection::vec(any_step(), 1..40)) {
        let app = Tester::default();
        let mut model = Model::default();
        let mut expected_screen = Screen::Home;
        let mut expected_menu = false;

        for step in steps {
            match step {
                Step::Go(target, source) => {
                    navigate(&app, &mut model, target, source);
                    expected_screen = target;
                    if source == NavigationSource::MobileMenu {
                        expected_menu = false;
                    }
                }
                Step::Toggle => {
                    app.update(Event::ToggleMobileMenu, &mut model);
                    expected_menu = !expected_menu;
                }
            }

            let view = app.view(&model);
            prop_assert_eq!(view.screen, expected_screen);
            prop_assert_eq!(view.mobile_menu_open, expected_menu);
            prop_assert_eq!(model.screen.screen(), expected_screen);
        }
    }
}
