use text2slide_common::{MemorySettingsStore, Theme, TEXT_KEY, THEME_KEY};
use text2slide_core::share::slides_param;
use text2slide_core::testing::MockPlatform;
use text2slide_core::{Mode, ShareOutcome, SlideError, SlideSessionController, SplitOptions};

const BASE: &str = "https://text2slide.app/";

#[test]
fn submit_hello_world_then_present() {
    let mut c = SlideSessionController::start(
        MemorySettingsStore::new(),
        MockPlatform::new(BASE),
        SplitOptions::default(),
    );
    c.edit_text("Hello\n\nWorld");
    assert_eq!(c.submit().unwrap(), 2);
    assert_eq!(c.session().slides(), ["Hello", "World"]);
    assert_eq!(c.session().active_index(), 0);
}

#[test]
fn next_on_last_slide_stays() {
    let mut c = SlideSessionController::start(
        MemorySettingsStore::new().with_entry(TEXT_KEY, "A\n\nB\n\nC"),
        MockPlatform::new(BASE),
        SplitOptions::default(),
    );
    c.submit().unwrap();
    c.last();
    assert_eq!(c.session().active_index(), 2);
    c.next();
    assert_eq!(c.session().active_index(), 2);
}

#[test]
fn blank_submit_never_mutates_presentation() {
    let mut c = SlideSessionController::start(
        MemorySettingsStore::new().with_entry(TEXT_KEY, "A\n\nB"),
        MockPlatform::new(BASE),
        SplitOptions::default(),
    );
    c.submit().unwrap();
    c.next();

    c.edit_text("\n \n");
    assert!(matches!(c.submit(), Err(SlideError::EmptyInput)));
    assert_eq!(c.session().slides(), ["A", "B"]);
    assert_eq!(c.session().active_index(), 1);
}

#[tokio::test]
async fn shared_deck_survives_reset_and_reload() {
    let mut author = SlideSessionController::start(
        MemorySettingsStore::new().with_entry(THEME_KEY, "dark"),
        MockPlatform::new("https://text2slide.app/?lang=en"),
        SplitOptions::default(),
    );
    author.edit_text("Intro\nwith two lines\n\nLinks: www.example.com\n\nThanks!");
    author.submit().unwrap();

    let outcome = author.share().await.unwrap();
    let ShareOutcome::Copied { link } = outcome else {
        panic!("expected a clipboard copy, got {outcome:?}");
    };
    assert!(link.starts_with("https://text2slide.app/?slides="));

    let mut viewer = SlideSessionController::start(
        MemorySettingsStore::new(),
        MockPlatform::new(link.clone()),
        SplitOptions::default(),
    );
    assert_eq!(viewer.session().mode(), Mode::Presenting);
    assert_eq!(viewer.session().slides(), author.session().slides());
    assert_eq!(viewer.session().theme(), Theme::Light);

    viewer.reset();
    assert_eq!(viewer.session().mode(), Mode::Editing);
    assert_eq!(slides_param(&viewer.current_url()), None);
    assert_eq!(viewer.current_url(), BASE);
}
