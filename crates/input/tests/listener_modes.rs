//! Listener behaviour across all three modes.
//!
//! Verifies, for every button ID, how many events each press/release
//! produces and that a listener never mixes event families.
//!
//! Run with: cargo test -p input --test listener_modes

use input::{ButtonMode, ListenerBuilder, ModeListener};
use platform::config::HOME_GENERATOR;
use platform::mocks::{MockButton, RecordingSink};
use platform::{ButtonId, ButtonListener, Command, UiEvent};

type Listener = ModeListener<RecordingSink<64>>;

fn listener(mode: ButtonMode) -> Listener {
    ListenerBuilder::new()
        .mode(mode)
        .build(RecordingSink::new())
}

/// Which mode an event belongs to.
fn family(event: &UiEvent) -> Option<ButtonMode> {
    match event {
        UiEvent::ButtonPressed(_) | UiEvent::ButtonRepeated(_) | UiEvent::ButtonReleased(_) => {
            Some(ButtonMode::ButtonEvent)
        }
        UiEvent::Command(_) => Some(ButtonMode::CommandEvent),
        UiEvent::Generic { .. } => Some(ButtonMode::HomeEvent),
        _ => None,
    }
}

proptest::proptest! {
    #[test]
    fn button_mode_press_dispatches_id(id in 0u8..=255u8) {
        let mut l = listener(ButtonMode::ButtonEvent);
        l.press(&MockButton::new(id));
        assert_eq!(l.sink().events(), &[UiEvent::ButtonPressed(ButtonId::new(id))]);
    }

    #[test]
    fn button_mode_release_dispatches_pressed_id(id in 0u8..=255u8) {
        let mut l = listener(ButtonMode::ButtonEvent);
        l.release(&MockButton::new(id));
        // release mirrors press: a *pressed* event, not a released one
        assert_eq!(l.sink().events(), &[UiEvent::ButtonPressed(ButtonId::new(id))]);
    }

    #[test]
    fn command_mode_ignores_id(id in 0u8..=255u8) {
        let mut l = listener(ButtonMode::CommandEvent);
        l.press(&MockButton::new(id));
        assert_eq!(l.sink().events(), &[UiEvent::Command(Command::Esc)]);
    }

    #[test]
    fn home_mode_ignores_id(id in 0u8..=255u8) {
        let mut l = listener(ButtonMode::HomeEvent);
        l.press(&MockButton::new(id));
        assert_eq!(
            l.sink().events(),
            &[UiEvent::Generic { generator: HOME_GENERATOR, value: 1 }]
        );
    }

    #[test]
    fn release_is_silent_outside_button_mode(id in 0u8..=255u8) {
        for mode in [ButtonMode::CommandEvent, ButtonMode::HomeEvent] {
            let mut l = listener(mode);
            l.release(&MockButton::new(id));
            assert_eq!(l.sink().attempts(), 0);
        }
    }

    /// Any interleaving of presses and releases stays within one family.
    #[test]
    fn modes_are_mutually_exclusive(
        mode_index in 0usize..3,
        calls in proptest::collection::vec((proptest::bool::ANY, 0u8..=255u8), 0..32),
    ) {
        let mode = ButtonMode::ALL[mode_index];
        let mut l = listener(mode);
        for (press, id) in &calls {
            let button = MockButton::new(*id);
            if *press {
                l.press(&button);
            } else {
                l.release(&button);
            }
        }
        for event in l.sink().events() {
            assert_eq!(family(event), Some(mode), "{event} leaked into {mode} mode");
        }

        let presses = calls.iter().filter(|(press, _)| *press).count();
        let expected = match mode {
            ButtonMode::ButtonEvent => calls.len(),
            ButtonMode::CommandEvent | ButtonMode::HomeEvent => presses,
        };
        assert_eq!(l.sink().events().len(), expected);
    }
}

#[test]
fn press_release_sequence_keeps_call_order() {
    let mut l = listener(ButtonMode::ButtonEvent);
    l.press(&MockButton::new(1));
    l.press(&MockButton::new(2));
    l.release(&MockButton::new(2));
    l.release(&MockButton::new(1));
    assert_eq!(
        l.sink().events(),
        &[
            UiEvent::ButtonPressed(ButtonId::new(1)),
            UiEvent::ButtonPressed(ButtonId::new(2)),
            UiEvent::ButtonPressed(ButtonId::new(2)),
            UiEvent::ButtonPressed(ButtonId::new(1)),
        ]
    );
}

#[test]
fn listener_works_as_trait_object() {
    let mut sink = RecordingSink::<4>::new();
    {
        let mut l = ListenerBuilder::new()
            .mode(ButtonMode::HomeEvent)
            .build(&mut sink);
        let dyn_listener: &mut dyn ButtonListener = &mut l;
        dyn_listener.press(&ButtonId::new(0));
        dyn_listener.release(&ButtonId::new(0));
    }
    assert_eq!(sink.events().len(), 1);
}
