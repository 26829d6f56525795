//! Board pipeline behaviour when the UI event queue overflows.
//!
//! A full queue drops events. The helpers must never leave the application
//! with an unmatched press or release.
//!
//! Run with: cargo test -p input --test event_loss

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use input::{ButtonMode, ButtonsManager, ListenerBuilder, Polarity, TouchHelper};
use platform::mocks::RecordingSink;
use platform::{ButtonId, EventSink, UiEvent};

const BUTTON: ButtonId = ButtonId::new(0);

#[test]
fn press_lost_to_full_queue_suppresses_release() {
    let mut pin = PinMock::new(&[
        PinTransaction::get(State::Low),
        PinTransaction::get(State::High),
    ]);
    // queue already holds one event and can take no more
    let mut sink = RecordingSink::<1>::new();
    sink.send_touch_released().unwrap();

    let generator = ListenerBuilder::new()
        .mode(ButtonMode::ButtonEvent)
        .build_generator(sink);
    let mut manager = ButtonsManager::<_, _, 1>::new(generator);
    let slot = manager.add(pin.clone(), BUTTON, Polarity::ActiveLow).unwrap();

    assert!(manager.on_edge(slot).unwrap());
    assert!(!manager.helper().is_pressed(BUTTON));
    assert!(!manager.on_edge(slot).unwrap());

    // prefill + the press; the release is never attempted
    assert_eq!(manager.generator().sink().attempts(), 2);
    assert_eq!(
        manager.generator().sink().events(),
        &[UiEvent::TouchReleased]
    );
    pin.done();
}

#[test]
fn release_lost_to_full_queue_is_recovered_later() {
    let mut pin = PinMock::new(&[
        PinTransaction::get(State::High),
        PinTransaction::get(State::Low),
        PinTransaction::get(State::Low),
    ]);
    let generator = ListenerBuilder::new()
        .mode(ButtonMode::ButtonEvent)
        .build_generator(RecordingSink::<2>::new());
    let mut manager = ButtonsManager::<_, _, 1>::new(generator);
    let slot = manager.add(pin.clone(), BUTTON, Polarity::ActiveHigh).unwrap();

    manager.on_edge(slot).unwrap();
    manager.generator_mut().sink_mut().reject_all(true);
    manager.on_edge(slot).unwrap();
    assert!(manager.helper().is_pressed(BUTTON));

    manager.generator_mut().sink_mut().reject_all(false);
    manager.on_edge(slot).unwrap();
    assert!(!manager.helper().is_pressed(BUTTON));
    assert_eq!(
        manager.generator().sink().events(),
        &[
            UiEvent::ButtonPressed(BUTTON),
            UiEvent::ButtonReleased(BUTTON),
        ]
    );
    pin.done();
}

#[test]
fn touch_never_releases_without_press() {
    let mut generator = ListenerBuilder::new().build_generator(RecordingSink::<4>::new());
    let mut touch = TouchHelper::new();

    generator.sink_mut().reject_all(true);
    touch.pressed(&mut generator, 10, 10);
    generator.sink_mut().reject_all(false);
    touch.released(&mut generator);

    assert!(generator.sink().events().is_empty());
}
