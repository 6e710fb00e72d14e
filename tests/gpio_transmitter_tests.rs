mod common;

use common::{MockPin, RecordingSleeper};
use morse_sender::{
    GpioTransmitter, MorseDriver, MorseError, NoDelay, ParisTiming, Polarity, Signal, Transmitter,
};

fn timing() -> ParisTiming<NoDelay> {
    ParisTiming::new(20, NoDelay).unwrap()
}

#[test]
fn test_line_is_low_after_construction() {
    let (pin, state) = MockPin::new();

    let transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing()).unwrap();

    assert!(!state.borrow().high);
    assert_eq!(state.borrow().releases, 0);
    assert!(!transmitter.is_closed());
}

#[test]
fn test_transmit_pulses_high_then_low() {
    let (pin, state) = MockPin::new();
    let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing()).unwrap();

    transmitter.transmit(Signal::Dot).unwrap();
    transmitter.transmit(Signal::Dash).unwrap();

    let state = state.borrow();
    // construction idle, then one high/low pair per element
    assert_eq!(state.writes, vec![false, true, false, true, false]);
    assert!(!state.high);
}

#[test]
fn test_line_is_high_only_while_holding() {
    let sleeper = RecordingSleeper::new();
    let timing = ParisTiming::new(12, sleeper.clone()).unwrap();
    let unit = timing.unit_duration();
    let (pin, state) = MockPin::new();
    let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing).unwrap();

    transmitter.transmit(Signal::Dash).unwrap();
    transmitter.end_of_character().unwrap();
    transmitter.end_of_word().unwrap();

    assert_eq!(sleeper.units(unit), vec![3, 1, 2, 7]);
    assert_eq!(state.borrow().writes, vec![false, true, false]);
}

#[test]
fn test_teardown_leaves_line_low_and_releases_once() {
    let (pin, state) = MockPin::new();
    {
        let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing()).unwrap();
        MorseDriver::new(&mut transmitter)
            .send_message("sos")
            .unwrap();
    }

    let state = state.borrow();
    assert!(!state.high);
    assert_eq!(state.releases, 1);
}

#[test]
fn test_explicit_close_then_drop_releases_once() {
    let (pin, state) = MockPin::new();
    {
        let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing()).unwrap();
        transmitter.transmit(Signal::Dot).unwrap();

        transmitter.close().unwrap();
        assert!(transmitter.is_closed());
        assert_eq!(state.borrow().releases, 1);

        transmitter.close().unwrap();
    }

    let state = state.borrow();
    assert!(!state.high);
    assert_eq!(state.releases, 1);
}

#[test]
fn test_transmit_after_close_is_a_hardware_fault() {
    let (pin, _state) = MockPin::new();
    let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing()).unwrap();
    transmitter.close().unwrap();

    assert!(matches!(
        transmitter.transmit(Signal::Dot),
        Err(MorseError::HardwareFault { .. })
    ));
}

#[test]
fn test_fault_injected_pulse_leaves_line_low() {
    // Second element of "a" fails to key.
    let (pin, state) = MockPin::failing_on_pulse(2);
    {
        let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing()).unwrap();
        let result = MorseDriver::new(&mut transmitter).send_message("a");

        assert!(matches!(result, Err(MorseError::HardwareFault { .. })));
        assert!(!state.borrow().high);
    }

    let state = state.borrow();
    assert!(!state.high);
    assert_eq!(state.releases, 1);
    assert_eq!(state.set_high_calls, 2);
}

#[test]
fn test_interrupted_hold_returns_line_low() {
    // Cut the hold of the first element short.
    let sleeper = RecordingSleeper::failing_after(0);
    let timing = ParisTiming::new(12, sleeper).unwrap();
    let (pin, state) = MockPin::new();
    {
        let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveHigh, timing).unwrap();
        let result = transmitter.transmit(Signal::Dash);

        assert!(matches!(result, Err(MorseError::Cancelled)));
        assert!(!state.borrow().high);
        assert_eq!(state.borrow().writes, vec![false, true, false]);
    }

    assert_eq!(state.borrow().releases, 1);
}

#[test]
fn test_active_low_polarity_idles_high() {
    let (pin, state) = MockPin::new();
    {
        let mut transmitter = GpioTransmitter::new(pin, Polarity::ActiveLow, timing()).unwrap();
        assert!(state.borrow().high);

        transmitter.transmit(Signal::Dot).unwrap();
        assert_eq!(state.borrow().writes, vec![true, false, true]);
    }

    let state = state.borrow();
    assert!(state.high);
    assert_eq!(state.releases, 1);
}
