//! Feedback pulses for completed gestures
//!
//! Desktop machines have no vibration motor, so a pulse is rendered as a
//! short, quiet tick through the default audio output. Pulses are
//! fire-and-forget: when no output device exists the engine is absent and
//! the call sites skip it, and playback errors are not observable.

use std::time::Duration;

use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};

/// Pulse tone frequency in Hz. Low enough to read as a thud, not a beep.
const PULSE_FREQUENCY: f32 = 180.0;

/// Pulse loudness relative to full scale
const PULSE_GAIN: f32 = 0.08;

/// Audio-backed pulse engine
pub struct HapticEngine {
    // The stream must outlive the mixer for queued pulses to play.
    _stream: OutputStream,
    mixer: rodio::mixer::Mixer,
}

impl HapticEngine {
    /// Open the default output device
    pub fn new() -> Result<Self, rodio::StreamError> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
        })
    }

    /// Emit one pulse of the given length. Never blocks.
    pub fn pulse(&self, duration: Duration) {
        tracing::debug!(?duration, "feedback pulse");

        let tick = SineWave::new(PULSE_FREQUENCY)
            .take_duration(duration)
            .amplify(PULSE_GAIN);

        let sink = Sink::connect_new(&self.mixer);
        sink.append(tick);
        sink.detach();
    }
}
