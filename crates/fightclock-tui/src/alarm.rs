//! The shared completion alarm.
//!
//! One alarm serves every segment timer. Any completion restarts it from
//! the beginning, any reset silences it, and the last writer wins. Both
//! operations are side-effect-only: playback failures are logged and
//! swallowed so a missing audio device never takes the timers down.

use std::f32::consts::PI;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

const TONE_HZ: f32 = 880.0;
const SAMPLE_RATE: u32 = 44_100;
const PULSE_ON_SECS: f32 = 0.35;
const PULSE_PERIOD_SECS: f32 = 0.5;
const RING_SECS: f32 = 4.0;
const AMPLITUDE: f32 = 0.2;

pub trait AlarmSink {
    /// Rewind to the beginning and play.
    fn play_from_start(&mut self);
    /// Stop playback and rewind. Idempotent.
    fn stop_and_rewind(&mut self);
}

/// Open the alarm. Falls back to a muted sink when no output device is
/// available, so the timers keep working on headless machines.
pub fn open(mute: bool) -> Box<dyn AlarmSink> {
    if mute {
        return Box::new(MutedAlarm);
    }
    match RodioAlarm::new() {
        Ok(alarm) => Box::new(alarm),
        Err(e) => {
            log::warn!("audio unavailable, alarm muted: {e}");
            Box::new(MutedAlarm)
        }
    }
}

pub struct RodioAlarm {
    // Held for its lifetime; dropping it kills the output stream.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl RodioAlarm {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }
}

impl AlarmSink for RodioAlarm {
    fn play_from_start(&mut self) {
        // Restarting from the top means dropping whatever is mid-ring.
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(AlarmTone::new());
                self.sink = Some(sink);
            }
            Err(e) => log::debug!("alarm playback failed: {e}"),
        }
    }

    fn stop_and_rewind(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Alarm stand-in for `--mute` and for machines without audio.
pub struct MutedAlarm;

impl AlarmSink for MutedAlarm {
    fn play_from_start(&mut self) {}
    fn stop_and_rewind(&mut self) {}
}

/// Pulsed sine beep, a few seconds long, generated on the fly.
struct AlarmTone {
    num_sample: usize,
    total_samples: usize,
}

impl AlarmTone {
    fn new() -> Self {
        Self {
            num_sample: 0,
            total_samples: (RING_SECS * SAMPLE_RATE as f32) as usize,
        }
    }
}

impl Iterator for AlarmTone {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num_sample >= self.total_samples {
            return None;
        }
        let t = self.num_sample as f32 / SAMPLE_RATE as f32;
        self.num_sample += 1;

        // Beep-pause pattern rather than one continuous tone.
        let sample = if t % PULSE_PERIOD_SECS < PULSE_ON_SECS {
            (2.0 * PI * TONE_HZ * t).sin() * AMPLITUDE
        } else {
            0.0
        };
        Some(sample)
    }
}

impl Source for AlarmTone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f32(RING_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_is_finite() {
        let samples: Vec<f32> = AlarmTone::new().collect();
        assert_eq!(samples.len(), (RING_SECS * SAMPLE_RATE as f32) as usize);
        assert!(samples.iter().all(|s| s.abs() <= AMPLITUDE));
        // The pulse gaps leave true silence between beeps.
        assert!(samples.iter().any(|s| *s == 0.0));
        assert!(samples.iter().any(|s| s.abs() > 0.01));
    }

    #[test]
    fn muted_alarm_is_inert() {
        let mut alarm = MutedAlarm;
        alarm.play_from_start();
        alarm.stop_and_rewind();
        alarm.stop_and_rewind();
    }
}
