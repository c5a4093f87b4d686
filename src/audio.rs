//! One-shot sound effects. Each cue is a small fundsp graph rendered
//! once into a sample buffer and handed to a detached rodio sink, so
//! playback rides rodio's output thread and never blocks a frame. The
//! whole module degrades to silence when no output device opens.

use fundsp::prelude64::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

const SAMPLE_RATE: f64 = 44100.0;

/// The three cues the game ever emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sfx {
    Flap,
    Score,
    GameOver,
}

/// Handle onto the output device. `None` inside means muted or no
/// device; both make [`Audio::play`] a no-op.
pub struct Audio {
    stream: Option<OutputStream>,
}

impl Audio {
    pub fn new(muted: bool) -> Audio {
        let stream = if muted {
            None
        } else {
            OutputStreamBuilder::open_default_stream().ok()
        };
        Audio { stream }
    }

    pub fn enabled(&self) -> bool {
        self.stream.is_some()
    }

    pub fn play(&self, sfx: Sfx) {
        if let Some(stream) = &self.stream {
            let sink = Sink::connect_new(stream.mixer());
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE as u32, render_clip(sfx)));
            sink.detach();
        }
    }
}

fn render(dur: f64, node: &mut dyn AudioUnit) -> Vec<f32> {
    let wave = Wave::render(SAMPLE_RATE, dur, node);
    (0..wave.length()).map(|i| wave.at(0, i)).collect()
}

fn render_clip(sfx: Sfx) -> Vec<f32> {
    match sfx {
        // Rising blip: 300 to 900 Hz in 90ms, fast fade.
        Sfx::Flap => {
            let mut node = (lfo(|t| 300.0 + 600.0 * (t / 0.09).min(1.0)) >> sine())
                * lfo(|t| 0.2 * (1.0 - (t / 0.12).min(1.0)));
            render(0.12, &mut node)
        }
        // Two-note chime, E5 then A5.
        Sfx::Score => {
            let mut node = (lfo(|t| if t < 0.09 { 660.0 } else { 880.0 }) >> sine())
                * lfo(|t| 0.18 * (1.0 - (t / 0.2).min(1.0)));
            render(0.2, &mut node)
        }
        // Falling saw slide, 400 down to 80 Hz.
        Sfx::GameOver => {
            let mut node = (lfo(|t| 400.0 - 320.0 * (t / 0.4).min(1.0)) >> saw())
                * lfo(|t| 0.15 * (1.0 - (t / 0.5).min(1.0)));
            render(0.5, &mut node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(samples: &[f32]) -> f32 {
        samples.iter().fold(0.0f32, |m, s| m.max(s.abs()))
    }

    #[test]
    fn test_clips_render_at_their_durations() {
        for (sfx, dur) in [
            (Sfx::Flap, 0.12),
            (Sfx::Score, 0.2),
            (Sfx::GameOver, 0.5),
        ] {
            let samples = render_clip(sfx);
            let expect = (dur * SAMPLE_RATE) as i64;
            assert!((samples.len() as i64 - expect).abs() <= 1, "{sfx:?}");
        }
    }

    #[test]
    fn test_clips_are_audible_but_capped() {
        for sfx in [Sfx::Flap, Sfx::Score, Sfx::GameOver] {
            let p = peak(&render_clip(sfx));
            assert!(p > 0.01, "{sfx:?} is silent");
            assert!(p < 0.5, "{sfx:?} is too hot: {p}");
        }
    }

    #[test]
    fn test_clips_fade_out() {
        for sfx in [Sfx::Flap, Sfx::Score, Sfx::GameOver] {
            let samples = render_clip(sfx);
            let tail = &samples[samples.len() - 100..];
            assert!(peak(tail) < 0.02, "{sfx:?} ends abruptly");
        }
    }

    #[test]
    fn test_muted_handle_is_inert() {
        let audio = Audio::new(true);
        assert!(!audio.enabled());
        audio.play(Sfx::Flap);
        audio.play(Sfx::GameOver);
    }
}
