use crate::{Caption, CaptionRenderer, TextMeasure};

use std::time::Duration;

use futures::{Stream, StreamExt};
use log::debug;
use tokio::time::{Instant, MissedTickBehavior, interval};

/// Run a renderer against a stream of raw frames.
///
/// Frames are applied as they arrive; an animation clock ticks every
/// `frame_interval` with the real elapsed time, and `on_frame` gets the
/// captions after each tick. Returns when the frame stream ends.
pub async fn drive<M, S, F>(
    renderer: &mut CaptionRenderer<M>,
    frames: S,
    frame_interval: Duration,
    mut on_frame: F,
) where
    M: TextMeasure,
    S: Stream<Item = String>,
    F: FnMut(&[Caption]),
{
    let mut frames = std::pin::pin!(frames);
    let mut clock = interval(frame_interval);
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            frame = frames.next() => match frame {
                Some(raw) => renderer.receive(&raw),
                None => {
                    debug!("Frame stream ended, stopping renderer");
                    return;
                }
            },

            now = clock.tick() => {
                renderer.tick(now.saturating_duration_since(last));
                last = now;
                on_frame(renderer.captions());
            }
        }
    }
}
