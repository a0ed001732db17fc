//! Scrolling caption placement.
//!
//! The renderer owns an ordered inbox of pending caption texts and the set
//! of captions on screen. Each frame advances captions, drops the ones that
//! left the screen and then places pending texts in arrival order into the
//! lane with the most free runway.

use crate::lanes::{EMPTY_LANE_EDGE, has_runway, select_lane};
use crate::{Caption, EstimatedMeasure, Inbound, RendererConfig, Result as RenderResult, TextMeasure};

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, trace};

pub struct CaptionRenderer<M = EstimatedMeasure> {
    config: RendererConfig,
    measure: M,
    captions: Vec<Caption>,
    inbox: VecDeque<String>,
}

impl CaptionRenderer<EstimatedMeasure> {
    pub fn new(config: RendererConfig) -> RenderResult<Self> {
        Self::with_measure(config, EstimatedMeasure)
    }
}

impl<M: TextMeasure> CaptionRenderer<M> {
    pub fn with_measure(config: RendererConfig, measure: M) -> RenderResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            measure,
            captions: Vec::new(),
            inbox: VecDeque::new(),
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Decode one raw frame from the socket and apply it
    pub fn receive(&mut self, raw: &str) {
        let inbound = Inbound::parse(raw, self.config.max_text_chars);
        self.apply(inbound);
    }

    pub fn apply(&mut self, inbound: Inbound) {
        if let Inbound::Clear = inbound {
            debug!(
                "Clearing {} captions and {} pending",
                self.captions.len(),
                self.inbox.len()
            );
            self.captions.clear();
            self.inbox.clear();
            return;
        }

        if let Some(text) = inbound.caption_text() {
            self.inbox.push_back(text.to_string());
        }
    }

    /// Advance one animation frame by `dt` (clamped), then place what fits
    pub fn tick(&mut self, dt: Duration) {
        let secs = dt.min(self.config.max_frame_dt()).as_secs_f64();

        for caption in &mut self.captions {
            caption.advance(secs);
        }
        self.captions.retain(|caption| !caption.is_offscreen());

        self.place_pending();
    }

    /// Change the viewport. Lane count follows the new height; captions
    /// already on screen keep their lanes.
    pub fn resize(&mut self, width: f64, height: f64) -> RenderResult<()> {
        let mut config = self.config.clone();
        config.width = width;
        config.height = height;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    /// Pending texts in arrival order
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.inbox.iter().map(String::as_str)
    }

    pub fn pending_len(&self) -> usize {
        self.inbox.len()
    }

    pub fn lane_count(&self) -> usize {
        let lanes = (self.config.height / self.config.line_height()).floor() as usize;
        lanes.max(1)
    }

    /// Top of the text box in `lane`, centred within the lane height
    pub fn lane_y(&self, lane: usize) -> f64 {
        let line_height = self.config.line_height();
        (lane as f64 * line_height + (line_height - self.config.font_size) / 2.0).round()
    }

    /// Trailing edge of the furthest-right caption in `lane`
    pub fn rightmost_edge(&self, lane: usize) -> f64 {
        self.captions
            .iter()
            .filter(|caption| caption.lane == lane)
            .map(Caption::right)
            .fold(None, |max: Option<f64>, right| {
                Some(max.map_or(right, |m| m.max(right)))
            })
            .unwrap_or(EMPTY_LANE_EDGE)
    }

    fn place_pending(&mut self) {
        while self.captions.len() < self.config.max_captions {
            let Some(text) = self.inbox.front() else {
                break;
            };

            let Some(caption) = self.try_place(text) else {
                // Runway does not depend on the text, so nothing behind it fits either
                break;
            };

            trace!("Placed caption in lane {}", caption.lane);
            self.captions.push(caption);
            self.inbox.pop_front();
        }
    }

    fn try_place(&self, text: &str) -> Option<Caption> {
        let (lane, edge) = select_lane((0..self.lane_count()).map(|l| self.rightmost_edge(l)))?;

        if !has_runway(edge, self.config.width, self.config.gap) {
            return None;
        }

        Some(Caption {
            text: text.to_string(),
            x: self.config.width,
            y: self.lane_y(lane),
            width: self.measure.measure(text, self.config.font_size),
            lane,
            speed: self.config.speed,
            color: self.config.color.clone(),
        })
    }
}
