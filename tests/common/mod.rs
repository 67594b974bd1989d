// Recording surface shared by the host-side simulation tests.

#![allow(dead_code)]

use glam::Vec2;
use slide_fx::core::{Rect, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Fill,
    Stroke,
    FillRect,
    StrokeRect,
    Arc,
    Text(String),
    Other,
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub size: Vec2,
    pub headline: Option<Rect>,
    pub origin: Vec2,
    pub ops: Vec<Op>,
    pub fits: u32,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            headline: None,
            origin: Vec2::ZERO,
            ops: Vec::new(),
            fits: 0,
        }
    }

    pub fn with_headline(mut self, rect: Rect) -> Self {
        self.headline = Some(rect);
        self
    }

    /// True when the last recorded operation cleared the canvas.
    pub fn is_cleared(&self) -> bool {
        self.ops.last() == Some(&Op::Clear)
    }

    pub fn count(&self, op: &Op) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|o| match o {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn fit_to_container(&mut self) {
        self.fits += 1;
    }
    fn headline_rect(&self) -> Option<Rect> {
        self.headline
    }
    fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _x: f32, _y: f32) {}
    fn rotate(&mut self, _angle: f32) {}
    fn set_global_alpha(&mut self, _alpha: f32) {}
    fn set_fill_style(&mut self, _style: &str) {}
    fn set_stroke_style(&mut self, _style: &str) {}
    fn set_line_width(&mut self, _width: f32) {}
    fn set_line_join(&mut self, _join: &str) {}
    fn set_font(&mut self, _font: &str) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f32, _y: f32) {}
    fn line_to(&mut self, _x: f32, _y: f32) {}
    fn close_path(&mut self) {}
    fn arc(&mut self, _x: f32, _y: f32, _radius: f32) {
        self.ops.push(Op::Arc);
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.ops.push(Op::FillRect);
    }
    fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.ops.push(Op::StrokeRect);
    }
    fn fill_text(&mut self, text: &str, _x: f32, _y: f32) {
        self.ops.push(Op::Text(text.to_string()));
    }
}
