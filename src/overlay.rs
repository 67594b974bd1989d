use crate::constants::HEADLINE_SELECTOR;
use crate::core::{Layer, Rect, Surface};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const COMPANION_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:5;";

/// A `<canvas>` stretched over a slide container, owned by one simulation.
pub struct CanvasOverlay {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasOverlay {
    pub fn attach(
        document: &web::Document,
        container: &web::HtmlElement,
        layer: Layer,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        match layer {
            Layer::Particles => {
                _ = canvas.class_list().add_1("particle-canvas");
            }
            Layer::Companion => {
                _ = canvas.class_list().add_1("companion-canvas");
                canvas.style().set_css_text(COMPANION_STYLE);
            }
        }
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            container: container.clone(),
            canvas,
            ctx,
        })
    }
}

impl Surface for CanvasOverlay {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fit_to_container(&mut self) {
        self.canvas.set_width(self.container.offset_width().max(0) as u32);
        self.canvas.set_height(self.container.offset_height().max(0) as u32);
    }

    fn headline_rect(&self) -> Option<Rect> {
        let el = self.container.query_selector(HEADLINE_SELECTOR).ok()??;
        let r = el.get_bounding_client_rect();
        let c = self.container.get_bounding_client_rect();
        Some(Rect::new(
            (r.left() - c.left()) as f32,
            (r.top() - c.top()) as f32,
            r.width() as f32,
            r.height() as f32,
        ))
    }

    fn to_local(&self, client: Vec2) -> Vec2 {
        let c = self.container.get_bounding_client_rect();
        client - Vec2::new(c.left() as f32, c.top() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        _ = self.ctx.rotate(angle as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_join(&mut self, join: &str) {
        self.ctx.set_line_join(join);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32) {
        _ = self.ctx.arc(
            x as f64,
            y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
